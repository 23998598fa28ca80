//! Passes run by the reclassification pipeline, in pipeline order.

pub mod contextual;
pub mod parameters;
pub mod symbol_discovery;

pub use contextual::{classify, ContextMapper, ContextRule, RuleContext, CONTEXT_RULES};
pub use parameters::ParameterMapper;
pub use symbol_discovery::discover_symbols;
