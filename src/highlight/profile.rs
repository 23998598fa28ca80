//! Language profile: the configuration values the reclassification passes consult.
//!
//!     Nothing in the passes hardcodes Python spellings. The keywords that introduce a
//!     declaration, the conventional first parameter, the call and grouping delimiters and
//!     the builtin callables all come from a [LanguageProfile]. [LanguageProfile::python]
//!     is the default.
//!
//!     The [DefinedSymbols] registry is not configuration: it is rebuilt from the stream on
//!     every pipeline run by the symbol discovery pass and handed to later passes as an
//!     immutable input.

use std::collections::BTreeSet;

pub const PYTHON_BUILTINS: &[&str] = &[
    "abs",
    "aiter",
    "all",
    "anext",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "eval",
    "exec",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
    "__import__",
];

/// Names treated as library-provided callables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltinRegistry {
    names: BTreeSet<String>,
}

impl BuiltinRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BuiltinRegistry {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn python() -> Self {
        Self::new(PYTHON_BUILTINS.iter().copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for BuiltinRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

/// Names introduced by the function-defining keyword somewhere in the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinedSymbols {
    names: BTreeSet<String>,
}

impl DefinedSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Keyword spellings that give identifiers their declaration context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextKeywords {
    pub function: String,
    pub class: String,
    /// Conventional first parameter name.
    pub self_param: String,
}

impl Default for ContextKeywords {
    fn default() -> Self {
        ContextKeywords {
            function: "def".to_string(),
            class: "class".to_string(),
            self_param: "self".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Delimiter that opens a call or a signature.
    pub call_open: String,
    /// Delimiters that raise the nesting depth inside a signature.
    pub group_open: Vec<String>,
    /// Delimiters that lower the nesting depth inside a signature.
    pub group_close: Vec<String>,
}

impl Delimiters {
    pub fn is_call_open(&self, lexeme: &str) -> bool {
        self.call_open == lexeme
    }

    pub fn is_group_open(&self, lexeme: &str) -> bool {
        self.group_open.iter().any(|d| d == lexeme)
    }

    pub fn is_group_close(&self, lexeme: &str) -> bool {
        self.group_close.iter().any(|d| d == lexeme)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters {
            call_open: "(".to_string(),
            group_open: vec!["(".to_string(), "[".to_string(), "{".to_string()],
            group_close: vec![")".to_string(), "]".to_string(), "}".to_string()],
        }
    }
}

/// Everything the pipeline needs to know about the highlighted language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    pub keywords: ContextKeywords,
    pub delimiters: Delimiters,
    pub builtins: BuiltinRegistry,
}

impl LanguageProfile {
    pub fn python() -> Self {
        LanguageProfile {
            keywords: ContextKeywords::default(),
            delimiters: Delimiters::default(),
            builtins: BuiltinRegistry::python(),
        }
    }

    /// Same keywords and delimiters, different builtin registry.
    pub fn with_builtins(mut self, builtins: BuiltinRegistry) -> Self {
        self.builtins = builtins;
        self
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::python()
    }
}
