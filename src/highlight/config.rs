//! Configuration loading
//!
//! The shipped defaults live in `defaults/pyhighlight.default.toml` and are compiled in, so
//! every key always has a value. A `--config` file and command-line flags are layered over
//! them with [Loader]. The `language` table becomes the [LanguageProfile] the pipeline runs
//! with; the `render` table configures the HTML page.

use crate::highlight::profile::{
    BuiltinRegistry, ContextKeywords, Delimiters, LanguageProfile, PYTHON_BUILTINS,
};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/pyhighlight.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub language: LanguageConfig,
    pub render: RenderConfig,
}

/// Spellings the reclassification passes key on.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    pub function_keyword: String,
    pub class_keyword: String,
    pub self_parameter: String,
    pub call_open: String,
    pub group_open: Vec<String>,
    pub group_close: Vec<String>,
    pub extra_builtins: Vec<String>,
    pub replace_builtins: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub title: String,
    pub show_statistics: bool,
    /// Stamp HTML pages with the time they were generated.
    pub generated_footer: bool,
}

impl LanguageConfig {
    pub fn to_profile(&self) -> LanguageProfile {
        let mut builtins = if self.replace_builtins {
            BuiltinRegistry::default()
        } else {
            BuiltinRegistry::new(PYTHON_BUILTINS.iter().copied())
        };
        builtins.extend(self.extra_builtins.iter().cloned());

        LanguageProfile {
            keywords: ContextKeywords {
                function: self.function_keyword.clone(),
                class: self.class_keyword.clone(),
                self_param: self.self_parameter.clone(),
            },
            delimiters: Delimiters {
                call_open: self.call_open.clone(),
                group_open: self.group_open.clone(),
                group_close: self.group_close.clone(),
            },
            builtins,
        }
    }
}

/// Builds a [HighlightConfig] from the embedded defaults plus whatever the caller layers on.
///
/// Sources are applied in call order, later ones winning key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file, skipping it when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `render.title`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<HighlightConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<HighlightConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.language.function_keyword, "def");
        assert!(config.render.show_statistics);
        assert!(!config.render.generated_footer);
        assert_eq!(config.language.to_profile(), LanguageProfile::python());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.title", "Report")
            .expect("override to apply")
            .set_override("language.self_parameter", "this")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.title, "Report");
        assert_eq!(config.language.to_profile().keywords.self_param, "this");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[language]\nextra_builtins = [\"emit\"]\nreplace_builtins = true"
        )
        .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        let profile = config.language.to_profile();
        assert!(profile.builtins.contains("emit"));
        assert!(!profile.builtins.contains("len"));
        assert_eq!(profile.keywords.class, "class");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/definitely/not/here.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.language.call_open, "(");
    }
}
