//! Fixed generation settings.
//!
//! Nothing here is read from the environment or the command line; the CLI
//! always generates with `GeneratorConfig::default()`.
use std::path::PathBuf;

// ------------------------------- Policy ---------------------------------- //

pub const OUTPUT_FILE: &str = "to_tie.hpp";
pub const ARITY_HEADER: &str = "aggregate_arity.hpp";
pub const NAMESPACE: &str = "detail";
pub const FUNCTION_NAME: &str = "to_tie";
pub const ARITY_EXPR: &str = "aggregate_arity<std::remove_cv_t<T>>::size() - 1";
pub const PLACEHOLDER_PREFIX: &str = "p";
pub const OVERFLOW_MESSAGE: &str =
    "Generate new to_tie function, the script is located in utils/configuration_store";

// ------------------------------- Config ---------------------------------- //

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// where the header lands, relative to the working directory
    pub output: PathBuf,
    /// include providing the arity-detection collaborator
    pub arity_header: String,
    pub namespace: String,
    pub function_name: String,
    /// default value of the `arity` template parameter
    pub arity_expr: String,
    pub placeholder_prefix: String,
    pub overflow_message: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(OUTPUT_FILE),
            arity_header: ARITY_HEADER.to_string(),
            namespace: NAMESPACE.to_string(),
            function_name: FUNCTION_NAME.to_string(),
            arity_expr: ARITY_EXPR.to_string(),
            placeholder_prefix: PLACEHOLDER_PREFIX.to_string(),
            overflow_message: OVERFLOW_MESSAGE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Placeholder name for the 1-based position `i`.
    pub fn placeholder(&self, i: u32) -> String {
        format!("{}{i}", self.placeholder_prefix)
    }
}
