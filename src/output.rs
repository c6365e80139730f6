//! The only side effect: one full overwrite of the output header.
use std::path::{Path, PathBuf};

use crate::codegen::produce_file_with;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::lower::effective_bound;

/// Writes `contents` to `path`, replacing whatever was there.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source| GenerateError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(wrap)?;
        }
    }
    std::fs::write(path, contents).map_err(wrap)
}

/// CLI argument → header on disk. Returns the written path.
///
/// The text is fully built before the file is touched, so a failure here never
/// leaves a partial header behind.
pub fn generate(num_of_cases: u32, cfg: &GeneratorConfig) -> Result<PathBuf> {
    let bound = effective_bound(num_of_cases)?;
    tracing::info!(num_of_cases, bound, "generating {} cases", bound as u64 + 1);
    let src = produce_file_with(bound, cfg);
    write_file(&cfg.output, &src)?;
    tracing::info!(path = %cfg.output.display(), bytes = src.len(), "wrote header");
    Ok(cfg.output.clone())
}
