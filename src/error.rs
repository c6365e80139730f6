use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("num_of_cases {given} is too large (effective bound {given} + 1 overflows u32)")]
    BoundOverflow { given: u32 },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
