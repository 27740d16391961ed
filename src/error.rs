use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockerfileGuardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DockerfileGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
