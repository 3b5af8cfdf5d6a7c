use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceControlError {
    #[error("Failed to spawn git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("`{command}` exited with status {code:?}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{command}` timed out after {timeout_secs} seconds")]
    TimedOut { command: String, timeout_secs: u64 },
}
