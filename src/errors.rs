use thiserror::Error;

/// Failure classes for the upstream Jira call.
///
/// Only `Status` carries an HTTP status; transport and decode failures
/// happen before or after one exists.
#[derive(Debug, Error)]
pub enum JiraError {
    #[error("Jira returned HTTP {0}")]
    Status(u16),

    #[error("could not reach Jira: {0}")]
    Transport(String),

    #[error("could not decode Jira response: {0}")]
    Decode(String),
}

impl JiraError {
    pub fn status(&self) -> Option<u16> {
        match self {
            JiraError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for JiraError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            JiraError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            JiraError::Status(status.as_u16())
        } else {
            JiraError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, JiraError>;
