use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Render { template: String, source: String },
}

/// Any error raised while turning a template into an email body.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render { template, source } => {
                write!(f, "Render template error - {template}: {source}")
            }
        }
    }
}

// External Errors
impl From<askama::Error> for AppError {
    fn from(value: askama::Error) -> Self {
        Self::Render {
            template: "unknown".to_string(),
            source: value.to_string(),
        }
    }
}

impl AppError {
    pub fn render(template: &str) -> impl FnOnce(askama::Error) -> AppError + '_ {
        move |err| AppError::Render {
            template: template.to_string(),
            source: err.to_string(),
        }
    }
}
