use std::fmt::{Display, Formatter};

/// Error type for OSD session startup and render-loop failures.
#[derive(Debug)]
pub enum OsdError {
    Thread(std::io::Error),
    Renderer(String),
    Precondition {
        detail: String,
        user_message: Option<String>,
    },
    Settings(serde_json::Error),
}

impl OsdError {
    /// Short tag identifying the error kind, used when logging a failed
    /// render loop.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Thread(_) => "Thread",
            Self::Renderer(_) => "Renderer",
            Self::Precondition { .. } => "Precondition",
            Self::Settings(_) => "Settings",
        }
    }

    /// Message suitable for direct display to the user, when one exists.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Precondition { user_message, .. } => user_message.as_deref(),
            _ => None,
        }
    }
}

impl Display for OsdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thread(err) => write!(f, "thread error: {}", err),
            Self::Renderer(err) => write!(f, "renderer error: {}", err),
            Self::Precondition { detail, .. } => write!(f, "precondition failed: {}", detail),
            Self::Settings(err) => write!(f, "invalid settings: {}", err),
        }
    }
}

impl std::error::Error for OsdError {}

impl From<std::io::Error> for OsdError {
    fn from(value: std::io::Error) -> Self {
        Self::Thread(value)
    }
}

impl From<serde_json::Error> for OsdError {
    fn from(value: serde_json::Error) -> Self {
        Self::Settings(value)
    }
}
