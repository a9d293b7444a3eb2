//! Error types for gamecode-scriptgen

use thiserror::Error;

/// Result type for script generation operations
pub type Result<T> = std::result::Result<T, ScriptGenError>;

/// User-facing message when idea brainstorming fails for any reason
pub const BRAINSTORM_FAILURE: &str = "Could not generate ideas. Ensure your API key is valid.";

/// User-facing message when script synthesis fails for any reason
pub const SYNTHESIS_FAILURE: &str =
    "Failed to generate the script. Please check your API usage limits.";

/// Returned in place of code when the completion service produces no text
pub const EMPTY_CODE_PLACEHOLDER: &str = "-- Failed to generate code.";

/// Errors that can occur while brainstorming ideas or synthesizing scripts
#[derive(Error, Debug)]
pub enum ScriptGenError {
    /// A required field was blank; raised before any service call
    #[error("{0}")]
    Input(String),

    /// Operation-level failure carrying a fixed user-facing message
    #[error("{0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Completion service error ({status}): {body}")]
    Service { status: u16, body: String },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Cannot {action} while {state}")]
    InvalidTransition { state: String, action: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl ScriptGenError {
    /// True for errors the caller can fix by editing their input
    pub fn is_input(&self) -> bool {
        matches!(self, ScriptGenError::Input(_))
    }
}
