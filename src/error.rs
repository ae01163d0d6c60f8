//! Error types for menu bar composition and attachment.

use thiserror::Error;

/// Errors that can occur while composing or attaching a menu bar.
#[derive(Error, Debug)]
pub enum MenuBarError {
    /// A frame kind token was built from a blank namespace or name.
    #[error("Frame kind '{namespace}:{name}' has a blank component")]
    BlankFrameKind {
        /// The namespace the token was built with.
        namespace: String,
        /// The name the token was built with.
        name: String,
    },

    /// The native toolkit failed to complete an attach.
    #[error("Failed to complete menu bar attach: {details}")]
    AttachFailed {
        /// Details about the failure.
        details: String,
    },

    /// The native toolkit reported a concrete error while attaching.
    #[error("Failed to complete menu bar attach: {source}")]
    AttachBackend {
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for menu bar operations.
pub type MenuBarResult<T> = Result<T, MenuBarError>;

impl MenuBarError {
    /// Create an attach failure from a message.
    pub fn attach_failed(details: impl Into<String>) -> Self {
        Self::AttachFailed {
            details: details.into(),
        }
    }

    /// Create an attach failure from any error type.
    pub fn attach_backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::AttachBackend {
            source: Box::new(source),
        }
    }
}
