//! Error types for page surface access and settings validation.

use thiserror::Error;

/// Result alias for page effect operations.
pub type Result<T> = std::result::Result<T, PageFxError>;

/// Failures reported by a page surface implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface could not create a new element.
    #[error("failed to create <{tag}> element")]
    ElementCreation {
        /// Tag name that was requested.
        tag: String,
        /// Message reported by the surface.
        reason: String,
    },
    /// Writing an inline style property failed.
    #[error("failed to write style property '{property}'")]
    StyleWrite {
        /// Property that was being written.
        property: String,
        /// Message reported by the surface.
        reason: String,
    },
    /// Adding or removing a class failed.
    #[error("failed to update class '{class}'")]
    ClassList {
        /// Class that was being toggled.
        class: String,
        /// Message reported by the surface.
        reason: String,
    },
    /// Inserting a child element failed.
    #[error("failed to append child element")]
    AppendChild {
        /// Message reported by the surface.
        reason: String,
    },
    /// The page has no region able to receive a style block.
    #[error("page has no style host")]
    MissingStyleHost,
    /// Registering a viewport intersection watcher failed.
    #[error("failed to register intersection watcher")]
    Observer {
        /// Message reported by the surface.
        reason: String,
    },
    /// Registering an event listener failed.
    #[error("failed to register '{event}' listener")]
    Listener {
        /// Event name the listener targeted.
        event: &'static str,
        /// Message reported by the surface.
        reason: String,
    },
}

/// Settings rejected by [`crate::EffectsSettings::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A class or identifier name was empty or contained whitespace.
    #[error("invalid name for '{field}' in '{section}'")]
    InvalidName {
        /// Settings section holding the field.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A numeric field was out of its permitted range.
    #[error("value for '{field}' in '{section}' is out of range")]
    OutOfRange {
        /// Settings section holding the field.
        section: &'static str,
        /// Field that failed validation.
        field: &'static str,
        /// Offending value rendered as text.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Umbrella error for bootstrap operations.
#[derive(Debug, Error)]
pub enum PageFxError {
    /// Settings failed validation.
    #[error("invalid page effect settings")]
    Config(#[from] ConfigError),
    /// The page surface rejected an operation.
    #[error("page surface operation failed")]
    Surface(#[from] SurfaceError),
}
