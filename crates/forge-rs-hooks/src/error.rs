//! Hook registry error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForgeError {
    /// Startup must abort; the message is attributed to the offending mod.
    #[error("{mod_name}: {message}")]
    Fatal { mod_name: String, message: String },

    #[error("rarity must be greater than zero, got {rarity}")]
    InvalidRarity { rarity: f32 },

    #[error("invalid stack size range: {min}..={max}")]
    InvalidCountRange { min: u32, max: u32 },

    #[error("invalid version string: {0:?}")]
    InvalidVersion(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;

/// Build the fatal error that stops the host, attributed to `mod_name`.
pub fn kill_minecraft(mod_name: &str, message: impl Into<String>) -> ForgeError {
    ForgeError::Fatal {
        mod_name: mod_name.to_string(),
        message: message.into(),
    }
}
