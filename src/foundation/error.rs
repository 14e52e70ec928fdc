/// Convenience result alias used throughout the crate.
pub type HeroResult<T> = Result<T, HeroError>;

/// Error type for construction-time and boundary failures.
///
/// Per-frame mapping and sampling never fail: out-of-range inputs are clamped or defaulted.
/// Errors only surface when building ranges, loading configuration, or serializing output.
#[derive(thiserror::Error, Debug)]
pub enum HeroError {
    /// Input failed structural validation (bad breakpoints, non-finite values, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Animation parameters are unusable (zero duration, negative spring constants, ...).
    #[error("animation error: {0}")]
    Animation(String),

    /// Motion configuration could not be read or is inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeroError {
    /// Build a [`HeroError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeroError::Animation`] error.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`HeroError::Config`] error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HeroError::Serde`] error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for HeroError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
