use thiserror::Error;

/// Result alias for configuration input.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while accepting configuration from the UI collaborator.
///
/// The solver itself never fails; degenerate geometry is skipped in place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong type.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// Value outside its allowed range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}

impl ConfigError {
    pub(crate) fn param(msg: impl Into<String>) -> Self {
        ConfigError::InvalidParam(msg.into())
    }
}

/// Reject non-finite or non-positive values.
pub(crate) fn ensure_positive(name: &str, value: f32) -> ConfigResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::param(format!("{} must be finite and > 0", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let err = ensure_positive("radius", 0.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("radius"));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(ensure_positive("mass", f32::NAN).is_err());
        assert!(ensure_positive("mass", 1.0).is_ok());
    }

    #[test]
    fn json_errors_convert() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid config json"));
    }
}
