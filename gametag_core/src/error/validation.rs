//! Errors raised before any lookup runs

use thiserror::Error;

/// Rejected settings
///
/// Returned from constructors, never from an enrichment pass.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A component could not be set up from otherwise valid settings
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A single setting is out of range
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }

    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_names_setting() {
        let error = ValidationError::invalid_parameter("provider.base_url", "must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'provider.base_url': must not be empty"
        );
    }

    #[test]
    fn test_configuration_error_message() {
        let error = ValidationError::invalid_configuration("Failed to build HTTP client");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: Failed to build HTTP client"
        );
    }
}
