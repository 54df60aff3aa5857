// Validation errors for mapping and lookup operations

/// Errors raised while validating mappings or resolving input names.
///
/// History updates never fail; every variant here comes out of the mapping
/// table or the key/button lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("mapping action must be a non-empty string")]
    MissingAction,

    #[error("at least one input must be provided: {0}")]
    NoInputs(String),

    #[error("no such input '{input}' for action '{action}'")]
    UnknownInput { action: String, input: String },

    #[error("no such key '{0}'")]
    UnknownKey(String),

    #[error("no such mouse button '{0}'")]
    UnknownButton(String),

    #[error("at least one input is required to look up actions")]
    EmptyQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InputError::UnknownKey("zorp".to_string());
        assert_eq!(err.to_string(), "no such key 'zorp'");

        let err = InputError::UnknownInput {
            action: "jump".to_string(),
            input: "zorp".to_string(),
        };
        assert_eq!(err.to_string(), "no such input 'zorp' for action 'jump'");
    }
}
