use std::fmt;

/// Error type for guarded power set construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PowerSetError {
    /// The input has more elements than the configured limit.
    InputTooLarge { len: usize, limit: usize },
}

impl fmt::Display for PowerSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerSetError::InputTooLarge { len, limit } => {
                write!(f, "input of {} elements exceeds the limit of {}", len, limit)
            }
        }
    }
}

impl std::error::Error for PowerSetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PowerSetError::InputTooLarge { len: 30, limit: 20 };
        assert_eq!(err.to_string(), "input of 30 elements exceeds the limit of 20");
    }
}
