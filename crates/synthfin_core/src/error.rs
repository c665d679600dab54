use std::fmt;

/// Errors related to year range construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The start year comes after the end year
    Inverted { start: i32, end: i32 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Inverted { start, end } => {
                write!(f, "start year {start} is after end year {end}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RangeError::Inverted {
            start: 2020,
            end: 2010,
        };
        assert_eq!(err.to_string(), "start year 2020 is after end year 2010");
    }
}
