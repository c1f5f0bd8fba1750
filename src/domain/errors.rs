#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("Division by zero is not allowed")]
    DivisionByZero,
    #[error("{0}")]
    InvalidDomain(String),
}

impl CalculatorError {
    pub(crate) fn invalid_domain(msg: &str) -> Self {
        CalculatorError::InvalidDomain(msg.to_string())
    }
}

pub type CalcResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            CalculatorError::invalid_domain("Cannot calculate square root of negative number")
                .to_string(),
            "Cannot calculate square root of negative number"
        );
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let err: Box<dyn std::error::Error> = Box::new(CalculatorError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero is not allowed");
        assert_ne!(
            CalculatorError::DivisionByZero,
            CalculatorError::invalid_domain("Division by zero is not allowed")
        );
    }
}
