use thiserror::Error;

/// Reasons an expression can fail to evaluate.
///
/// The display text of each variant is what a front-end shows in place of a result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The right operand of `/` is zero.
    #[error("Error: Division by zero")]
    DivisionByZero,
    /// The operand of `!` is negative or has a fractional part.
    #[error("Error: Factorial requires a non-negative integer")]
    FactorialDomain,
    /// The radicand of `√` is negative.
    #[error("Error: Cannot take square root of a negative number")]
    SquareRootDomain,
    /// Operators and operands do not reduce to exactly one value.
    #[error("Error: Invalid expression")]
    InvalidExpression,
    /// The result is not a finite real number.
    #[error("Error")]
    Undefined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_has_dedicated_display_text() {
        assert_eq!(
            EvaluationError::DivisionByZero.to_string(),
            "Error: Division by zero"
        )
    }

    #[test]
    fn undefined_result_displays_generic_error() {
        assert_eq!(EvaluationError::Undefined.to_string(), "Error")
    }
}
