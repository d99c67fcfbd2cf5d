use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression.
///
/// Numbers keep the text they were written as, e.g. `1e-3` or `2.`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    Number(&'src str),
    Operator(Operator),
    LeftParenthesis,
    RightParenthesis,
}

impl<'src> Token<'src> {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// The numeric value of a number token.
    ///
    /// # Examples
    ///
    /// ```
    /// use golden_calculator::interpreter::token::Token;
    ///
    /// assert_eq!(Token::Number("1e-3").value(), Ok(0.001));
    /// ```
    pub fn value(&self) -> Result<f64, EvaluationError> {
        match self {
            Token::Number(text) => text
                .parse::<f64>()
                .map_err(|_| EvaluationError::InvalidExpression),
            _ => Err(EvaluationError::InvalidExpression),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl From<Operator> for Token<'_> {
    fn from(operator: Operator) -> Self {
        Token::Operator(operator)
    }
}
