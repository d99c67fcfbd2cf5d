pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod presentation;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::presentation::{present, Presentation};
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;

/// Evaluates an arithmetic expression and chooses how its result is shown.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, e.g. `"2 ^ 3 ^ 2"` or `"3√8"`.
///
/// returns: The presentable result, or the reason the expression has no result.
///
/// # Examples
///
/// ```
/// use golden_calculator::interpreter::error::EvaluationError;
/// use golden_calculator::interpreter::evaluate;
///
/// let result = evaluate("1 + 2 * 3 - 4 / 2").unwrap();
/// assert_eq!(result.to_string(), "5");
///
/// assert_eq!(evaluate("1 / 0"), Err(EvaluationError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<Presentation, EvaluationError> {
    calculate(expression).map(present)
}

/// Evaluates an arithmetic expression into its unrounded value.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use golden_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use golden_calculator::interpreter::calculate;
///
/// let value = calculate("1 / 3")?;
/// assert_eq!(value, 1.0 / 3.0);
/// # Ok(()) }
/// ```
pub fn calculate(expression: &str) -> Result<f64, EvaluationError> {
    let postfix_tokens = to_postfix(expression)?;
    let value = evaluator::evaluate_postfix(&postfix_tokens)?;
    debug!("{:?} evaluates to {}", expression, value);
    Ok(value)
}

/// Converts an infix expression into postfix tokens.
///
/// # Examples
///
/// ```
/// # use golden_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use golden_calculator::interpreter::{to_postfix, tokens_to_string};
///
/// let postfix_tokens = to_postfix("(1 + 2) * 3")?;
/// assert_eq!(tokens_to_string(&postfix_tokens), "1 2 + 3 *");
/// # Ok(()) }
/// ```
pub fn to_postfix(expression: &str) -> Result<Vec<Token<'_>>, EvaluationError> {
    let postfix_tokens = parser::parse(lexer::tokenize(expression))?;
    debug!(
        "Postfix form of {:?} is {}",
        expression,
        tokens_to_string(&postfix_tokens)
    );
    Ok(postfix_tokens)
}

/// Prints the given tokens separated by single spaces.
///
/// # Examples
///
/// ```
/// use golden_calculator::interpreter::operator::Operator;
/// use golden_calculator::interpreter::token::Token;
/// use golden_calculator::interpreter::tokens_to_string;
///
/// let tokens = vec![
///     Token::Number("2"),
///     Token::Number("3"),
///     Token::Operator(Operator::Exponentiate),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "2 3 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
