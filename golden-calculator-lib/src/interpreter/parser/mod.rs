mod infix_converter;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix notation, ready for evaluation.
///
/// A unary minus is preceded by an implicit `0`, and a root without a
/// degree in front of it by an implicit `2`.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent tokens in postfix format.
///
/// # Examples
///
/// ```
/// # use golden_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use golden_calculator::interpreter::lexer::tokenize;
/// use golden_calculator::interpreter::parser::parse;
/// use golden_calculator::interpreter::tokens_to_string;
///
/// let postfix_tokens = parse(tokenize("-√9"))?;
/// assert_eq!(tokens_to_string(&postfix_tokens), "0 2 9 √ -");
/// # Ok(()) }
/// ```
pub fn parse<'src>(
    infix_tokens: impl IntoIterator<Item = Token<'src>>,
) -> Result<Vec<Token<'src>>, EvaluationError> {
    infix_to_postfix(infix_tokens)
}
