use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::Arity;
use crate::interpreter::token::Token;
use log::trace;

/// Evaluates tokens ordered in postfix notation.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to evaluate.
///
/// returns: The single value the tokens reduce to.
///
/// # Examples
///
/// ```
/// use golden_calculator::interpreter::evaluator::evaluate_postfix;
/// use golden_calculator::interpreter::operator::Operator;
/// use golden_calculator::interpreter::token::Token;
///
/// // 3√8
/// let postfix_tokens = [
///     Token::Number("3"),
///     Token::Number("8"),
///     Token::Operator(Operator::Root),
/// ];
/// let value = evaluate_postfix(&postfix_tokens).unwrap();
/// assert!((value - 2.0).abs() < 1e-12);
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64, EvaluationError> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        let value = match *token {
            Token::Number(_) => token.value()?,
            Token::Operator(operator) => match operator.arity() {
                Arity::Unary => {
                    let operand = pop_operand(&mut operands)?;
                    operator.apply_unary(operand)?
                }
                Arity::Binary => {
                    // The left operand was pushed first, so it is popped second.
                    let right_operand = pop_operand(&mut operands)?;
                    let left_operand = pop_operand(&mut operands)?;
                    operator.apply_binary(left_operand, right_operand)?
                }
            },
            Token::LeftParenthesis | Token::RightParenthesis => {
                trace!("Found a parenthesis in postfix input");
                return Err(EvaluationError::InvalidExpression);
            }
        };
        trace!("{} pushes {}", token, value);
        operands.push(value);
    }

    match operands.as_slice() {
        [result] if result.is_finite() => Ok(*result),
        [_] => Err(EvaluationError::Undefined),
        leftover => {
            trace!("Expected a single value but found {:?}", leftover);
            Err(EvaluationError::InvalidExpression)
        }
    }
}

fn pop_operand(operands: &mut Vec<f64>) -> Result<f64, EvaluationError> {
    operands.pop().ok_or(EvaluationError::InvalidExpression)
}
