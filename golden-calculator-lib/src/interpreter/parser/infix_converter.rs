use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::{Associativity, Operator};
use crate::interpreter::token::Token;
use log::trace;

pub(super) fn infix_to_postfix<'src>(
    infix_tokens: impl IntoIterator<Item = Token<'src>>,
) -> Result<Vec<Token<'src>>, EvaluationError> {
    let mut operators: Vec<Token<'src>> = vec![];
    let mut output: Vec<Token<'src>> = vec![];
    let mut previous_token: Option<Token<'src>> = None;

    for token in infix_tokens {
        trace!("Converting {} with operator stack {:?}", token, operators);
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::Operator(operator) => {
                if let Some(operand) = implicit_operand(previous_token.as_ref(), operator) {
                    output.push(operand);
                }
                parse_operator_token(&mut operators, &mut output, operator);
            }
        };
        previous_token = Some(token);
    }

    transfer_leftover_operators(&mut operators, &mut output);

    Ok(output)
}

/// The operand written implicitly in front of `operator`, given the token before it.
///
/// A minus with no value before it negates, `-5` meaning `0 - 5`.
/// A root with no number before it is a square root, `√9` meaning `2 √ 9`.
fn implicit_operand(previous_token: Option<&Token>, operator: Operator) -> Option<Token<'static>> {
    match (operator, previous_token) {
        (Operator::Subtract, None | Some(Token::Operator(_)) | Some(Token::LeftParenthesis)) => {
            Some(Token::Number("0"))
        }
        (Operator::Root, Some(token)) if token.is_number() => None,
        (Operator::Root, _) => Some(Token::Number("2")),
        _ => None,
    }
}

fn transfer_leftover_operators<'src>(
    operators: &mut Vec<Token<'src>>,
    output: &mut Vec<Token<'src>>,
) {
    while let Some(token) = operators.pop() {
        match token {
            // Parentheses left open at the end are closed implicitly.
            Token::LeftParenthesis => {}
            token => output.push(token),
        }
    }
}

fn parse_closing_parenthesis_token<'src>(
    operators: &mut Vec<Token<'src>>,
    output: &mut Vec<Token<'src>>,
) -> Result<(), EvaluationError> {
    loop {
        match operators.pop() {
            None => {
                trace!("Found a closing parenthesis without an opening one");
                return Err(EvaluationError::InvalidExpression);
            }
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(token) => output.push(token),
        }
    }
}

fn parse_operator_token<'src>(
    operators: &mut Vec<Token<'src>>,
    output: &mut Vec<Token<'src>>,
    operator: Operator,
) {
    while let Some(&Token::Operator(other_operator)) = operators.last() {
        let binds_tighter = other_operator.precedence_gt(&operator)
            || (other_operator.precedence_eq(&operator)
                && operator.associativity() == Associativity::Left);
        if !binds_tighter {
            break;
        }
        operators.pop(); // Pop other_operator
        output.push(Token::Operator(other_operator));
    }

    operators.push(Token::Operator(operator));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use pretty_assertions::assert_eq;

    const ADD: Token = Token::Operator(Operator::Add);
    const SUBTRACT: Token = Token::Operator(Operator::Subtract);
    const MULTIPLY: Token = Token::Operator(Operator::Multiply);
    const DIVIDE: Token = Token::Operator(Operator::Divide);
    const POWER: Token = Token::Operator(Operator::Exponentiate);
    const ROOT: Token = Token::Operator(Operator::Root);
    const FACTORIAL: Token = Token::Operator(Operator::Factorial);

    fn convert(expression: &str) -> Result<Vec<Token<'_>>, EvaluationError> {
        infix_to_postfix(tokenize(expression))
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![Token::Number("1"), ADD, Token::Number("2")];
        let postfix = vec![Token::Number("1"), Token::Number("2"), ADD];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 * (2 + 3)
        let postfix = vec![
            Token::Number("1"),
            Token::Number("2"),
            Token::Number("3"),
            ADD,
            MULTIPLY,
        ];

        let actual = convert("1 * (2 + 3)").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4 / 2
        let postfix = vec![
            Token::Number("1"),
            Token::Number("2"),
            Token::Number("3"),
            MULTIPLY,
            ADD,
            Token::Number("4"),
            Token::Number("2"),
            DIVIDE,
            SUBTRACT,
        ];

        let actual = convert("1 + 2 * 3 - 4 / 2").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_power_is_right_associative() {
        // 2 ^ 3 ^ 2
        let postfix = vec![
            Token::Number("2"),
            Token::Number("3"),
            Token::Number("2"),
            POWER,
            POWER,
        ];

        let actual = convert("2 ^ 3 ^ 2").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_factorial_binds_tighter_than_power() {
        // 2 ^ 3!
        let postfix = vec![Token::Number("2"), Token::Number("3"), FACTORIAL, POWER];

        let actual = convert("2^3!").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let postfix = vec![
            Token::Number("1"),
            Token::Number("2"),
            Token::Number("3"),
            ADD,
            Token::Number("4"),
            MULTIPLY,
            ADD,
        ];

        let actual = convert("1 + ((2 + 3) * 4)").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn leading_minus_gets_implicit_zero() {
        let postfix = vec![Token::Number("0"), Token::Number("5"), SUBTRACT];

        let actual = convert("-5").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn minus_after_open_parenthesis_gets_implicit_zero() {
        // (-2) ^ 2
        let postfix = vec![
            Token::Number("0"),
            Token::Number("2"),
            SUBTRACT,
            Token::Number("2"),
            POWER,
        ];

        let actual = convert("(-2) ^ 2").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn minus_after_closing_parenthesis_is_binary() {
        let postfix = vec![Token::Number("1"), Token::Number("2"), SUBTRACT];

        let actual = convert("(1) - 2").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn bare_root_gets_implicit_degree_two() {
        let postfix = vec![Token::Number("2"), Token::Number("9"), ROOT];

        let actual = convert("√9").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn root_after_number_uses_it_as_degree() {
        let postfix = vec![Token::Number("3"), Token::Number("8"), ROOT];

        let actual = convert("3√8").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn root_after_operator_gets_implicit_degree_two() {
        // 1 + √4
        let postfix = vec![
            Token::Number("1"),
            Token::Number("2"),
            Token::Number("4"),
            ROOT,
            ADD,
        ];

        let actual = convert("1 + √4").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn unclosed_parenthesis_is_closed_at_the_end() {
        let postfix = vec![Token::Number("1"), Token::Number("2"), ADD];

        let actual = convert("(1 + 2").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        let actual = convert("(1 + 2))");

        assert_eq!(actual, Err(EvaluationError::InvalidExpression))
    }

    #[test]
    fn empty_input_converts_to_empty_output() {
        assert_eq!(convert(""), Ok(vec![]))
    }
}
