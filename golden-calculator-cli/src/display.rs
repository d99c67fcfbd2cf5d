use anyhow::{Context, Result};
use golden_calculator::interpreter::error::EvaluationError;
use golden_calculator::interpreter::presentation::Presentation;
use log::info;
use std::io::BufRead;

/// Replaces the multiplication and division glyphs shown on calculator keys
/// with the operators the evaluator understands.
pub fn normalize_glyphs(expression: &str) -> String {
    expression.replace('×', "*").replace('÷', "/")
}

/// The text shown in place of the expression once it has been evaluated.
pub fn render(result: &Result<Presentation, EvaluationError>) -> String {
    match result {
        Ok(presentation) => {
            info!("Shown value is {}", presentation.value());
            presentation.to_string()
        }
        Err(error) => error.to_string(),
    }
}

/// Reads whitespace separated numbers until the end of input or an empty line.
pub fn read_numbers(input: impl BufRead) -> Result<Vec<f64>> {
    let mut numbers = vec![];
    for line in input.lines() {
        let line = line.context("Failed to read from input")?;
        if line.trim().is_empty() {
            break;
        }
        for word in line.split_whitespace() {
            let number = word
                .parse::<f64>()
                .with_context(|| format!("{:?} is not a number", word))?;
            numbers.push(number);
        }
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use golden_calculator::interpreter::evaluate;

    #[test]
    fn glyphs_are_replaced_with_operators() {
        assert_eq!(normalize_glyphs("6 × 2 ÷ 3"), "6 * 2 / 3");
    }

    #[test]
    fn render_shows_result_of_normalized_expression() {
        let result = evaluate(&normalize_glyphs("6 × 2 ÷ 3"));

        assert_eq!(render(&result), "4");
    }

    #[test]
    fn render_shows_rounded_decimal() {
        let result = evaluate("2 / 3");

        assert_eq!(result.map(|presentation| presentation.value()), Ok(0.6666667));
        assert_eq!(render(&result), "0.6666667");
    }

    #[test]
    fn render_shows_error_text() {
        assert_eq!(render(&evaluate("1 ÷ 0")), "Error: Invalid expression");
        assert_eq!(
            render(&evaluate(&normalize_glyphs("1 ÷ 0"))),
            "Error: Division by zero"
        );
    }

    #[test]
    fn read_numbers_stops_at_empty_line() {
        let input = "1 2.5\n-3\n\n4\n".as_bytes();

        let numbers = read_numbers(input).unwrap();

        assert_eq!(numbers, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn read_numbers_rejects_words() {
        read_numbers("1 two".as_bytes()).expect_err("Should return Err");
    }
}
