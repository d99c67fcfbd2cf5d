use crate::interpreter::operator::Operator;
use anyhow::{bail, Context, Result};

/// Calculates the sample standard deviation of the given numbers,
/// using the calculator's own arithmetic.
///
/// # Arguments
///
/// * `numbers`: At least two numbers.
///
/// returns: The square root of the sum of squared deviations from the mean, divided by `n - 1`.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use golden_calculator::statistics::sample_standard_deviation;
///
/// let deviation = sample_standard_deviation(&[1.0, 3.0])?;
/// assert!((deviation - 2f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn sample_standard_deviation(numbers: &[f64]) -> Result<f64> {
    if numbers.len() < 2 {
        bail!("At least two numbers are required for calculating sample standard deviation.");
    }
    let count = numbers.len() as f64;

    let sum = numbers
        .iter()
        .try_fold(0.0, |sum, &number| Operator::Add.apply_binary(sum, number))?;
    let mean = Operator::Divide.apply_binary(sum, count)?;

    let squared_deviations = numbers.iter().try_fold(0.0, |total, &number| {
        let deviation = Operator::Subtract.apply_binary(number, mean)?;
        let squared_deviation = Operator::Exponentiate.apply_binary(deviation, 2.0)?;
        Operator::Add.apply_binary(total, squared_deviation)
    })?;
    let degrees_of_freedom = Operator::Subtract.apply_binary(count, 1.0)?;
    let variance = Operator::Divide.apply_binary(squared_deviations, degrees_of_freedom)?;

    Operator::Root
        .apply_binary(2.0, variance)
        .context("Failed to take the square root of the variance")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deviation_of_known_sample() {
        let numbers = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

        let deviation = sample_standard_deviation(&numbers).unwrap();

        assert!((deviation - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn deviation_of_equal_numbers_is_zero() {
        let deviation = sample_standard_deviation(&[3.5, 3.5, 3.5]).unwrap();

        assert_eq!(deviation, 0.0);
    }

    #[test]
    fn deviation_of_negative_numbers() {
        let deviation = sample_standard_deviation(&[-1.0, -3.0]).unwrap();

        assert!((deviation - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn fewer_than_two_numbers_returns_err() {
        sample_standard_deviation(&[]).expect_err("Should return Err");
        let error = sample_standard_deviation(&[1.0]).unwrap_err();

        assert_eq!(
            error.to_string(),
            "At least two numbers are required for calculating sample standard deviation."
        );
    }
}
