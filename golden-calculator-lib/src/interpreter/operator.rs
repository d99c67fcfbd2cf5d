use crate::interpreter::error::EvaluationError;
use std::fmt;
use std::fmt::Formatter;

/// A mathematical operator of the calculator.
///
/// `Root` is binary in postfix form: the degree comes first, the radicand second.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Root,
    Factorial,
    Percent,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// How many operands an operator consumes from the value stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

struct OperatorEntry {
    operator: Operator,
    symbol: char,
    precedence: u8,
    associativity: Associativity,
}

const fn operator_entry(
    operator: Operator,
    symbol: char,
    precedence: u8,
    associativity: Associativity,
) -> OperatorEntry {
    OperatorEntry {
        operator,
        symbol,
        precedence,
        associativity,
    }
}

// Ordered like the variants of `Operator`, so an operator indexes its own entry.
static OPERATOR_TABLE: [OperatorEntry; 8] = [
    operator_entry(Operator::Add, '+', 1, Associativity::Left),
    operator_entry(Operator::Subtract, '-', 1, Associativity::Left),
    operator_entry(Operator::Multiply, '*', 2, Associativity::Left),
    operator_entry(Operator::Divide, '/', 2, Associativity::Left),
    operator_entry(Operator::Exponentiate, '^', 3, Associativity::Right),
    operator_entry(Operator::Root, '√', 3, Associativity::Right),
    operator_entry(Operator::Factorial, '!', 4, Associativity::Right),
    operator_entry(Operator::Percent, '%', 1, Associativity::Left),
];

impl Operator {
    /// Looks up the operator written as the given character, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use golden_calculator::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('√'), Some(Operator::Root));
    /// assert_eq!(Operator::from_symbol('x'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        OPERATOR_TABLE
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.operator)
    }

    fn entry(&self) -> &'static OperatorEntry {
        &OPERATOR_TABLE[*self as usize]
    }

    pub fn symbol(&self) -> char {
        self.entry().symbol
    }

    pub fn precedence(&self) -> u8 {
        self.entry().precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.entry().associativity
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::Factorial | Operator::Percent => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Applies a unary operator to its single operand.
    pub fn apply_unary(&self, operand: f64) -> Result<f64, EvaluationError> {
        match self {
            Operator::Factorial => factorial(operand),
            Operator::Percent => Ok(operand / 100.0),
            Operator::Add
            | Operator::Subtract
            | Operator::Multiply
            | Operator::Divide
            | Operator::Exponentiate
            | Operator::Root => Err(EvaluationError::InvalidExpression),
        }
    }

    /// Applies a binary operator. For `Root`, `left` is the degree and `right` the radicand.
    ///
    /// # Examples
    ///
    /// ```
    /// use golden_calculator::interpreter::error::EvaluationError;
    /// use golden_calculator::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Root.apply_binary(2.0, 9.0), Ok(3.0));
    /// assert_eq!(
    ///     Operator::Divide.apply_binary(1.0, 0.0),
    ///     Err(EvaluationError::DivisionByZero)
    /// );
    /// ```
    pub fn apply_binary(&self, left: f64, right: f64) -> Result<f64, EvaluationError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                Ok(left / right)
            }
            Operator::Exponentiate => Ok(left.powf(right)),
            Operator::Root => {
                if right < 0.0 {
                    return Err(EvaluationError::SquareRootDomain);
                }
                Ok(right.powf(1.0 / left))
            }
            Operator::Factorial | Operator::Percent => Err(EvaluationError::InvalidExpression),
        }
    }
}

fn factorial(operand: f64) -> Result<f64, EvaluationError> {
    if operand < 0.0 || operand.fract() != 0.0 {
        return Err(EvaluationError::FactorialDomain);
    }
    let mut product = 1.0;
    for factor in 2..=(operand as u64) {
        product *= factor as f64;
        if product.is_infinite() {
            break;
        }
    }
    Ok(product)
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
