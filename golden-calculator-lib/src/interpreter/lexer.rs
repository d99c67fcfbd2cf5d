use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use log::trace;
use std::iter::Peekable;
use std::str::CharIndices;

/// Lazily splits an expression into tokens, from left to right.
///
/// Characters that belong to no token (whitespace included) are skipped,
/// so `"1 + 2"` and `"1+2"` produce the same tokens. A clone continues
/// independently from the position it was cloned at.
#[derive(Clone)]
pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

/// Starts tokenizing the given expression.
///
/// # Examples
///
/// ```
/// use golden_calculator::interpreter::lexer::tokenize;
/// use golden_calculator::interpreter::operator::Operator;
/// use golden_calculator::interpreter::token::Token;
///
/// let tokens: Vec<Token> = tokenize("2 * 1.5e3").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Number("2"),
///         Token::Operator(Operator::Multiply),
///         Token::Number("1.5e3"),
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Lexer<'_> {
    Lexer::new(expression)
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (offset, character) = self.chars.next()?;
            match character {
                '(' => return Some(Token::LeftParenthesis),
                ')' => return Some(Token::RightParenthesis),
                c if c.is_ascii_digit() => return Some(self.read_number(offset)),
                c => match Operator::from_symbol(c) {
                    Some(operator) => return Some(Token::Operator(operator)),
                    None => trace!("Skipping {:?} at offset {}", c, offset),
                },
            }
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    fn skip_digits(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_ascii_digit()).is_some() {}
    }

    fn current_offset(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(offset, _)) => offset,
            None => self.src.len(),
        }
    }

    /// Reads `digits [. digits] [e|E [+|-] digits]`, the first digit already consumed.
    fn read_number(&mut self, from_offset: usize) -> Token<'src> {
        self.skip_digits();
        if self.chars.next_if(|&(_, c)| c == '.').is_some() {
            self.skip_digits();
        }
        self.read_exponent();
        let to_offset = self.current_offset();
        Token::Number(&self.src[from_offset..to_offset])
    }

    fn read_exponent(&mut self) {
        let mut lookahead = self.chars.clone();
        if lookahead.next_if(|&(_, c)| c == 'e' || c == 'E').is_none() {
            return;
        }
        lookahead.next_if(|&(_, c)| c == '+' || c == '-');
        // Without digits the marker is not part of the number.
        if lookahead.peek().map_or(false, |(_, c)| c.is_ascii_digit()) {
            self.chars = lookahead;
            self.skip_digits();
        }
    }
}
