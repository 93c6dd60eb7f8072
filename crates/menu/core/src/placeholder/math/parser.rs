//! Recursive-descent arithmetic parser.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/' | '%') factor)*
//! factor     := power ('^' power)*
//! power      := '-' power | '(' expression ')' | number
//! ```
//!
//! All binary operators are left-associative. Unary minus sits below `^`, so
//! `-2^2` is `(-2)^2 = 4`; existing menu configurations depend on this.
//! Division and modulo by zero follow IEEE-754 (`Infinity` / `NaN`).
//! Nesting of parentheses and unary minus is capped at [`MAX_DEPTH`].

use super::MathError;

/// Deepest run of nested `(` / unary `-` accepted before giving up.
pub const MAX_DEPTH: usize = 256;

/// Parses and evaluates `input` in one pass.
///
/// Whitespace anywhere in the input is ignored.
pub fn evaluate(input: &str) -> Result<f64, MathError> {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Err(MathError::Empty);
    }

    let mut parser = Parser {
        chars,
        pos: 0,
        depth: 0,
    };
    let value = parser.expression()?;

    match parser.peek() {
        None => Ok(value),
        Some(found) => Err(MathError::UnexpectedChar {
            found,
            position: parser.pos,
        }),
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consumes `expected` if it is the next character.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expression(&mut self) -> Result<f64, MathError> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, MathError> {
        let mut value = self.factor()?;
        loop {
            if self.eat('*') {
                value *= self.factor()?;
            } else if self.eat('/') {
                value /= self.factor()?;
            } else if self.eat('%') {
                value %= self.factor()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn factor(&mut self) -> Result<f64, MathError> {
        let mut value = self.power()?;
        while self.eat('^') {
            value = value.powf(self.power()?);
        }
        Ok(value)
    }

    fn power(&mut self) -> Result<f64, MathError> {
        let start = self.pos;
        if self.eat('-') {
            self.descend(start)?;
            let value = -self.power()?;
            self.depth -= 1;
            return Ok(value);
        }

        if self.eat('(') {
            self.descend(start)?;
            let value = self.expression()?;
            if !self.eat(')') {
                return Err(MathError::UnmatchedParen { position: start });
            }
            self.depth -= 1;
            return Ok(value);
        }

        self.number()
    }

    fn descend(&mut self, position: usize) -> Result<(), MathError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(MathError::TooDeep {
                limit: MAX_DEPTH,
                position,
            });
        }
        Ok(())
    }

    fn number(&mut self) -> Result<f64, MathError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }

        if start == self.pos {
            return Err(match self.peek() {
                None => MathError::ExpectedOperand { position: start },
                Some(found) => MathError::UnexpectedChar {
                    found,
                    position: start,
                },
            });
        }

        let literal: String = self.chars[start..self.pos].iter().collect();
        literal
            .parse::<f64>()
            .map_err(|_| MathError::InvalidNumber(literal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_precedence_levels() {
        assert_eq!(evaluate("5+3"), Ok(8.0));
        assert_eq!(evaluate("10/2"), Ok(5.0));
        assert_eq!(evaluate("2*3+4"), Ok(10.0));
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("2*3^2"), Ok(18.0));
    }

    #[test]
    fn unary_minus_binds_tighter_than_power() {
        assert_eq!(evaluate("-2^2"), Ok(4.0));
        assert_eq!(evaluate("--3"), Ok(3.0));
        assert_eq!(evaluate("4-(-2)"), Ok(6.0));
    }

    #[test]
    fn operators_are_left_associative() {
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("64/4/2"), Ok(8.0));
        assert_eq!(evaluate("2^3^2"), Ok(64.0));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(evaluate(" 1 + 2 * 3 "), Ok(7.0));
        assert_eq!(evaluate("1 0 + 1"), Ok(11.0));
    }

    #[test]
    fn modulo_and_decimals() {
        assert_eq!(evaluate("10%3"), Ok(1.0));
        assert_eq!(evaluate(".5+1.25"), Ok(1.75));
    }

    #[test]
    fn division_by_zero_is_not_special_cased() {
        assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
        assert!(evaluate("0/0").is_ok_and(f64::is_nan));
        assert!(evaluate("5%0").is_ok_and(f64::is_nan));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert_eq!(evaluate("2+"), Err(MathError::ExpectedOperand { position: 2 }));
        assert_eq!(evaluate("(1+2"), Err(MathError::UnmatchedParen { position: 0 }));
        assert_eq!(evaluate(""), Err(MathError::Empty));
        assert_eq!(
            evaluate("1+2)"),
            Err(MathError::UnexpectedChar {
                found: ')',
                position: 3
            })
        );
        assert!(matches!(evaluate("1.2.3"), Err(MathError::InvalidNumber(_))));
        assert!(matches!(evaluate("1e5"), Err(MathError::UnexpectedChar { found: 'e', .. })));
        assert!(matches!(evaluate("+1"), Err(MathError::UnexpectedChar { found: '+', .. })));
    }

    #[test]
    fn nesting_is_bounded() {
        let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(evaluate(&nested(MAX_DEPTH)), Ok(1.0));
        assert_eq!(
            evaluate(&nested(MAX_DEPTH + 1)),
            Err(MathError::TooDeep {
                limit: MAX_DEPTH,
                position: MAX_DEPTH
            })
        );

        assert_eq!(evaluate(&format!("{}1", "-".repeat(MAX_DEPTH))), Ok(1.0));
        assert!(matches!(
            evaluate(&format!("{}1", "-".repeat(MAX_DEPTH + 1))),
            Err(MathError::TooDeep { .. })
        ));
    }
}
