//! Numeric-string recognition
//!
//! Decides whether text looks like a number and, if so, which one.
//!
//! Accepted shape, surrounded by optional whitespace
//! (space, `\t`, `\n`, `\r`, `\x0B`, `\x0C`):
//!
//! ```text
//! [+-]? ( digits ( '.' digits? )? | '.' digits ) ( [eE] [+-]? digits )?
//! ```
//!
//! Hex, octal and binary literals, `inf`/`nan`, inner whitespace and
//! trailing garbage are all rejected.

/// A recognized number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Sign and digits only, fitting in `i64`
    Integer(i64),
    /// Anything with a fraction or exponent
    Float(f64),
    /// Sign and digits only, beyond `i64`; holds the nearest float
    Overflow(f64),
}

/// Returns true if `text` is a numeric string
pub fn is_numeric(text: &str) -> bool {
    parse_numeric(text).is_some()
}

/// Recognize and convert a numeric string
pub fn parse_numeric(text: &str) -> Option<Number> {
    let trimmed = text.trim_matches(is_numeric_whitespace);
    match Scanner::new(trimmed).scan()? {
        Shape::Integer => match trimmed.parse::<i64>() {
            Ok(integer) => Some(Number::Integer(integer)),
            Err(_) => trimmed.parse::<f64>().ok().map(Number::Overflow),
        },
        Shape::Float => trimmed.parse::<f64>().ok().map(Number::Float),
    }
}

fn is_numeric_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Integer,
    Float,
}

struct Scanner<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            input: text.as_bytes(),
            position: 0,
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_sign(&mut self) {
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.advance();
        }
    }

    /// Consume a run of ASCII digits, returning how many were read
    fn digits(&mut self) -> usize {
        let start = self.position;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }
        self.position - start
    }

    fn scan(mut self) -> Option<Shape> {
        let mut shape = Shape::Integer;

        self.skip_sign();
        let whole = self.digits();

        if self.peek() == Some(b'.') {
            self.advance();
            let fraction = self.digits();
            if whole == 0 && fraction == 0 {
                return None;
            }
            shape = Shape::Float;
        } else if whole == 0 {
            return None;
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.advance();
            self.skip_sign();
            if self.digits() == 0 {
                return None;
            }
            shape = Shape::Float;
        }

        self.is_at_end().then_some(shape)
    }
}
