//! Arithmetic for the `calc` command.
//!
//! Grammar (whitespace ignored between tokens):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/' | '%') unary)*
//! unary  := ('-' | '+') unary | atom
//! atom   := number | '(' expr ')'
//! number := digits ['.' digits] | '.' digits
//! ```

const ALLOWED_SYMBOLS: &str = "+-*/().%";
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Empty,
    UnexpectedChar { ch: char, pos: usize },
    UnexpectedEnd,
    InvalidNumber(String),
    TooDeep,
    NonFinite(f64),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::Empty => write!(f, "empty expression"),
            CalcError::UnexpectedChar { ch, pos } => {
                write!(f, "unexpected '{}' at position {}", ch, pos)
            }
            CalcError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            CalcError::InvalidNumber(s) => write!(f, "invalid number '{}'", s),
            CalcError::TooDeep => write!(f, "expression nested too deeply"),
            CalcError::NonFinite(v) => write!(f, "result is not a finite number ({})", v),
        }
    }
}

impl std::error::Error for CalcError {}

/// Drops every character that is not a digit, an operator, a parenthesis, `.` or whitespace.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || ALLOWED_SYMBOLS.contains(*c) || c.is_whitespace())
        .collect()
}

/// Evaluates an already sanitized expression.
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    let mut parser = Parser {
        src: expression.as_bytes(),
        pos: 0,
        depth: 0,
    };
    parser.skip_ws();
    if parser.at_end() {
        return Err(CalcError::Empty);
    }
    let value = parser.expr()?;
    parser.skip_ws();
    if let Some(ch) = parser.peek() {
        return Err(CalcError::UnexpectedChar {
            ch: ch as char,
            pos: parser.pos,
        });
    }
    if !value.is_finite() {
        return Err(CalcError::NonFinite(value));
    }
    Ok(value)
}

/// Integers print without a fraction; everything else gets at most four decimals.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.4}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn unexpected(&self) -> CalcError {
        match self.peek() {
            Some(b) => CalcError::UnexpectedChar {
                ch: b as char,
                pos: self.pos,
            },
            None => CalcError::UnexpectedEnd,
        }
    }

    fn expr(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.term()?;
        loop {
            if self.eat(b'+') {
                acc += self.term()?;
            } else if self.eat(b'-') {
                acc -= self.term()?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut acc = self.unary()?;
        loop {
            self.skip_ws();
            // `**` is not an operator here; let the caller report it.
            if self.src.get(self.pos..self.pos + 2) == Some(b"**") {
                return Err(CalcError::UnexpectedChar {
                    ch: '*',
                    pos: self.pos + 1,
                });
            }
            if self.eat(b'*') {
                acc *= self.unary()?;
            } else if self.eat(b'/') {
                acc /= self.unary()?;
            } else if self.eat(b'%') {
                acc %= self.unary()?;
            } else {
                return Ok(acc);
            }
        }
    }

    fn unary(&mut self) -> Result<f64, CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::TooDeep);
        }
        let result = if self.eat(b'-') {
            self.unary().map(|v| -v)
        } else if self.eat(b'+') {
            self.unary()
        } else {
            self.atom()
        };
        self.depth -= 1;
        result
    }

    fn atom(&mut self) -> Result<f64, CalcError> {
        self.skip_ws();
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let value = self.expr()?;
                if !self.eat(b')') {
                    return Err(self.unexpected());
                }
                Ok(value)
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.number(),
            _ => Err(self.unexpected()),
        }
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let start = self.pos;
        let mut seen_dot = false;
        let mut digits = 0usize;
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() {
                digits += 1;
            } else if b == b'.' && !seen_dot {
                seen_dot = true;
            } else {
                break;
            }
            self.pos += 1;
        }
        let text = String::from_utf8_lossy(&self.src[start..self.pos]).into_owned();
        if digits == 0 || self.peek() == Some(b'.') {
            return Err(CalcError::InvalidNumber(text));
        }
        text.parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(text))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/calc.rs"]
mod tests;
