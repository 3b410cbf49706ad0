use crate::error::{Error, Result};
use crate::image::Pixel;
use std::str::FromStr;

/// Cursor over whitespace-separated ASCII tokens.
pub(crate) struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn skip_whitespace(&mut self) {
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Next maximal run of non-whitespace bytes.
    pub fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace();
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let data = self.data;
        let end = self.pos;
        (end > start).then(|| &data[start..end])
    }

    /// Next token parsed as `T`, or `None` at end of input / on garbage.
    pub fn value<T: FromStr>(&mut self) -> Option<T> {
        let tok = self.token()?;
        std::str::from_utf8(tok).ok()?.parse().ok()
    }

    /// Header field: like [`Scanner::value`] but missing data is an error.
    pub fn field<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        self.value().ok_or(Error::MalformedHeader { field })
    }

    pub fn triple(&mut self) -> Option<Pixel> {
        Some(Pixel::new(self.value()?, self.value()?, self.value()?))
    }

    pub fn next_byte(&mut self) -> Option<u8> {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    pub fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Unsigned decimal integer after optional whitespace; stops at the first
    /// non-digit byte.
    pub fn unsigned(&mut self) -> Option<usize> {
        self.skip_whitespace();
        let start = self.pos;
        let mut value: usize = 0;
        while let Some(b) = self.peek_byte().filter(u8::is_ascii_digit) {
            value = value.checked_mul(10)?.checked_add(usize::from(b - b'0'))?;
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }
}
