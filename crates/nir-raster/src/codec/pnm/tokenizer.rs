//! Header tokenizer for binary PNM containers.
//!
//! Tokens are separated by whitespace (space, tab, CR, LF). A `#` starts a
//! comment that runs to the end of the line. Lookahead comes from the
//! underlying `BufRead`, so nothing is ever pushed back: a byte that ends a
//! token stays in the stream until someone consumes it.

use std::io::{self, BufRead};

use crate::codec::error::{DecodeError, FormatError};

/// Longest header token accepted.
const MAX_TOKEN_LEN: usize = 63;

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

pub(crate) struct HeaderTokenizer<R> {
    reader: R,
}

impl<R: BufRead> HeaderTokenizer<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { reader }
    }

    pub(crate) fn into_inner(self) -> R {
        self.reader
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn bump(&mut self) {
        self.reader.consume(1);
    }

    /// Skip to just past the next LF (or to end of stream).
    fn skip_comment(&mut self) -> io::Result<()> {
        while let Some(b) = self.peek()? {
            self.bump();
            if b == b'\n' {
                break;
            }
        }
        Ok(())
    }

    /// Read the next token for header field `field`.
    ///
    /// Leading whitespace and comments are skipped. The byte that ends the
    /// token (whitespace or `#`) is left unconsumed.
    pub(crate) fn next_token(&mut self, field: &'static str) -> Result<Vec<u8>, DecodeError> {
        loop {
            match self.peek()? {
                None => return Err(FormatError::MissingToken { field }.into()),
                Some(b'#') => self.skip_comment()?,
                Some(b) if is_whitespace(b) => self.bump(),
                Some(_) => break,
            }
        }

        let mut token = Vec::new();
        while let Some(b) = self.peek()? {
            if is_whitespace(b) || b == b'#' {
                break;
            }
            if token.len() == MAX_TOKEN_LEN {
                return Err(FormatError::TokenTooLong { field }.into());
            }
            token.push(b);
            self.bump();
        }
        Ok(token)
    }

    /// Consume the single whitespace byte separating the header from the
    /// raster. CR LF counts as one separator. Anything else is left alone.
    pub(crate) fn consume_separator(&mut self) -> io::Result<()> {
        match self.peek()? {
            Some(b'\r') => {
                self.bump();
                if self.peek()? == Some(b'\n') {
                    self.bump();
                }
            }
            Some(b) if is_whitespace(b) => self.bump(),
            _ => {}
        }
        Ok(())
    }
}
