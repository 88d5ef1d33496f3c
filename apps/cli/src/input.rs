//! # Token Input
//!
//! Whitespace-delimited token reading over any buffered reader.
//!
//! The console reads its input `cin >>`-style: tokens separated by any
//! whitespace, possibly several per line. Buffering a line at a time and
//! handing out tokens one by one gives exactly those semantics while staying
//! testable with an in-memory `Cursor`.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A whitespace-delimited token stream over a buffered reader.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next whitespace-delimited token.
    ///
    /// Reads as many lines as needed to find one. `Ok(None)` means the
    /// input is exhausted (EOF), which the caller treats as a quit request.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> TokenReader<Cursor<&str>> {
        TokenReader::new(Cursor::new(input))
    }

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let mut tokens = reader("1 ABC123\n\t2  y\n");

        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("ABC123"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("y"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut tokens = reader("\n\n  \n4\n");
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("4"));
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn test_empty_input_is_eof() {
        let mut tokens = reader("");
        assert_eq!(tokens.next_token().unwrap(), None);
    }
}
