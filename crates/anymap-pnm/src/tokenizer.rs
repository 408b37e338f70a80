/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whitespace delimited tokens for the textual parts of a PNM stream
//!
//! Headers and plain payloads are sequences of tokens separated by whitespace,
//! where a `#` outside a token starts a comment that runs to the end of the line.
use anymap_core::bytestream::{ByteReader, ByteReaderTrait};

use crate::errors::PnmDecodeErrors;

/// Whitespace as netpbm defines it, which includes vertical tab
#[inline(always)]
pub const fn is_pnm_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Yields tokens from a byte stream
///
/// # Example
/// ```
/// use anymap_core::bytestream::ByteCursor;
/// use anymap_pnm::tokenizer::Tokenizer;
///
/// let mut tokenizer = Tokenizer::new(ByteCursor::new(b"P3 # a comment\n 12"));
///
/// assert_eq!(tokenizer.next_token().unwrap(), b"P3");
/// assert_eq!(tokenizer.next_token().unwrap(), b"12");
/// assert!(tokenizer.next_token().is_err());
/// ```
pub struct Tokenizer<T: ByteReaderTrait> {
    reader: ByteReader<T>,
    token:  Vec<u8>
}

impl<T: ByteReaderTrait> Tokenizer<T> {
    pub fn new(source: T) -> Tokenizer<T> {
        Tokenizer {
            reader: ByteReader::new(source),
            token:  Vec::with_capacity(16)
        }
    }
    /// Return the next token
    ///
    /// Leading whitespace and comments are skipped, the whitespace that ends
    /// the token is left in the stream. A token may be ended by end of stream.
    ///
    /// # Errors
    /// - `UnexpectedEof` if the stream ends before a token starts
    /// - Errors from the underlying reader
    pub fn next_token(&mut self) -> Result<&[u8], PnmDecodeErrors> {
        self.skip_whitespace_and_comments()?;

        self.token.clear();

        while let Some(byte) = self.reader.peek_u8()? {
            if is_pnm_whitespace(byte) {
                break;
            }
            self.token.push(byte);
            self.reader.read_u8()?;
        }
        Ok(&self.token)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), PnmDecodeErrors> {
        loop {
            match self.reader.peek_u8()? {
                None => return Err(PnmDecodeErrors::UnexpectedEof("a token")),
                Some(b'#') => {
                    // comment runs up to and including the line end
                    self.reader.skip_until_false(|x| x != b'\n' && x != b'\r')?;
                    self.reader.read_u8()?;
                }
                Some(byte) if is_pnm_whitespace(byte) => {
                    self.reader.read_u8()?;
                }
                Some(_) => return Ok(())
            }
        }
    }

    /// Consume the single whitespace byte separating a header from
    /// a binary raster
    ///
    /// # Errors
    /// - `MissingSeparator` if the next byte is not whitespace
    /// - `UnexpectedEof` at end of stream
    pub fn skip_separator(&mut self) -> Result<(), PnmDecodeErrors> {
        match self.reader.read_u8()? {
            Some(byte) if is_pnm_whitespace(byte) => Ok(()),
            Some(byte) => Err(PnmDecodeErrors::MissingSeparator(byte)),
            None => Err(PnmDecodeErrors::UnexpectedEof("the raster separator"))
        }
    }

    /// The reader positioned after the last token, for binary payloads
    pub fn reader_mut(&mut self) -> &mut ByteReader<T> {
        &mut self.reader
    }

    /// Destroy the tokenizer returning the underlying source
    pub fn into_inner(self) -> T {
        self.reader.consume()
    }
}

#[cfg(test)]
mod tests {
    use anymap_core::bytestream::ByteCursor;

    use crate::errors::PnmDecodeErrors;
    use crate::tokenizer::Tokenizer;

    fn tokens(data: &[u8]) -> Vec<Vec<u8>> {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(data));
        let mut out = vec![];

        while let Ok(token) = tokenizer.next_token() {
            out.push(token.to_vec());
        }
        out
    }

    #[test]
    fn comment_only_stream_is_an_error() {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(b"  # comment\n  "));
        let err = tokenizer.next_token().unwrap_err();

        assert!(matches!(err, PnmDecodeErrors::UnexpectedEof(_)));
    }

    #[test]
    fn empty_stream_is_an_error() {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(b""));
        assert!(tokenizer.next_token().is_err());
    }

    #[test]
    fn token_may_end_at_eof() {
        assert_eq!(tokens(b"\t\r\n255"), vec![b"255".to_vec()]);
    }

    #[test]
    fn comments_between_and_after_tokens() {
        let found = tokens(b"P2 # note\n#another\r2 1\n# trailing");

        assert_eq!(
            found,
            vec![b"P2".to_vec(), b"2".to_vec(), b"1".to_vec()]
        );
    }

    #[test]
    fn hash_inside_token_is_kept() {
        assert_eq!(tokens(b"ab#cd ef"), vec![b"ab#cd".to_vec(), b"ef".to_vec()]);
    }

    #[test]
    fn vertical_tab_and_form_feed_separate() {
        assert_eq!(tokens(b"1\x0b2\x0c3"), vec![b"1".to_vec(), b"2".to_vec(), b"3".to_vec()]);
    }

    #[test]
    fn delimiter_is_left_in_stream() {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(b"255\n\x00"));

        assert_eq!(tokenizer.next_token().unwrap(), b"255");
        tokenizer.skip_separator().unwrap();
        assert_eq!(tokenizer.reader_mut().read_u8().unwrap(), Some(0));
    }

    #[test]
    fn separator_must_be_whitespace() {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(b"255"));

        tokenizer.next_token().unwrap();
        assert!(matches!(
            tokenizer.skip_separator().unwrap_err(),
            PnmDecodeErrors::UnexpectedEof(_)
        ));

        let mut tokenizer = Tokenizer::new(ByteCursor::new(b"x"));
        assert!(matches!(
            tokenizer.skip_separator().unwrap_err(),
            PnmDecodeErrors::MissingSeparator(b'x')
        ));
    }
}
