/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use anymap_core::buffer::BufferErrors;
use anymap_core::bytestream::ByteIoError;

/// PNM decoding errors
///
/// Every variant describes malformed or unsupported input, the decoder
/// never recovers from any of them and never returns a partial image.
pub enum PnmDecodeErrors {
    /// The first token is not one of `P1`..`P6`
    InvalidMagic(String),
    /// The stream ended where a token was expected,
    /// the payload names what was being read
    UnexpectedEof(&'static str),
    /// A token that should be an unsigned decimal integer isn't,
    /// or it overflows
    ///
    /// (token, field)
    InvalidInteger(String, &'static str),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// Too large dimensions for a given dimension
    ///
    /// (dimension, limit, found)
    TooLargeDimensions(&'static str, usize, usize),
    /// Max value not in `1..=65535`
    InvalidMaxValue(usize),
    /// A plain bitmap token that is neither `0` nor `1`
    InvalidBitmapSample(String),
    /// A sample larger than the declared max value
    ///
    /// (sample, max value)
    SampleOutOfRange(usize, u16),
    /// A raw payload wasn't separated from the header by a single whitespace,
    /// contains the offending byte
    ///
    /// Only [`Tokenizer::skip_separator`](crate::tokenizer::Tokenizer::skip_separator)
    /// raises this when called directly. Header tokens always end at whitespace
    /// or at end of stream, so [`PnmDecoder::decode`](crate::PnmDecoder::decode)
    /// reports a missing raster as `UnexpectedEof` instead.
    MissingSeparator(u8),
    /// A plain payload ran out of samples
    ///
    /// (expected samples, found samples)
    MissingSamples(usize, usize),
    /// A raw payload is shorter than the raster
    ///
    /// (expected bytes, found bytes)
    TruncatedPayload(usize, usize),
    /// The pixel buffer refused a write or an allocation
    BufferErrors(BufferErrors),
    /// Errors from the underlying reader
    IoErrors(ByteIoError),
    /// Generic message
    Generic(&'static str)
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PnmDecodeErrors::InvalidMagic(magic) => {
                writeln!(f, "Invalid magic `{magic}`, expected one of P1, P2, P3, P4, P5, P6")
            }
            PnmDecodeErrors::UnexpectedEof(what) => {
                writeln!(f, "Unexpected end of stream while reading {what}")
            }
            PnmDecodeErrors::InvalidInteger(token, field) => {
                writeln!(f, "Could not parse {field} `{token}` as an unsigned integer")
            }
            PnmDecodeErrors::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions must be non-zero, found {width}x{height}")
            }
            PnmDecodeErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            PnmDecodeErrors::InvalidMaxValue(value) => {
                writeln!(f, "Max value {value} is outside the range 1..=65535")
            }
            PnmDecodeErrors::InvalidBitmapSample(token) => {
                writeln!(f, "Bitmap sample `{token}` is neither 0 nor 1")
            }
            PnmDecodeErrors::SampleOutOfRange(sample, max_value) => {
                writeln!(f, "Sample {sample} is greater than the max value {max_value}")
            }
            PnmDecodeErrors::MissingSeparator(byte) => {
                writeln!(
                    f,
                    "Expected a single whitespace before the raster but found byte {byte:#04x}"
                )
            }
            PnmDecodeErrors::MissingSamples(expected, found) => {
                writeln!(f, "Expected {expected} samples but the stream ended after {found}")
            }
            PnmDecodeErrors::TruncatedPayload(expected, found) => {
                writeln!(f, "Expected {expected} bytes of raster but found {found}")
            }
            PnmDecodeErrors::BufferErrors(err) => {
                writeln!(f, "{err:?}")
            }
            PnmDecodeErrors::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
            PnmDecodeErrors::Generic(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PnmDecodeErrors {}

impl From<ByteIoError> for PnmDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        PnmDecodeErrors::IoErrors(value)
    }
}

impl From<BufferErrors> for PnmDecodeErrors {
    fn from(value: BufferErrors) -> Self {
        PnmDecodeErrors::BufferErrors(value)
    }
}

impl From<&'static str> for PnmDecodeErrors {
    fn from(value: &'static str) -> Self {
        PnmDecodeErrors::Generic(value)
    }
}

/// PNM encoding errors
pub enum PnmEncodeErrors {
    /// The input was expected to be of a certain size but isn't
    ///
    /// (expected, found)
    WrongInputSize(usize, usize),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// Errors from the sink
    IoErrors(std::io::Error)
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PnmEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            PnmEncodeErrors::ZeroDimensions(width, height) => {
                writeln!(f, "Cannot encode an image of {width}x{height}")
            }
            PnmEncodeErrors::IoErrors(err) => writeln!(f, "I/O error {err}")
        }
    }
}

impl Display for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PnmEncodeErrors {}

impl From<std::io::Error> for PnmEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        PnmEncodeErrors::IoErrors(value)
    }
}
