/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image decoding, processing and encoding
use std::fmt::{Debug, Display, Formatter};

use anymap_core::buffer::BufferErrors;
use anymap_pnm::{PnmDecodeErrors, PnmEncodeErrors};

/// Broad classes of failures
///
/// Every [`ImageErrors`] belongs to exactly one of these,
/// see [`ImageErrors::kind`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The stream isn't a valid Portable Any-Map
    MalformedFormat,
    /// A pixel index or coordinate outside the image
    OutOfRange,
    /// An operation was given unusable parameters
    InvalidArgument,
    /// Reading or writing failed
    Io
}

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    PnmDecodeErrors(PnmDecodeErrors),
    PnmEncodeErrors(PnmEncodeErrors),
    BufferErrors(BufferErrors),
    /// Dimensions of a replacement buffer don't match the image
    ///
    /// (expected, found)
    DimensionsMisMatch((usize, usize), (usize, usize)),
    InvalidArgument(String),
    IoErrors(std::io::Error)
}

impl ImageErrors {
    /// Return the class this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImageErrors::PnmDecodeErrors(PnmDecodeErrors::BufferErrors(err))
            | ImageErrors::BufferErrors(err)
                if err.is_out_of_range() =>
            {
                ErrorKind::OutOfRange
            }
            ImageErrors::PnmDecodeErrors(_) => ErrorKind::MalformedFormat,
            ImageErrors::BufferErrors(_)
            | ImageErrors::DimensionsMisMatch(..)
            | ImageErrors::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ImageErrors::PnmEncodeErrors(PnmEncodeErrors::IoErrors(_)) | ImageErrors::IoErrors(_) => {
                ErrorKind::Io
            }
            ImageErrors::PnmEncodeErrors(_) => ErrorKind::InvalidArgument
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PnmDecodeErrors(err) => writeln!(f, "Pnm decoding failed: {err:?}"),
            Self::PnmEncodeErrors(err) => writeln!(f, "Pnm encoding failed: {err:?}"),
            Self::BufferErrors(err) => writeln!(f, "{err:?}"),
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidArgument(err) => writeln!(f, "Invalid argument: {err}"),
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl From<PnmDecodeErrors> for ImageErrors {
    fn from(from: PnmDecodeErrors) -> Self {
        ImageErrors::PnmDecodeErrors(from)
    }
}

impl From<PnmEncodeErrors> for ImageErrors {
    fn from(from: PnmEncodeErrors) -> Self {
        ImageErrors::PnmEncodeErrors(from)
    }
}

impl From<BufferErrors> for ImageErrors {
    fn from(from: BufferErrors) -> Self {
        ImageErrors::BufferErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

#[cfg(test)]
mod tests {
    use anymap_core::buffer::BufferErrors;
    use anymap_pnm::PnmDecodeErrors;

    use crate::errors::{ErrorKind, ImageErrors};

    #[test]
    fn kinds() {
        let err = ImageErrors::from(PnmDecodeErrors::InvalidMagic("P9".to_string()));
        assert_eq!(err.kind(), ErrorKind::MalformedFormat);

        let err = ImageErrors::from(BufferErrors::IndexOutOfRange(6, 6));
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        let err = ImageErrors::from(BufferErrors::WrongLength(6, 5));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = ImageErrors::InvalidArgument("even kernel".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
