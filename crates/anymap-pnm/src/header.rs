/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

use anymap_core::bytestream::ByteReaderTrait;
use anymap_core::log::{info, trace};
use anymap_core::options::DecoderOptions;

use crate::errors::PnmDecodeErrors;
use crate::tokenizer::Tokenizer;

/// The six PNM variants
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PnmVariant {
    /// `P1`
    PlainBitmap,
    /// `P2`
    PlainGraymap,
    /// `P3`
    PlainPixmap,
    /// `P4`
    RawBitmap,
    /// `P5`
    RawGraymap,
    /// `P6`
    RawPixmap
}

impl PnmVariant {
    /// Match a magic token, case-sensitive
    pub fn from_magic(magic: &[u8]) -> Option<PnmVariant> {
        match magic {
            b"P1" => Some(PnmVariant::PlainBitmap),
            b"P2" => Some(PnmVariant::PlainGraymap),
            b"P3" => Some(PnmVariant::PlainPixmap),
            b"P4" => Some(PnmVariant::RawBitmap),
            b"P5" => Some(PnmVariant::RawGraymap),
            b"P6" => Some(PnmVariant::RawPixmap),
            _ => None
        }
    }
    pub const fn magic(self) -> &'static str {
        match self {
            PnmVariant::PlainBitmap => "P1",
            PnmVariant::PlainGraymap => "P2",
            PnmVariant::PlainPixmap => "P3",
            PnmVariant::RawBitmap => "P4",
            PnmVariant::RawGraymap => "P5",
            PnmVariant::RawPixmap => "P6"
        }
    }
    /// Binary payload
    pub const fn is_raw(self) -> bool {
        matches!(
            self,
            PnmVariant::RawBitmap | PnmVariant::RawGraymap | PnmVariant::RawPixmap
        )
    }
    pub const fn is_bitmap(self) -> bool {
        matches!(self, PnmVariant::PlainBitmap | PnmVariant::RawBitmap)
    }
    /// Bitmaps have an implicit max value of 1 and no header field for it
    pub const fn has_max_value(self) -> bool {
        !self.is_bitmap()
    }
    /// Samples stored per pixel, 3 for pixmaps and 1 otherwise
    pub const fn samples_per_pixel(self) -> usize {
        match self {
            PnmVariant::PlainPixmap | PnmVariant::RawPixmap => 3,
            _ => 1
        }
    }
}

impl Display for PnmVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            PnmVariant::PlainBitmap => "plain bitmap",
            PnmVariant::PlainGraymap => "plain graymap",
            PnmVariant::PlainPixmap => "plain pixmap",
            PnmVariant::RawBitmap => "raw bitmap",
            PnmVariant::RawGraymap => "raw graymap",
            PnmVariant::RawPixmap => "raw pixmap"
        };
        write!(f, "{} ({name})", self.magic())
    }
}

/// A parsed PNM header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PnmHeader {
    pub variant:   PnmVariant,
    pub width:     usize,
    pub height:    usize,
    /// 1 for bitmaps
    pub max_value: u16
}

impl PnmHeader {
    /// Bytes used by one sample of a raw graymap or pixmap
    pub const fn bytes_per_sample(&self) -> usize {
        if self.max_value > 255 {
            2
        } else {
            1
        }
    }
    /// Bytes in one row of a raw raster, rows of bitmaps are padded to a byte
    pub const fn raw_row_size(&self) -> usize {
        if self.variant.is_bitmap() {
            self.width.div_ceil(8)
        } else {
            self.width * self.variant.samples_per_pixel() * self.bytes_per_sample()
        }
    }
}

/// Parse an unsigned decimal token, digits only
///
/// Signs, including a leading `+`, are rejected as is anything that overflows
/// a usize.
///
/// # Errors
/// `InvalidInteger` naming `field`
pub fn parse_integer(token: &[u8], field: &'static str) -> Result<usize, PnmDecodeErrors> {
    let invalid = || PnmDecodeErrors::InvalidInteger(String::from_utf8_lossy(token).into(), field);

    if token.is_empty() {
        return Err(invalid());
    }
    token.iter().try_fold(0_usize, |value, byte| {
        if !byte.is_ascii_digit() {
            return Err(invalid());
        }
        value
            .checked_mul(10)
            .and_then(|x| x.checked_add(usize::from(byte - b'0')))
            .ok_or_else(invalid)
    })
}

/// Read the magic, dimensions and max value
///
/// The tokenizer is left right after the last header token, the single
/// whitespace separating a raw raster has not been consumed.
///
/// # Errors
/// Any malformed token, zero dimensions, dimensions above the limits in
/// `options` or a max value outside `1..=65535`
pub fn parse_header<T: ByteReaderTrait>(
    tokenizer: &mut Tokenizer<T>, options: &DecoderOptions
) -> Result<PnmHeader, PnmDecodeErrors> {
    let magic = tokenizer.next_token()?;

    let variant = PnmVariant::from_magic(magic).ok_or_else(|| {
        PnmDecodeErrors::InvalidMagic(String::from_utf8_lossy(magic).into())
    })?;

    trace!("Magic: {}", variant);

    let width = parse_integer(tokenizer.next_token()?, "width")?;
    let height = parse_integer(tokenizer.next_token()?, "height")?;

    if width == 0 || height == 0 {
        return Err(PnmDecodeErrors::ZeroDimensions(width, height));
    }
    if width > options.max_width() {
        return Err(PnmDecodeErrors::TooLargeDimensions(
            "width",
            options.max_width(),
            width
        ));
    }
    if height > options.max_height() {
        return Err(PnmDecodeErrors::TooLargeDimensions(
            "height",
            options.max_height(),
            height
        ));
    }

    let max_value = if variant.has_max_value() {
        let value = parse_integer(tokenizer.next_token()?, "max value")?;

        match u16::try_from(value) {
            Ok(max) if max != 0 => max,
            _ => return Err(PnmDecodeErrors::InvalidMaxValue(value))
        }
    } else {
        1
    };

    info!("Variant: {}", variant);
    info!("Width: {}, height: {}", width, height);
    info!("Max value: {}", max_value);

    Ok(PnmHeader {
        variant,
        width,
        height,
        max_value
    })
}

#[cfg(test)]
mod tests {
    use anymap_core::bytestream::ByteCursor;
    use anymap_core::options::DecoderOptions;

    use crate::errors::PnmDecodeErrors;
    use crate::header::{parse_header, parse_integer, PnmHeader, PnmVariant};
    use crate::tokenizer::Tokenizer;

    fn header(data: &[u8]) -> Result<PnmHeader, PnmDecodeErrors> {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(data));
        parse_header(&mut tokenizer, &DecoderOptions::default())
    }

    #[test]
    fn commented_graymap_header() {
        let found = header(b"P2 # note\n2 1\n255\n0 255").unwrap();

        assert_eq!(
            found,
            PnmHeader {
                variant:   PnmVariant::PlainGraymap,
                width:     2,
                height:    1,
                max_value: 255
            }
        );
    }

    #[test]
    fn bitmap_has_no_max_value_token() {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(b"P1 3 2 1 0 1"));
        let found = parse_header(&mut tokenizer, &DecoderOptions::default()).unwrap();

        assert_eq!(found.max_value, 1);
        // the first sample is still in the stream
        assert_eq!(tokenizer.next_token().unwrap(), b"1");
    }

    #[test]
    fn unknown_and_lowercase_magic() {
        for magic in [&b"P9 1 1 255"[..], b"p6 1 1 255", b"P 1 1", b"P61 1 1 255"] {
            assert!(matches!(
                header(magic).unwrap_err(),
                PnmDecodeErrors::InvalidMagic(_)
            ));
        }
    }

    #[test]
    fn max_value_bounds() {
        assert!(matches!(
            header(b"P5 1 1 0").unwrap_err(),
            PnmDecodeErrors::InvalidMaxValue(0)
        ));
        assert!(matches!(
            header(b"P5 1 1 65536").unwrap_err(),
            PnmDecodeErrors::InvalidMaxValue(65536)
        ));
        assert_eq!(header(b"P6 1 1 65535").unwrap().max_value, 65535);
        assert_eq!(header(b"P6 1 1 65535").unwrap().bytes_per_sample(), 2);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            header(b"P3 0 4 255").unwrap_err(),
            PnmDecodeErrors::ZeroDimensions(0, 4)
        ));
    }

    #[test]
    fn dimension_limits() {
        let mut tokenizer = Tokenizer::new(ByteCursor::new(b"P6 20 10 255"));
        let options = DecoderOptions::default().set_max_width(16);

        assert!(matches!(
            parse_header(&mut tokenizer, &options).unwrap_err(),
            PnmDecodeErrors::TooLargeDimensions("width", 16, 20)
        ));
    }

    #[test]
    fn integers_are_plain_digits() {
        assert_eq!(parse_integer(b"0042", "width").unwrap(), 42);

        for bad in [&b"+4"[..], b"-4", b"4a", b"0x10", b"99999999999999999999999999"] {
            assert!(parse_integer(bad, "width").is_err());
        }
    }

    #[test]
    fn raw_row_sizes() {
        let mut found = header(b"P4 9 2").unwrap();
        assert_eq!(found.raw_row_size(), 2);

        found = header(b"P6 4 1 1000").unwrap();
        assert_eq!(found.raw_row_size(), 4 * 3 * 2);
    }
}
