/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use anymap_core::buffer::{PixelBuffer, RGB_COMPONENTS};
use anymap_core::log::trace;

use crate::errors::PnmEncodeErrors;
use crate::header::PnmVariant;

/// Plain payload lines are kept at or below this many characters
const MAX_LINE_LENGTH: usize = 70;

/// A PNM encoder
///
/// Writes any of the six variants at a max value of 255, pixmaps keep the
/// RGB samples, graymaps store luma and bitmaps store luma thresholded at 128.
///
/// # Example
/// ```
/// use anymap_core::buffer::PixelBuffer;
/// use anymap_pnm::{PnmEncoder, PnmVariant};
///
/// let pixels = PixelBuffer::fill(2, 1, [255, 255, 255]).unwrap();
/// let mut sink = vec![];
///
/// PnmEncoder::new(&pixels, PnmVariant::PlainGraymap).encode(&mut sink).unwrap();
/// assert_eq!(sink, b"P2\n2 1\n255\n255 255\n");
/// ```
pub struct PnmEncoder<'a> {
    pixels:  &'a PixelBuffer,
    variant: PnmVariant
}

impl<'a> PnmEncoder<'a> {
    pub fn new(pixels: &'a PixelBuffer, variant: PnmVariant) -> PnmEncoder<'a> {
        PnmEncoder { pixels, variant }
    }

    fn encode_headers(&self, out: &mut Vec<u8>) {
        let (width, height) = self.pixels.dimensions();
        let magic = self.variant.magic();

        let header = if self.variant.has_max_value() {
            format!("{magic}\n{width} {height}\n255\n")
        } else {
            format!("{magic}\n{width} {height}\n")
        };
        out.extend_from_slice(header.as_bytes());
    }

    /// Encode the image into `sink`, returning the number of bytes written
    ///
    /// # Errors
    /// Inconsistent buffers and I/O errors from the sink
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<usize, PnmEncodeErrors> {
        let (width, height) = self.pixels.dimensions();

        if width == 0 || height == 0 {
            return Err(PnmEncodeErrors::ZeroDimensions(width, height));
        }
        let expected = width * height * RGB_COMPONENTS;
        let found = self.pixels.as_slice().len();

        if expected != found {
            return Err(PnmEncodeErrors::WrongInputSize(expected, found));
        }
        trace!("Encoding {width}x{height} image as {}", self.variant);

        let mut out = Vec::with_capacity(found + 32);

        self.encode_headers(&mut out);

        let data = self.pixels.as_slice();

        match self.variant {
            PnmVariant::PlainBitmap => {
                write_plain_samples(data.chunks_exact(RGB_COMPONENTS).map(bitmap_bit), &mut out);
            }
            PnmVariant::PlainGraymap => {
                write_plain_samples(data.chunks_exact(RGB_COMPONENTS).map(luma), &mut out);
            }
            PnmVariant::PlainPixmap => write_plain_samples(data.iter().copied(), &mut out),
            PnmVariant::RawBitmap => {
                for row in data.chunks_exact(width * RGB_COMPONENTS) {
                    let mut packed = vec![0_u8; width.div_ceil(8)];

                    for (x, pixel) in row.chunks_exact(RGB_COMPONENTS).enumerate() {
                        packed[x >> 3] |= bitmap_bit(pixel) << (7 - (x & 7));
                    }
                    out.extend_from_slice(&packed);
                }
            }
            PnmVariant::RawGraymap => out.extend(data.chunks_exact(RGB_COMPONENTS).map(luma)),
            PnmVariant::RawPixmap => out.extend_from_slice(data)
        }

        sink.write_all(&out)?;

        Ok(out.len())
    }
}

/// BT.601 luma rounded to the nearest integer
#[inline]
fn luma(pixel: &[u8]) -> u8 {
    let r = u32::from(pixel[0]);
    let g = u32::from(pixel[1]);
    let b = u32::from(pixel[2]);

    let value = (299 * r + 587 * g + 114 * b + 500) / 1000;

    u8::try_from(value).unwrap_or(u8::MAX)
}

/// 1 is black
#[inline]
fn bitmap_bit(pixel: &[u8]) -> u8 {
    u8::from(luma(pixel) < 128)
}

fn write_plain_samples<I: Iterator<Item = u8>>(samples: I, out: &mut Vec<u8>) {
    let mut line_length = 0;

    for sample in samples {
        let text = sample.to_string();

        if line_length != 0 {
            if line_length + 1 + text.len() > MAX_LINE_LENGTH {
                out.push(b'\n');
                line_length = 0;
            } else {
                out.push(b' ');
                line_length += 1;
            }
        }
        out.extend_from_slice(text.as_bytes());
        line_length += text.len();
    }
    out.push(b'\n');
}
