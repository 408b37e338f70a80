/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use anymap_core::buffer::PixelBuffer;
use anymap_core::bytestream::ByteReaderTrait;
use anymap_core::log::{info, trace};
use anymap_core::options::DecoderOptions;

use crate::errors::PnmDecodeErrors;
use crate::header::{parse_header, parse_integer, PnmHeader, PnmVariant};
use crate::tokenizer::Tokenizer;

const WHITE: u8 = 255;
const BLACK: u8 = 0;

/// An instance of a PNM decoder
///
/// The decoder can decode P1 to P6, producing an 8 bit RGB buffer.
///
/// # Example
/// ```
/// use anymap_core::bytestream::ByteCursor;
/// use anymap_pnm::{PnmDecoder, PnmVariant};
///
/// let mut decoder = PnmDecoder::new(ByteCursor::new(b"P1 2 1 1 0"));
///
/// decoder.decode_headers().unwrap();
/// assert_eq!(decoder.variant(), Some(PnmVariant::PlainBitmap));
///
/// let pixels = decoder.decode().unwrap();
/// assert_eq!(pixels.as_slice(), &[0, 0, 0, 255, 255, 255]);
/// ```
pub struct PnmDecoder<T: ByteReaderTrait> {
    tokenizer: Tokenizer<T>,
    header:    Option<PnmHeader>,
    options:   DecoderOptions
}

impl<T: ByteReaderTrait> PnmDecoder<T> {
    /// Create a new pnm decoder with default options
    ///
    /// # Example
    /// ```
    /// use anymap_core::bytestream::ByteCursor;
    /// use anymap_pnm::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(ByteCursor::new(b"NOT VALID PNM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(source: T) -> PnmDecoder<T> {
        PnmDecoder::new_with_options(source, DecoderOptions::default())
    }
    /// Create a new pnm decoder with the specified options
    pub fn new_with_options(source: T, options: DecoderOptions) -> PnmDecoder<T> {
        PnmDecoder {
            tokenizer: Tokenizer::new(source),
            header: None,
            options
        }
    }
    /// Read the header and store it in internal state
    ///
    /// Calling it again after a successful call does nothing.
    ///
    /// # Errors
    /// Malformed or out of range header fields
    pub fn decode_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        trace!("Reading headers from {}", self.tokenizer.reader_mut().name());

        let header = parse_header(&mut self.tokenizer, &self.options)?;

        self.header = Some(header);
        Ok(())
    }
    /// The parsed header or none if headers aren't decoded
    pub const fn header(&self) -> Option<&PnmHeader> {
        self.header.as_ref()
    }
    /// Return image dimensions or none if headers aren't decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header.map(|x| (x.width, x.height))
    }
    /// Return the variant or none if headers aren't decoded
    pub fn variant(&self) -> Option<PnmVariant> {
        self.header.map(|x| x.variant)
    }
    /// Return the declared max sample value, 1 for bitmaps
    pub fn max_value(&self) -> Option<u16> {
        self.header.map(|x| x.max_value)
    }
    /// Size of the RGB buffer `decode` returns
    pub fn output_buffer_size(&self) -> Option<usize> {
        self.header
            .and_then(|x| x.width.checked_mul(x.height))
            .and_then(|x| x.checked_mul(3))
    }
    /// Destroy the decoder returning the source, positioned after
    /// whatever was consumed
    pub fn into_inner(self) -> T {
        self.tokenizer.into_inner()
    }

    /// Decode a pnm stream returning its pixels as RGB
    ///
    /// Either the whole raster is decoded or an error is returned,
    /// bytes following the raster are not read.
    ///
    /// # Errors
    /// Anything malformed in the header or payload
    pub fn decode(&mut self) -> Result<PixelBuffer, PnmDecodeErrors> {
        self.decode_headers()?;

        let header = self
            .header
            .ok_or(PnmDecodeErrors::Generic("Headers not decoded"))?;

        let mut pixels = PixelBuffer::new(header.width, header.height)?;

        trace!("Decoding {} raster", header.variant);

        match header.variant {
            PnmVariant::PlainBitmap => self.decode_plain_bitmap(&mut pixels)?,
            PnmVariant::PlainGraymap | PnmVariant::PlainPixmap => {
                self.decode_plain_samples(&header, &mut pixels)?;
            }
            PnmVariant::RawBitmap => {
                self.tokenizer.skip_separator()?;
                self.decode_raw_bitmap(&header, &mut pixels)?;
            }
            PnmVariant::RawGraymap | PnmVariant::RawPixmap => {
                self.tokenizer.skip_separator()?;
                self.decode_raw_samples(&header, &mut pixels)?;
            }
        }
        info!("Finished decoding {}x{} image", header.width, header.height);

        Ok(pixels)
    }

    fn next_sample_token(&mut self, expected: usize, found: usize) -> Result<&[u8], PnmDecodeErrors> {
        match self.tokenizer.next_token() {
            Err(PnmDecodeErrors::UnexpectedEof(_)) => {
                Err(PnmDecodeErrors::MissingSamples(expected, found))
            }
            other => other
        }
    }

    fn decode_plain_bitmap(&mut self, pixels: &mut PixelBuffer) -> Result<(), PnmDecodeErrors> {
        let total = pixels.num_pixels();

        for index in 0..total {
            let value = match self.next_sample_token(total, index)? {
                b"0" => WHITE,
                b"1" => BLACK,
                token => {
                    return Err(PnmDecodeErrors::InvalidBitmapSample(
                        String::from_utf8_lossy(token).into()
                    ))
                }
            };
            pixels.set_pixel(index, value, value, value)?;
        }
        Ok(())
    }

    fn decode_plain_samples(
        &mut self, header: &PnmHeader, pixels: &mut PixelBuffer
    ) -> Result<(), PnmDecodeErrors> {
        let scale = SampleScale::new(header.max_value, self.options.strict_mode());
        let components = header.variant.samples_per_pixel();
        let total = pixels.num_pixels() * components;

        let mut rgb = [0_u8; 3];

        for index in 0..pixels.num_pixels() {
            for (c, out) in rgb.iter_mut().take(components).enumerate() {
                let token = self.next_sample_token(total, index * components + c)?;
                let value = parse_integer(token, "sample")?;

                *out = scale.scale(value)?;
            }
            if components == 1 {
                rgb = [rgb[0]; 3];
            }
            pixels.set_pixel(index, rgb[0], rgb[1], rgb[2])?;
        }
        Ok(())
    }

    /// Read one raster row, a short read is reported against the whole raster
    fn read_raw_row(
        &mut self, header: &PnmHeader, row: &mut [u8], y: usize
    ) -> Result<(), PnmDecodeErrors> {
        let read = self.tokenizer.reader_mut().read_fully(row)?;

        if read != row.len() {
            let expected = header.raw_row_size() * header.height;
            let found = row.len() * y + read;

            return Err(PnmDecodeErrors::TruncatedPayload(expected, found));
        }
        Ok(())
    }

    fn decode_raw_bitmap(
        &mut self, header: &PnmHeader, pixels: &mut PixelBuffer
    ) -> Result<(), PnmDecodeErrors> {
        let mut row = vec![0_u8; header.raw_row_size()];

        for y in 0..header.height {
            self.read_raw_row(header, &mut row, y)?;

            for x in 0..header.width {
                // msb first, padding bits at the end of a row are ignored
                let bit = (row[x >> 3] >> (7 - (x & 7))) & 1;
                let value = if bit == 1 { BLACK } else { WHITE };

                pixels.set_pixel_at(x, y, value, value, value)?;
            }
        }
        Ok(())
    }

    fn decode_raw_samples(
        &mut self, header: &PnmHeader, pixels: &mut PixelBuffer
    ) -> Result<(), PnmDecodeErrors> {
        let scale = SampleScale::new(header.max_value, self.options.strict_mode());
        let components = header.variant.samples_per_pixel();
        let sample_size = header.bytes_per_sample();

        let mut row = vec![0_u8; header.raw_row_size()];
        let mut rgb = [0_u8; 3];

        for y in 0..header.height {
            self.read_raw_row(header, &mut row, y)?;

            for (x, pixel) in row.chunks_exact(components * sample_size).enumerate() {
                for (out, sample) in rgb.iter_mut().zip(pixel.chunks_exact(sample_size)) {
                    // 16 bit samples are big endian
                    let value = match sample {
                        [hi, lo] => usize::from(u16::from_be_bytes([*hi, *lo])),
                        _ => usize::from(sample[0])
                    };
                    *out = scale.scale(value)?;
                }
                if components == 1 {
                    rgb = [rgb[0]; 3];
                }
                pixels.set_pixel_at(x, y, rgb[0], rgb[1], rgb[2])?;
            }
        }
        Ok(())
    }
}

/// Maps samples in `[0, max_value]` to `[0, 255]`
///
/// `round(value * 255 / max_value)`, precomputed for every valid sample.
struct SampleScale {
    table:  Vec<u8>,
    strict: bool
}

impl SampleScale {
    fn new(max_value: u16, strict: bool) -> SampleScale {
        let max = u32::from(max_value);

        let table = (0..=max)
            .map(|value| {
                // round half up, value <= max keeps this within a u8
                let scaled = (2 * value * 255 + max) / (2 * max);
                u8::try_from(scaled).unwrap_or(u8::MAX)
            })
            .collect();

        SampleScale { table, strict }
    }

    #[inline(always)]
    fn scale(&self, value: usize) -> Result<u8, PnmDecodeErrors> {
        match self.table.get(value) {
            Some(scaled) => Ok(*scaled),
            None if self.strict => Err(PnmDecodeErrors::SampleOutOfRange(
                value,
                u16::try_from(self.table.len() - 1).unwrap_or(u16::MAX)
            )),
            None => Ok(u8::MAX)
        }
    }
}
