/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main image representation
//!
//! An image is an RGB [`PixelBuffer`] plus [`ImageMetadata`],
//! the buffer always holds `width*height*3` bytes.
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anymap_core::buffer::PixelBuffer;
use anymap_core::bytestream::ByteReaderTrait;
use anymap_core::log::info;
use anymap_core::options::DecoderOptions;
use anymap_pnm::{PnmDecoder, PnmEncoder, PnmVariant};

use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// Represents a single image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    pixels:   PixelBuffer,
    metadata: ImageMetadata
}

impl Image {
    /// Decode a Portable Any-Map from `source`
    ///
    /// # Errors
    /// Any decoding error, no image is produced for a partial raster
    pub fn read<T: ByteReaderTrait>(source: T, options: DecoderOptions) -> Result<Image, ImageErrors> {
        let mut decoder = PnmDecoder::new_with_options(source, options);
        decoder.decode_headers()?;

        let metadata = decoder
            .header()
            .map(ImageMetadata::from_header)
            .ok_or(anymap_pnm::PnmDecodeErrors::Generic("Headers not decoded"))?;

        let pixels = decoder.decode()?;

        Ok(Image { pixels, metadata })
    }
    /// Open and decode a file with default options
    ///
    /// # Errors
    /// If the file can't be opened or decoding fails
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
        Image::open_with_options(path, DecoderOptions::default())
    }
    /// Open and decode a file
    ///
    /// # Errors
    /// If the file can't be opened or decoding fails
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<Image, ImageErrors> {
        let path = path.as_ref();
        info!("Opening {}", path.display());

        let file = BufReader::new(File::open(path)?);

        Image::read(file, options)
    }
    /// Create an image from existing pixels
    pub fn from_pixels(pixels: PixelBuffer) -> Image {
        let (width, height) = pixels.dimensions();

        Image {
            pixels,
            metadata: ImageMetadata::new(width, height)
        }
    }
    /// Create an image with every pixel set to `rgb`
    ///
    /// # Errors
    /// Zero or overflowing dimensions
    pub fn fill(width: usize, height: usize, rgb: [u8; 3]) -> Result<Image, ImageErrors> {
        Ok(Image::from_pixels(PixelBuffer::fill(width, height, rgb)?))
    }
    /// Create an image from a function called for every `(x, y)`, row by row
    ///
    /// # Example
    /// ```
    /// use anymap_image::image::Image;
    ///
    /// let image = Image::from_fn(4, 2, |x, y| [x as u8, y as u8, 0]).unwrap();
    /// assert_eq!(image.get_pixel_at(3, 1).unwrap(), [3, 1, 0]);
    /// ```
    ///
    /// # Errors
    /// Zero or overflowing dimensions
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize) -> [u8; 3]
    {
        let mut pixels = PixelBuffer::new(width, height)?;

        for y in 0..height {
            for x in 0..width {
                let [r, g, b] = func(x, y);
                pixels.set_pixel_at(x, y, r, g, b)?;
            }
        }
        Ok(Image::from_pixels(pixels))
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        self.pixels.dimensions()
    }
    pub const fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
    /// Interleaved RGB bytes, row-major from the upper-left
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_slice()
    }
    pub const fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }
    /// Destroy the image returning its pixels
    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    /// # Errors
    /// If `index >= width*height`
    pub fn set_pixel(&mut self, index: usize, rgb: [u8; 3]) -> Result<(), ImageErrors> {
        Ok(self.pixels.set_pixel(index, rgb[0], rgb[1], rgb[2])?)
    }
    /// # Errors
    /// If `x >= width` or `y >= height`
    pub fn set_pixel_at(&mut self, x: usize, y: usize, rgb: [u8; 3]) -> Result<(), ImageErrors> {
        Ok(self.pixels.set_pixel_at(x, y, rgb[0], rgb[1], rgb[2])?)
    }
    /// # Errors
    /// If `x >= width` or `y >= height`
    pub fn get_pixel_at(&self, x: usize, y: usize) -> Result<[u8; 3], ImageErrors> {
        Ok(self.pixels.get_pixel_at(x, y)?)
    }

    /// Replace the pixels wholesale
    ///
    /// # Errors
    /// `DimensionsMisMatch` if `pixels` isn't the same size as the image,
    /// the image is unchanged in that case
    pub fn replace_pixels(&mut self, pixels: PixelBuffer) -> Result<(), ImageErrors> {
        if pixels.dimensions() != self.dimensions() {
            return Err(ImageErrors::DimensionsMisMatch(
                self.dimensions(),
                pixels.dimensions()
            ));
        }
        self.pixels = pixels;
        Ok(())
    }

    /// Encode the image as `variant` into `sink`
    ///
    /// # Errors
    /// Errors from the sink
    pub fn write_pnm<W: Write>(&self, sink: &mut W, variant: PnmVariant) -> Result<usize, ImageErrors> {
        Ok(PnmEncoder::new(&self.pixels, variant).encode(sink)?)
    }
}
