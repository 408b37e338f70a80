/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The RGB pixel buffer
//!
//! Every decoded image, whatever its source depth or channel count,
//! ends up as 8 bit interleaved RGB, row-major, with the origin at the
//! upper left corner.
//!
//! ```text
//!  x ─────────►
//! y  [R,G,B][R,G,B][R,G,B]
//! │  [R,G,B][R,G,B][R,G,B]
//! ▼
//! ```
use core::fmt::{Debug, Display, Formatter};

/// Number of bytes a single pixel occupies
pub const RGB_COMPONENTS: usize = 3;

/// Errors from creating or addressing a [`PixelBuffer`]
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum BufferErrors {
    /// A flat pixel index past `width*height`
    ///
    /// (index, number of pixels)
    IndexOutOfRange(usize, usize),
    /// An `(x,y)` coordinate outside the image
    ///
    /// ((x,y), (width,height))
    CoordinateOutOfRange((usize, usize), (usize, usize)),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// `width*height*3` exceeds `isize::MAX` or can't be allocated
    TooLarge(usize, usize),
    /// The backing vector has the wrong length
    ///
    /// (expected, found)
    WrongLength(usize, usize)
}

impl BufferErrors {
    /// Whether this error was raised by addressing a pixel
    /// outside the buffer
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BufferErrors::IndexOutOfRange(..) | BufferErrors::CoordinateOutOfRange(..)
        )
    }
}

impl Debug for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferErrors::IndexOutOfRange(index, len) => {
                writeln!(f, "Pixel index {index} out of range for {len} pixels")
            }
            BufferErrors::CoordinateOutOfRange((x, y), (width, height)) => {
                writeln!(
                    f,
                    "Pixel ({x},{y}) out of range for an image of {width}x{height}"
                )
            }
            BufferErrors::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions must be non-zero, found {width}x{height}")
            }
            BufferErrors::TooLarge(width, height) => {
                writeln!(f, "Image of {width}x{height} is too large to allocate")
            }
            BufferErrors::WrongLength(expected, found) => {
                writeln!(f, "Expected a buffer of {expected} bytes but found {found}")
            }
        }
    }
}

impl Display for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BufferErrors {}

/// A fixed size RGB buffer of `width*height*3` bytes
///
/// The length invariant holds for the lifetime of the buffer, there is no
/// way to resize it.
///
/// # Example
/// ```
/// use anymap_core::buffer::PixelBuffer;
///
/// let mut pixels = PixelBuffer::new(3, 2).unwrap();
/// pixels.set_pixel_at(2, 1, 255, 0, 0).unwrap();
///
/// assert_eq!(pixels.get_pixel(5).unwrap(), [255, 0, 0]);
/// assert!(pixels.set_pixel_at(3, 0, 0, 0, 0).is_err());
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    data:   Vec<u8>
}

impl PixelBuffer {
    /// Create a black buffer
    ///
    /// # Errors
    /// `ZeroDimensions` if either dimension is zero, `TooLarge` if the
    /// byte length overflows or the allocation fails
    pub fn new(width: usize, height: usize) -> Result<PixelBuffer, BufferErrors> {
        let size = Self::byte_length(width, height)?;

        let mut data = Vec::new();
        // fail instead of aborting when the allocator refuses
        data.try_reserve_exact(size)
            .map_err(|_| BufferErrors::TooLarge(width, height))?;
        data.resize(size, 0);

        Ok(PixelBuffer {
            width,
            height,
            data
        })
    }
    /// Create a buffer with every pixel set to `(r,g,b)`
    ///
    /// # Errors
    /// Same as [`new`](Self::new)
    pub fn fill(width: usize, height: usize, rgb: [u8; 3]) -> Result<PixelBuffer, BufferErrors> {
        let mut buffer = PixelBuffer::new(width, height)?;

        for pixel in buffer.data.chunks_exact_mut(RGB_COMPONENTS) {
            pixel.copy_from_slice(&rgb);
        }
        Ok(buffer)
    }
    /// Wrap an existing interleaved RGB vector
    ///
    /// # Errors
    /// `WrongLength` if `data.len() != width*height*3`
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<PixelBuffer, BufferErrors> {
        let size = Self::byte_length(width, height)?;

        if data.len() != size {
            return Err(BufferErrors::WrongLength(size, data.len()));
        }
        Ok(PixelBuffer {
            width,
            height,
            data
        })
    }

    fn byte_length(width: usize, height: usize) -> Result<usize, BufferErrors> {
        if width == 0 || height == 0 {
            return Err(BufferErrors::ZeroDimensions(width, height));
        }
        width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(RGB_COMPONENTS))
            .filter(|x| isize::try_from(*x).is_ok())
            .ok_or(BufferErrors::TooLarge(width, height))
    }

    /// Return `(width,height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Number of pixels, i.e `width*height`
    pub const fn num_pixels(&self) -> usize {
        self.width * self.height
    }

    /// Set the pixel at a flat, row-major index
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= width*height`
    #[inline]
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), BufferErrors> {
        let offset = self.index_offset(index)?;

        self.data[offset..offset + RGB_COMPONENTS].copy_from_slice(&[r, g, b]);
        Ok(())
    }
    /// Set the pixel at column `x` and row `y`
    ///
    /// # Errors
    /// `CoordinateOutOfRange` if `x >= width` or `y >= height`
    #[inline]
    pub fn set_pixel_at(
        &mut self, x: usize, y: usize, r: u8, g: u8, b: u8
    ) -> Result<(), BufferErrors> {
        let offset = self.coordinate_offset(x, y)?;

        self.data[offset..offset + RGB_COMPONENTS].copy_from_slice(&[r, g, b]);
        Ok(())
    }
    /// # Errors
    /// `IndexOutOfRange` if `index >= width*height`
    pub fn get_pixel(&self, index: usize) -> Result<[u8; 3], BufferErrors> {
        let offset = self.index_offset(index)?;

        Ok([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2]
        ])
    }
    /// # Errors
    /// `CoordinateOutOfRange` if `x >= width` or `y >= height`
    pub fn get_pixel_at(&self, x: usize, y: usize) -> Result<[u8; 3], BufferErrors> {
        let offset = self.coordinate_offset(x, y)?;

        Ok([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2]
        ])
    }

    #[inline(always)]
    fn index_offset(&self, index: usize) -> Result<usize, BufferErrors> {
        if index >= self.num_pixels() {
            return Err(BufferErrors::IndexOutOfRange(index, self.num_pixels()));
        }
        Ok(index * RGB_COMPONENTS)
    }

    #[inline(always)]
    fn coordinate_offset(&self, x: usize, y: usize) -> Result<usize, BufferErrors> {
        if x >= self.width || y >= self.height {
            return Err(BufferErrors::CoordinateOutOfRange(
                (x, y),
                (self.width, self.height)
            ));
        }
        // rows are `width` pixels apart
        Ok((y * self.width + x) * RGB_COMPONENTS)
    }

    /// The interleaved RGB bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
    /// Mutable access to the bytes, the length can't be changed through it
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}
