/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by image operations
use anymap_core::buffer::PixelBuffer;
use anymap_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to encapsulate this trait.
///
/// An operation never modifies the image it's given, it returns a new
/// buffer of the same dimensions which [`execute`](Self::execute) swaps in.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Compute the new pixels of `image`
    ///
    /// # Errors
    /// Any error the operation encounters, `image` is left untouched
    fn execute_impl(&self, image: &Image) -> Result<PixelBuffer, ImageErrors>;

    /// Execute the operation, replacing the pixels of `image`
    ///
    /// The image is only modified if the operation succeeds.
    ///
    /// # Example
    /// ```
    /// use anymap_core::buffer::PixelBuffer;
    /// use anymap_image::errors::ImageErrors;
    /// use anymap_image::image::Image;
    /// use anymap_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "invert"
    ///     }
    ///     fn execute_impl(&self, image: &Image) -> Result<PixelBuffer, ImageErrors> {
    ///         let mut pixels = image.pixels().clone();
    ///         pixels.as_mut_slice().iter_mut().for_each(|x| *x = 255 - *x);
    ///         Ok(pixels)
    ///     }
    /// }
    ///
    /// let mut image = Image::fill(2, 2, [10, 20, 30]).unwrap();
    /// Invert.execute(&mut image).unwrap();
    ///
    /// assert_eq!(image.get_pixel_at(1, 1).unwrap(), [245, 235, 225]);
    /// ```
    ///
    /// # Errors
    /// Any error from [`execute_impl`](Self::execute_impl)
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        trace!("Running operation: {}", self.name());

        let pixels = self.execute_impl(image)?;

        image.replace_pixels(pixels)
    }

    /// Run the operation on a copy of `image`, returning the copy
    ///
    /// # Errors
    /// Any error from [`execute_impl`](Self::execute_impl)
    fn clone_and_execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut copy = image.clone();
        self.execute(&mut copy)?;

        Ok(copy)
    }
}
