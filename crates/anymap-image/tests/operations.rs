/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use anymap_core::buffer::PixelBuffer;
use anymap_image::errors::{ErrorKind, ImageErrors};
use anymap_image::image::Image;
use anymap_image::traits::OperationsTrait;
use nanorand::Rng;

/// Shrinks the image, which an operation must never do
struct Shrink;

impl OperationsTrait for Shrink {
    fn name(&self) -> &'static str {
        "shrink"
    }
    fn execute_impl(&self, _: &Image) -> Result<PixelBuffer, ImageErrors> {
        Ok(PixelBuffer::new(1, 1)?)
    }
}

struct Fails;

impl OperationsTrait for Fails {
    fn name(&self) -> &'static str {
        "fails"
    }
    fn execute_impl(&self, _: &Image) -> Result<PixelBuffer, ImageErrors> {
        Err(ImageErrors::InvalidArgument("always fails".to_string()))
    }
}

struct Swap;

impl OperationsTrait for Swap {
    fn name(&self) -> &'static str {
        "swap red and blue"
    }
    fn execute_impl(&self, image: &Image) -> Result<PixelBuffer, ImageErrors> {
        let mut pixels = image.pixels().clone();

        for pixel in pixels.as_mut_slice().chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }
        Ok(pixels)
    }
}

fn random_image() -> Image {
    let mut data = vec![0_u8; 10 * 7 * 3];
    nanorand::WyRand::new_seed(3).fill(&mut data);

    Image::from_pixels(PixelBuffer::from_vec(10, 7, data).unwrap())
}

#[test]
fn failed_operations_leave_the_image_alone() {
    let mut image = random_image();
    let before = image.clone();

    let err = Fails.execute(&mut image).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(image, before);

    assert!(Shrink.execute(&mut image).is_err());
    assert_eq!(image, before);
}

#[test]
fn successful_operations_replace_pixels() {
    let mut image = random_image();
    let before = image.clone();

    Swap.execute(&mut image).unwrap();
    assert_ne!(image, before);

    Swap.execute(&mut image).unwrap();
    assert_eq!(image, before);
}

#[test]
fn clone_and_execute_keeps_the_source() {
    let image = random_image();
    let swapped = Swap.clone_and_execute(&image).unwrap();

    assert_eq!(image.get_pixel_at(0, 0).unwrap()[0], swapped.get_pixel_at(0, 0).unwrap()[2]);
    assert_eq!(swapped.dimensions(), image.dimensions());
}
