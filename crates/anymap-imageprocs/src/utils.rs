/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Moving between interleaved RGB and one buffer per channel
use anymap_core::buffer::{BufferErrors, PixelBuffer, RGB_COMPONENTS};

/// Split interleaved RGB into three channels
#[inline(always)]
pub fn de_interleave_3_channels(source: &[u8], (c1, c2, c3): (&mut [u8], &mut [u8], &mut [u8])) {
    for (((val, a), b), c) in source
        .chunks_exact(RGB_COMPONENTS)
        .zip(c1.iter_mut())
        .zip(c2.iter_mut())
        .zip(c3.iter_mut())
    {
        *a = val[0];
        *b = val[1];
        *c = val[2];
    }
}

/// Merge three channels into interleaved RGB
#[inline(always)]
pub fn interleave_3_channels((c1, c2, c3): (&[u8], &[u8], &[u8]), dest: &mut [u8]) {
    for (((out, a), b), c) in dest
        .chunks_exact_mut(RGB_COMPONENTS)
        .zip(c1.iter())
        .zip(c2.iter())
        .zip(c3.iter())
    {
        out.copy_from_slice(&[*a, *b, *c]);
    }
}

/// Return the red, green and blue planes of `pixels`
pub fn split_channels(pixels: &PixelBuffer) -> [Vec<u8>; 3] {
    let size = pixels.num_pixels();
    let [mut r, mut g, mut b] = [vec![0; size], vec![0; size], vec![0; size]];

    de_interleave_3_channels(pixels.as_slice(), (&mut r, &mut g, &mut b));

    [r, g, b]
}

/// Build a buffer from three planes of `width*height` bytes each
///
/// # Errors
/// If the planes don't describe a `width` by `height` image
pub fn merge_channels(
    width: usize, height: usize, channels: &[Vec<u8>; 3]
) -> Result<PixelBuffer, BufferErrors> {
    let mut pixels = PixelBuffer::new(width, height)?;

    for channel in channels {
        if channel.len() != pixels.num_pixels() {
            return Err(BufferErrors::WrongLength(pixels.num_pixels(), channel.len()));
        }
    }
    interleave_3_channels(
        (&channels[0], &channels[1], &channels[2]),
        pixels.as_mut_slice()
    );
    Ok(pixels)
}
