/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Methods used for duplicating pixels around the border
//!
//! Convolutions read pixels outside the image near its edges,
//! padding gives them something to read.

/// Pad a single channel creating a border that duplicates the
/// pixel at the original image border
///
/// ```text
///  a,b,c
///  d,e,f
/// ```
/// Becomes
/// ```text
/// a a,b,c c
/// a a,b,c c
/// d d,e,f f
/// d d,e,f f
/// ```
///
/// ```text
///    padded width ─────────────────────►
/// │ ┌──────────────────────────────┐
/// │ │          PADDING             │
/// │ │     ┌────────────────┐       │
/// │ │     │                │       │
/// │ │     │   IMAGE        │       │
/// │ │     │                │       │
/// │ │     └────────────────┘       │
/// ▼ │                              │
///   └──────────────────────────────┘
/// ```
///
/// # Arguments
///  - pixels: Un-padded channel, `width*height` values
///  - pad_x: Columns added on both the left and the right
///  - pad_y: Rows added on both the top and the bottom
///
/// # Returns
///  - A vec of `(width + 2*pad_x) * (height + 2*pad_y)` values,
///    empty if the image is or if `pixels` isn't `width*height` long.
#[must_use]
pub fn replicate(pixels: &[u8], width: usize, height: usize, pad_x: usize, pad_y: usize) -> Vec<u8> {
    if width == 0 || height == 0 || width.checked_mul(height) != Some(pixels.len()) {
        return Vec::new();
    }
    let padded_w = width + pad_x * 2;
    let padded_h = height + pad_y * 2;

    let mut out_pixels = vec![0; padded_w * padded_h];

    for (y, out) in out_pixels.chunks_exact_mut(padded_w).enumerate() {
        // rows above and below the image repeat the nearest image row
        let source_y = y.saturating_sub(pad_y).min(height - 1);
        let row = &pixels[source_y * width..(source_y + 1) * width];

        out[..pad_x].fill(row[0]);
        out[pad_x..pad_x + width].copy_from_slice(row);
        out[pad_x + width..].fill(row[width - 1]);
    }
    out_pixels
}

#[cfg(test)]
mod tests {
    use crate::pad::replicate;

    #[test]
    fn replicate_copies_edges() {
        let pixels = [1, 2, 3, 4, 5, 6];
        let padded = replicate(&pixels, 3, 2, 1, 1);

        #[rustfmt::skip]
        let expected = [
            1, 1, 2, 3, 3,
            1, 1, 2, 3, 3,
            4, 4, 5, 6, 6,
            4, 4, 5, 6, 6
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn replicate_wider_than_image() {
        let padded = replicate(&[9], 1, 1, 2, 2);

        assert_eq!(padded, vec![9; 25]);
    }

    #[test]
    fn mismatched_length_gives_nothing() {
        assert!(replicate(&[1, 2], 3, 3, 1, 1).is_empty());
        assert!(replicate(&[1; 10], 3, 3, 1, 1).is_empty());
        assert!(replicate(&[], 0, 3, 1, 1).is_empty());
    }

    #[test]
    fn no_padding_is_a_copy() {
        let padded = replicate(&[1, 2, 3, 4], 2, 2, 0, 0);

        assert_eq!(padded, [1, 2, 3, 4]);
    }
}
