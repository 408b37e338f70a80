/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use anymap_core::bytestream::ByteCursor;
use anymap_core::options::DecoderOptions;
use anymap_image::errors::ErrorKind;
use anymap_image::image::Image;
use anymap_image::traits::OperationsTrait;
use anymap_imageprocs::convolve::Convolve;
use anymap_imageprocs::equalize::{equalize, HistogramEqualize};
use anymap_imageprocs::histogram::ChannelHistogram;
use anymap_imageprocs::stretch_contrast::HistogramStretch;
use nanorand::Rng;

fn random_image(width: usize, height: usize, seed: u64) -> Image {
    let mut rand = nanorand::WyRand::new_seed(seed);

    Image::from_fn(width, height, |_, _| {
        // keep values in a narrow band so stretching has work to do
        [
            rand.generate_range(60_u8..=90),
            rand.generate_range(0_u8..=255),
            rand.generate_range(100_u8..=101)
        ]
    })
    .unwrap()
}

#[test]
fn box_blur_on_uniform_image() {
    let mut image = Image::fill(31, 17, [12, 34, 56]).unwrap();
    let before = image.clone();

    Convolve::box_blur().execute(&mut image).unwrap();

    assert_eq!(image, before);
}

#[test]
fn invalid_kernels_leave_the_image_alone() {
    let mut image = random_image(8, 8, 1);
    let before = image.clone();

    for convolve in [
        Convolve::new(vec![1.0; 4], 2),
        Convolve::new(vec![1.0; 9], 9),
        Convolve::new(vec![1.0; 81], 9)
    ] {
        let err = convolve.execute(&mut image).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(image, before);
    }
}

#[test]
fn equalize_does_not_modify_its_input() {
    let image = random_image(20, 20, 2);
    let before = image.clone();

    let first = equalize(image.pixels()).unwrap();
    let second = equalize(image.pixels()).unwrap();

    assert_eq!(image, before);
    assert_eq!(first, second);
}

#[test]
fn equalize_reaches_both_ends() {
    let mut image = random_image(40, 40, 3);
    HistogramEqualize::new().execute(&mut image).unwrap();

    let histogram = ChannelHistogram::new(&image);

    for channel in histogram.channels() {
        assert_ne!(channel[0], 0);
        assert_ne!(channel[255], 0);
    }
}

#[test]
fn stretch_spans_the_full_range() {
    let mut image = random_image(40, 40, 4);
    HistogramStretch::new().execute(&mut image).unwrap();

    for channel in ChannelHistogram::new(&image).channels() {
        let lowest = channel.iter().position(|x| *x != 0);
        let highest = channel.iter().rposition(|x| *x != 0);

        assert_eq!((lowest, highest), (Some(0), Some(255)));
    }
}

#[test]
fn decode_then_filter() {
    let data = b"P2\n# gradient\n4 1\n3\n0 1 2 3\n";
    let mut image = Image::read(ByteCursor::new(data), DecoderOptions::default()).unwrap();

    // 0, 85, 170, 255
    assert_eq!(image.get_pixel_at(1, 0).unwrap(), [85, 85, 85]);

    HistogramStretch::new().execute(&mut image).unwrap();
    HistogramEqualize::new().execute(&mut image).unwrap();

    assert_eq!(image.as_bytes(), &[0, 0, 0, 85, 85, 85, 170, 170, 170, 255, 255, 255]);
}
