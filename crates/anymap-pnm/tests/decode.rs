/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, Cursor, Write};

use anymap_core::buffer::PixelBuffer;
use anymap_core::bytestream::ByteCursor;
use anymap_core::options::DecoderOptions;
use anymap_pnm::{PnmDecoder, PnmEncoder, PnmVariant};
use nanorand::Rng;

fn decode(data: &[u8]) -> PixelBuffer {
    PnmDecoder::new(ByteCursor::new(data)).decode().unwrap()
}

fn random_pixels(width: usize, height: usize, seed: u64) -> PixelBuffer {
    let mut data = vec![0_u8; width * height * 3];
    nanorand::WyRand::new_seed(seed).fill(&mut data);

    PixelBuffer::from_vec(width, height, data).unwrap()
}

#[test]
fn output_length_matches_dimensions() {
    let images: [&[u8]; 6] = [
        b"P1 3 2 0 1 0 1 0 1",
        b"P2 3 2 7 0 1 2 3 4 5",
        b"P3 3 2 15 0 0 0 1 1 1 2 2 2 3 3 3 4 4 4 5 5 5",
        b"P4 3 2 \xA0\x40",
        b"P5 3 2 255 \x00\x01\x02\x03\x04\x05",
        b"P6 1 2 255 \x00\x01\x02\x03\x04\x05"
    ];
    for image in images {
        let mut decoder = PnmDecoder::new(ByteCursor::new(image));
        decoder.decode_headers().unwrap();

        let expected = decoder.output_buffer_size().unwrap();
        let (width, height) = decoder.dimensions().unwrap();
        let pixels = decoder.decode().unwrap();

        assert_eq!(pixels.as_slice().len(), expected);
        assert_eq!(expected, width * height * 3);
    }
}

#[test]
fn plain_pixmap_with_comments() {
    let pixels = decode(b"P3\n# a comment\n2 1\n255\n255 0 0  0 0 255\n");

    assert_eq!(pixels.as_slice(), &[255, 0, 0, 0, 0, 255]);
}

#[test]
fn plain_pixmap_is_scaled() {
    let pixels = decode(b"P3 1 1 15 15 0 7");
    // 7*255/15 = 119
    assert_eq!(pixels.as_slice(), &[255, 0, 119]);
}

#[test]
fn plain_graymap_is_replicated() {
    let pixels = decode(b"P2 2 1 4 1 4");
    // 63.75 rounds to 64
    assert_eq!(pixels.as_slice(), &[64, 64, 64, 255, 255, 255]);
}

#[test]
fn plain_bitmap_tokens_do_not_need_separators_between_lines() {
    let pixels = decode(b"P1\n2 2\n0 1\n1 0\n");

    assert_eq!(pixels.as_slice(), &[255, 255, 255, 0, 0, 0, 0, 0, 0, 255, 255, 255]);
}

#[test]
fn bitmap_polarity_is_the_same_for_plain_and_raw() {
    // 10 pixels, alternating, 6 padding bits in each raw row
    let plain = decode(b"P1 10 1 1 0 1 0 1 0 1 0 1 0");
    let raw = decode(b"P4 10 1 \xAA\x80");

    assert_eq!(plain, raw);
    assert_eq!(plain.get_pixel(0).unwrap(), [0, 0, 0]);
    assert_eq!(plain.get_pixel(1).unwrap(), [255, 255, 255]);
}

#[test]
fn raw_bitmap_ignores_padding_bits() {
    let pixels = decode(b"P4 3 2 \xBF\xFF");

    let black = [0, 0, 0];
    let white = [255, 255, 255];

    assert_eq!(pixels.get_pixel_at(0, 0).unwrap(), black);
    assert_eq!(pixels.get_pixel_at(1, 0).unwrap(), white);
    assert_eq!(pixels.get_pixel_at(2, 0).unwrap(), black);
    for x in 0..3 {
        assert_eq!(pixels.get_pixel_at(x, 1).unwrap(), black);
    }
}

#[test]
fn raw_graymap_at_255_is_identity() {
    let mut data = b"P5 16 16 255\n".to_vec();
    data.extend(0..=255_u8);

    let pixels = decode(&data);

    for (i, pixel) in pixels.as_slice().chunks_exact(3).enumerate() {
        assert_eq!(pixel, &[i as u8; 3]);
    }
}

#[test]
fn raw_pixmap_sixteen_bit_is_big_endian() {
    let pixels = decode(b"P6 1 1 65535\n\xFF\xFF\x00\x00\x80\x00");
    // 0x8000 = 32768, 32768*255/65535 = 127.50
    assert_eq!(pixels.as_slice(), &[255, 0, 128]);
}

#[test]
fn raw_graymap_small_max_value() {
    let pixels = decode(b"P5 2 1 1\n\x00\x01");

    assert_eq!(pixels.as_slice(), &[0, 0, 0, 255, 255, 255]);
}

#[test]
fn separator_may_be_a_carriage_return() {
    let pixels = decode(b"P6 1 1 255\r\x0A\x0B\x0C");
    // the raster starts right after the single separator
    assert_eq!(pixels.as_slice(), &[10, 11, 12]);
}

#[test]
fn trailing_bytes_are_ignored() {
    let pixels = decode(b"P5 1 1 255\n\x07garbage");

    assert_eq!(pixels.as_slice(), &[7, 7, 7]);
}

#[test]
fn non_square_rows_use_width_as_stride() {
    let pixels = decode(b"P6 3 2 255\n\
        \x00\x00\x00\x01\x01\x01\x02\x02\x02\
        \x03\x03\x03\x04\x04\x04\x05\x05\x05");

    assert_eq!(pixels.get_pixel_at(2, 0).unwrap(), [2, 2, 2]);
    assert_eq!(pixels.get_pixel_at(0, 1).unwrap(), [3, 3, 3]);
    assert_eq!(pixels.get_pixel_at(2, 1).unwrap(), [5, 5, 5]);
}

#[test]
fn pixmaps_survive_the_encoder() {
    let pixels = random_pixels(37, 11, 42);

    for variant in [PnmVariant::PlainPixmap, PnmVariant::RawPixmap] {
        let mut sink = vec![];
        PnmEncoder::new(&pixels, variant).encode(&mut sink).unwrap();

        assert_eq!(decode(&sink), pixels, "{variant}");
    }
}

#[test]
fn graymaps_survive_the_encoder() {
    let mut pixels = PixelBuffer::new(17, 3).unwrap();

    for index in 0..pixels.num_pixels() {
        let value = (index * 5) as u8;
        pixels.set_pixel(index, value, value, value).unwrap();
    }
    for variant in [
        PnmVariant::PlainGraymap,
        PnmVariant::RawGraymap,
        PnmVariant::PlainBitmap,
        PnmVariant::RawBitmap
    ] {
        let mut sink = vec![];
        PnmEncoder::new(&pixels, variant).encode(&mut sink).unwrap();

        let decoded = decode(&sink);

        if variant.is_bitmap() {
            for (a, b) in decoded.as_slice().iter().zip(pixels.as_slice()) {
                assert_eq!(*a, if *b < 128 { 0 } else { 255 });
            }
        } else {
            assert_eq!(decoded, pixels, "{variant}");
        }
    }
}

#[test]
fn std_io_cursor_source() {
    let data = b"P2 1 1 255 9".to_vec();
    let pixels = PnmDecoder::new(Cursor::new(data)).decode().unwrap();

    assert_eq!(pixels.as_slice(), &[9, 9, 9]);
}

#[test]
fn buffered_file_source() {
    let pixels = random_pixels(8, 8, 7);
    let path = std::env::temp_dir().join("anymap-pnm-buffered-file-source.ppm");

    {
        let mut file = File::create(&path).unwrap();
        PnmEncoder::new(&pixels, PnmVariant::RawPixmap)
            .encode(&mut file)
            .unwrap();
        file.flush().unwrap();
    }
    let reader = BufReader::new(File::open(&path).unwrap());
    let decoded = PnmDecoder::new(reader).decode().unwrap();

    std::fs::remove_file(&path).unwrap();
    assert_eq!(decoded, pixels);
}

#[test]
fn decode_headers_is_idempotent() {
    let mut decoder = PnmDecoder::new(ByteCursor::new(b"P2 1 1 255 3"));

    decoder.decode_headers().unwrap();
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.max_value(), Some(255));
    assert_eq!(decoder.decode().unwrap().as_slice(), &[3, 3, 3]);
}

#[test]
fn options_are_honoured() {
    let options = DecoderOptions::default().set_max_width(4);
    let mut decoder = PnmDecoder::new_with_options(ByteCursor::new(b"P2 5 1 255 0 0 0 0 0"), options);

    assert!(decoder.decode().is_err());
}

#[test]
fn comments_inside_a_raw_header() {
    let pixels = decode(b"P6\n# size\n1 1\n# depth\n255\n\x01\x02\x03");

    assert_eq!(pixels.as_slice(), &[1, 2, 3]);
}
