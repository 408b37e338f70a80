/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! This module stores what the decoder learnt about the source stream
//! next to the decoded pixels
use anymap_pnm::{PnmHeader, PnmVariant};

/// Image metadata
///
/// The decoder sets this up, images created in memory
/// have no variant or max value
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to the serde module
    pub(crate) width:     usize,
    pub(crate) height:    usize,
    pub(crate) variant:   Option<PnmVariant>,
    pub(crate) max_value: Option<u16>
}

impl ImageMetadata {
    pub(crate) fn new(width: usize, height: usize) -> ImageMetadata {
        ImageMetadata {
            width,
            height,
            ..Default::default()
        }
    }
    pub(crate) fn from_header(header: &PnmHeader) -> ImageMetadata {
        ImageMetadata {
            width:     header.width,
            height:    header.height,
            variant:   Some(header.variant),
            max_value: Some(header.max_value)
        }
    }
    /// Return the image dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// The variant of the stream the image was decoded from
    pub const fn variant(&self) -> Option<PnmVariant> {
        self.variant
    }
    /// The max sample value declared in the source stream
    ///
    /// Bitmaps report 1
    pub const fn max_value(&self) -> Option<u16> {
        self.max_value
    }
}
