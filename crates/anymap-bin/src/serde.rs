/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use anymap_image::metadata::ImageMetadata;
use anymap_imageprocs::statistics::{ChannelStatistics, Statistics};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What gets printed for every processed file
pub struct Summary<'a> {
    file:       &'a Path,
    metadata:   &'a ImageMetadata,
    filters:    Vec<&'static str>,
    statistics: ChannelStatistics
}

impl<'a> Summary<'a> {
    pub fn new(
        file: &'a Path, metadata: &'a ImageMetadata, filters: Vec<&'static str>,
        statistics: ChannelStatistics
    ) -> Summary<'a> {
        Summary {
            file,
            metadata,
            filters,
            statistics
        }
    }
}

struct ChannelSummary<'a>(&'a Statistics);

impl Serialize for ChannelSummary<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Statistics", 3)?;

        state.serialize_field("min", &self.0.min)?;
        state.serialize_field("max", &self.0.max)?;
        state.serialize_field("mean", &self.0.mean)?;

        state.end()
    }
}

impl Serialize for Summary<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Summary", 6)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("filters", &self.filters)?;
        state.serialize_field("red", &ChannelSummary(self.statistics.red()))?;
        state.serialize_field("green", &ChannelSummary(self.statistics.green()))?;
        state.serialize_field("blue", &ChannelSummary(self.statistics.blue()))?;

        state.end()
    }
}
