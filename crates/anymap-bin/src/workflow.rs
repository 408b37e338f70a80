/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use anymap_core::options::DecoderOptions;
use anymap_image::errors::ImageErrors;
use anymap_image::image::Image;
use anymap_imageprocs::statistics::ChannelStatistics;
use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_parsers::filters::parse_filters;
use crate::serde::Summary;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, options: DecoderOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let filters = parse_filters(args)?;

    for in_file in args.get_many::<PathBuf>("in").into_iter().flatten() {
        let mut image = Image::open_with_options(in_file, options)?;

        let (width, height) = image.dimensions();
        debug!("Decoded {:?}, {width}x{height}", in_file);

        for filter in &filters {
            filter.execute(&mut image)?;
        }
        let statistics = ChannelStatistics::new(&image);
        let names = filters.iter().map(|x| x.name()).collect();

        let summary = Summary::new(in_file, image.metadata(), names, statistics);

        let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{json}");
    }
    Ok(())
}
