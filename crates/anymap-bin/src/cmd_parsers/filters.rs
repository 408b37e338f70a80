/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use anymap_image::errors::ImageErrors;
use anymap_image::traits::OperationsTrait;
use anymap_imageprocs::convolve::Convolve;
use anymap_imageprocs::equalize::HistogramEqualize;
use anymap_imageprocs::stretch_contrast::HistogramStretch;
use clap::ArgMatches;
use log::debug;

/// Collect the requested filters in the order they run
///
/// # Errors
/// If `--kernel` can't be parsed
pub fn parse_filters(args: &ArgMatches) -> Result<Vec<Box<dyn OperationsTrait>>, ImageErrors> {
    let mut filters: Vec<Box<dyn OperationsTrait>> = vec![];

    if args.get_flag("equalize") {
        filters.push(Box::new(HistogramEqualize::new()));
    }
    if args.get_flag("stretch") {
        filters.push(Box::new(HistogramStretch::new()));
    }
    if args.get_flag("blur") {
        filters.push(Box::new(Convolve::box_blur()));
    }
    if let Some(mut values) = args.get_many::<String>("kernel") {
        let (Some(size), Some(weights)) = (values.next(), values.next()) else {
            return Err(ImageErrors::InvalidArgument(
                "--kernel needs a size and a list of weights".to_string()
            ));
        };
        filters.push(Box::new(parse_kernel(size, weights)?));
    }
    for filter in &filters {
        debug!("Added {} filter", filter.name());
    }
    Ok(filters)
}

/// Parse `--kernel SIZE WEIGHTS`
///
/// The matrix itself is validated against the image when it runs
fn parse_kernel(size: &str, weights: &str) -> Result<Convolve, ImageErrors> {
    let size = size.trim().parse::<usize>().map_err(|err| {
        ImageErrors::InvalidArgument(format!("Invalid kernel size `{size}`: {err}"))
    })?;

    let weights = weights
        .split(',')
        .map(|weight| {
            weight.trim().parse::<f32>().map_err(|err| {
                ImageErrors::InvalidArgument(format!("Invalid kernel weight `{weight}`: {err}"))
            })
        })
        .collect::<Result<Vec<f32>, ImageErrors>>()?;

    Ok(Convolve::new(weights, size))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::filters::{parse_filters, parse_kernel};

    #[test]
    fn filters_run_in_a_fixed_order() {
        let matches = create_cmd_args().get_matches_from([
            "anymap",
            "-i",
            "a.ppm",
            "--kernel",
            "1",
            "2",
            "--blur",
            "--stretch",
            "--equalize"
        ]);
        let names: Vec<_> = parse_filters(&matches)
            .unwrap()
            .iter()
            .map(|x| x.name())
            .collect();

        assert_eq!(
            names,
            [
                "Histogram Equalization",
                "Histogram Stretch",
                "2D convolution",
                "2D convolution"
            ]
        );
    }

    #[test]
    fn kernel_parsing() {
        let kernel = parse_kernel("3", "0,-1,0, -1,5,-1, 0,-1,0").unwrap();

        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.weights()[4], 5.0);

        assert!(parse_kernel("three", "1").is_err());
        assert!(parse_kernel("1", "1,x").is_err());
    }
}
