/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use anymap_core::options::DecoderOptions;
use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use log::{info, Level};

/// Build decoder options from the command line
pub fn parse_options(options: &ArgMatches) -> DecoderOptions {
    let mut decoder_options = DecoderOptions::default();

    if options.get_flag("lenient") {
        info!("Clamping out of range samples");
        decoder_options = DecoderOptions::new_cmd();
    }
    if let Some(width) = options.get_one::<usize>("max-width") {
        if options.value_source("max-width") == Some(CommandLine) {
            info!("Setting max width to {width}");
        }
        decoder_options = decoder_options.set_max_width(*width);
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        if options.value_source("max-height") == Some(CommandLine) {
            info!("Setting max height to {height}");
        }
        decoder_options = decoder_options.set_max_height(*height);
    }
    decoder_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn defaults_are_strict() {
        let matches = create_cmd_args().get_matches_from(["anymap", "-i", "a.ppm"]);
        let options = parse_options(&matches);

        assert!(options.strict_mode());
        assert_eq!(options.max_width(), 16384);
        assert_eq!(options.max_height(), 16384);
    }

    #[test]
    fn lenient_and_limits() {
        let matches = create_cmd_args().get_matches_from([
            "anymap",
            "-i",
            "a.ppm",
            "--lenient",
            "--max-width",
            "10"
        ]);
        let options = parse_options(&matches);

        assert!(!options.strict_mode());
        assert_eq!(options.max_width(), 10);
        assert_eq!(options.max_height(), 16384);
    }
}
