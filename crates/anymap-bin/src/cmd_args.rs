/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{AFTER_HELP, KERNEL_HELP, LENIENT_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("anymap")
        .about("Decode Portable Any-Map images, filter them and summarize the result")
        .after_help(AFTER_HELP)
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("lenient")
            .long("lenient")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Clamp samples above the max value instead of failing")
            .long_help(LENIENT_HELP))
        .arg(Arg::new("equalize")
            .long("equalize")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Equalize the histogram of each channel"))
        .arg(Arg::new("stretch")
            .long("stretch")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Stretch each channel to the full 0..255 range"))
        .arg(Arg::new("blur")
            .long("blur")
            .action(ArgAction::SetTrue)
            .help_heading("FILTERS")
            .help("Blur the image with a 3x3 box filter"))
        .arg(Arg::new("kernel")
            .long("kernel")
            .help_heading("FILTERS")
            .help("Convolve the image with a custom square matrix")
            .long_help(KERNEL_HELP)
            .num_args(2)
            .value_names(["SIZE", "WEIGHTS"])
            .allow_hyphen_values(true))
}
