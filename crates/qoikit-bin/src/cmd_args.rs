/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{OUT_CHANNELS_HELP, RAW_INPUT_HELP, STRICT_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("qoikit")
        .about("Encode raw pixels to QOI images and decode them back")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .help("Output to write the data to")
            .long("output")
            .action(ArgAction::Append)
            .required_unless_present("probe"))
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
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the headers of QOI inputs as json and exit"))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("RAW INPUT")
            .help("Width of raw input pixels")
            .long_help(RAW_INPUT_HELP)
            .value_parser(value_parser!(u32).range(1..)))
        .arg(Arg::new("height")
            .long("height")
            .help_heading("RAW INPUT")
            .help("Height of raw input pixels")
            .long_help(RAW_INPUT_HELP)
            .value_parser(value_parser!(u32).range(1..)))
        .arg(Arg::new("channels")
            .long("channels")
            .help_heading("RAW INPUT")
            .help("Channels of raw input pixels, 3 for RGB and 4 for RGBA")
            .long_help(RAW_INPUT_HELP)
            .value_parser(value_parser!(u8).range(3..=4)))
        .arg(Arg::new("linear")
            .long("linear")
            .action(ArgAction::SetTrue)
            .help_heading("RAW INPUT")
            .help("Mark all channels of the encoded image as linear instead of sRGB"))
        .arg(Arg::new("out-channels")
            .long("out-channels")
            .help_heading("DECODING")
            .help("Channels of decoded pixels, 3 or 4")
            .long_help(OUT_CHANNELS_HELP)
            .value_parser(value_parser!(u8).range(3..=4)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODING")
            .help("Reject images with a bad colorspace byte or end marker")
            .long_help(STRICT_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODING")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODING")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize)))
}

#[cfg(test)]
mod tests {
    use super::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn rejects_bad_channels() {
        let result = create_cmd_args().try_get_matches_from([
            "qoikit", "-i", "a.raw", "-o", "a.qoi", "--channels", "2"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn output_optional_when_probing() {
        let result = create_cmd_args().try_get_matches_from(["qoikit", "-i", "a.qoi", "--probe"]);
        assert!(result.is_ok());

        let result = create_cmd_args().try_get_matches_from(["qoikit", "-i", "a.qoi"]);
        assert!(result.is_err());
    }
}
