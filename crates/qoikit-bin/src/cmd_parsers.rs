/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoikit::qoikit_core::options::DecoderOptions;
use qoikit::QoiDescriptor;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches, cmd_opts: &CmdOptions) -> DecoderOptions {
    let mut decoder_options = DecoderOptions::new_cmd()
        .set_max_height(cmd_opts.max_height)
        .set_max_width(cmd_opts.max_width)
        .set_strict_mode(cmd_opts.strict_mode);

    if let Some(channels) = options.get_one::<u8>("out-channels") {
        if let Some(colorspace) = ColorSpace::from_components(usize::from(*channels)) {
            decoder_options = decoder_options.set_out_colorspace(colorspace);
        }
    }
    decoder_options
}

/// Build the description of raw input pixels from `--width`,
/// `--height`, `--channels` and `--linear`
pub fn get_raw_descriptor(options: &ArgMatches) -> Result<QoiDescriptor, CliErrors> {
    let width = *options
        .get_one::<u32>("width")
        .ok_or(CliErrors::GenericStatic("Raw input needs --width"))?;
    let height = *options
        .get_one::<u32>("height")
        .ok_or(CliErrors::GenericStatic("Raw input needs --height"))?;
    let channels = *options
        .get_one::<u8>("channels")
        .ok_or(CliErrors::GenericStatic("Raw input needs --channels"))?;

    let colorspace = match channels {
        3 => ColorSpace::RGB,
        _ => ColorSpace::RGBA
    };
    let characteristics = if options.get_flag("linear") {
        ColorCharacteristics::Linear
    } else {
        ColorCharacteristics::sRGB
    };

    Ok(QoiDescriptor::new(width, height, colorspace, characteristics))
}

#[cfg(test)]
mod tests {
    use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;
    use crate::cmd_parsers::{get_decoder_options, get_raw_descriptor};

    #[test]
    fn raw_descriptor() {
        let matches = create_cmd_args().get_matches_from([
            "qoikit", "-i", "in.raw", "-o", "out.qoi", "--width", "20", "--height", "10",
            "--channels", "3", "--linear"
        ]);
        let descriptor = get_raw_descriptor(&matches).unwrap();

        assert_eq!(descriptor.width(), 20);
        assert_eq!(descriptor.height(), 10);
        assert_eq!(descriptor.colorspace(), ColorSpace::RGB);
        assert_eq!(descriptor.characteristics(), ColorCharacteristics::Linear);

        let matches = create_cmd_args().get_matches_from([
            "qoikit", "-i", "in.raw", "-o", "out.qoi", "--width", "20"
        ]);
        assert!(get_raw_descriptor(&matches).is_err());
    }

    #[test]
    fn decoder_options() {
        let matches = create_cmd_args().get_matches_from([
            "qoikit", "-i", "in.qoi", "-o", "out.raw", "--strict", "--max-width", "100",
            "--out-channels", "4"
        ]);
        let options = get_decoder_options(&matches, &parse_options(&matches));

        assert!(options.strict_mode());
        assert_eq!(options.max_width(), 100);
        assert_eq!(options.max_height(), usize::MAX);
        assert_eq!(options.out_colorspace(), Some(ColorSpace::RGBA));

        let matches = create_cmd_args().get_matches_from(["qoikit", "-i", "in.qoi", "-o", "out.raw"]);
        let options = get_decoder_options(&matches, &parse_options(&matches));

        assert!(!options.strict_mode());
        assert_eq!(options.out_colorspace(), None);
    }
}
