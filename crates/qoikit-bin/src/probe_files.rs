/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::read;

use log::warn;
use qoikit::qoikit_core::options::DecoderOptions;
use qoikit::QoiDecoder;

use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Probe input files, extract headers, and print to standard output.
pub fn probe_input_files<'a, I>(inputs: I) -> Result<(), CliErrors>
where
    I: Iterator<Item = &'a OsStr>
{
    for in_file in inputs {
        let data = read(in_file)?;
        // set to high to remove restrictions.
        // We'll just be reading headers so it doesn't matter
        let options = DecoderOptions::new_cmd()
            .set_max_height(usize::MAX)
            .set_max_width(usize::MAX);

        let mut decoder = QoiDecoder::new_with_options(&data, options);

        match decoder.decode_headers() {
            Ok(descriptor) => {
                let metadata = Metadata::new(in_file.to_os_string(), data.len() as u64, descriptor);
                let json = serde_json::to_string_pretty(&metadata)
                    .map_err(|e| CliErrors::Generic(e.to_string()))?;

                println!("{json}");
            }
            Err(err) => {
                warn!("Skipping {:?}, not a readable QOI file: {:?}", in_file, err);
            }
        }
    }
    Ok(())
}
