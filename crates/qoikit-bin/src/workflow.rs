/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::{read, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{get_decoder_options, get_raw_descriptor};
use crate::errors::CliErrors;
use crate::file_io::{read_qoi, write_qoi};
use crate::probe_files::probe_input_files;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    let inputs = args
        .get_raw("in")
        .ok_or(CliErrors::GenericStatic("No input files"))?;

    if cmd_opts.probe {
        return probe_input_files(inputs);
    }
    info!("Creating workflows from input");

    let outputs = args
        .get_raw("out")
        .ok_or(CliErrors::GenericStatic("No output files"))?;

    if inputs.len() != outputs.len() {
        return Err(CliErrors::Generic(format!(
            "Got {} inputs but {} outputs",
            inputs.len(),
            outputs.len()
        )));
    }

    for (in_file, out_file) in inputs.zip(outputs) {
        verify_file_paths(in_file, out_file)?;

        if is_qoi(in_file) {
            debug!("Treating {:?} as a qoi file", in_file);
            decode_file(in_file, out_file, args, cmd_opts)?;
        } else {
            debug!("Treating {:?} as raw pixels", in_file);
            encode_file(in_file, out_file, args)?;
        }
    }

    Ok(())
}

fn is_qoi(path: &OsStr) -> bool {
    Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("qoi"))
        .unwrap_or(false)
}

fn decode_file(
    in_file: &OsStr, out_file: &OsStr, args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    let options = get_decoder_options(args, cmd_opts);

    let (pixels, descriptor) = read_qoi(in_file, options)?;

    info!(
        "Decoded {}x{} {:?} image, {} bytes of pixels",
        descriptor.width(),
        descriptor.height(),
        descriptor.colorspace(),
        pixels.len()
    );

    let mut writer = BufWriter::new(File::create(out_file)?);
    writer.write_all(&pixels)?;
    writer.flush()?;

    Ok(())
}

fn encode_file(in_file: &OsStr, out_file: &OsStr, args: &ArgMatches) -> Result<(), CliErrors> {
    let descriptor = get_raw_descriptor(args)?;
    let pixels = read(in_file)?;

    let written = write_qoi(out_file, &pixels, &descriptor)?;

    info!(
        "Encoded {} bytes of pixels into {} bytes ({:.2}%)",
        pixels.len(),
        written,
        (written as f64 / pixels.len().max(1) as f64) * 100.0
    );
    Ok(())
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr) -> Result<(), CliErrors> {
    if p0 == p1 {
        return Err(CliErrors::Generic(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    if !Path::new(p0).exists() {
        return Err(CliErrors::Generic(format!("Input file {:?} does not exist", p0)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::fs::{read, remove_file, write};

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;
    use crate::workflow::{create_and_exec_workflow_from_cmd, is_qoi};

    #[test]
    fn qoi_extension() {
        assert!(is_qoi("a.qoi".as_ref()));
        assert!(is_qoi("dir/b.QOI".as_ref()));
        assert!(!is_qoi("c.raw".as_ref()));
        assert!(!is_qoi("qoi".as_ref()));
    }

    #[test]
    fn raw_to_qoi_and_back() {
        let dir = std::env::temp_dir();
        let raw = dir.join("qoikit-workflow.raw");
        let qoi = dir.join("qoikit-workflow.qoi");
        let back = dir.join("qoikit-workflow-back.raw");

        let pixels: Vec<u8> = (0..8 * 8 * 4).map(|i| (i * 3) as u8).collect();
        write(&raw, &pixels).unwrap();

        let args = create_cmd_args().get_matches_from([
            OsStr::new("qoikit"),
            OsStr::new("-i"),
            raw.as_os_str(),
            OsStr::new("-o"),
            qoi.as_os_str(),
            OsStr::new("--width"),
            OsStr::new("8"),
            OsStr::new("--height"),
            OsStr::new("8"),
            OsStr::new("--channels"),
            OsStr::new("4")
        ]);
        create_and_exec_workflow_from_cmd(&args, &parse_options(&args)).unwrap();

        let args = create_cmd_args().get_matches_from([
            OsStr::new("qoikit"),
            OsStr::new("-i"),
            qoi.as_os_str(),
            OsStr::new("-o"),
            back.as_os_str()
        ]);
        create_and_exec_workflow_from_cmd(&args, &parse_options(&args)).unwrap();

        assert_eq!(read(&back).unwrap(), pixels);

        for file in [raw, qoi, back] {
            remove_file(file).unwrap();
        }
    }

    #[test]
    fn same_input_and_output() {
        let args = create_cmd_args().get_matches_from(["qoikit", "-i", "x.qoi", "-o", "x.qoi"]);
        assert!(create_and_exec_workflow_from_cmd(&args, &parse_options(&args)).is_err());
    }
}
