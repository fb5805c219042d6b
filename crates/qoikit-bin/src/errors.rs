/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use qoikit::{QoiEncodeErrors, QoiErrors};

/// Errors that stop the command line tool
pub enum CliErrors {
    IoError(std::io::Error),
    DecodeErrors(QoiErrors),
    EncodeErrors(QoiEncodeErrors),
    Generic(String),
    GenericStatic(&'static str)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliErrors::IoError(err) => writeln!(f, "I/O error: {err}"),
            CliErrors::DecodeErrors(err) => writeln!(f, "Could not decode image: {err:?}"),
            CliErrors::EncodeErrors(err) => writeln!(f, "Could not encode image: {err:?}"),
            CliErrors::Generic(msg) => writeln!(f, "{msg}"),
            CliErrors::GenericStatic(msg) => writeln!(f, "{msg}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::IoError(value)
    }
}

impl From<QoiErrors> for CliErrors {
    fn from(value: QoiErrors) -> Self {
        CliErrors::DecodeErrors(value)
    }
}

impl From<QoiEncodeErrors> for CliErrors {
    fn from(value: QoiEncodeErrors) -> Self {
        CliErrors::EncodeErrors(value)
    }
}
