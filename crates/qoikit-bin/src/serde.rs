/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use qoikit::QoiDescriptor;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata {
    file:       OsString,
    size:       u64,
    descriptor: QoiDescriptor
}

impl Metadata {
    pub fn new(file: OsString, size: u64, descriptor: QoiDescriptor) -> Metadata {
        Metadata {
            file,
            size,
            descriptor
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("header", &self.descriptor)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
    use qoikit::QoiDescriptor;

    use crate::serde::Metadata;

    #[test]
    fn metadata_json() {
        let descriptor = QoiDescriptor::new(3, 2, ColorSpace::RGBA, ColorCharacteristics::Linear);
        let metadata = Metadata::new("a.qoi".into(), 40, descriptor);

        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["file"], "a.qoi");
        assert_eq!(value["size"], 40);
        assert_eq!(value["header"]["width"], 3);
        assert_eq!(value["header"]["height"], 2);
        assert_eq!(value["header"]["channels"], 4);
        assert_eq!(value["header"]["colorspace"], "RGBA");
        assert_eq!(value["header"]["characteristics"], "Linear");
    }
}
