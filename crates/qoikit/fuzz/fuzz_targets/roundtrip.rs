#![no_main]

use libfuzzer_sys::fuzz_target;
use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoikit::QoiDescriptor;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1
    {
        // first byte picks the layout and width, the rest are pixels
        let colorspace = if data[0] & 1 == 0 { ColorSpace::RGB } else { ColorSpace::RGBA };
        let width = usize::from(data[0] >> 1).max(1);

        let pixels = &data[1..];
        let row = width * colorspace.num_components();
        let height = pixels.len() / row;

        if height == 0
        {
            return;
        }
        let pixels = &pixels[..row * height];
        let descriptor =
            QoiDescriptor::new(width as u32, height as u32, colorspace, ColorCharacteristics::sRGB);

        let encoded = qoikit::encode(pixels, &descriptor).expect("Failed to encode valid pixels!");
        let (decoded, decoded_descriptor) =
            qoikit::decode(&encoded, None).expect("Failed to decode encoded pixels!");

        assert_eq!(decoded_descriptor, descriptor);
        assert!(
            pixels == decoded,
            "The decoded pixels don't match the original pixels!"
        );
    }
});
