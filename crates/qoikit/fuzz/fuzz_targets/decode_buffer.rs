#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let opts = qoikit::qoikit_core::options::DecoderOptions::new_cmd()
        .set_max_width(1 << 14)
        .set_max_height(1 << 14);

    let mut decoder = qoikit::QoiDecoder::new_with_options(data, opts);
    let _ = decoder.decode();
});
