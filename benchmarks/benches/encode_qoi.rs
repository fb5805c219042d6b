use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use qoikit::qoikit_core::bit_depth::BitDepth;
use qoikit::qoikit_core::colorspace::ColorSpace;
use qoikit::qoikit_core::options::EncoderOptions;
use qoikit::QoiEncoder;
use qoikit_benches::sample_image;

fn encode_qoikit(pixels: &[u8], options: EncoderOptions, sink: &mut Vec<u8>) -> usize
{
    sink.clear();
    QoiEncoder::new(pixels, options).encode(sink).unwrap()
}

fn bench_encode(c: &mut Criterion)
{
    let (width, height) = (1920, 1080);

    for colorspace in [ColorSpace::RGB, ColorSpace::RGBA]
    {
        let pixels = sample_image(width, height, colorspace.num_components());
        let options = EncoderOptions::new(width, height, colorspace, BitDepth::Eight);
        let mut sink = Vec::new();

        let mut group = c.benchmark_group(format!("qoi: Simple encode {colorspace:?}"));

        group.throughput(Throughput::Bytes(pixels.len() as u64));

        group.bench_function("qoikit", |b| {
            b.iter(|| black_box(encode_qoikit(&pixels, options, &mut sink)))
        });
        group.finish();
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_encode);

criterion_main!(benches);
