use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use qoikit::qoikit_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoikit::QoiDescriptor;
use qoikit_benches::sample_image;

fn decode_rapid_qoi(data: &[u8]) -> Vec<u8>
{
    rapid_qoi::Qoi::decode_alloc(data).unwrap().1
}

fn decode_qoikit(data: &[u8]) -> Vec<u8>
{
    qoikit::QoiDecoder::new(data).decode().unwrap()
}

fn bench_decode(c: &mut Criterion)
{
    let (width, height) = (1920, 1080);

    for colorspace in [ColorSpace::RGB, ColorSpace::RGBA]
    {
        let pixels = sample_image(width, height, colorspace.num_components());
        let descriptor = QoiDescriptor::new(
            width as u32,
            height as u32,
            colorspace,
            ColorCharacteristics::sRGB
        );
        let data = qoikit::encode(&pixels, &descriptor).unwrap();

        let mut group = c.benchmark_group(format!("qoi: Simple decode {colorspace:?}"));

        group.throughput(Throughput::Bytes(pixels.len() as u64));

        group.bench_function("rapid-qoi", |b| {
            b.iter(|| black_box(decode_rapid_qoi(data.as_slice())))
        });

        group.bench_function("qoikit", |b| {
            b.iter(|| black_box(decode_qoikit(data.as_slice())))
        });
        group.finish();
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decode);

criterion_main!(benches);
