use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageBuffer, Rgb};
use stegotext_core::{EmbeddingParameters, StegoEngine};

fn carrier() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(512, 512, |x, y| {
        Rgb([(64 + x % 128) as u8, (64 + y % 128) as u8, (64 + (x + y) % 128) as u8])
    }))
}

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = carrier();
    let secret_message = "Hello World!";

    c.bench_function("Image Encoding LSB", |b| {
        let engine = StegoEngine::new(EmbeddingParameters::lsb()).expect("valid parameters");
        b.iter(|| {
            engine
                .hide(&plain_image, secret_message, None)
                .expect("Cannot hide secret message")
        })
    });

    c.bench_function("Image Encoding DCT", |b| {
        let engine = StegoEngine::new(EmbeddingParameters::dct(10.0)).expect("valid parameters");
        b.iter(|| {
            engine
                .hide(&plain_image, secret_message, None)
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
