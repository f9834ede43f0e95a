use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageBuffer, Rgb};
use stegotext_core::{EmbeddingParameters, StegoEngine};

fn carrier() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(512, 512, |x, y| {
        Rgb([(64 + x % 128) as u8, (64 + y % 128) as u8, (64 + (x + y) % 128) as u8])
    }))
}

pub fn image_decoding(c: &mut Criterion) {
    for (name, params) in [
        ("Image Decoding LSB", EmbeddingParameters::lsb()),
        ("Image Decoding DCT", EmbeddingParameters::dct(10.0)),
    ] {
        let engine = StegoEngine::new(params).expect("valid parameters");
        let secret_image = engine
            .hide(&carrier(), "Hello World!", None)
            .expect("Cannot hide secret message");

        c.bench_function(name, |b| {
            b.iter(|| {
                engine
                    .unveil(&secret_image, None)
                    .expect("Cannot unveil secret message")
            })
        });
    }
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
