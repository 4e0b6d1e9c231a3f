use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use steganographer_core::transfer::{Encoder, Segmented};
use steganographer_core::{HostImage, StegoOptions};

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = HostImage::from_file("tests/images/plain/carrier-image.png".as_ref())
        .expect("Input image is not readable.");
    let secret = vec![0xa5u8; 4096];
    let options = StegoOptions::default();

    c.bench_function("Image Encoding", |b| {
        b.iter(|| {
            let mut encoder = Encoder::new(
                plain_image.clone(),
                Cursor::new(secret.clone()),
                secret.len() as u64,
                "secret.bin",
                "SuperSecret42",
                &options,
            )
            .expect("Cannot prepare encoder");
            while encoder.has_next() {
                encoder
                    .process_next_segment()
                    .expect("Cannot write secret");
            }
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
