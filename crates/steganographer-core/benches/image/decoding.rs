use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use steganographer_core::transfer::{Decoder, Encoder, Segmented};
use steganographer_core::{HostImage, StegoOptions};

pub fn image_decoding(c: &mut Criterion) {
    let options = StegoOptions::default();
    let secret = vec![0x5au8; 4096];
    let plain_image = HostImage::from_file("tests/images/plain/carrier-image.png".as_ref())
        .expect("Input image is not readable.");
    let mut encoder = Encoder::new(
        plain_image,
        Cursor::new(secret.clone()),
        secret.len() as u64,
        "secret.bin",
        "SuperSecret42",
        &options,
    )
    .expect("Cannot prepare encoder");
    while encoder.has_next() {
        encoder.process_next_segment().expect("Cannot write secret");
    }
    let secret_image = encoder.into_image();
    let out_dir = tempfile::tempdir().expect("Cannot create temporary directory");

    c.bench_function("Image Decoding", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(
                secret_image.clone(),
                out_dir.path(),
                "SuperSecret42",
                &options,
            )
            .expect("Cannot find the secret");
            while decoder.has_next() {
                decoder.process_next_segment().expect("Cannot read secret");
            }
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
