use criterion::{criterion_group, criterion_main, Criterion};
use steganographer_core::transfer::{Analyzer, Segmented};
use steganographer_core::HostImage;

pub fn image_analysis(c: &mut Criterion) {
    let image = HostImage::from_file("tests/images/plain/carrier-image.png".as_ref())
        .expect("Input image is not readable.");

    c.bench_function("Image Analysis", |b| {
        b.iter(|| {
            let mut analyzer = Analyzer::new(image.clone());
            while analyzer.has_next() {
                analyzer.process_next_segment().expect("Cannot analyze");
            }
            analyzer.verdict()
        })
    });
}

criterion_group!(benches, image_analysis);
criterion_main!(benches);
