use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scan_bands::{scan_frame, PixelBuffer, ScanConfig};

/// 1200x800 white frame with a darker block across the scan strip
fn synthetic_frame() -> Vec<u8> {
    let (w, h) = (1200usize, 800usize);
    let mut data = vec![255u8; w * h * 4];
    for y in 350..450 {
        for x in 300..900 {
            let idx = (y * w + x) * 4;
            data[idx..idx + 4].copy_from_slice(&[200, 30, 30, 255]);
        }
    }
    data
}

fn benchmark_scan_frame(c: &mut Criterion) {
    let data = synthetic_frame();
    let buffer = PixelBuffer::from_raw(1200, 800, &data).unwrap();
    let config = ScanConfig::default_calibration_0();

    c.bench_function("scan_frame_1200x800", |b| {
        b.iter(|| scan_frame(black_box(&buffer), black_box(&config)).unwrap())
    });

    let mut no_boost = ScanConfig::default_calibration_0();
    no_boost.boost = None;
    c.bench_function("scan_frame_1200x800_no_boost", |b| {
        b.iter(|| scan_frame(black_box(&buffer), black_box(&no_boost)).unwrap())
    });
}

criterion_group!(benches, benchmark_scan_frame);
criterion_main!(benches);
