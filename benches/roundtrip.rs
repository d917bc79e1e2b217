// benches/roundtrip.rs
//! Stream throughput: encrypt → decrypt in memory, KDF excluded

use filecrypt_rs::{decrypt_stream, derive_key, encrypt_stream, PasswordString, StreamControl};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let password = PasswordString::new("benchmark-password".to_string());
    let key = derive_key(&password, 32).unwrap();

    let sizes = [KB, 64 * KB, MB, 10 * MB];

    for &size in &sizes {
        let input = vec![0x41u8; size]; // repeating 'A'
        let control = StreamControl::new(size as u64);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut encrypted = Vec::with_capacity(size + 16);
                encrypt_stream(
                    Cursor::new(black_box(&input)),
                    &mut encrypted,
                    key.expose_secret(),
                    &control,
                    |_| {},
                )
                .unwrap();

                let mut decrypted = Vec::with_capacity(size);
                decrypt_stream(
                    Cursor::new(black_box(&encrypted)),
                    &mut decrypted,
                    key.expose_secret(),
                    &control,
                    |_| {},
                )
                .unwrap();

                black_box(decrypted);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
