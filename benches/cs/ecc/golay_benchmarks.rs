use criterion::{black_box, criterion_group, criterion_main, Criterion};
use golay_codec::ecc::golay::{GolayCode, Message};
use golay_codec::ecc::ErrorCorrection;

fn bench_encode(c: &mut Criterion) {
    let code = GolayCode::new();
    let message = Message::from_packed(0xB3A).unwrap();

    c.bench_function("golay_encode", |b| {
        b.iter(|| code.encode(black_box(&message)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let code = GolayCode::new();
    let codeword = code.encode(&Message::from_packed(0xB3A).unwrap());

    let mut light = codeword;
    light.flip(2);

    let mut heavy = codeword;
    for pos in [1, 7, 17] {
        heavy.flip(pos);
    }

    let mut uncorrectable = codeword;
    for pos in 0..4 {
        uncorrectable.flip(pos);
    }

    c.bench_function("golay_decode_clean", |b| {
        b.iter(|| code.decode(black_box(&codeword)))
    });
    c.bench_function("golay_decode_one_error", |b| {
        b.iter(|| code.decode(black_box(&light)))
    });
    c.bench_function("golay_decode_three_errors", |b| {
        b.iter(|| code.decode(black_box(&heavy)))
    });
    c.bench_function("golay_decode_uncorrectable", |b| {
        b.iter(|| code.decode(black_box(&uncorrectable)))
    });
}

fn bench_bytes(c: &mut Criterion) {
    let code = GolayCode::new();
    let data: Vec<u8> = (0..3 * 1024).map(|i| (i % 251) as u8).collect();
    let encoded = ErrorCorrection::encode(&code, &data).unwrap();

    c.bench_function("golay_encode_3k_bytes", |b| {
        b.iter(|| ErrorCorrection::encode(&code, black_box(&data)))
    });
    c.bench_function("golay_decode_3k_bytes", |b| {
        b.iter(|| ErrorCorrection::decode(&code, black_box(&encoded)))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_bytes);
criterion_main!(benches);
