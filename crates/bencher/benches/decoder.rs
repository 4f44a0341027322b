use bencher::TestCase;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_chunked::codec::{ChunkedDecoder, PayloadDecoder};
use micro_chunked::protocol::{Decoded, Settings};
use std::hint::black_box;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;

static SMALL_CHUNKS: [&str; 3] = ["Hello, world!", "But what's wrong with you?", "Finally am here"];
static CHUNK: [&str; 1] = ["But what's wrong with you?"];

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("small_3_chunks", &SMALL_CHUNKS),
        TestCase::repeated("medium_15_chunks", &CHUNK, 15),
        TestCase::repeated("big_100_chunks", &CHUNK, 100),
    ]
}

fn benchmark_chunked_decoder(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chunked_decoder");

    for case in create_test_cases() {
        let encoded = case.encoded();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &encoded, |b, encoded| {
            b.iter(|| {
                let mut decoder = ChunkedDecoder::new(Settings::default());
                let mut data = encoded.as_slice();
                let mut payload = 0;
                loop {
                    match decoder.decode(data, false).expect("input should be a valid chunked body") {
                        Decoded::Chunk { chunk, extra } => {
                            payload += chunk.len();
                            data = extra;
                        }
                        Decoded::Incomplete => unreachable!("input holds the whole body"),
                        Decoded::Eof { extra } => break black_box((payload, extra.len())),
                    }
                }
            });
        });
    }

    group.finish();
}

fn benchmark_payload_decoder(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("payload_decoder");

    for case in create_test_cases() {
        let encoded = case.encoded();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &encoded, |b, encoded| {
            b.iter_batched_ref(
                || BytesMut::from(encoded.as_slice()),
                |bytes_mut| {
                    let mut decoder = PayloadDecoder::new(Settings::default(), false);
                    while let Some(item) = decoder.decode(bytes_mut).expect("input should be a valid chunked body") {
                        if item.is_eof() {
                            break;
                        }
                        black_box(item);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_byte_by_byte(criterion: &mut Criterion) {
    let case = TestCase::repeated("medium_15_chunks", &CHUNK, 15);
    let encoded = case.encoded();

    let mut group = criterion.benchmark_group("chunked_decoder_fragmented");
    group.throughput(Throughput::Bytes(case.payload_len() as u64));
    group.bench_function(case.name(), |b| {
        b.iter(|| {
            let mut decoder = ChunkedDecoder::new(Settings::default());
            for byte in encoded.chunks(1) {
                let decoded = decoder.decode(byte, false).expect("input should be a valid chunked body");
                black_box(decoded);
            }
        });
    });
    group.finish();
}

criterion_group!(decoder, benchmark_chunked_decoder, benchmark_payload_decoder, benchmark_byte_by_byte);
criterion_main!(decoder);
