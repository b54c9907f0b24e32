//! Criterion benchmarks for rtlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rtlog::prelude::*;
use std::io;
use std::sync::Arc;

/// Writer that drops every byte
#[derive(Clone, Copy)]
struct Discard;

impl io::Write for Discard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn sink_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .level(level)
        .writer(JsonWriter::new(Discard))
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let options = vec![
        LoggerOption::level("debug"),
        LoggerOption::writer(JsonWriter::new(Discard)),
    ];

    group.bench_function("with_options", |b| {
        b.iter(|| black_box(Logger::with_options(&options)));
    });

    let ext = rtlog::optctx::new_context(&http::Extensions::new(), OptCtx::new(options.clone()));
    group.bench_function("from_context", |b| {
        b.iter(|| black_box(ext.logger()));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Trace);

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("filtered", |b| {
        let logger = sink_logger(LogLevel::Error);
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("console", |b| {
        let logger = Logger::builder()
            .writer(ConsoleWriter::new(Discard))
            .build();
        b.iter(|| logger.info(black_box("Console message")));
    });

    group.finish();
}

fn bench_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("fields");
    group.throughput(Throughput::Elements(1));

    let mut logger = sink_logger(LogLevel::Info);
    for i in 0..8 {
        logger.set_permanent(format!("perm_{}", i), i);
    }

    group.bench_function("entry_3_fields", |b| {
        b.iter(|| {
            logger
                .field("user_id", black_box(12345))
                .field("path", "/api/orders")
                .field("latency_ms", 42.5)
                .info("Request processed")
        });
    });

    let err = io::Error::new(io::ErrorKind::Other, "connection reset");
    group.bench_function("error_field", |b| {
        b.iter(|| logger.error_field(black_box(&err)).error("Request failed"));
    });

    group.bench_function("set_permanent", |b| {
        b.iter(|| {
            let mut child = logger.clone();
            child.set_permanent("request_id", black_box("r-1"));
            black_box(child)
        });
    });

    group.finish();
}

fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");
    let threads = 4;
    let per_thread = 250;
    group.throughput(Throughput::Elements((threads * per_thread) as u64));

    let logger = Arc::new(sink_logger(LogLevel::Info));

    group.bench_function("4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..per_thread {
                            logger.field("thread", t).field("seq", i).info("concurrent");
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_logging,
    bench_fields,
    bench_concurrent
);
criterion_main!(benches);
