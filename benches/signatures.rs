//! Benchmarks for catalog value parsing.
//!
//! Tests performance of the operations run for every entry while a catalog is loaded and
//! matched:
//! - Method signature decoding (simple, instance, generic, truncated)
//! - Assembly reference parsing (full display name, bare name)
//! - Cache key derivation
//! - Parsing a complete definition document

extern crate hookscope;

use criterion::{criterion_group, criterion_main, Criterion};
use hookscope::{
    integrations::load_integrations_from_str, AssemblyReference, MethodReference,
    MethodSignature, Version,
};
use std::hint::black_box;

/// Decode every fixed-position field of a signature.
fn decode(signature: &MethodSignature) -> (bool, usize, usize, bool, usize) {
    (
        signature.is_instance_method(),
        signature.number_of_type_arguments(),
        signature.number_of_arguments(),
        signature.return_type_is_object(),
        signature.index_of_return_type(),
    )
}

/// Benchmark decoding a static wrapper signature.
/// Signature: static int32 Wrapper(object, int32, int32, int64)
fn bench_signature_static(c: &mut Criterion) {
    let signature = MethodSignature::new(vec![0x00, 0x04, 0x08, 0x1C, 0x08, 0x08, 0x0A]);

    c.bench_function("sig_decode_static", |b| {
        b.iter(|| black_box(decode(black_box(&signature))));
    });
}

/// Benchmark decoding an instance method returning object.
/// Signature: object Instance.Method(int32, int32)
fn bench_signature_instance(c: &mut Criterion) {
    let signature = MethodSignature::new(vec![0x20, 0x02, 0x1C, 0x08, 0x08]);

    c.bench_function("sig_decode_instance", |b| {
        b.iter(|| black_box(decode(black_box(&signature))));
    });
}

/// Benchmark decoding a generic instance method.
/// Signature: string Instance.Method<T>(T, T)
fn bench_signature_generic(c: &mut Criterion) {
    let signature = MethodSignature::new(vec![0x30, 0x01, 0x02, 0x0E, 0x1E, 0x00, 0x1E, 0x00]);

    c.bench_function("sig_decode_generic", |b| {
        b.iter(|| black_box(decode(black_box(&signature))));
    });
}

/// Benchmark decoding a blob too short for its header.
fn bench_signature_truncated(c: &mut Criterion) {
    let signature = MethodSignature::new(vec![0x30]);

    c.bench_function("sig_decode_truncated", |b| {
        b.iter(|| black_box(decode(black_box(&signature))));
    });
}

/// Benchmark parsing a signature from its hex text form.
fn bench_signature_from_hex(c: &mut Criterion) {
    let text = "00 06 1C 1C 1C 1C 08 08 0A";

    c.bench_function("sig_from_hex", |b| {
        b.iter(|| black_box(MethodSignature::from_hex(black_box(text))));
    });
}

/// Benchmark parsing a fully qualified display name.
fn bench_assembly_full(c: &mut Criterion) {
    let display_name =
        "System.Data, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

    c.bench_function("asmref_parse_full", |b| {
        b.iter(|| black_box(AssemblyReference::parse(black_box(display_name))));
    });
}

/// Benchmark parsing a bare assembly name (every field falls back to its default).
fn bench_assembly_bare(c: &mut Criterion) {
    c.bench_function("asmref_parse_bare", |b| {
        b.iter(|| black_box(AssemblyReference::parse(black_box("System.Data"))));
    });
}

/// Benchmark deriving both cache keys of a reference.
fn bench_cache_keys(c: &mut Criterion) {
    let reference = MethodReference::new(
        "System.Data",
        "System.Data.Common.DbCommand",
        "ExecuteNonQuery",
    )
    .with_versions(Version::new(4, 0, 0, 0), Version::new(4, 65535, 65535, 65535));

    c.bench_function("cache_keys", |b| {
        b.iter(|| {
            let reference = black_box(&reference);
            black_box((reference.type_cache_key(), reference.method_cache_key()))
        });
    });
}

/// Benchmark loading the sample definition document.
fn bench_load_catalog(c: &mut Criterion) {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/samples/integrations.json");
    let Ok(json) = std::fs::read_to_string(path) else {
        eprintln!("sample catalog not found, skipping catalog benchmark");
        return;
    };

    c.bench_function("catalog_load_sample", |b| {
        b.iter(|| black_box(load_integrations_from_str(black_box(&json))));
    });
}

criterion_group!(
    benches,
    // Method signatures
    bench_signature_static,
    bench_signature_instance,
    bench_signature_generic,
    bench_signature_truncated,
    bench_signature_from_hex,
    // Assembly references
    bench_assembly_full,
    bench_assembly_bare,
    // Catalog
    bench_cache_keys,
    bench_load_catalog,
);
criterion_main!(benches);
