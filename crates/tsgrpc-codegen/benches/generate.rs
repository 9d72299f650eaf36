//! Generation Benchmarks
//!
//! Measures end-to-end generation of one module from synthetic schemas of growing size.
//!
//! # Schema Sizes
//!
//! - **Small**: 1 service, 4 methods (one per streaming mode)
//! - **Medium**: 10 services, 40 methods
//! - **Large**: 50 services, 400 methods

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use prost_types::{
    DescriptorProto, FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto,
};
use std::hint::black_box;
use tsgrpc_codegen::Generator;
use tsgrpc_core::{GeneratorOptions, SchemaGraph};

const FILE: &str = "bench/catalog.proto";

/// Schema with `services` services of `methods` methods each, cycling through streaming modes.
fn synthetic_schema(services: usize, methods: usize) -> FileDescriptorProto {
    let message_type = (0..methods * 2)
        .map(|index| DescriptorProto {
            name: Some(format!("Message{index}")),
            ..Default::default()
        })
        .collect();

    let service = (0..services)
        .map(|service| ServiceDescriptorProto {
            name: Some(format!("Service{service}")),
            method: (0..methods)
                .map(|method| MethodDescriptorProto {
                    name: Some(format!("Call{method}")),
                    input_type: Some(format!(".bench.Message{}", method * 2)),
                    output_type: Some(format!(".bench.Message{}", method * 2 + 1)),
                    client_streaming: Some(method % 2 == 1),
                    server_streaming: Some(method % 4 >= 2),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        })
        .collect();

    FileDescriptorProto {
        name: Some(FILE.to_string()),
        package: Some("bench".to_string()),
        message_type,
        service,
        ..Default::default()
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (label, services, methods) in [("small", 1, 4), ("medium", 10, 4), ("large", 50, 8)] {
        let graph = SchemaGraph::from_descriptors(&[synthetic_schema(services, methods)]).unwrap();
        let generator = Generator::new(&graph, GeneratorOptions::default());
        let output = generator.generate_path(FILE).unwrap();

        group.throughput(Throughput::Bytes(output.content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &generator, |b, generator| {
            b.iter(|| generator.generate_path(black_box(FILE)).unwrap())
        });
    }

    group.finish();
}

fn bench_graph(c: &mut Criterion) {
    let descriptors = [synthetic_schema(50, 8)];

    c.bench_function("schema_graph/large", |b| {
        b.iter(|| SchemaGraph::from_descriptors(black_box(&descriptors)).unwrap())
    });
}

criterion_group!(benches, bench_generate, bench_graph);
criterion_main!(benches);
