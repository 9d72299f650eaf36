//! Integration tests for generation from a descriptor set on disk.

#![allow(non_snake_case)]

use prost::Message;
use prost_types::{
    DescriptorProto, FileDescriptorProto, FileDescriptorSet, MethodDescriptorProto,
    ServiceDescriptorProto,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tsgrpc_cli::offline;

fn descriptor_set() -> FileDescriptorSet {
    let types = FileDescriptorProto {
        name: Some("common/types.proto".to_string()),
        package: Some("common".to_string()),
        message_type: vec![DescriptorProto {
            name: Some("Empty".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };
    let health = FileDescriptorProto {
        name: Some("api/health.proto".to_string()),
        package: Some("api".to_string()),
        dependency: vec!["common/types.proto".to_string()],
        service: vec![ServiceDescriptorProto {
            name: Some("Health".to_string()),
            method: vec![MethodDescriptorProto {
                name: Some("Watch".to_string()),
                input_type: Some(".common.Empty".to_string()),
                output_type: Some(".common.Empty".to_string()),
                server_streaming: Some(true),
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    };
    FileDescriptorSet {
        file: vec![types, health],
    }
}

fn write_set(dir: &TempDir, set: &FileDescriptorSet) -> PathBuf {
    let path = dir.path().join("set.pb");
    fs::write(&path, set.encode_to_vec()).unwrap();
    path
}

#[test]
fn run___no_files_listed___generates_every_file() {
    let temp_dir = TempDir::new().unwrap();
    let set = write_set(&temp_dir, &descriptor_set());
    let out = temp_dir.path().join("out");

    let written = offline::run(&set, &out, "", &[]).unwrap();

    assert_eq!(
        written,
        vec![
            out.join("common/types_grpc_pb.ts"),
            out.join("api/health_grpc_pb.ts"),
        ]
    );
    let types = fs::read_to_string(out.join("common/types_grpc_pb.ts")).unwrap();
    assert!(types.starts_with("// GENERATED CODE -- NO SERVICES IN PROTO\n"));
    let health = fs::read_to_string(out.join("api/health_grpc_pb.ts")).unwrap();
    assert!(health.contains("import * as common$stypes_pb from '../common/types_pb';\n"));
    assert!(health.contains("): grpc.ClientReadableStream<common$stypes_pb.Empty>;\n"));
}

#[test]
fn run___listed_files___generates_only_those() {
    let temp_dir = TempDir::new().unwrap();
    let set = write_set(&temp_dir, &descriptor_set());
    let out = temp_dir.path().join("out");

    let written = offline::run(&set, &out, "", &["api/health.proto".to_string()]).unwrap();

    assert_eq!(written, vec![out.join("api/health_grpc_pb.ts")]);
    assert!(!out.join("common").exists());
}

#[test]
fn run___failing_file___writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let set = write_set(&temp_dir, &descriptor_set());
    let out = temp_dir.path().join("out");

    let err = offline::run(
        &set,
        &out,
        "",
        &["api/health.proto".to_string(), "nope.proto".to_string()],
    )
    .unwrap_err();

    assert!(err.to_string().contains("nope.proto: unknown schema file"));
    assert!(!out.exists());
}

#[test]
fn run___missing_descriptor_set___returns_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = offline::run(
        &temp_dir.path().join("absent.pb"),
        temp_dir.path(),
        "",
        &[],
    )
    .unwrap_err();

    assert!(err.to_string().contains("Failed to read descriptor set"));
}

#[test]
fn run___invalid_parameter___returns_error() {
    let temp_dir = TempDir::new().unwrap();
    let set = write_set(&temp_dir, &descriptor_set());

    let err = offline::run(&set, temp_dir.path(), "runtime_module", &[]).unwrap_err();

    assert!(err.to_string().contains("configuration error"));
    assert!(!temp_dir.path().join("api").exists());
}

#[test]
fn run___unknown_parameter___ignored() {
    let temp_dir = TempDir::new().unwrap();
    let set = write_set(&temp_dir, &descriptor_set());
    let out = temp_dir.path().join("out");

    let written = offline::run(&set, &out, "flavor=vanilla", &[]).unwrap();

    assert_eq!(written.len(), 2);
}
