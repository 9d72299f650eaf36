//! Descriptor builders shared by the integration tests.

#![allow(dead_code)]

use prost_types::{
    DescriptorProto, FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto,
};

pub fn message(name: &str) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn method(
    name: &str,
    input: &str,
    output: &str,
    client_streaming: bool,
    server_streaming: bool,
) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(input.to_string()),
        output_type: Some(output.to_string()),
        client_streaming: Some(client_streaming),
        server_streaming: Some(server_streaming),
        ..Default::default()
    }
}

pub fn service(name: &str, methods: Vec<MethodDescriptorProto>) -> ServiceDescriptorProto {
    ServiceDescriptorProto {
        name: Some(name.to_string()),
        method: methods,
        ..Default::default()
    }
}

pub fn file(
    name: &str,
    package: &str,
    messages: Vec<DescriptorProto>,
    services: Vec<ServiceDescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: (!package.is_empty()).then(|| package.to_string()),
        message_type: messages,
        service: services,
        ..Default::default()
    }
}

/// `greeter.proto`: package `greet`, unary `Greeter.SayHello(HelloRequest) -> HelloReply`.
pub fn greeter() -> FileDescriptorProto {
    file(
        "greeter.proto",
        "greet",
        vec![message("HelloRequest"), message("HelloReply")],
        vec![service(
            "Greeter",
            vec![method(
                "SayHello",
                ".greet.HelloRequest",
                ".greet.HelloReply",
                false,
                false,
            )],
        )],
    )
}
