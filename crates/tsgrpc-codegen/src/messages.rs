//! Serializer bindings for message types used by services.

use crate::ir::{Function, Item, Param};
use crate::naming;
use std::collections::BTreeMap;
use tsgrpc_core::{GenerateResult, MessageId, SchemaFile, SchemaGraph};

/// Every message used as input or output of any method of `file`, sorted by full name.
pub fn reachable_messages(graph: &SchemaGraph, file: &SchemaFile) -> Vec<MessageId> {
    let mut reachable = BTreeMap::new();
    for method in file.services.iter().flat_map(|service| &service.methods) {
        for id in [method.input, method.output] {
            reachable.insert(graph.message(id).full_name.as_str(), id);
        }
    }
    reachable.into_values().collect()
}

/// `serialize_<id>` and `deserialize_<id>` for one message, each followed by a blank line.
pub fn message_bindings(graph: &SchemaGraph, id: MessageId) -> GenerateResult<Vec<Item>> {
    let message = graph.message(id);
    let object_path = naming::object_path(message, graph.owner(message))?;
    let identifier = naming::sanitized_identifier(&message.full_name);

    Ok(vec![
        Item::Function(Function {
            name: format!("serialize_{identifier}"),
            params: vec![Param::new("arg", object_path.as_str())],
            returns: "any".to_string(),
            body: vec!["return Buffer.from(arg.serializeBinary());".to_string()],
        }),
        Item::Blank,
        Item::Function(Function {
            name: format!("deserialize_{identifier}"),
            params: vec![Param::new("buffer_arg", "any")],
            returns: "any".to_string(),
            body: vec![format!(
                "return {object_path}.deserializeBinary(new Uint8Array(buffer_arg));"
            )],
        }),
        Item::Blank,
    ])
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::render::Renderer;
    use prost_types::{
        DescriptorProto, FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto,
    };

    fn message(name: &str) -> DescriptorProto {
        DescriptorProto {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
        MethodDescriptorProto {
            name: Some(name.to_string()),
            input_type: Some(input.to_string()),
            output_type: Some(output.to_string()),
            ..Default::default()
        }
    }

    fn graph() -> SchemaGraph {
        let file = FileDescriptorProto {
            name: Some("shop.proto".to_string()),
            package: Some("shop".to_string()),
            message_type: vec![message("Zebra"), message("Apple"), message("Unused")],
            service: vec![
                ServiceDescriptorProto {
                    name: Some("First".to_string()),
                    method: vec![method("Buy", ".shop.Zebra", ".shop.Apple")],
                    ..Default::default()
                },
                ServiceDescriptorProto {
                    name: Some("Second".to_string()),
                    method: vec![method("Sell", ".shop.Apple", ".shop.Zebra")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        SchemaGraph::from_descriptors(&[file]).unwrap()
    }

    #[test]
    fn reachable_messages___dedupes_and_sorts_by_full_name() {
        let graph = graph();
        let file = graph.file(graph.file_id("shop.proto").unwrap());

        let names: Vec<_> = reachable_messages(&graph, file)
            .into_iter()
            .map(|id| graph.message(id).full_name.as_str())
            .collect();

        assert_eq!(names, vec!["shop.Apple", "shop.Zebra"]);
    }

    #[test]
    fn reachable_messages___no_services___is_empty() {
        let file = FileDescriptorProto {
            name: Some("plain.proto".to_string()),
            message_type: vec![message("Plain")],
            ..Default::default()
        };
        let graph = SchemaGraph::from_descriptors(&[file]).unwrap();

        let file = graph.file(graph.file_id("plain.proto").unwrap());

        assert!(reachable_messages(&graph, file).is_empty());
    }

    #[test]
    fn message_bindings___renders_serializer_pair() {
        let graph = graph();
        let id = graph.message_id("shop.Apple").unwrap();

        let mut renderer = Renderer::new(String::new());
        renderer.render_all(&message_bindings(&graph, id).unwrap()).unwrap();

        assert_eq!(
            renderer.into_inner(),
            "function serialize_shop_Apple(arg: shop_pb.Apple): any {\n\
             \x20 return Buffer.from(arg.serializeBinary());\n\
             }\n\
             \n\
             function deserialize_shop_Apple(buffer_arg: any): any {\n\
             \x20 return shop_pb.Apple.deserializeBinary(new Uint8Array(buffer_arg));\n\
             }\n\
             \n"
        );
    }
}
