//! Service contract declarations.
//!
//! Each service produces, in order:
//!
//! 1. `I<Service>Implementation`: server handler per method
//! 2. `<Service>Service`: the method definition table
//! 3. `I<Service>Client`: client call overloads
//! 4. `<Service>ClientConstructor` and the `<Service>Client` binding
//! 5. `I<Service>PromiseClient`: promise overloads for unary methods
//!
//! Methods keep their declared order in every declaration.

use crate::comments::{CommentPosition, prefixed_comments};
use crate::imports::RUNTIME_ALIAS;
use crate::ir::{
    Const, Entry, Interface, Item, Member, MethodSignature, Param, ParamLayout, PropertyKey, Value,
};
use crate::naming;
use tracing::debug;
use tsgrpc_core::{GenerateResult, Method, SchemaGraph, Service, StreamingMode};

const COMMENT_PREFIX: &str = "//";

/// A method with every name it is referenced by resolved once.
struct ResolvedMethod<'a> {
    method: &'a Method,
    key: PropertyKey,
    request: String,
    response: String,
    request_id: String,
    response_id: String,
}

impl<'a> ResolvedMethod<'a> {
    fn resolve(graph: &SchemaGraph, method: &'a Method) -> GenerateResult<Self> {
        let input = graph.message(method.input);
        let output = graph.message(method.output);

        Ok(Self {
            method,
            key: PropertyKey::member(naming::method_interface_name(&method.name)),
            request: naming::object_path(input, graph.owner(input))?,
            response: naming::object_path(output, graph.owner(output))?,
            request_id: naming::sanitized_identifier(&input.full_name),
            response_id: naming::sanitized_identifier(&output.full_name),
        })
    }

    fn mode(&self) -> StreamingMode {
        self.method.mode
    }

    fn leading_comments(&self) -> Option<Member> {
        comment_member(prefixed_comments(
            self.method,
            CommentPosition::Leading,
            COMMENT_PREFIX,
        ))
    }

    fn trailing_comments(&self) -> Option<Member> {
        comment_member(prefixed_comments(
            self.method,
            CommentPosition::Trailing,
            COMMENT_PREFIX,
        ))
    }

    fn overload(&self, params: Vec<Param>, returns: String, layout: ParamLayout) -> Member {
        Member::Method(MethodSignature {
            key: self.key.clone(),
            params,
            returns,
            layout,
        })
    }
}

/// Every declaration of one service.
pub fn service_contract(graph: &SchemaGraph, service: &Service) -> GenerateResult<Vec<Item>> {
    let methods = service
        .methods
        .iter()
        .map(|method| ResolvedMethod::resolve(graph, method))
        .collect::<GenerateResult<Vec<_>>>()?;

    debug!(
        service = %service.full_name,
        methods = methods.len(),
        "emitting service contract"
    );

    let service_comments = prefixed_comments(service, CommentPosition::Leading, COMMENT_PREFIX);
    let mut items = Vec::new();

    push_comment(&mut items, &service_comments);
    items.push(Item::Interface(implementation_interface(service, &methods)));
    items.push(Item::Blank);

    items.push(Item::Const(definition_table(service, &methods)));
    items.push(Item::Blank);

    push_comment(&mut items, &service_comments);
    items.push(Item::Interface(client_interface(service, &methods)));
    items.push(Item::Blank);

    items.push(Item::Interface(client_constructor(service)));
    items.push(Item::Blank);
    items.push(Item::Const(client_binding(service)));
    items.push(Item::Blank);

    items.push(Item::Interface(promise_client_interface(service, &methods)));
    items.push(Item::Blank);

    Ok(items)
}

fn implementation_interface(service: &Service, methods: &[ResolvedMethod<'_>]) -> Interface {
    let mut members = Vec::new();

    for method in methods {
        let handler = match method.mode() {
            StreamingMode::Unary => "handleUnaryCall",
            StreamingMode::ClientStreaming => "handleClientStreamingCall",
            StreamingMode::ServerStreaming => "handleServerStreamingCall",
            StreamingMode::BidiStreaming => "handleBidiStreamingCall",
        };

        members.extend(method.leading_comments());
        members.push(Member::Property {
            key: method.key.clone(),
            ty: format!(
                "{RUNTIME_ALIAS}.{handler}<{}, {}>",
                method.request, method.response
            ),
        });
        members.extend(method.trailing_comments());
    }

    Interface {
        name: implementation_name(service),
        extends: None,
        members,
    }
}

fn definition_table(service: &Service, methods: &[ResolvedMethod<'_>]) -> Const {
    let entries = methods
        .iter()
        .map(|method| Entry {
            key: method.key.clone(),
            value: Value::cast(
                format!(
                    "{RUNTIME_ALIAS}.MethodDefinition<{}, {}>",
                    method.request, method.response
                ),
                Value::Object(method_definition(service, method)),
            ),
        })
        .collect();

    Const {
        name: format!("{}Service", service.name),
        ty: Some(format!(
            "{RUNTIME_ALIAS}.ServiceDefinition<{}>",
            implementation_name(service)
        )),
        value: Value::Object(entries),
    }
}

fn method_definition(service: &Service, method: &ResolvedMethod<'_>) -> Vec<Entry> {
    let mode = method.mode();
    vec![
        Entry::new(
            "path",
            Value::Str(format!("/{}/{}", service.full_name, method.method.name)),
        ),
        Entry::new("requestStream", Value::Bool(mode.client_streaming())),
        Entry::new("responseStream", Value::Bool(mode.server_streaming())),
        Entry::new("requestType", Value::ident(&method.request)),
        Entry::new("responseType", Value::ident(&method.response)),
        Entry::new(
            "requestSerialize",
            Value::ident(format!("serialize_{}", method.request_id)),
        ),
        Entry::new(
            "requestDeserialize",
            Value::ident(format!("deserialize_{}", method.request_id)),
        ),
        Entry::new(
            "responseSerialize",
            Value::ident(format!("serialize_{}", method.response_id)),
        ),
        Entry::new(
            "responseDeserialize",
            Value::ident(format!("deserialize_{}", method.response_id)),
        ),
    ]
}

fn client_interface(service: &Service, methods: &[ResolvedMethod<'_>]) -> Interface {
    let mut members = Vec::new();

    for method in methods {
        members.extend(method.leading_comments());

        let request = Param::new("request", method.request.as_str());
        let metadata = metadata_param();

        match method.mode() {
            StreamingMode::Unary => {
                let callback = Param::new(
                    "callback",
                    format!("{RUNTIME_ALIAS}.requestCallback<{}>", method.response),
                );
                for params in [
                    vec![request.clone(), callback.clone()],
                    vec![request.clone(), metadata.clone(), callback.clone()],
                    vec![request, metadata, options_param(), callback],
                ] {
                    members.push(method.overload(params, "void".to_string(), ParamLayout::Stacked));
                }
                members.push(Member::Gap);
            }
            StreamingMode::ClientStreaming => {
                let returns = format!("{RUNTIME_ALIAS}.ClientWritableStream<{}>", method.request);
                members.push(method.overload(Vec::new(), returns.clone(), ParamLayout::Inline));
                members.push(method.overload(vec![metadata], returns, ParamLayout::Inline));
            }
            StreamingMode::ServerStreaming => {
                let returns = format!("{RUNTIME_ALIAS}.ClientReadableStream<{}>", method.response);
                members.push(method.overload(
                    vec![request.clone()],
                    returns.clone(),
                    ParamLayout::Stacked,
                ));
                members.push(method.overload(
                    vec![request, metadata],
                    returns,
                    ParamLayout::Stacked,
                ));
            }
            StreamingMode::BidiStreaming => {
                let returns = format!(
                    "{RUNTIME_ALIAS}.ClientDuplexStream<{}, {}>",
                    method.request, method.response
                );
                members.push(method.overload(Vec::new(), returns.clone(), ParamLayout::Inline));
                members.push(method.overload(vec![metadata], returns, ParamLayout::Inline));
            }
        }
    }

    Interface {
        name: client_interface_name(service),
        extends: Some(format!("{RUNTIME_ALIAS}.Client")),
        members,
    }
}

fn client_constructor(service: &Service) -> Interface {
    Interface {
        name: constructor_name(service),
        extends: None,
        members: vec![Member::Construct {
            params: vec![
                Param::new("address", "string"),
                Param::new("credentials", format!("{RUNTIME_ALIAS}.ChannelCredentials")),
                Param::optional("options", "object"),
            ],
            returns: client_interface_name(service),
        }],
    }
}

fn client_binding(service: &Service) -> Const {
    Const {
        name: format!("{}Client", service.name),
        ty: None,
        value: Value::cast(
            constructor_name(service),
            Value::Call {
                callee: format!("{RUNTIME_ALIAS}.makeGenericClientConstructor"),
                args: vec![
                    Value::ident(format!("{}Service", service.name)),
                    Value::Str(service.full_name.clone()),
                    Value::Object(Vec::new()),
                ],
            },
        ),
    }
}

fn promise_client_interface(service: &Service, methods: &[ResolvedMethod<'_>]) -> Interface {
    let mut members = Vec::new();

    for method in methods {
        match method.mode() {
            StreamingMode::Unary => {
                members.extend(method.leading_comments());

                let request = Param::new("request", method.request.as_str());
                let returns = format!("Promise<{}>", method.response);
                for params in [
                    vec![request.clone()],
                    vec![request.clone(), metadata_param()],
                    vec![request, metadata_param(), options_param()],
                ] {
                    members.push(method.overload(params, returns.clone(), ParamLayout::Stacked));
                }
                members.push(Member::Gap);
            }
            StreamingMode::ClientStreaming
            | StreamingMode::ServerStreaming
            | StreamingMode::BidiStreaming => {}
        }
    }

    Interface {
        name: format!("I{}PromiseClient", service.name),
        extends: None,
        members,
    }
}

fn metadata_param() -> Param {
    Param::new("metadata", format!("{RUNTIME_ALIAS}.Metadata | null"))
}

fn options_param() -> Param {
    Param::new("options", format!("{RUNTIME_ALIAS}.CallOptions | null"))
}

fn implementation_name(service: &Service) -> String {
    format!("I{}Implementation", service.name)
}

fn client_interface_name(service: &Service) -> String {
    format!("I{}Client", service.name)
}

fn constructor_name(service: &Service) -> String {
    format!("{}ClientConstructor", service.name)
}

fn push_comment(items: &mut Vec<Item>, block: &str) {
    if !block.is_empty() {
        items.push(Item::Comment(block.to_string()));
    }
}

fn comment_member(block: String) -> Option<Member> {
    (!block.is_empty()).then_some(Member::Comment(block))
}
