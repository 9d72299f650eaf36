//! Naming and path utilities for generated modules.
//!
//! Every identifier and import path the generator emits is computed here, so the interface,
//! the method table and the imports always agree on names.
//!
//! # Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `greet/hello-world.proto` | [`module_alias`] | `greet$shello$hworld_pb` |
//! | `greet/greeter.proto` | [`message_file_target`] | `greet/greeter_pb` |
//! | `greet/greeter.proto` | [`service_file_target`] | `greet/greeter_grpc_pb.ts` |
//! | `greet.HelloRequest` | [`sanitized_identifier`] | `greet_HelloRequest` |
//! | `SayHello` | [`method_interface_name`] | `sayHello` |
//!
//! # Module aliases
//!
//! `$` is the escape character of [`module_alias`]. Each escape is a distinct two-character
//! token (or a fixed-width code point escape), so two different paths never share an alias:
//!
//! | Character | Token |
//! |-----------|-------|
//! | `/` | `$s` |
//! | `.` | `$d` |
//! | `-` | `$h` |
//! | `$` | `$$` |
//! | leading digit `7` | `$n7` |
//! | other non-identifier character | `$uXXXX` / `$UXXXXXXXX` |

use tsgrpc_core::{GenerateError, GenerateResult, MessageType, SchemaFile};

/// Suffix of the generated message module (`greeter_pb`).
pub const MESSAGE_MODULE_SUFFIX: &str = "_pb";

/// Suffix of the generated service module (`greeter_grpc_pb`).
pub const SERVICE_MODULE_SUFFIX: &str = "_grpc_pb";

/// Extension of generated files.
pub const OUTPUT_EXTENSION: &str = "ts";

/// Strip the schema suffix from a path, trying `.protodevel` before `.proto`.
///
/// # Examples
///
/// ```
/// use tsgrpc_codegen::naming::strip_proto;
///
/// assert_eq!(strip_proto("greet/greeter.proto"), "greet/greeter");
/// assert_eq!(strip_proto("legacy.protodevel"), "legacy");
/// assert_eq!(strip_proto("README"), "README");
/// ```
pub fn strip_proto(path: &str) -> &str {
    path.strip_suffix(".protodevel")
        .or_else(|| path.strip_suffix(".proto"))
        .unwrap_or(path)
}

/// Alias under which the message module of `path` is imported.
///
/// # Examples
///
/// ```
/// use tsgrpc_codegen::naming::module_alias;
///
/// assert_eq!(module_alias("greeter.proto"), "greeter_pb");
/// assert_eq!(module_alias("google/protobuf/empty.proto"), "google$sprotobuf$sempty_pb");
/// assert_eq!(module_alias("api.v1.proto"), "api$dv1_pb");
/// assert_eq!(module_alias("my-service.proto"), "my$hservice_pb");
/// ```
pub fn module_alias(path: &str) -> String {
    let stem = strip_proto(path);
    let mut alias = String::with_capacity(stem.len() + MESSAGE_MODULE_SUFFIX.len());

    for (index, c) in stem.chars().enumerate() {
        match c {
            '/' => alias.push_str("$s"),
            '.' => alias.push_str("$d"),
            '-' => alias.push_str("$h"),
            '$' => alias.push_str("$$"),
            c if index == 0 && c.is_ascii_digit() => {
                alias.push_str("$n");
                alias.push(c);
            }
            c if c.is_ascii_alphanumeric() || c == '_' => alias.push(c),
            c => {
                let code = u32::from(c);
                if code <= 0xFFFF {
                    alias.push_str(&format!("$u{code:04x}"));
                } else {
                    alias.push_str(&format!("$U{code:08x}"));
                }
            }
        }
    }

    alias.push_str(MESSAGE_MODULE_SUFFIX);
    alias
}

/// Qualified reference to a message class: `<module alias>.<name within package>`.
///
/// Nested messages keep their enclosing names (`greeter_pb.Outer.Inner`). Files without a
/// package use the full name as is.
pub fn object_path(message: &MessageType, owner: &SchemaFile) -> GenerateResult<String> {
    let local = if owner.package.is_empty() {
        message.full_name.as_str()
    } else {
        message
            .full_name
            .strip_prefix(owner.package.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .ok_or_else(|| GenerateError::PackageMismatch {
                message: message.full_name.clone(),
                package: owner.package.clone(),
            })?
    };

    Ok(format!("{}.{}", module_alias(&owner.path), local))
}

/// Import path of root-relative `to_file` as seen from root-relative `from_file`.
///
/// Climbs one directory per separator in `from_file` back to the root, then descends into
/// `to_file`.
///
/// # Examples
///
/// ```
/// use tsgrpc_codegen::naming::relative_path;
///
/// assert_eq!(relative_path("greeter.proto", "greeter_pb"), "./greeter_pb");
/// assert_eq!(relative_path("greet/greeter.proto", "common/types_pb"), "../common/types_pb");
/// ```
pub fn relative_path(from_file: &str, to_file: &str) -> String {
    let depth = from_file.matches('/').count();
    if depth == 0 {
        format!("./{to_file}")
    } else {
        format!("{}{to_file}", "../".repeat(depth))
    }
}

/// Path of the message module generated for a schema file, without extension.
pub fn message_file_target(path: &str) -> String {
    format!("{}{MESSAGE_MODULE_SUFFIX}", strip_proto(path))
}

/// Path of the service module generated for a schema file.
pub fn service_file_target(path: &str) -> String {
    format!(
        "{}{SERVICE_MODULE_SUFFIX}.{OUTPUT_EXTENSION}",
        strip_proto(path)
    )
}

/// Suffix for the serializer functions of a message.
///
/// # Examples
///
/// ```
/// use tsgrpc_codegen::naming::sanitized_identifier;
///
/// assert_eq!(sanitized_identifier("greet.HelloRequest"), "greet_HelloRequest");
/// ```
pub fn sanitized_identifier(full_name: &str) -> String {
    full_name.replace('.', "_")
}

/// Member name of an RPC method in generated interfaces.
pub fn method_interface_name(method_name: &str) -> String {
    lowercase_first_letter(method_name)
}

/// Lower-case the first letter of a string.
///
/// # Examples
///
/// ```
/// use tsgrpc_codegen::naming::lowercase_first_letter;
///
/// assert_eq!(lowercase_first_letter("SayHello"), "sayHello");
/// assert_eq!(lowercase_first_letter(""), "");
/// ```
pub fn lowercase_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Check that a schema path is root-relative and free of `.`/`..` segments.
///
/// [`relative_path`] is only correct for such paths, which protoc always supplies.
pub fn validate_path(path: &str) -> GenerateResult<()> {
    if path.is_empty() {
        return Err(GenerateError::invalid_path(path, "path is empty"));
    }
    if path.starts_with('/') {
        return Err(GenerateError::invalid_path(
            path,
            "absolute paths are not allowed",
        ));
    }
    if path.contains('\\') {
        return Err(GenerateError::invalid_path(
            path,
            "backslash separators are not allowed",
        ));
    }

    for segment in path.split('/') {
        match segment {
            "" => return Err(GenerateError::invalid_path(path, "empty path segment")),
            "." => {
                return Err(GenerateError::invalid_path(
                    path,
                    "current-directory segments are not allowed",
                ));
            }
            ".." => {
                return Err(GenerateError::invalid_path(
                    path,
                    "parent segments are not allowed",
                ));
            }
            _ => {}
        }
    }

    Ok(())
}
