//! Source comment extraction and formatting.
//!
//! Comments recorded by the schema compiler are turned into prefixed comment blocks for the
//! generated output:
//!
//! ```text
//! SourceComments ─ extract ─→ raw lines ─ format(prefix) ─→ "// line\n//\n// line\n"
//! ```

use tsgrpc_core::{Method, SchemaFile, Service, SourceComments};

/// Which comment block of an element to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPosition {
    /// Detached blocks followed by the block directly above the element
    Leading,
    /// The block directly after the element
    Trailing,
}

/// A schema element that may carry source comments.
pub trait Commented {
    /// Comments recorded for this element.
    fn source_comments(&self) -> Option<&SourceComments>;

    /// Whether trailing comments are reported for this kind of element.
    fn has_trailing_comments(&self) -> bool {
        true
    }
}

impl Commented for Service {
    fn source_comments(&self) -> Option<&SourceComments> {
        self.comments.as_ref()
    }
}

impl Commented for Method {
    fn source_comments(&self) -> Option<&SourceComments> {
        self.comments.as_ref()
    }
}

// File comments are the ones above the `syntax` declaration.
impl Commented for SchemaFile {
    fn source_comments(&self) -> Option<&SourceComments> {
        self.comments.as_ref()
    }

    fn has_trailing_comments(&self) -> bool {
        false
    }
}

/// Raw comment lines of `element`, without newlines.
///
/// For [`CommentPosition::Leading`], every detached block is followed by an empty line
/// separating it from the next block.
pub fn extract<T: Commented + ?Sized>(element: &T, position: CommentPosition) -> Vec<String> {
    let Some(comments) = element.source_comments() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    match position {
        CommentPosition::Leading => {
            for block in &comments.leading_detached {
                lines.extend(block.lines().map(str::to_string));
                lines.push(String::new());
            }
            if let Some(leading) = &comments.leading {
                lines.extend(leading.lines().map(str::to_string));
            }
        }
        CommentPosition::Trailing => {
            if element.has_trailing_comments() {
                if let Some(trailing) = &comments.trailing {
                    lines.extend(trailing.lines().map(str::to_string));
                }
            }
        }
    }
    lines
}

/// Prefix each line and join them, one newline-terminated line per input line.
///
/// A space separates prefix and text unless the text is empty or already starts with one.
///
/// # Examples
///
/// ```
/// use tsgrpc_codegen::comments::format;
///
/// let lines = vec![" Greets.".to_string(), String::new(), "Twice.".to_string()];
///
/// assert_eq!(format(&lines, "//"), "// Greets.\n//\n// Twice.\n");
/// ```
pub fn format(lines: &[String], prefix: &str) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(prefix);
        if !line.is_empty() {
            if !line.starts_with(' ') {
                out.push(' ');
            }
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

/// Extract and format the comments of `element` in one step.
pub fn prefixed_comments<T: Commented + ?Sized>(
    element: &T,
    position: CommentPosition,
    prefix: &str,
) -> String {
    format(&extract(element, position), prefix)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use prost_types::{DescriptorProto, FileDescriptorProto};
    use tsgrpc_core::{MessageId, SchemaGraph, StreamingMode};

    fn payload_id() -> MessageId {
        let descriptor = FileDescriptorProto {
            name: Some("payload.proto".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("Payload".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let graph = SchemaGraph::from_descriptors(&[descriptor]).unwrap();
        graph.message_id("Payload").unwrap()
    }

    fn method(comments: SourceComments) -> Method {
        Method {
            name: "SayHello".to_string(),
            input: payload_id(),
            output: payload_id(),
            mode: StreamingMode::Unary,
            comments: Some(comments),
        }
    }

    fn file(comments: SourceComments) -> SchemaFile {
        SchemaFile {
            path: "greeter.proto".to_string(),
            package: "greet".to_string(),
            messages: Vec::new(),
            services: Vec::new(),
            dependencies: Vec::new(),
            comments: Some(comments),
        }
    }

    #[test]
    fn extract___leading___puts_detached_blocks_first() {
        let element = method(SourceComments {
            leading: Some(" Adjacent.\n".to_string()),
            trailing: None,
            leading_detached: vec![" First.\n".to_string(), " Second.\n More.\n".to_string()],
        });

        let lines = extract(&element, CommentPosition::Leading);

        assert_eq!(
            lines,
            vec![" First.", "", " Second.", " More.", "", " Adjacent."]
        );
    }

    #[test]
    fn extract___trailing___ignores_leading_blocks() {
        let element = method(SourceComments {
            leading: Some(" Above.\n".to_string()),
            trailing: Some(" After.\n".to_string()),
            leading_detached: vec![" Detached.\n".to_string()],
        });

        let lines = extract(&element, CommentPosition::Trailing);

        assert_eq!(lines, vec![" After."]);
    }

    #[test]
    fn extract___file___never_returns_trailing() {
        let element = file(SourceComments {
            leading: Some(" Header.\n".to_string()),
            trailing: Some(" After syntax.\n".to_string()),
            leading_detached: Vec::new(),
        });

        assert!(extract(&element, CommentPosition::Trailing).is_empty());
        assert_eq!(extract(&element, CommentPosition::Leading), vec![" Header."]);
    }

    #[test]
    fn extract___blank_line_inside_block___is_kept() {
        let element = method(SourceComments {
            leading: Some(" One.\n\n Two.\n".to_string()),
            ..Default::default()
        });

        let lines = extract(&element, CommentPosition::Leading);

        assert_eq!(lines, vec![" One.", "", " Two."]);
    }

    #[test]
    fn extract___no_comments___returns_empty() {
        let mut element = method(SourceComments::default());
        element.comments = None;

        assert!(extract(&element, CommentPosition::Leading).is_empty());
    }

    #[test]
    fn format___spacing_rules() {
        let lines = vec![
            String::new(),
            " spaced".to_string(),
            "tight".to_string(),
            "  indented".to_string(),
        ];

        let block = format(&lines, "//");

        assert_eq!(block, "//\n// spaced\n// tight\n//  indented\n");
    }

    #[test]
    fn format___empty_input___returns_empty() {
        assert_eq!(format(&[], "//"), "");
    }

    #[test]
    fn prefixed_comments___combines_extract_and_format() {
        let element = method(SourceComments {
            leading: Some(" Says hello.\n".to_string()),
            ..Default::default()
        });

        let block = prefixed_comments(&element, CommentPosition::Leading, " *");

        assert_eq!(block, " * Says hello.\n");
    }
}
