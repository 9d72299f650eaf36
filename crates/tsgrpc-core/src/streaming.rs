//! Streaming classification of RPC methods

/// How requests and responses flow for one RPC method
///
/// Derived once per method from its two streaming flags:
/// ```text
///                    server_streaming
///                    false            true
/// client   false     Unary            ServerStreaming
/// streaming true     ClientStreaming  BidiStreaming
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamingMode {
    /// One request, one response
    #[default]
    Unary,
    /// Stream of requests, one response
    ClientStreaming,
    /// One request, stream of responses
    ServerStreaming,
    /// Streams in both directions
    BidiStreaming,
}

impl StreamingMode {
    /// Every mode, in flag order
    pub const ALL: [StreamingMode; 4] = [
        StreamingMode::Unary,
        StreamingMode::ClientStreaming,
        StreamingMode::ServerStreaming,
        StreamingMode::BidiStreaming,
    ];

    /// Classify a method from its client and server streaming flags
    pub fn from_flags(client_streaming: bool, server_streaming: bool) -> Self {
        match (client_streaming, server_streaming) {
            (false, false) => StreamingMode::Unary,
            (true, false) => StreamingMode::ClientStreaming,
            (false, true) => StreamingMode::ServerStreaming,
            (true, true) => StreamingMode::BidiStreaming,
        }
    }

    /// Whether the client sends a stream of requests
    pub fn client_streaming(&self) -> bool {
        matches!(
            self,
            StreamingMode::ClientStreaming | StreamingMode::BidiStreaming
        )
    }

    /// Whether the server sends a stream of responses
    pub fn server_streaming(&self) -> bool {
        matches!(
            self,
            StreamingMode::ServerStreaming | StreamingMode::BidiStreaming
        )
    }

    /// Check if this is a plain request/response call
    pub fn is_unary(&self) -> bool {
        matches!(self, StreamingMode::Unary)
    }
}

impl std::fmt::Display for StreamingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamingMode::Unary => write!(f, "unary"),
            StreamingMode::ClientStreaming => write!(f, "client streaming"),
            StreamingMode::ServerStreaming => write!(f, "server streaming"),
            StreamingMode::BidiStreaming => write!(f, "bidi streaming"),
        }
    }
}

#[cfg(test)]
#[path = "streaming/streaming_tests.rs"]
mod streaming_tests;
