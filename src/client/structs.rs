//! The structs
//!
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

/// A decoded RESP2 reply.
#[derive(Debug, Clone, PartialEq)]
pub enum RespValue {
    SimpleString(String),
    Error(String),
    Integer(i64),
    /// `None` is the null bulk string (`$-1`).
    BulkString(Option<String>),
    /// `None` is the null array (`*-1`).
    Array(Option<Vec<RespValue>>),
}
/// RESP2 codec: encodes commands as an array of bulk strings, decodes any RESP2 value.
#[derive(Debug, Default)]
pub struct RespCodec;
/// A connection to a single redis server.
#[derive(Debug)]
pub struct RedisClient {
    pub(crate) framed: Framed<TcpStream, RespCodec>,
    pub(crate) timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("dial tcp {addr}: {source}")]
    Connect { addr: String, source: std::io::Error },

    #[error("{operation}: i/o timeout after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u128 },

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("unexpected reply to {command}: {reply:?}")]
    UnexpectedReply { command: String, reply: RespValue },

    /// An error reply (`-ERR ...`), holding the text as sent by the server.
    #[error("{0}")]
    Server(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
