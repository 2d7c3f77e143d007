//! The impls and functions
//!
use std::{future::Future, time::{Duration, Instant}};
use bytes::{Buf, BufMut, BytesMut};
use futures::{SinkExt, StreamExt};
use log::*;
use tokio::{net::TcpStream, time};
use tokio_util::codec::{Decoder, Encoder, Framed};
use crate::client::{ClientError, RedisClient, RespCodec, RespValue};

/// The deepest nesting of arrays accepted in a reply.
const MAX_NESTING_DEPTH: usize = 32;
/// The largest bulk string redis sends (proto-max-bulk-len).
const MAX_BULK_LENGTH: i64 = 512 * 1024 * 1024;

impl Decoder for RespCodec {
    type Item = RespValue;
    type Error = ClientError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match parse_value(&src[..])? {
            Some((reply, used)) => {
                src.advance(used);
                Ok(Some(reply))
            }
            None => Ok(None),
        }
    }
}

/// A command is encoded as an array of bulk strings.
impl Encoder<&[&str]> for RespCodec {
    type Error = ClientError;

    fn encode(&mut self, args: &[&str], dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.put_slice(format!("*{}\r\n", args.len()).as_bytes());
        for arg in args {
            dst.put_slice(format!("${}\r\n", arg.len()).as_bytes());
            dst.put_slice(arg.as_bytes());
            dst.put_slice(b"\r\n");
        }
        Ok(())
    }
}

impl RedisClient {
    pub async fn connect(
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<RedisClient, ClientError>
    {
        let addr = format!("{}:{}", host, port);
        debug!("connecting to {}", addr);
        let timer = Instant::now();

        let stream = with_timeout(timeout, "connect", TcpStream::connect(&addr))
            .await?
            .map_err(|source| ClientError::Connect { addr: addr.clone(), source })?;

        debug!("connected to {}: {:?}", addr, timer.elapsed());
        Ok(RedisClient { framed: Framed::new(stream, RespCodec), timeout })
    }
    /// Send a command and wait for its reply.
    /// An error reply of the server is turned into [ClientError::Server].
    pub async fn command(
        &mut self,
        args: &[&str],
    ) -> Result<RespValue, ClientError>
    {
        with_timeout(self.timeout, "write", self.framed.send(args)).await??;
        let reply = with_timeout(self.timeout, "read", self.framed.next())
            .await?
            .ok_or_else(|| ClientError::Protocol("connection closed by server".to_string()))??;
        match reply {
            RespValue::Error(text) => Err(ClientError::Server(text)),
            reply => Ok(reply),
        }
    }
    pub async fn auth(
        &mut self,
        password: &str,
    ) -> Result<(), ClientError>
    {
        match self.command(&["AUTH", password]).await? {
            RespValue::SimpleString(reply) if reply == "OK" => Ok(()),
            reply => Err(ClientError::UnexpectedReply { command: "AUTH".to_string(), reply }),
        }
    }
    /// Send `PING` and return the round trip time.
    pub async fn ping(&mut self) -> Result<Duration, ClientError>
    {
        let timer = Instant::now();
        let reply = self.command(&["PING"]).await?;
        let response_time = timer.elapsed();
        match reply {
            RespValue::SimpleString(pong) if pong == "PONG" => Ok(response_time),
            reply => Err(ClientError::UnexpectedReply { command: "PING".to_string(), reply }),
        }
    }
    pub async fn info(&mut self) -> Result<String, ClientError>
    {
        match self.command(&["INFO"]).await? {
            RespValue::BulkString(Some(info)) => Ok(info),
            reply => Err(ClientError::UnexpectedReply { command: "INFO".to_string(), reply }),
        }
    }
    /// Send `CONFIG GET <parameter>` and return the flat list of alternating names and values.
    pub async fn config_get(
        &mut self,
        parameter: &str,
    ) -> Result<Vec<RespValue>, ClientError>
    {
        match self.command(&["CONFIG", "GET", parameter]).await? {
            RespValue::Array(Some(values)) => Ok(values),
            RespValue::Array(None) => Ok(Vec::new()),
            reply => Err(ClientError::UnexpectedReply { command: "CONFIG GET".to_string(), reply }),
        }
    }
}

async fn with_timeout<F: Future>(
    timeout: Duration,
    operation: &str,
    future: F,
) -> Result<F::Output, ClientError>
{
    time::timeout(timeout, future)
        .await
        .map_err(|_elapsed| ClientError::Timeout { operation: operation.to_string(), timeout_ms: timeout.as_millis() })
}

fn find_crlf(buffer: &[u8]) -> Option<usize>
{
    buffer.windows(2).position(|window| window == b"\r\n")
}

fn parse_length(line: &str) -> Result<i64, ClientError>
{
    line.parse().map_err(|_e| ClientError::Protocol(format!("invalid length: {}", line)))
}

/// Decode one value from the start of `buffer`.
///
/// Returns the value and the number of bytes it occupies,
/// or `None` if the buffer does not hold a complete value yet.
pub fn parse_value(buffer: &[u8]) -> Result<Option<(RespValue, usize)>, ClientError>
{
    parse_nested_value(buffer, 0)
}

fn parse_nested_value(
    buffer: &[u8],
    depth: usize,
) -> Result<Option<(RespValue, usize)>, ClientError>
{
    if depth > MAX_NESTING_DEPTH {
        return Err(ClientError::Protocol("reply nested too deeply".to_string()));
    }
    let Some(line_end) = find_crlf(buffer) else { return Ok(None) };
    if line_end == 0 {
        return Err(ClientError::Protocol("empty reply line".to_string()));
    }
    let line = String::from_utf8_lossy(&buffer[1..line_end]).to_string();
    let after_line = line_end + 2;

    match buffer[0] {
        b'+' => Ok(Some((RespValue::SimpleString(line), after_line))),
        b'-' => Ok(Some((RespValue::Error(line), after_line))),
        b':' => {
            let integer = line.parse()
                .map_err(|_e| ClientError::Protocol(format!("invalid integer: {}", line)))?;
            Ok(Some((RespValue::Integer(integer), after_line)))
        }
        b'$' => {
            let length = parse_length(&line)?;
            if length < 0 {
                return Ok(Some((RespValue::BulkString(None), after_line)));
            }
            if length > MAX_BULK_LENGTH {
                return Err(ClientError::Protocol(format!("bulk string too long: {}", length)));
            }
            let data_end = after_line + length as usize;
            if buffer.len() < data_end + 2 {
                return Ok(None);
            }
            if &buffer[data_end..data_end + 2] != b"\r\n" {
                return Err(ClientError::Protocol("bulk string not terminated by CRLF".to_string()));
            }
            let data = String::from_utf8_lossy(&buffer[after_line..data_end]).to_string();
            Ok(Some((RespValue::BulkString(Some(data)), data_end + 2)))
        }
        b'*' => {
            let count = parse_length(&line)?;
            if count < 0 {
                return Ok(Some((RespValue::Array(None), after_line)));
            }
            let mut elements = Vec::new();
            let mut position = after_line;
            for _ in 0..count {
                match parse_nested_value(&buffer[position..], depth + 1)? {
                    Some((element, used)) => {
                        elements.push(element);
                        position += used;
                    }
                    None => return Ok(None),
                }
            }
            Ok(Some((RespValue::Array(Some(elements)), position)))
        }
        other => Err(ClientError::Protocol(format!("unknown reply type: {:?}", other as char))),
    }
}
