#![allow(dead_code)]

use std::collections::HashMap;
use futures::StreamExt;
use tokio::{io::AsyncWriteExt, net::TcpListener, task::JoinHandle};
use tokio_util::codec::FramedRead;

use check_redis::client::{RespCodec, RespValue};

pub fn bulk(value: &str) -> String {
    format!("${}\r\n{}\r\n", value.len(), value)
}

pub fn config_reply(maxmemory: &str) -> String {
    format!("*2\r\n{}{}", bulk("maxmemory"), bulk(maxmemory))
}

/// Start a server that accepts a single connection, and answers each command with the reply
/// registered for the command name. A command without a reply is never answered.
/// The handle returns the commands received, once the client disconnects.
pub async fn fake_redis(replies: Vec<(&str, String)>) -> (u16, JoinHandle<Vec<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let replies: HashMap<String, String> = replies.into_iter().map(|(command, reply)| (command.to_string(), reply)).collect();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();
        let mut requests = FramedRead::new(read_half, RespCodec);
        let mut commands = Vec::new();
        while let Some(Ok(request)) = requests.next().await {
            let args: Vec<String> = match request {
                RespValue::Array(Some(args)) => args.into_iter().map(|arg| match arg {
                    RespValue::BulkString(Some(arg)) => arg,
                    other => panic!("request argument is not a bulk string: {:?}", other),
                }).collect(),
                other => panic!("request is not an array: {:?}", other),
            };
            if let Some(reply) = replies.get(&args[0].to_uppercase()) {
                write_half.write_all(reply.as_bytes()).await.unwrap();
            }
            commands.push(args);
        }
        commands
    });
    (port, handle)
}

/// The replies of a healthy master using `used_memory` of `total_system_memory`, without maxmemory.
pub fn master_replies(used_memory: u64, total_system_memory: u64) -> Vec<(&'static str, String)> {
    let info = format!("# Memory\r\nused_memory:{}\r\ntotal_system_memory:{}\r\n\r\n# Replication\r\nrole:master\r\n", used_memory, total_system_memory);
    vec![
        ("PING", "+PONG\r\n".to_string()),
        ("INFO", bulk(&info)),
        ("CONFIG", config_reply("0")),
    ]
}
