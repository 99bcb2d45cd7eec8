
use crate::RconPacket;
use crate::rcon::{
    AUTH_FAILED_ID, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE, SERVERDATA_RESPONSE_VALUE,
};

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub(crate) const PASSWORD: &str = "rcon-secret";

/// Single-connection RCON server that records every packet it receives
pub(crate) struct FakeRconServer {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<RconPacket>>>,
}

impl FakeRconServer {
    /// `reply` maps each executed command to the response body.
    pub(crate) async fn start<F>(reply: F) -> Self
    where
        F: Fn(&str) -> String + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = BytesMut::new();

            loop {
                let packet = loop {
                    if let Some(packet) = RconPacket::decode(&mut buf).unwrap() {
                        break packet;
                    }
                    if socket.read_buf(&mut buf).await.unwrap_or(0) == 0 {
                        return;
                    }
                };
                log.lock().unwrap().push(packet.clone());

                let mut out = BytesMut::new();
                if packet.kind == SERVERDATA_AUTH {
                    let id = if packet.body == PASSWORD {
                        packet.id
                    } else {
                        AUTH_FAILED_ID
                    };
                    RconPacket::new(packet.id, SERVERDATA_RESPONSE_VALUE, "")
                        .encode(&mut out)
                        .unwrap();
                    RconPacket::new(id, SERVERDATA_AUTH_RESPONSE, "")
                        .encode(&mut out)
                        .unwrap();
                } else {
                    RconPacket::new(packet.id, SERVERDATA_RESPONSE_VALUE, reply(&packet.body))
                        .encode(&mut out)
                        .unwrap();
                }
                socket.write_all(&out).await.unwrap();
            }
        });

        Self { addr, received }
    }

    /// Bodies of the commands executed after authentication
    pub(crate) fn commands(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.kind != SERVERDATA_AUTH)
            .map(|p| p.body.clone())
            .collect()
    }
}
