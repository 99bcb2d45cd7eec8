use crate::rcon::{
    AUTH_FAILED_ID, MAX_COMMAND_LEN, SERVERDATA_AUTH, SERVERDATA_AUTH_RESPONSE,
    SERVERDATA_EXECCOMMAND, SERVERDATA_RESPONSE_VALUE,
};
use crate::{GameError, RconPacket, Result};

use std::panic::Location;
use std::time::Duration;

use bytes::BytesMut;
use error_location::ErrorLocation;
use log::debug;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::timeout;

/// Authenticated RCON session
#[derive(Debug)]
pub struct RconClient {
    stream: TcpStream,
    read_buf: BytesMut,
    next_id: i32,
    io_timeout: Duration,
}

impl RconClient {
    /// Connect and authenticate. Every network step is bounded by `io_timeout`.
    pub async fn connect<A: ToSocketAddrs>(
        addr: A,
        password: &str,
        io_timeout: Duration,
    ) -> Result<Self> {
        let stream = timeout(io_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| GameError::timeout("connect"))??;

        let mut client = Self {
            stream,
            read_buf: BytesMut::with_capacity(4096),
            next_id: 1,
            io_timeout,
        };
        client.authenticate(password).await?;
        Ok(client)
    }

    async fn authenticate(&mut self, password: &str) -> Result<()> {
        let id = self.send(SERVERDATA_AUTH, password).await?;

        // Some servers send an empty RESPONSE_VALUE ahead of the auth response
        loop {
            let packet = self.receive().await?;
            if packet.kind != SERVERDATA_AUTH_RESPONSE {
                continue;
            }
            if packet.id == AUTH_FAILED_ID {
                return Err(GameError::AuthenticationFailed {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if packet.id == id {
                debug!("RCON authenticated");
                return Ok(());
            }
        }
    }

    /// Run a command and return the server's reply body.
    pub async fn execute(&mut self, command: &str) -> Result<String> {
        if command.len() > MAX_COMMAND_LEN {
            return Err(GameError::protocol(format!(
                "command of {} bytes exceeds the {} byte limit",
                command.len(),
                MAX_COMMAND_LEN
            )));
        }

        let id = self.send(SERVERDATA_EXECCOMMAND, command).await?;
        debug!("RCON command {} sent", id);

        loop {
            let packet = self.receive().await?;
            if packet.id == id && packet.kind == SERVERDATA_RESPONSE_VALUE {
                return Ok(packet.body);
            }
            debug!("Skipping RCON packet {} of type {}", packet.id, packet.kind);
        }
    }

    async fn send(&mut self, kind: i32, body: &str) -> Result<i32> {
        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).unwrap_or(1);

        let mut frame = BytesMut::new();
        RconPacket::new(id, kind, body).encode(&mut frame)?;

        timeout(self.io_timeout, self.stream.write_all(&frame))
            .await
            .map_err(|_| GameError::timeout("write"))??;
        Ok(id)
    }

    async fn receive(&mut self) -> Result<RconPacket> {
        loop {
            if let Some(packet) = RconPacket::decode(&mut self.read_buf)? {
                return Ok(packet);
            }

            let read = timeout(self.io_timeout, self.stream.read_buf(&mut self.read_buf))
                .await
                .map_err(|_| GameError::timeout("read"))??;
            if read == 0 {
                return Err(GameError::protocol("connection closed by server"));
            }
        }
    }
}
