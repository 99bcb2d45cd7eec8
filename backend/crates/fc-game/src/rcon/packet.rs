//! RCON packet framing.
//!
//! Wire layout, all integers little-endian:
//! `size: i32 | id: i32 | type: i32 | body | 0x00 | 0x00`,
//! where `size` counts every byte after itself.

use crate::rcon::{MAX_PACKET_SIZE, MIN_PACKET_SIZE};
use crate::{GameError, Result};

use bytes::{Buf, BufMut, BytesMut};

const SIZE_FIELD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RconPacket {
    pub id: i32,
    pub kind: i32,
    pub body: String,
}

impl RconPacket {
    pub fn new(id: i32, kind: i32, body: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            body: body.into(),
        }
    }

    /// Append the framed packet to `dst`.
    pub fn encode(&self, dst: &mut BytesMut) -> Result<()> {
        let size = MIN_PACKET_SIZE + self.body.len();
        if size > MAX_PACKET_SIZE {
            return Err(GameError::protocol(format!(
                "packet of {} bytes exceeds the {} byte limit",
                size, MAX_PACKET_SIZE
            )));
        }
        let declared = i32::try_from(size)
            .map_err(|_| GameError::protocol("packet size does not fit the size field"))?;

        dst.reserve(SIZE_FIELD_LEN + size);
        dst.put_i32_le(declared);
        dst.put_i32_le(self.id);
        dst.put_i32_le(self.kind);
        dst.put_slice(self.body.as_bytes());
        dst.put_u8(0);
        dst.put_u8(0);
        Ok(())
    }

    /// Take one complete packet off the front of `src`.
    ///
    /// Returns `Ok(None)` when more bytes are needed; nothing is consumed in that case.
    pub fn decode(src: &mut BytesMut) -> Result<Option<Self>> {
        if src.len() < SIZE_FIELD_LEN {
            return Ok(None);
        }

        let declared = i32::from_le_bytes([src[0], src[1], src[2], src[3]]);
        let size = usize::try_from(declared)
            .ok()
            .filter(|size| (MIN_PACKET_SIZE..=MAX_PACKET_SIZE).contains(size))
            .ok_or_else(|| GameError::protocol(format!("invalid packet size {}", declared)))?;

        if src.len() < SIZE_FIELD_LEN + size {
            src.reserve(SIZE_FIELD_LEN + size - src.len());
            return Ok(None);
        }

        src.advance(SIZE_FIELD_LEN);
        let mut frame = src.split_to(size);
        let id = frame.get_i32_le();
        let kind = frame.get_i32_le();

        let body_len = frame.len() - 2;
        if frame[body_len..] != [0, 0] {
            return Err(GameError::protocol("packet is missing its null terminators"));
        }
        let body = String::from_utf8_lossy(&frame[..body_len]).into_owned();

        Ok(Some(Self { id, kind, body }))
    }
}
