pub mod client;
pub mod packet;

/// Longest command body the server accepts
pub const MAX_COMMAND_LEN: usize = 4096;

/// Upper bound on an inbound packet's declared size
pub const MAX_PACKET_SIZE: usize = 64 * 1024;

/// id + type + two terminating nulls
pub const MIN_PACKET_SIZE: usize = 10;

pub const SERVERDATA_AUTH: i32 = 3;
pub const SERVERDATA_AUTH_RESPONSE: i32 = 2;
pub const SERVERDATA_EXECCOMMAND: i32 = 2;
pub const SERVERDATA_RESPONSE_VALUE: i32 = 0;

/// Request id the server answers with when the password is wrong
pub const AUTH_FAILED_ID: i32 = -1;
