pub mod monitor;
pub mod roster;
pub mod state;
