pub mod controller;
pub mod rejection;
pub mod transition_outcome;
