// Library entry shared by the demo binary and the integration tests

pub mod config;
pub mod events;
pub mod player;
pub mod utils;
