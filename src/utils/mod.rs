pub mod errors;

pub use errors::PlayerError;
