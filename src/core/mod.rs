pub mod host;
pub mod input;
