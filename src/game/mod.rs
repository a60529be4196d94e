pub mod judgment;
pub mod note;
pub mod session;
