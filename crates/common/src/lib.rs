//! Small pieces shared by the server crate and the binary: the health payload
//! and tracing subscriber setup.

pub mod types;
pub mod utils;
