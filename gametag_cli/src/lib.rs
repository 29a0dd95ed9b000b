//! gametag command-line surface
//!
//! Exposed as a library so integration tests can drive configuration and
//! orchestration without spawning the binary.

pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod paths;
