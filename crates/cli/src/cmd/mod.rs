//! CLI command implementations

pub mod config;
pub mod folders;
pub mod init;
pub mod serve;
