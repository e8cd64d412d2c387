//! Workflow integration tests
//!
//! Tests for complete workflows that exercise the binary end to end.

pub mod config_commands;
pub mod init_folders;
pub mod serve_watch;
