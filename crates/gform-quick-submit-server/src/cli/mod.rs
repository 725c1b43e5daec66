//! CLI subcommand implementations for the `gform-quick-submit` binary.

pub mod parse_cmd;
pub mod submit_cmd;
