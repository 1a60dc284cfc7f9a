//! Command-line interface for the checkpoint subsystem

pub mod commands;

pub use commands::{
    cmd_check, cmd_info, cmd_last, cmd_list, cmd_progress, load_index, CliResult,
};
