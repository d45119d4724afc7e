//! Subcommands of the `ttt` binary

pub mod play;
pub mod train;
