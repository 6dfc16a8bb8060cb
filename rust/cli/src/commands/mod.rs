//! Command handler modules for the felt CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern: a
//! public `handle_COMMAND_command` function taking injected output streams
//! (`&mut dyn Write`) and, where interactive, an injected `&mut dyn BufRead`
//! for stdin, propagating failures through `CliError`.

mod deal;
mod play;
mod stats;

pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use stats::handle_stats_command;
