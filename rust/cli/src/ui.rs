//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Introduction screen shown before a table session starts.
pub fn welcome(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "---------------------------------------------------")?;
    writeln!(out, "           Welcome to Texas Hold'em Poker!")?;
    writeln!(out, "---------------------------------------------------")?;
    writeln!(out, "Each player is dealt two hole cards. Five community")?;
    writeln!(out, "cards arrive in three stages: the Flop (3), the Turn")?;
    writeln!(out, "(1) and the River (1). Betting happens before the")?;
    writeln!(out, "Flop and after every reveal. Bet, call, check, fold")?;
    writeln!(out, "or walk away between rounds; the last player holding")?;
    writeln!(out, "chips wins the table.")?;
    writeln!(out, "---------------------------------------------------")
}
