//! Aggregate statistics from a JSONL hand-history file: hands played,
//! chips awarded, carried pots and wins per player. Corrupted lines are
//! reported as warnings and skipped; they never fail the command.

use std::collections::BTreeMap;
use std::io::Write;

use felt_engine::logger::HandRecord;

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input).map_err(CliError::InvalidInput)?;

    let mut hands = 0u64;
    let mut carried = 0u64;
    let mut skipped = 0u64;
    let mut chips_awarded = 0u64;
    let mut wins: BTreeMap<String, u64> = BTreeMap::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<HandRecord>(line) {
            Ok(rec) => {
                hands += 1;
                chips_awarded += rec.pot_awarded as u64;
                if rec.carried {
                    carried += 1;
                }
                for winner in rec.winners {
                    *wins.entry(winner).or_default() += 1;
                }
            }
            Err(e) => {
                skipped += 1;
                ui::display_warning(err, &format!("skipping line {}: {}", i + 1, e))?;
            }
        }
    }

    writeln!(out, "Hands: {}", hands)?;
    writeln!(out, "Chips awarded: {}", chips_awarded)?;
    writeln!(out, "Carried pots: {}", carried)?;
    if skipped > 0 {
        writeln!(out, "Skipped records: {}", skipped)?;
    }
    writeln!(out, "Wins by player:")?;
    for (name, count) in &wins {
        writeln!(out, "  {}: {}", name, count)?;
    }
    Ok(())
}
