//! Line-oriented roster persistence: one record per player, five
//! whitespace-delimited fields in fixed order:
//!
//! `name chips gamesWon handsPlayed handsWon`
//!
//! Names may themselves contain spaces ("Bot 1"), so records are parsed
//! from the right: the last four tokens are the counters and everything
//! before them re-joins as the name.

use std::io::{BufRead, Write};

use crate::player::{Controller, Player, PlayerStats, MAX_SEATS};

/// Write one record per seat, in roster order.
pub fn save_roster<W: Write>(out: &mut W, roster: &[Player]) -> std::io::Result<()> {
    for p in roster {
        writeln!(
            out,
            "{} {} {} {} {}",
            p.name(),
            p.chips(),
            p.stats.games_won,
            p.stats.hands_played,
            p.stats.hands_won
        )?;
    }
    Ok(())
}

/// Read back zero up to [`MAX_SEATS`] records in file order. The save format
/// carries no controller tag, so each restored seat's controller comes from
/// the caller-supplied resolver, applied once at this creation boundary.
pub fn load_roster<R: BufRead>(
    input: &mut R,
    controller_for: &dyn Fn(&str) -> Controller,
) -> Result<Vec<Player>, String> {
    let mut roster = Vec::new();
    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;
        if line.trim().is_empty() {
            continue;
        }
        if roster.len() == MAX_SEATS {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 5 {
            return Err(format!("malformed player record: {:?}", line));
        }
        let (name_tokens, counters) = tokens.split_at(tokens.len() - 4);
        let name = name_tokens.join(" ");
        let numbers = counters
            .iter()
            .map(|t| {
                t.parse::<u32>()
                    .map_err(|e| format!("bad value {:?} in record for {}: {}", t, name, e))
            })
            .collect::<Result<Vec<u32>, String>>()?;
        let mut player = Player::with_chips(name.clone(), controller_for(&name), numbers[0]);
        player.stats = PlayerStats {
            games_won: numbers[1],
            hands_played: numbers[2],
            hands_won: numbers[3],
        };
        roster.push(player);
    }
    Ok(roster)
}
