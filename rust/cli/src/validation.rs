//! Parsing and validation of interactive prompt input.
//!
//! The action menu is deliberately strict: the literal, case-sensitive
//! tokens `Bet`, `Raise`, `Call`, `Check` and `Fold`, nothing else. Wager
//! amounts must be positive integers. Prompts re-ask indefinitely, so every
//! rejection carries a message the prompt loop can show.

/// A recognized action-menu token. `Bet` and `Raise` both lead to the
/// amount prompt and the engine's single wager path.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuChoice {
    Wager,
    Call,
    Check,
    Fold,
}

/// Parse one action-menu token (case-sensitive).
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, String> {
    match input.trim() {
        "Bet" | "Raise" => Ok(MenuChoice::Wager),
        "Call" => Ok(MenuChoice::Call),
        "Check" => Ok(MenuChoice::Check),
        "Fold" => Ok(MenuChoice::Fold),
        other => Err(format!(
            "Unrecognized action {:?}. Valid actions: Bet, Raise, Call, Check, Fold",
            other
        )),
    }
}

/// Parse a wager amount: a positive integer.
pub fn parse_bet_amount(input: &str) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err("Bet amount must be positive".to_string()),
        Err(_) => Err("Please enter a valid positive bet amount".to_string()),
    }
}

/// Parse a y/n answer. `None` means unrecognized (re-prompt).
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim() {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}
