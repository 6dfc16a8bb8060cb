//! Card, board, hand and standings formatters for terminal display.
//!
//! Cards render in their long form ("Ace of Hearts"); boards join cards
//! with commas; automated seats' hands render as "[Hidden]" until showdown.

use felt_engine::cards::Card;
use felt_engine::player::Player;
use felt_engine::rankings::Standing;

/// Format a card in its long form: "Ace of Hearts".
pub fn format_card(card: &Card) -> String {
    card.to_string()
}

/// Format a card sequence as a comma-joined list, "(none)" when empty.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "(none)".to_string()
    } else {
        cards
            .iter()
            .map(format_card)
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// Format a player's hand line, hiding the cards for automated seats
/// during normal play.
pub fn format_hand(player: &Player, hide: bool) -> String {
    if hide {
        return format!("{}'s hand: [Hidden]", player.name());
    }
    match player.hand() {
        Some([a, b]) => format!("{}'s hand: {}, {}", player.name(), a, b),
        None => format!("{}'s hand: (not dealt)", player.name()),
    }
}

/// Format a standings snapshot, one "name -> Chips: n" line per seat.
pub fn format_standings(rows: &[Standing]) -> String {
    rows.iter()
        .map(|row| format!("{} -> Chips: {}", row.name, row.chips))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use felt_engine::cards::{Rank, Suit};
    use felt_engine::player::Controller;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    #[test]
    fn cards_render_long_form() {
        assert_eq!(format_card(&card(Rank::Ace, Suit::Hearts)), "Ace of Hearts");
        assert_eq!(format_card(&card(Rank::Ten, Suit::Clubs)), "10 of Clubs");
        assert_eq!(format_card(&card(Rank::Two, Suit::Spades)), "2 of Spades");
    }

    #[test]
    fn boards_are_comma_joined() {
        let board = [card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Clubs)];
        assert_eq!(format_board(&board), "Ace of Hearts, King of Clubs");
        assert_eq!(format_board(&[]), "(none)");
    }

    #[test]
    fn hidden_hands_do_not_leak_cards() {
        let mut bot = Player::new("Bot 1", Controller::automated("threshold"));
        bot.give_card(card(Rank::Ace, Suit::Hearts)).unwrap();
        bot.give_card(card(Rank::Ace, Suit::Spades)).unwrap();

        let hidden = format_hand(&bot, true);
        assert_eq!(hidden, "Bot 1's hand: [Hidden]");
        assert!(!hidden.contains("Ace"));

        let revealed = format_hand(&bot, false);
        assert_eq!(revealed, "Bot 1's hand: Ace of Hearts, Ace of Spades");
    }

    #[test]
    fn standings_lines() {
        let rows = vec![
            Standing {
                name: "Alice".to_string(),
                chips: 1200,
            },
            Standing {
                name: "Bot 1".to_string(),
                chips: 800,
            },
        ];
        assert_eq!(
            format_standings(&rows),
            "Alice -> Chips: 1200\nBot 1 -> Chips: 800"
        );
    }
}
