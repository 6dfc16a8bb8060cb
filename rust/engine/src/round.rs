//! The betting-round state machine: per-hand state, the cyclic turn queue,
//! action application with degrade-to-affordable semantics, and the driver
//! that runs one queue pass through an [`ActionSource`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Controller, Player};

/// Fixed size of an automated bluff, added on top of the current bet.
pub const BLUFF_CHIPS: u32 = 20;

/// The four betting streets of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Community cards revealed when this street opens.
    pub fn reveal_count(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Pre-Flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }
}

/// What a seat may do when the action reaches it.
///
/// `Bet` covers raises as well: both share one wager path, and the capped
/// wager becomes the new current bet whenever it exceeds the old one.
/// `Bluff` is the automated seats' fixed-size raise.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SeatAction {
    Fold,
    Check,
    Call,
    Bet(u32),
    Bluff,
}

/// Mutable state of one hand, shared by its four betting rounds: the pot,
/// the bet to match, the action history and the revealed community cards.
/// Created fresh per hand and discarded after showdown.
#[derive(Debug, Clone, Default)]
pub struct HandState {
    pot: u32,
    current_bet: u32,
    history: Vec<String>,
    community: Vec<Card>,
    all_ins: Vec<(String, u32)>,
}

impl HandState {
    pub fn new() -> Self {
        Self::with_pot(0)
    }

    /// Start a hand whose pot is seeded with chips carried over from a hand
    /// that everyone folded.
    pub fn with_pot(carry: u32) -> Self {
        Self {
            pot: carry,
            current_bet: 0,
            history: Vec::new(),
            community: Vec::with_capacity(5),
            all_ins: Vec::new(),
        }
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Seats that went all-in this hand and the wager that emptied them.
    /// Side pots are recorded for reporting only; the whole pot still goes
    /// to the showdown winner(s).
    pub fn all_ins(&self) -> &[(String, u32)] {
        &self.all_ins
    }

    /// Reveal one community card. Capacity is five; extra reveals are
    /// ignored by the table layer before they reach here.
    pub fn push_community(&mut self, card: Card) {
        self.community.push(card);
    }

    pub(crate) fn take_pot(&mut self) -> u32 {
        std::mem::take(&mut self.pot)
    }
}

/// Cyclic order of seat indices. A betting round pops the front seat, lets
/// it act, and pushes it back, so one pass touches each seat exactly once.
/// Folded and zero-chip seats keep rotating; they just take no action.
#[derive(Debug, Clone)]
pub struct TurnQueue {
    order: VecDeque<usize>,
}

impl TurnQueue {
    pub fn new(seats: usize) -> Self {
        Self {
            order: (0..seats).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Front seat rotates to the back; returns the seat whose turn it is.
    pub fn rotate(&mut self) -> Option<usize> {
        let seat = self.order.pop_front()?;
        self.order.push_back(seat);
        Some(seat)
    }

    /// Rebuild after elimination compacts the roster and remaps indices.
    pub fn rebuild(&mut self, seats: usize) {
        self.order = (0..seats).collect();
    }
}

/// Snapshot handed to an [`ActionSource`] when a seat must act.
#[derive(Debug)]
pub struct SeatView<'a> {
    pub seat: usize,
    pub name: &'a str,
    pub controller: &'a Controller,
    pub hole: [Card; 2],
    pub chips: u32,
    pub pot: u32,
    pub current_bet: u32,
    pub community: &'a [Card],
}

/// Synchronous request/response boundary for seat decisions. The round
/// engine blocks on `choose`: interactive callers prompt the terminal,
/// automated callers consult a strategy, tests script the replies.
pub trait ActionSource {
    fn choose(&mut self, view: &SeatView<'_>) -> SeatAction;
}

/// Apply one action to the acting seat and the hand state, degrading to the
/// best affordable move. Insufficient chips never fail: a short call becomes
/// a check, an oversized wager is capped to the stack, an unaffordable bluff
/// becomes a check.
pub fn apply_action(player: &mut Player, hand: &mut HandState, action: SeatAction) {
    let name = player.name().to_string();
    match action {
        SeatAction::Fold => {
            player.fold();
            hand.history.push(format!("{} folds.", name));
        }
        SeatAction::Check => {
            hand.history.push(format!("{} checks.", name));
        }
        SeatAction::Call => {
            let owed = hand.current_bet;
            if player.chips() >= owed {
                player.deduct(owed);
                hand.pot += owed;
                hand.history.push(format!("{} calls {} chips.", name, owed));
                if owed > 0 && !player.has_chips() {
                    hand.all_ins.push((name, owed));
                }
            } else {
                hand.history.push(format!("{} checks.", name));
            }
        }
        SeatAction::Bet(amount) => {
            let wager = amount.min(player.chips());
            player.deduct(wager);
            hand.pot += wager;
            if wager > hand.current_bet {
                hand.current_bet = wager;
                hand.history.push(format!("{} raises to {} chips.", name, wager));
            } else {
                hand.history.push(format!("{} bets {} chips.", name, wager));
            }
            if wager > 0 && !player.has_chips() {
                hand.all_ins.push((name, wager));
            }
        }
        SeatAction::Bluff => {
            if player.chips() >= hand.current_bet + BLUFF_CHIPS {
                hand.current_bet += BLUFF_CHIPS;
                player.deduct(BLUFF_CHIPS);
                hand.pot += BLUFF_CHIPS;
                hand.history
                    .push(format!("{} bluffs with {} chips.", name, BLUFF_CHIPS));
            } else {
                hand.history.push(format!("{} checks.", name));
            }
        }
    }
}

/// Drive one betting round: a single pass of the turn queue. Every seat is
/// rotated through; folded, broke, or undealt seats take no action. The
/// round does not re-open when a later seat raises.
pub fn run_betting_round(
    roster: &mut [Player],
    queue: &mut TurnQueue,
    hand: &mut HandState,
    source: &mut dyn ActionSource,
) {
    for _ in 0..queue.len() {
        let Some(seat) = queue.rotate() else { break };
        let Some(player) = roster.get(seat) else {
            continue;
        };
        if player.is_folded() || !player.has_chips() {
            continue;
        }
        let Some(hole) = player.hand() else { continue };
        let action = {
            let view = SeatView {
                seat,
                name: player.name(),
                controller: player.controller(),
                hole,
                chips: player.chips(),
                pot: hand.pot(),
                current_bet: hand.current_bet(),
                community: hand.community(),
            };
            source.choose(&view)
        };
        apply_action(&mut roster[seat], hand, action);
    }
}
