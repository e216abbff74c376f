//! Rules engine: legal actions, transitions, and terminal detection.
//!
//! `RulesEngine` is the seam between the table driver and the rules. The
//! driver asks which actions are legal, applies the one chosen, and checks
//! whether the game is over. `MahjongRules` implements it for the table
//! variant played here:
//!
//! - The interactive seat is dealt 14 tiles and opens with a discard,
//!   then draws first; the opening discard is neither claimable nor a win
//! - Bot seats draw and discard the drawn tile at once
//! - After every bot discard the interactive seat may Peng, or Chi if the
//!   claim policy allows it from that discarder
//! - The interactive hand is checked for a win after every discard

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::config::TableConfig;
use crate::core::error::{GameError, TableResult};
use crate::core::rng::GameRng;
use crate::core::seat::SeatId;
use crate::core::state::{GameState, Phase};
use crate::tiles::{Deck, Tile};

use super::claims::{apply_chi, apply_peng, can_chi, can_peng, find_chi_options, ClaimOutcome};
use super::seating::Seating;
use super::win::{check_win, WinShape};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: SeatId,
    pub shape: WinShape,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        self.winner == seat
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty when the seat cannot act
/// - `apply_action`: deterministic given the state's RNG; on error the
///   state is left unchanged
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the table configuration.
    fn config(&self) -> &TableConfig;

    /// Enumerate the legal actions for a seat.
    fn legal_actions(&self, state: &GameState, seat: SeatId) -> Vec<Action>;

    /// Apply an action to the game state.
    ///
    /// # Errors
    ///
    /// `GameError::IllegalAction` for actions the phase does not allow,
    /// `GameError::TileNotInHand` for discards of tiles not held, and
    /// `GameError::WallExhausted` for draws from an empty wall.
    fn apply_action(&self, state: &mut GameState, seat: SeatId, action: &Action) -> TableResult<()>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Check a single action against `legal_actions`.
    fn is_legal(&self, state: &GameState, seat: SeatId, action: &Action) -> bool {
        self.legal_actions(state, seat).contains(action)
    }
}

/// Rules for the one-human table.
#[derive(Clone, Debug)]
pub struct MahjongRules {
    config: TableConfig,
    seating: Seating,
}

impl MahjongRules {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let seating = Seating::new(config.seat_count);
        Self { config, seating }
    }

    #[must_use]
    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    /// The seat operated through the console.
    #[must_use]
    pub fn interactive_seat(&self) -> SeatId {
        self.config.interactive_seat
    }

    /// Shuffle a fresh wall from `seed` and deal.
    ///
    /// # Errors
    ///
    /// `GameError::WallExhausted` if the deal needs more tiles than exist.
    pub fn deal(&self, seed: u64) -> TableResult<GameState> {
        let rng = GameRng::new(seed);
        let wall = Deck::shuffled(&mut rng.for_context("wall"));
        self.deal_from(wall, rng)
    }

    /// Deal from a prepared wall.
    ///
    /// The interactive seat (the dealer) receives its tiles first, then
    /// each other seat in rotation order. The dealer then owes the opening
    /// discard.
    ///
    /// # Errors
    ///
    /// `GameError::WallExhausted` if the wall runs out mid-deal.
    pub fn deal_from(&self, wall: Deck, rng: GameRng) -> TableResult<GameState> {
        let dealer = self.interactive_seat();
        let mut state = GameState::new(self.config.seat_count, wall, rng);

        for seat in self.seating.rotation_from(dealer) {
            let count = if seat == dealer {
                self.config.dealer_hand_size
            } else {
                self.config.hand_size
            };
            for _ in 0..count {
                let tile = state.draw(self.config.draw_order)?;
                state.add_to_hand(seat, tile);
            }
        }

        state.public.active_seat = dealer;
        state.public.phase = Phase::OpeningDiscard;
        debug!(
            "dealt {} tiles, {} remain in the wall",
            self.config.tiles_dealt(),
            state.public.wall_remaining
        );

        Ok(state)
    }

    fn illegal(&self, state: &GameState, seat: SeatId, action: &Action) -> GameError {
        GameError::IllegalAction {
            seat,
            action: action.to_string(),
            phase: state.public.phase.to_string(),
        }
    }

    /// Whether the interactive seat has any claim on `tile` from `from`.
    fn has_claim(&self, state: &GameState, from: SeatId, tile: Tile) -> bool {
        let claimer = self.interactive_seat();
        if from == claimer {
            return false;
        }

        let hand = state.hand(claimer);
        can_peng(hand, tile)
            || (self.seating.may_chi(&self.config.claim_policy, claimer, from) && can_chi(hand, tile))
    }

    /// Put a discarded tile on the pile and settle what happens next:
    /// a win, a claim offer, or the next seat's draw.
    fn discard(&self, state: &mut GameState, from: SeatId, tile: Tile) {
        state.push_discard(tile);
        debug!("{} discarded {}", from, tile);

        let human = self.interactive_seat();
        if let Some(shape) = check_win(state.hand(human)) {
            info!("{} wins with {}", human, shape);
            state.public.phase = Phase::Finished(GameResult { winner: human, shape });
            return;
        }

        if self.has_claim(state, from, tile) {
            state.public.active_seat = human;
            state.public.phase = Phase::AwaitClaim { tile, from };
            return;
        }

        self.rotate(state, from);
    }

    /// Hand play to the seat after `last`, or after the seat a claim
    /// nominated.
    fn rotate(&self, state: &mut GameState, last: SeatId) {
        let after = state.public.resume_after.take().unwrap_or(last);
        state.public.advance_turn(self.seating.next(after));
        state.public.phase = Phase::AwaitDraw;
    }

    /// Record the claimed set and make the claimer discard. The claimed
    /// tile stays on the discard pile.
    fn settle_claim(&self, state: &mut GameState, seat: SeatId, from: SeatId, outcome: ClaimOutcome) {
        info!("{} claimed {} from {}", seat, outcome.meld, from);
        state.set_hand(seat, outcome.hand);
        state.public.melds[seat].push(outcome.meld);
        state.public.resume_after =
            Some(self.seating.resume_after(&self.config.claim_policy, seat, from));
        state.public.active_seat = seat;
        state.public.phase = Phase::AwaitDiscard;
    }
}

impl RulesEngine for MahjongRules {
    fn config(&self) -> &TableConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, seat: SeatId) -> Vec<Action> {
        if state.public.active_seat != seat {
            return vec![];
        }

        match state.public.phase {
            Phase::AwaitDraw => vec![Action::Draw],
            Phase::AwaitKeep { .. } => vec![Action::Keep, Action::Reject],
            Phase::OpeningDiscard | Phase::AwaitDiscard => state
                .hand(seat)
                .distinct_sorted()
                .into_iter()
                .map(Action::Discard)
                .collect(),
            Phase::AwaitClaim { tile, from } => {
                let hand = state.hand(seat);
                let mut actions = Vec::new();
                if can_peng(hand, tile) {
                    actions.push(Action::Peng(tile));
                }
                if self.seating.may_chi(&self.config.claim_policy, seat, from) {
                    actions.extend(find_chi_options(hand, tile).into_iter().map(Action::Chi));
                }
                actions.push(Action::Pass);
                actions
            }
            Phase::Finished(_) => vec![],
        }
    }

    fn apply_action(&self, state: &mut GameState, seat: SeatId, action: &Action) -> TableResult<()> {
        if state.public.active_seat != seat {
            return Err(self.illegal(state, seat, action));
        }

        match (state.public.phase, *action) {
            (Phase::AwaitDraw, Action::Draw) => {
                let tile = state.draw(self.config.draw_order)?;
                if seat == self.interactive_seat() {
                    state.public.record(seat, Action::Draw, None);
                    state.public.phase = Phase::AwaitKeep { drawn: tile };
                } else {
                    state.public.record(seat, Action::Draw, Some(tile));
                    self.discard(state, seat, tile);
                }
            }
            (Phase::AwaitKeep { drawn }, Action::Keep) => {
                state.public.record(seat, Action::Keep, Some(drawn));
                state.add_to_hand(seat, drawn);
                state.public.phase = Phase::AwaitDiscard;
            }
            (Phase::AwaitKeep { drawn }, Action::Reject) => {
                state.public.record(seat, Action::Reject, Some(drawn));
                self.discard(state, seat, drawn);
            }
            (Phase::OpeningDiscard, Action::Discard(tile)) => {
                if !state.remove_from_hand(seat, tile) {
                    return Err(GameError::TileNotInHand(tile));
                }
                state.public.record(seat, Action::Discard(tile), None);
                state.push_discard(tile);
                debug!("{} opened with {}", seat, tile);
                state.public.advance_turn(seat);
                state.public.phase = Phase::AwaitDraw;
            }
            (Phase::AwaitDiscard, Action::Discard(tile)) => {
                if !state.remove_from_hand(seat, tile) {
                    return Err(GameError::TileNotInHand(tile));
                }
                state.public.record(seat, Action::Discard(tile), None);
                self.discard(state, seat, tile);
            }
            (Phase::AwaitClaim { tile, from }, Action::Peng(claimed)) if claimed == tile => {
                let outcome = apply_peng(state.hand(seat), tile, from)?;
                state.public.record(seat, Action::Peng(tile), None);
                self.settle_claim(state, seat, from, outcome);
            }
            (Phase::AwaitClaim { tile, from }, Action::Chi(option)) => {
                if !self.seating.may_chi(&self.config.claim_policy, seat, from) {
                    return Err(self.illegal(state, seat, action));
                }
                let outcome = apply_chi(state.hand(seat), tile, option, from)?;
                state.public.record(seat, Action::Chi(option), None);
                self.settle_claim(state, seat, from, outcome);
            }
            (Phase::AwaitClaim { from, .. }, Action::Pass) => {
                state.public.record(seat, Action::Pass, None);
                self.rotate(state, from);
            }
            _ => return Err(self.illegal(state, seat, action)),
        }

        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match state.public.phase {
            Phase::Finished(result) => Some(result),
            _ => None,
        }
    }
}
