//! The interactive turn loop.
//!
//! `Table` owns the rules, the game state and a `Console`. Each step reads
//! the current phase, asks the operator when the interactive seat has a
//! decision to make, and feeds the resulting action to the rules engine.
//! Bot seats need no input.

use std::thread;

use log::{debug, warn};

use crate::core::action::Action;
use crate::core::config::TableConfig;
use crate::core::error::{GameError, TableResult};
use crate::core::seat::SeatId;
use crate::core::state::{GameState, Phase};
use crate::rules::claims::{can_peng, find_chi_options};
use crate::rules::engine::{GameResult, MahjongRules, RulesEngine};
use crate::tiles::{join_tiles, Tile};

use super::console::Console;

pub struct Table<C> {
    rules: MahjongRules,
    state: GameState,
    console: C,
}

impl<C: Console> Table<C> {
    /// Seat a table around an already dealt state.
    pub fn new(rules: MahjongRules, state: GameState, console: C) -> Self {
        Self { rules, state, console }
    }

    /// Shuffle, deal and seat a table.
    ///
    /// # Errors
    ///
    /// `GameError::WallExhausted` if the configuration deals more tiles
    /// than the wall holds.
    pub fn deal(config: TableConfig, seed: u64, console: C) -> TableResult<Self> {
        let rules = MahjongRules::new(config);
        let state = rules.deal(seed)?;
        Ok(Self::new(rules, state, console))
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &MahjongRules {
        &self.rules
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Play until the interactive seat wins.
    ///
    /// # Errors
    ///
    /// `GameError::WallExhausted` when the wall runs dry,
    /// `GameError::InputClosed` at end of input, and
    /// `GameError::RetriesExhausted` when the operator keeps naming tiles
    /// not in hand.
    pub fn run(&mut self) -> TableResult<GameResult> {
        self.say("")?;
        self.say("Let's test out your mahjong abilities!")?;
        self.ask("Press Enter to continue...")?;
        self.say("")?;
        self.say(&format!(
            "You have been dealt {} tiles.",
            self.state.hand(self.human()).len()
        ))?;

        loop {
            if let Some(result) = self.rules.is_terminal(&self.state) {
                self.say("")?;
                self.say(&format!("Congratulations! You won with {}!", result.shape))?;
                return Ok(result);
            }
            self.step()?;
        }
    }

    /// Advance the game by one decision.
    ///
    /// # Errors
    ///
    /// As for `run`.
    pub fn step(&mut self) -> TableResult<()> {
        let seat = self.state.public.active_seat;
        let pile_before = self.state.public.discard_pile.len();

        match self.state.public.phase {
            Phase::OpeningDiscard | Phase::AwaitDiscard => self.discard_from_hand(seat)?,
            Phase::AwaitDraw => self.draw(seat)?,
            Phase::AwaitKeep { drawn } => self.keep_or_reject(seat, drawn)?,
            Phase::AwaitClaim { tile, from } => self.offer_claim(seat, tile, from)?,
            Phase::Finished(_) => return Ok(()),
        }

        if self.state.public.discard_pile.len() > pile_before {
            self.say("")?;
            self.say(&format!(
                "Current discard pile: {}",
                join_tiles(&self.state.public.discard_pile.iter().copied().collect::<Vec<_>>())
            ))?;
        }
        Ok(())
    }

    fn human(&self) -> SeatId {
        self.rules.interactive_seat()
    }

    fn apply(&mut self, seat: SeatId, action: Action) -> TableResult<()> {
        self.rules.apply_action(&mut self.state, seat, &action)
    }

    fn say(&mut self, line: &str) -> TableResult<()> {
        self.console.write_line(line)
    }

    /// Prompt once. End of input cancels the game.
    fn ask(&mut self, prompt: &str) -> TableResult<String> {
        self.console.read_line(prompt)?.ok_or(GameError::InputClosed)
    }

    fn confirm(&mut self, prompt: &str) -> TableResult<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    fn show_tiles(&mut self, seat: SeatId) -> TableResult<()> {
        let hand = self.state.hand(seat).to_string();
        let melds = &self.state.public.melds[seat];
        let chi = melds.chi.iter().map(ToString::to_string).collect::<Vec<_>>();
        let peng = melds.peng.iter().map(ToString::to_string).collect::<Vec<_>>();

        self.say("")?;
        self.say(&format!("Your tiles: {}", hand))?;
        if !chi.is_empty() {
            self.say(&format!("Completed sets: {}", chi.join(" | ")))?;
        }
        if !peng.is_empty() {
            self.say(&format!("Penged sets: {}", peng.join(" | ")))?;
        }
        Ok(())
    }

    /// Ask for a tile in hand by name, within the retry bound.
    fn choose_discard(&mut self, seat: SeatId) -> TableResult<Tile> {
        let attempts = self.rules.config().max_prompt_retries;

        for _ in 0..attempts {
            self.show_tiles(seat)?;
            let input = self.ask("Which tile would you like to discard? Type the exact name: ")?;
            match input.parse::<Tile>() {
                Ok(tile) if self.rules.is_legal(&self.state, seat, &Action::Discard(tile)) => {
                    return Ok(tile)
                }
                _ => {
                    warn!("rejected discard input {:?}", input);
                    self.say("Invalid tile. Try again.")?;
                }
            }
        }

        Err(GameError::RetriesExhausted { attempts })
    }

    fn discard_from_hand(&mut self, seat: SeatId) -> TableResult<()> {
        let opening = matches!(self.state.public.phase, Phase::OpeningDiscard);
        let tile = self.choose_discard(seat)?;
        self.apply(seat, Action::Discard(tile))?;

        self.say("")?;
        if opening {
            let left = self.state.hand(seat).len();
            self.say(&format!("You discarded {}. Now you have {} tiles.", tile, left))
        } else {
            self.say(&format!("You discarded {}.", tile))
        }
    }

    fn draw(&mut self, seat: SeatId) -> TableResult<()> {
        let delay = self.rules.config().turn_delay;
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        if seat == self.human() {
            self.show_tiles(seat)?;
        }
        self.apply(seat, Action::Draw)?;

        if seat != self.human() {
            if let Some(tile) = self.state.public.action_history.back().and_then(|r| r.tile) {
                debug!("{} drew and discarded {}", seat, tile);
                self.say("")?;
                self.say(&format!("{} discarded: {}", seat, tile))?;
            }
        }
        Ok(())
    }

    fn keep_or_reject(&mut self, seat: SeatId, drawn: Tile) -> TableResult<()> {
        self.say("")?;
        self.say(&format!("You drew: {}", drawn))?;

        if self.confirm(&format!("Would you like to keep {}? (y/n): ", drawn))? {
            self.apply(seat, Action::Keep)
        } else {
            self.apply(seat, Action::Reject)?;
            self.say("")?;
            self.say(&format!("You did not keep {}.", drawn))
        }
    }

    /// Offer Peng, then Chi. Declining both passes.
    fn offer_claim(&mut self, seat: SeatId, tile: Tile, from: SeatId) -> TableResult<()> {
        if can_peng(self.state.hand(seat), tile)
            && self.confirm(&format!("Would you like to Peng {}? (y/n): ", tile))?
        {
            self.apply(seat, Action::Peng(tile))?;
            self.say("")?;
            return self.say(&format!("You penged {}.", tile));
        }

        if self.rules.seating().may_chi(&self.rules.config().claim_policy, seat, from) {
            let options = find_chi_options(self.state.hand(seat), tile);
            if !options.is_empty() {
                self.show_tiles(seat)?;
                self.say("")?;
                self.say(&format!("You can Chi {}. Choose tiles to form the set:", tile))?;
                for (i, option) in options.iter().enumerate() {
                    self.say(&format!("Option {}: {}", i + 1, option))?;
                }

                let choice = self.ask("Choose the option number: ")?;
                let picked = choice
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| options.get(i).copied());

                match picked {
                    Some(option) => {
                        let prompt = format!("Would you like to Chi {} with {}? (y/n): ", tile, option);
                        if self.confirm(&prompt)? {
                            self.apply(seat, Action::Chi(option))?;
                            self.say("")?;
                            return self.say(&format!("You chi-ed {}.", tile));
                        }
                    }
                    None => {
                        warn!("chi option {:?} out of range", choice);
                        self.say(&format!("No option {}; not claiming {}.", choice.trim(), tile))?;
                    }
                }
            }
        }

        self.apply(seat, Action::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DrawOrder;
    use crate::core::rng::GameRng;
    use crate::table::console::ScriptedConsole;
    use crate::tiles::{Deck, Hand};

    const HUMAN: SeatId = SeatId::new(0);

    fn table(hand: &[Tile], phase: Phase, active: SeatId, input: &[&str]) -> Table<ScriptedConsole> {
        let rules = MahjongRules::new(
            TableConfig::new(4)
                .with_draw_order(DrawOrder::Top)
                .with_max_prompt_retries(3),
        );
        let mut state = rules.deal_from(Deck::new(), GameRng::new(5)).unwrap();
        state.set_hand(HUMAN, Hand::from_tiles(hand.iter().copied()));
        state.public.phase = phase;
        state.public.active_seat = active;
        Table::new(rules, state, ScriptedConsole::new(input.iter().copied()))
    }

    #[test]
    fn test_discard_retries_then_succeeds() {
        let mut table = table(&[Tile::Wan(1), Tile::Bing(2)], Phase::AwaitDiscard, HUMAN, &["wan 9", "Wan 1", "wan 1"]);

        table.step().unwrap();

        let console = table.console();
        assert_eq!(console.transcript().iter().filter(|l| *l == "Invalid tile. Try again.").count(), 2);
        assert!(console.saw("You discarded wan 1."));
        assert!(console.saw("Current discard pile: wan 1"));
        assert_eq!(table.state().hand(HUMAN).tiles(), &[Tile::Bing(2)]);
    }

    #[test]
    fn test_opening_discard_then_dealer_draws() {
        let mut table = table(&[Tile::Wan(1), Tile::Bing(2)], Phase::OpeningDiscard, HUMAN, &["bing 2", "n"]);
        let total = table.state().tile_count();

        table.step().unwrap();
        assert!(table.console().saw("You discarded bing 2. Now you have 1 tiles."));
        assert_eq!(table.state().public.phase, Phase::AwaitDraw);
        assert_eq!(table.state().public.active_seat, HUMAN);

        table.step().unwrap();
        let drawn = match table.state().public.phase {
            Phase::AwaitKeep { drawn } => drawn,
            phase => panic!("expected a keep decision, got {}", phase),
        };
        assert_eq!(table.state().tile_count(), total);

        table.step().unwrap();
        assert!(table.console().saw(&format!("You did not keep {}.", drawn)));
        assert_eq!(table.state().public.active_seat, SeatId::new(1));
    }

    #[test]
    fn test_discard_retries_exhausted() {
        let mut table = table(&[Tile::Wan(1)], Phase::AwaitDiscard, HUMAN, &["x", "y", "z", "wan 1"]);

        assert_eq!(table.step(), Err(GameError::RetriesExhausted { attempts: 3 }));
        assert_eq!(table.state().hand(HUMAN).len(), 1);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut table = table(&[Tile::Wan(1)], Phase::AwaitDiscard, HUMAN, &[]);
        assert_eq!(table.step(), Err(GameError::InputClosed));
    }

    #[test]
    fn test_keep_prompt_is_case_insensitive() {
        let mut table = table(&[Tile::Wan(1)], Phase::AwaitKeep { drawn: Tile::Tiao(2) }, HUMAN, &["Y"]);

        table.step().unwrap();

        assert_eq!(table.state().public.phase, Phase::AwaitDiscard);
        assert!(table.state().hand(HUMAN).contains(Tile::Tiao(2)));
    }

    #[test]
    fn test_anything_but_y_rejects() {
        let mut table = table(&[Tile::Wan(1)], Phase::AwaitKeep { drawn: Tile::Tiao(2) }, HUMAN, &["yes"]);

        table.step().unwrap();

        assert!(table.console().saw("You did not keep tiao 2."));
        assert_eq!(table.state().public.last_discard(), Some(Tile::Tiao(2)));
    }

    #[test]
    fn test_chi_out_of_range_declines_with_notice() {
        let hand = [Tile::Tiao(3), Tile::Tiao(5)];
        let phase = Phase::AwaitClaim { tile: Tile::Tiao(4), from: SeatId::new(3) };
        let mut table = table(&hand, phase, HUMAN, &["2"]);

        table.step().unwrap();

        let console = table.console();
        assert!(console.saw("Option 1: tiao 3, tiao 5"));
        assert!(console.saw("No option 2; not claiming tiao 4."));
        assert_eq!(table.state().public.phase, Phase::AwaitDraw);
        assert_eq!(table.state().public.active_seat, SeatId::new(0));
    }

    #[test]
    fn test_chi_accepted() {
        let hand = [Tile::Tiao(3), Tile::Tiao(5), Tile::Wan(1)];
        let phase = Phase::AwaitClaim { tile: Tile::Tiao(4), from: SeatId::new(3) };
        let mut table = table(&hand, phase, HUMAN, &["1", "y"]);
        table.state.push_discard(Tile::Tiao(4));

        table.step().unwrap();

        assert!(table.console().saw("Would you like to Chi tiao 4 with tiao 3, tiao 5? (y/n): y"));
        assert!(table.console().saw("You chi-ed tiao 4."));
        assert_eq!(table.state().hand(HUMAN).tiles(), &[Tile::Wan(1)]);
        assert_eq!(table.state().public.phase, Phase::AwaitDiscard);
    }

    #[test]
    fn test_peng_declined_passes() {
        let hand = [Tile::Bing(7), Tile::Bing(7)];
        let phase = Phase::AwaitClaim { tile: Tile::Bing(7), from: SeatId::new(1) };
        let mut table = table(&hand, phase, HUMAN, &["n"]);

        table.step().unwrap();

        assert_eq!(table.state().public.active_seat, SeatId::new(2));
        assert_eq!(table.state().hand(HUMAN).len(), 2);
    }

    #[test]
    fn test_bot_discard_is_announced() {
        let mut table = table(&[Tile::Wan(1)], Phase::AwaitDraw, SeatId::new(2), &[]);
        let top = *table.state().wall().tiles().last().unwrap();

        table.step().unwrap();

        assert!(table.console().saw(&format!("Player 3 discarded: {}", top)));
        assert!(table.console().saw("Current discard pile:"));
    }
}
