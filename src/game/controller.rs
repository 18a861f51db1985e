use tracing::{debug, info};

use super::state::{GameState, SubmitOutcome, TickOutcome};
use crate::checker::{parse_declaration, validate_answer, ValidationResult};
use crate::config::Rules;
use crate::level::{Catalog, LayoutAttributes, Level};

/// Owns the game state and applies every transition to it.
///
/// The controller knows nothing about terminals or clocks: the front end
/// feeds it input text, button presses and ticks.
pub struct Game {
    catalog: Catalog,
    rules: Rules,
    state: GameState,
    input: String,
}

impl Game {
    pub fn new(catalog: Catalog, rules: Rules) -> Self {
        Game {
            catalog,
            rules,
            state: GameState::new(rules.round_seconds),
            input: String::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn current_level(&self) -> &Level {
        self.catalog.level(self.state.level)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn hint(&self) -> Option<&str> {
        self.state
            .hint_visible
            .then(|| self.current_level().puzzle.hint.as_str())
    }

    /// Playground layout for whatever is typed right now.
    pub fn layout(&self) -> LayoutAttributes {
        self.current_level().layout(&parse_declaration(&self.input))
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let level = self.state.level;
        match validate_answer(&self.input, &self.current_level().puzzle.answer) {
            ValidationResult::Incomplete => {
                debug!(level, input = %self.input, "answer_incomplete");
                SubmitOutcome::Incomplete
            }
            ValidationResult::Incorrect => {
                debug!(level, input = %self.input, "answer_rejected");
                SubmitOutcome::Incorrect
            }
            ValidationResult::Correct => {
                self.state.points += self.rules.correct_reward;
                if level < self.catalog.len() {
                    self.enter_level(level + 1);
                    info!(level, points = self.state.points, "level_cleared");
                    SubmitOutcome::Advanced { level: level + 1 }
                } else {
                    self.enter_level(1);
                    info!(level, points = self.state.points, "all_levels_cleared");
                    SubmitOutcome::CompletedAll
                }
            }
        }
    }

    /// Hints are free; only the count is kept.
    pub fn request_hint(&mut self) {
        self.state.hint_visible = true;
        self.state.hints_used += 1;
        info!(level = self.state.level, hints_used = self.state.hints_used, "hint_shown");
    }

    /// Clears the input and charges the retry penalty, even if there was
    /// nothing to clear.
    pub fn retry(&mut self) {
        self.input.clear();
        self.state.points -= self.rules.retry_penalty;
        info!(level = self.state.level, points = self.state.points, "retry_penalty");
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state.time_remaining > 1 {
            self.state.time_remaining -= 1;
            TickOutcome::Running {
                remaining: self.state.time_remaining,
            }
        } else {
            info!(level = self.state.level, "timer_expired");
            self.enter_level(1);
            TickOutcome::Expired
        }
    }

    fn enter_level(&mut self, number: usize) {
        self.state.level = number;
        self.state.hint_visible = false;
        self.state.time_remaining = self.rules.round_seconds;
        self.input.clear();
    }
}
