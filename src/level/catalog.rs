use super::error::LevelError;
use super::types::Level;
use crate::checker::is_complete_rule;

/// The ordered, immutable set of levels a game is played over.
///
/// Levels are addressed by their 1-based number. A catalog always holds at
/// least one level and its numbers always run `1..=len()`.
#[derive(Debug)]
pub struct Catalog {
    levels: Vec<Level>,
}

impl Catalog {
    pub fn new(levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }

        for (index, level) in levels.iter().enumerate() {
            let expected = index + 1;
            if level.meta.number != expected {
                return Err(LevelError::OutOfOrder {
                    expected,
                    found: level.meta.number,
                });
            }
            // An answer that can't pass the pre-check could never be matched.
            if !is_complete_rule(&level.puzzle.answer) {
                return Err(LevelError::MalformedAnswer {
                    level: expected,
                    answer: level.puzzle.answer.clone(),
                });
            }
        }

        Ok(Catalog { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Panics if `number` is outside `1..=len()`.
    pub fn level(&self, number: usize) -> &Level {
        &self.levels[number - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
