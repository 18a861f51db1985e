use serde::Deserialize;

use super::effect::{LayoutAttributes, LayoutEffect};
use crate::checker::ParsedDeclaration;

#[derive(Debug, Deserialize)]
pub struct Level {
    pub meta: LevelMeta,
    pub puzzle: Puzzle,
    pub preview: Preview,
}

#[derive(Debug, Deserialize)]
pub struct LevelMeta {
    pub number: usize,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct Puzzle {
    pub instruction: String,
    pub answer: String,
    pub hint: String,
}

#[derive(Debug, Deserialize)]
pub struct Preview {
    pub effect: LayoutEffect,
}

impl Level {
    /// Layout the playground should show for the player's current input.
    pub fn layout(&self, parsed: &ParsedDeclaration) -> LayoutAttributes {
        self.preview.effect.apply(parsed)
    }
}
