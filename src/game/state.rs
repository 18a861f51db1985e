/// Everything the player can see about their progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// 1-based, always within the catalog.
    pub level: usize,
    /// No floor; retries can drive it negative.
    pub points: i32,
    pub hints_used: u32,
    pub time_remaining: u32,
    pub hint_visible: bool,
}

impl GameState {
    pub fn new(round_seconds: u32) -> Self {
        GameState {
            level: 1,
            points: 0,
            hints_used: 0,
            time_remaining: round_seconds,
            hint_visible: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Incomplete,
    Incorrect,
    Advanced { level: usize },
    CompletedAll,
}

impl SubmitOutcome {
    pub fn notice(self) -> Option<Notice> {
        match self {
            SubmitOutcome::Incomplete => Some(Notice::IncompleteRule),
            SubmitOutcome::Incorrect => Some(Notice::IncorrectAnswer),
            SubmitOutcome::Advanced { .. } => None,
            SubmitOutcome::CompletedAll => Some(Notice::AllLevelsComplete),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    Expired,
}

/// Messages the player has to acknowledge before play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    IncompleteRule,
    IncorrectAnswer,
    TimeUp,
    AllLevelsComplete,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::IncompleteRule => " INCOMPLETE ",
            Notice::IncorrectAnswer => " NOT QUITE ",
            Notice::TimeUp => " TIME'S UP ",
            Notice::AllLevelsComplete => " VICTORY! ",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::IncompleteRule => "Incomplete CSS rule. Must include ':' and end with ';'",
            Notice::IncorrectAnswer => "Incorrect CSS. Try again!",
            Notice::TimeUp => "Time's up! Returning to Level 1.",
            Notice::AllLevelsComplete => {
                "Congratulations! You've completed all levels! Restarting..."
            }
        }
    }
}
