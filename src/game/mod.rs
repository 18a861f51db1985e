pub mod controller;
pub mod state;
pub mod timer;

pub use controller::Game;
pub use state::{Notice, SubmitOutcome, TickOutcome};
pub use timer::Ticker;
