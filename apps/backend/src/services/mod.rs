pub mod session_reaper;
pub mod sessions;

pub use session_reaper::spawn_session_reaper;
pub use sessions::{CreatedGame, GuessResult, SessionService};
