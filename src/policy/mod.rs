mod action;
mod agent;
mod party;
mod state;

pub use action::*;
pub use agent::*;
pub use party::*;
pub use state::*;
