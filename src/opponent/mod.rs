mod opponent;
mod slots;
mod store;

pub use opponent::*;
pub use slots::*;
pub use store::*;
