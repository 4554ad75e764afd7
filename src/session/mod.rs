mod fish;
mod outcome;
mod scenario;
mod session;

pub use fish::*;
pub use outcome::*;
pub use scenario::*;
pub use session::*;
