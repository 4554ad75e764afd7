mod preference;
mod weight;

pub use preference::*;
pub use weight::*;
