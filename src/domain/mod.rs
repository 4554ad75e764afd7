mod bid;
mod domain;
mod issue;
mod value;

pub use bid::*;
pub use domain::*;
pub use issue::*;
pub use value::*;
