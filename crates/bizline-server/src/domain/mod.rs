mod attributes;
mod business;
mod headline;
mod random;

pub use attributes::*;
pub use business::*;
pub use headline::*;
pub use random::*;
