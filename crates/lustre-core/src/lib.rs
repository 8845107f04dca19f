pub mod catalog;
pub mod constants;
pub mod coverflow;
pub mod momentum;

pub use catalog::*;
pub use constants::*;
pub use coverflow::*;
pub use momentum::*;
