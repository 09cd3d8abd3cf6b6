pub mod frame;
pub mod generation;
pub mod ticker;

pub use frame::Frame;
pub use generation::{Generation, Generations};
pub use ticker::{DEFAULT_TICK_HZ, Ticker};
