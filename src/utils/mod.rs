pub mod constants;
pub mod math;
pub mod rng;
pub mod types;

pub use constants::*;
pub use math::*;
pub use rng::RngManager;
pub use types::*;
