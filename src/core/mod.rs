pub mod config;
pub mod error;
pub mod rng;

pub use config::DuelConfig;
pub use error::{Result, SkirmishError};
pub use rng::Pcg32;
