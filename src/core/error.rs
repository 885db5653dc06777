use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("Capacity must be greater than zero")]
    ZeroCapacity,

    #[error("Element size must be greater than zero")]
    ZeroElementSize,

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Allocation of {requested} slots failed")]
    AllocationFailed { requested: usize },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Health must be greater than zero")]
    ZeroHealth,

    #[error("Damage must be greater than zero")]
    ZeroDamage,

    #[error("Resistance must be greater than zero")]
    ZeroResistance,

    #[error("Health {health} exceeds max health {max_health}")]
    HealthExceedsMax { health: u32, max_health: u32 },

    #[error("Unknown weapon operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
