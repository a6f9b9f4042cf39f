use thiserror::Error;

/// Reasons a graph description cannot be turned into a [`crate::Graph`].
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph has no cities")]
    Empty,

    #[error("no city is flagged as base")]
    MissingBase,

    #[error("more than one base city: '{first}' and '{second}'")]
    MultipleBases { first: String, second: String },

    #[error("city '{0}' is listed more than once")]
    DuplicateCity(String),

    #[error("connection {from} -> {to} names unknown city '{missing}'")]
    UnknownCity {
        from: String,
        to: String,
        missing: String,
    },

    #[error("city '{city}' has invalid reward {reward}")]
    InvalidReward { city: String, reward: f64 },

    #[error("connection {from} -> {to} has invalid cost {cost}")]
    InvalidCost { from: String, to: String, cost: f64 },

    #[error("malformed graph description: {0}")]
    Parse(#[from] serde_json::Error),
}
