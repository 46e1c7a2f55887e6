use thiserror::Error;

/// Rejection of curves that cannot be blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("at least two samples are needed to define a speed range, got {len}")]
    TooFewPoints { len: usize },

    #[error("{len} samples do not fit into the capacity of {capacity}")]
    TooManyPoints { len: usize, capacity: usize },

    #[error(
        "series lengths differ: speeds={speeds}, zero throttle={zero_throttle}, full throttle={full_throttle}"
    )]
    LengthMismatch {
        speeds: usize,
        zero_throttle: usize,
        full_throttle: usize,
    },

    #[error("engine speeds must be strictly increasing, violated at index {index}")]
    SpeedsNotIncreasing { index: usize },

    #[error("output buffer holds {actual} samples, expected {expected}")]
    OutputLengthMismatch { expected: usize, actual: usize },
}
