/// Errors raised by the statistics engine when a sample violates the
/// caller contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("{operation} needs at least {required} values, got {actual}")]
    InsufficientSample {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("relative standard deviation is undefined for a zero mean")]
    ZeroMean,

    #[error("not a decimal number: {value:?}")]
    InvalidNumber { value: String },

    #[error("non-finite value cannot be used as a decimal: {value}")]
    NonFinite { value: String },

    #[error("square root of a negative value")]
    SquareRootOfNegative,
}
