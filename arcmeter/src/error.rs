use thiserror::Error;

/// Validation failure raised by a [`ProgressRing`](crate::ProgressRing)
/// setter.
///
/// Every variant is an invalid-value rejection: the type system already rules
/// out wrongly-typed inputs, so only range and enum checks remain at runtime.
/// A failed setter leaves all prior state unmodified and never triggers a
/// repaint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// A dimension-like option (thickness, cap precision, widget size, label
    /// font size) was not a positive integer.
    #[error("{what} must be a positive integer, not {value}")]
    NonPositive { what: &'static str, value: i32 },

    /// A cap style name did not normalize to one of the accepted caps.
    #[error("arc cap must be one of \"round\", \"none\" or \"square\", and \"{0}\" is not")]
    UnknownCapStyle(String),

    /// The requested maximum does not exceed the current minimum.
    #[error("maximum progress ({max}) must be greater than minimum progress ({min})")]
    MaxNotAboveMin { max: i32, min: i32 },

    /// The requested minimum exceeds the current maximum.
    #[error("minimum progress ({min}) must not exceed maximum progress ({max})")]
    MinAboveMax { min: i32, max: i32 },

    /// The requested progress value lies outside the current bounds.
    #[error("progress must be between minimum ({min}) and maximum ({max}), not {value}")]
    ValueOutOfRange { value: i32, min: i32, max: i32 },
}
