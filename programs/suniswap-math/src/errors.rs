use thiserror::Error;

/// SuniSwap Math Error Codes
/// Every failure is a synchronous precondition failure; nothing is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    // ═══════════════════════════════════════════════════════════════════════
    // RANGE ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Tick index outside [MIN_TICK, MAX_TICK]
    #[error("TICK")]
    TickOutOfRange,

    /// Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    #[error("SQRT_RATIO")]
    SqrtRatioOutOfRange,

    // ═══════════════════════════════════════════════════════════════════════
    // ARITHMETIC ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Bit search over a zero input
    #[error("ZERO")]
    ZeroInput,

    /// Value does not fit in its fixed width
    #[error("RANGE")]
    Overflow,

    /// Division by zero attempted
    #[error("division by zero")]
    DivisionByZero,

    // ═══════════════════════════════════════════════════════════════════════
    // CALLER ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Input violates a documented precondition of the called routine
    #[error("precondition violated: {0}")]
    PreconditionViolated(&'static str),
}

pub type Result<T> = core::result::Result<T, MathError>;
