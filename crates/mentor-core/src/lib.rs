//! # mentor-core - Core Domain Types
//!
//! Foundation crate for Code Mentor. Provides the explanation domain types,
//! complexity parsing, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Explanation Types (`explanation`)
//! - [`CodeExplanation`] - The six-section structured explanation of a snippet
//! - [`LineExplanation`] - One `{line, explanation}` pair
//! - [`BigOAnalysis`] - Raw time/space complexity strings
//! - [`ComplexityBreakdown`] - Notation/justification split of a complexity string
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Application error enum; `is_fatal` marks startup failures
//! - [`ExplainError`] - Per-request failure whose `Display` is the user-facing message
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mentor_core::prelude::*;
//! ```

pub mod error;
pub mod explanation;
pub mod logging;

/// Prelude for common imports used throughout all Code Mentor crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{
    Error, ExplainError, Result, ResultExt, FORMAT_FAILURE_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
    UNKNOWN_FAILURE_MESSAGE, VALIDATION_MESSAGE,
};
pub use explanation::{
    BigOAnalysis, CodeExplanation, ComplexityBreakdown, LineExplanation, MISSING_JUSTIFICATION,
    NOT_PROVIDED, NOT_AVAILABLE,
};
