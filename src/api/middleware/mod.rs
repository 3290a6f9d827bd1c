//! HTTP middleware.
//!
//! Execution order (outermost → innermost):
//! 1. Request logger: sees the final status
//! 2. 405 rewriter: structured body for method mismatches

pub mod errors;
pub mod logging;
