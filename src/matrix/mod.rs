//! Matrix access, the baseline transpose, and the correctness oracle.
//!
//! These provide the correctness baseline and the memory abstraction used
//! by the blocked strategies.

pub mod check;
pub mod memory;
pub mod transpose;
