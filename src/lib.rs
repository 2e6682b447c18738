pub mod benchmarks;
pub mod cli;
pub mod config;
pub mod core;
pub mod fixture;
pub mod operations;
pub mod verification;

pub use crate::config::BenchConfig;
pub use crate::core::{BenchError, BenchResult, BinaryOp, DispatchStrategy};
pub use crate::fixture::{BinaryOpFixture, DEFAULT_LENGTH, REFERENCE_LOOPS};
pub use crate::operations::{AddOperation, InlineAddOperation};
pub use crate::verification::{verify_equivalence, verify_loops, VerificationReport};
