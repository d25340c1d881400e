pub mod outcome;
pub mod pool;
pub mod task;

pub use outcome::{FailureReason, TaskOutcome};
pub use pool::{pool_size, PoolError, WorkerPool};
pub use task::run_device;
