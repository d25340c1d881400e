pub mod cli;
pub mod device;
pub mod executor;
pub mod report;
pub mod session;
pub mod ssh;
pub mod ui;
