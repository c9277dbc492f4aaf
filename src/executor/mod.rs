//! Executor module - Remote generation clients and the two-tier pool

pub mod http_executor;
pub mod pool;
pub mod traits;

pub use http_executor::HttpExecutor;
pub use pool::ExecutorPool;
pub use traits::Executor;
