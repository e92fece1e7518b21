pub mod config;
pub mod errors;
pub mod repository;
pub mod util;

pub use repository::*;

/// 客户 ID，从 1 开始递增，进程生命周期内不复用
pub type ClientId = u64;
