pub mod memory_repository;
pub mod repository_util;
