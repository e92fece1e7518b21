pub mod handlers;
pub mod result;
pub mod views;
