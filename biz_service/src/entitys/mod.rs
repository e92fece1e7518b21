pub mod client_entity;
pub mod meal_entity;
