pub mod health;
pub mod recipe;
pub mod server;
