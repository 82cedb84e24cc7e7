pub mod controller;
pub mod entities;
pub mod ports;

pub use controller::ChatController;
pub use entities::*;
pub use ports::*;
