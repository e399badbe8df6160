pub mod dinner;
pub mod health;
pub mod plating;
pub mod server;
