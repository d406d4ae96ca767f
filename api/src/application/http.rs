pub mod analysis;
pub mod health;
pub mod index;
pub mod server;
