pub mod businesses;
pub mod headlines;
pub mod health;
