pub mod access;
pub mod audit;
pub mod health;
pub mod roles;
