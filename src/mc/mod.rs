pub mod config;
pub mod payoffs;
pub mod pricer;
pub mod scalar;
pub mod vector;
