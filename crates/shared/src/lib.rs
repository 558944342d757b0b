pub mod config;
pub mod dataset;
pub mod filter;
pub mod gate;
pub mod icons;
pub mod markers;
pub mod models;
