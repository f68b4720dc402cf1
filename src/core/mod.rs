// src/core/mod.rs

pub mod counter;
pub mod engine;
pub mod features;
pub mod model;
pub mod types;
