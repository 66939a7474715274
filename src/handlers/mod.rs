// src/handlers/mod.rs

pub mod entries;
pub mod score;
pub mod stats;
pub mod transfer;
