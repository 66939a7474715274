// src/models/mod.rs

pub mod performance;
pub mod stats;
pub mod test_entry;
