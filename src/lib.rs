// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod reporting;
pub mod routes;
pub mod scoring;
pub mod seed;
pub mod state;
pub mod store;

pub use routes::create_router;
