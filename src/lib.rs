pub mod board;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod routes;
pub mod sources;
pub mod state;
pub mod store;
