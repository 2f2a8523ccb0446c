pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod middleware;
pub mod model;
pub mod models;
pub mod services;
