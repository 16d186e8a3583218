pub mod app_state;
pub mod auth;
pub mod config;
pub mod demo;
pub mod handlers;
pub mod model;
pub mod router;
