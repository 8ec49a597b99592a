pub mod app_state;
pub mod config;
pub mod rest;
pub mod services;
