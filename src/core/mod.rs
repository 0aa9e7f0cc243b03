pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod format;
pub mod math;
pub mod message;
pub mod paths;
