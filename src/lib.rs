pub mod backend;
pub mod config;
pub mod core;
pub mod error;
pub mod hash;
pub mod workflow;
