pub mod config;
pub mod now;
pub mod show;
