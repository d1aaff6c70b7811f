pub mod add;
pub mod config;
pub mod log;
pub mod markdown;
pub mod ticker;
pub mod timer;
pub mod tracker;
