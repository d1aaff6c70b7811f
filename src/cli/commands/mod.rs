pub mod add;
pub mod config;
pub mod init;
pub mod log;
pub mod track;
