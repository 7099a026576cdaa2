pub mod config;
pub mod password_gen;
