pub mod client;
pub mod config;
pub mod domain;
pub mod helpers;
pub mod http;
pub mod repository;
