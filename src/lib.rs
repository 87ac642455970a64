pub mod address;
pub mod analyzer;
pub mod arguments;
pub mod cache;
pub mod config;
pub mod errors;
pub mod known_entities;
pub mod logger;
pub mod personality;
pub mod price;
pub mod provider;
pub mod rate_limit;
pub mod run;
pub mod transfers;
pub mod webserver;
