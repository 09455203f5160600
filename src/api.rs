pub mod config;
pub mod graphql;
pub mod server;
