pub mod database;
pub mod filters;
pub mod models;
pub mod repos;
