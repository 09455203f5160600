pub mod api;
pub mod data;
pub mod jobs;
pub mod services;
pub mod utils;
