// Library for the binary and tests

pub mod config;
pub mod fetcher;
pub mod models;
pub mod poller;
pub mod render;
pub mod routes;
pub mod store;
pub mod version;
pub mod view;
