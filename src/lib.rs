#![doc = "The `taskbox` library crate."]
#![doc = ""]
#![doc = "This crate contains the core business logic, domain models, credential"]
#![doc = "handling, routing configuration, and error handling for the Taskbox backend."]
#![doc = "It is used by the main binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
