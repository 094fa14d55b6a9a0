// HTTP client for the projects/weather backend

pub mod client;

pub use client::{ApiError, Client};
