pub mod handlers;
pub mod requests;
pub mod seed;
pub mod service;
