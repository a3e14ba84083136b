#![allow(dead_code)]

pub mod auth;
pub mod factory;

pub use app_builder::{create_test_app, memory_state, test_state};
