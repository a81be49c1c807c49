#[path = "../common/mod.rs"]
mod common;

mod drone_tests;
