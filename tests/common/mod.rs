mod helpers;

// Re-export
pub use assertions::{assert_body_valid, assert_position_eq};

pub use helpers::*;

pub use test_app::{TestApp, TestAppBuilder};
