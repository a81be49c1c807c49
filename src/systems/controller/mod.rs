mod external;
mod keyboard;

pub use external::external_control_system;
pub use keyboard::{axes_from_keys, keyboard_control_system};
