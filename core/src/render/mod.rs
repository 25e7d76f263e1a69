pub mod canonical;
pub mod display;

pub use canonical::canonical_text;
pub use display::{display_line, DisplayLine};
