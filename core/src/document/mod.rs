pub mod load;

pub use load::{parse_document, read_document};
