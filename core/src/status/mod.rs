pub mod collect;
pub mod order;

pub use collect::{collect_key, collect_statuses, STATUS_KEY};
pub use order::{dedup_statuses, sort_statuses, unique_sorted_statuses, StatusKind};
