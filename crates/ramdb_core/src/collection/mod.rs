//! Collections and their record storage.

mod records;
mod store;

pub use records::RecordMap;
pub use store::Collection;
