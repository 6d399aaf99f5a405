pub mod record_collection;
pub mod record_point;
