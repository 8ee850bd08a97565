pub mod parties;
pub mod summary;
