pub mod arena;
pub mod forest;
pub mod garage;
pub mod library;
