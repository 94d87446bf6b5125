pub mod page;
pub mod tracker;

pub use tracker::HistoryTracker;
