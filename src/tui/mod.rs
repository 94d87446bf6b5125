pub mod app;
pub mod edit;
pub mod handlers;
pub mod navigation;
pub mod search;
pub mod ui;
