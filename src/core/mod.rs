pub mod api;
pub mod buildcore;
pub mod config;
pub mod error;
pub mod event;
pub mod list;
pub mod log;
pub mod queue;
pub mod shuffle;
pub mod sort;
