//! View rendering

mod admin;
mod dashboard;
mod docs;
mod hr;
mod indicators;
mod layout;
mod modal;
mod notifications;

pub use layout::main_layout;
