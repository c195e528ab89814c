//! Message handlers organized by category

mod calendar;
mod carousel;
mod modal;
mod navigation;
mod termination;
mod ui;
mod vacancy;
mod window;

pub use modal::gallery_alt;
