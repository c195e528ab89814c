//! Enlace Common Library
//!
//! Permission model, view routing and widget state for the Enlace RB HR
//! dashboard. Nothing here touches a rendering surface or the network; the
//! client crate renders these decisions and performs the AI-assist call.

pub mod applier;
pub mod assist;
pub mod calendar;
pub mod carousel;
pub mod clearance;
pub mod dashboard;
pub mod i18n;
pub mod modal;
pub mod permissions;
pub mod role;
pub mod router;
pub mod session;
pub mod validators;
pub mod view;

pub use applier::{ActionGate, Decisions};
pub use dashboard::Dashboard;
pub use permissions::{Capability, CapabilitySet, lookup};
pub use role::Role;
pub use session::Session;
pub use view::{HrSubView, ViewId};
