//! Outbound HTTP

mod assist;

pub use assist::{GeminiClient, TextGenerator};
