//! This crate contains the shared toast UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub mod models;

pub use components::toast::Toast;
pub use models::{ToastMessage, ToastType};

/// Tailwind output for every class the components use. Regenerated by `build.rs`.
pub static TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
