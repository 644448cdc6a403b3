use crate::models::{ToastMessage, ToastType};
use dioxus::prelude::*;

/// Placement and shape shared by every toast.
pub const TOAST_BASE_CLASS: &str =
    "fixed top-4 right-4 z-50 px-4 py-2 rounded-lg shadow-lg font-medium";

pub fn variant_class(kind: ToastType) -> &'static str {
    match kind {
        ToastType::Success => "bg-primary text-white",
        ToastType::Error => "bg-red-600 text-white",
    }
}

pub fn toast_class(kind: ToastType) -> String {
    format!("{} {}", TOAST_BASE_CLASS, variant_class(kind))
}

/// Renders `message` as a fixed top-right notification, or nothing when absent.
#[component]
pub fn Toast(message: Option<ToastMessage>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div { class: toast_class(message.kind), "{message.text}" }
    }
}
