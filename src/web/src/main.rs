use dioxus::logger::tracing::{Level, info};
use dioxus::prelude::*;
use ui::{TAILWIND_CSS, Toast, ToastMessage};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    launch(App)
}

#[component]
fn App() -> Element {
    let mut current = use_signal::<Option<ToastMessage>>(|| None);

    let mut show = move |message: Option<ToastMessage>| {
        match &message {
            Some(message) => info!(kind = %message.kind, text = %message.text, "showing toast"),
            None => info!("clearing toast"),
        }
        current.set(message);
    };

    rsx! {
        head {
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            Title { "Toast" }
        }
        div { class: "p-8 flex gap-4",
            button { onclick: move |_| show(Some(ToastMessage::success("Saved!"))), "Success" }
            button { onclick: move |_| show(Some(ToastMessage::error("Failed to save"))), "Error" }
            button { onclick: move |_| show(None), "Clear" }
        }
        Toast { message: current() }
    }
}
