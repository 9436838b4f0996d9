use dioxus::prelude::*;
use std::time::Duration;

use crate::timing::sleep;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn class(&self) -> &'static str {
        match self {
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Info => "info",
        }
    }
}

/// Per-toast options. Currently only the display duration.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastOptions {
    duration: Duration,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self {
            duration: Duration::from_secs(4),
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastItem {
    id: u64,
    message: String,
    kind: ToastType,
    duration: Duration,
}

/// Handle for pushing toasts from any component under a [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(message, ToastType::Success, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(message, ToastType::Error, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.push(message, ToastType::Info, options);
    }

    fn push(&self, message: String, kind: ToastType, options: ToastOptions) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = next_id() + 1;
        next_id.set(id);
        items.write().push(ToastItem {
            id,
            message,
            kind,
            duration: options.duration,
        });
    }

    fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

/// Read the toast handle provided by [`ToastProvider`].
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the [`Toasts`] context and renders the notification viewport
/// above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {children}
        div { class: "toast-viewport",
            for item in toasts.items.read().iter() {
                ToastEntry { key: "{item.id}", item: item.clone() }
            }
        }
    }
}

#[component]
fn ToastEntry(item: ToastItem) -> Element {
    let toasts = use_toast();
    let id = item.id;
    let duration = item.duration;

    // Auto-dismiss once the display duration elapses.
    use_future(move || async move {
        sleep(duration).await;
        toasts.dismiss(id);
    });

    rsx! {
        div {
            class: "toast",
            "data-kind": item.kind.class(),
            span { class: "toast-message", "{item.message}" }
            button {
                class: "toast-close",
                onclick: move |_| toasts.dismiss(id),
                "\u{00d7}"
            }
        }
    }
}
