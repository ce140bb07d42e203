//! Toast notifications.

use std::time::Duration;

use leptos::prelude::*;
use turbo_card::notify::{Notifier, Toast, ToastKind, ToastQueue};

/// Shared handle to the page's toast queue.
///
/// Toasts dismiss themselves once their duration has elapsed.
#[derive(Clone, Copy)]
pub struct ToasterHandle {
    queue: RwSignal<ToastQueue>,
}

impl ToasterHandle {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    /// Remove a toast before it times out.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    /// Snapshot of visible toasts.
    pub fn active(&self) -> Vec<Toast> {
        self.queue.with(|q| q.active().to_vec())
    }
}

impl Default for ToasterHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToasterHandle {
    fn notify(&mut self, kind: ToastKind, message: &str, duration: Duration) -> u64 {
        let mut id = 0;
        self.queue.update(|q| id = q.notify(kind, message, duration));

        let handle = *self;
        set_timeout(move || handle.dismiss(id), duration);
        id
    }
}

/// Create a toaster and make it available to descendants.
pub fn provide_toaster() -> ToasterHandle {
    let handle = ToasterHandle::new();
    provide_context(handle);
    handle
}

/// The nearest toaster, if one was provided.
pub fn use_toaster() -> Option<ToasterHandle> {
    use_context::<ToasterHandle>()
}

/// Renders the visible toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let handle = use_toaster().unwrap_or_else(provide_toaster);

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || handle.active()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.kind.as_str())
                            on:click=move |_| handle.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_notifier<N: Notifier>() {}

    #[test]
    fn test_handle_is_a_notifier() {
        assert_notifier::<ToasterHandle>();
    }

    #[test]
    fn test_dismiss_removes_active_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = ToasterHandle::new();
            let mut id = 0;
            handle.queue.update(|q| id = q.success("Added to cart", Duration::from_secs(2)));

            let active = handle.active();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].message, "Added to cart");

            handle.dismiss(id);
            assert!(handle.active().is_empty());
        });
    }
}
