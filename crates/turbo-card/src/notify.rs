//! Transient user notifications (toasts).

use std::time::Duration;

use serde::Serialize;

/// Kind of toast. Cards only ever raise successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
        }
    }
}

/// A toast waiting to be shown or dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Receives toasts raised by a card.
pub trait Notifier {
    /// Show a toast. Returns its id.
    fn notify(&mut self, kind: ToastKind, message: &str, duration: Duration) -> u64;

    fn success(&mut self, message: &str, duration: Duration) -> u64 {
        self.notify(ToastKind::Success, message, duration)
    }
}

/// In-memory toast queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a toast. Returns true if it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let len_before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() < len_before
    }

    /// Toasts currently visible, oldest first.
    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, kind: ToastKind, message: &str, duration: Duration) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            duration,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::new();
        let first = queue.success("Added to cart", Duration::from_secs(2));
        let second = queue.success("Added to cart", Duration::from_secs(2));
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.active()[0].id, second);
    }

    #[test]
    fn test_toast_json() {
        let mut queue = ToastQueue::new();
        queue.success("Added to cart", Duration::from_millis(1500));
        let value = serde_json::to_value(&queue.active()[0]).unwrap();
        assert_eq!(value["kind"], "success");
        assert_eq!(value["duration_ms"], 1500);
    }

    #[test]
    fn test_toast_json_saturates_huge_duration() {
        let mut queue = ToastQueue::new();
        queue.success("Added to cart", Duration::MAX);
        let value = serde_json::to_value(&queue.active()[0]).unwrap();
        assert_eq!(value["duration_ms"], u64::MAX);
    }
}
