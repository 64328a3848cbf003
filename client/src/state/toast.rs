//! Transient toast notifications.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Toasts visible at once; a new toast evicts the oldest.
pub const TOAST_LIMIT: usize = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast and return its id for later dismissal.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(
            0,
            Toast { id, title: title.to_owned(), description: description.to_owned(), variant },
        );
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Remove toast `id`; a no-op if it was already evicted.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
