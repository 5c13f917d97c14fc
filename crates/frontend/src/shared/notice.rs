//! Transient success / persistent error banners.

use std::cell::{Cell, RefCell};
use std::future::Future;

use crate::shared::change_notifier::ChangeNotifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub success: Option<Notice>,
    pub error: Option<String>,
}

/// At most one success notice and one error; a new outcome replaces both.
///
/// Success notices expire on a timer, errors stay until superseded.
#[derive(Default)]
pub struct Notices {
    next_id: Cell<u64>,
    state: RefCell<NoticeState>,
    changes: ChangeNotifier,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NoticeState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.changes.subscribe(listener);
    }

    /// Shows a success notice and returns its id for [`Notices::expire`].
    pub fn success(&self, text: impl Into<String>) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.replace(NoticeState {
            success: Some(Notice {
                id,
                text: text.into(),
            }),
            error: None,
        });
        id
    }

    pub fn error(&self, text: impl Into<String>) {
        self.replace(NoticeState {
            success: None,
            error: Some(text.into()),
        });
    }

    pub fn clear(&self) {
        self.replace(NoticeState::default());
    }

    /// Drops the success notice `id` unless a newer outcome already replaced it.
    pub fn expire(&self, id: u64) {
        let expired = {
            let mut state = self.state.borrow_mut();
            if state.success.as_ref().map(|n| n.id) == Some(id) {
                state.success = None;
                true
            } else {
                false
            }
        };
        if expired {
            self.changes.notify();
        }
    }

    /// Waits for `delay`, then expires notice `id`.
    pub async fn expire_after<F>(&self, id: u64, delay: F)
    where
        F: Future<Output = ()>,
    {
        delay.await;
        self.expire(id);
    }

    fn replace(&self, next: NoticeState) {
        *self.state.borrow_mut() = next;
        self.changes.notify();
    }
}
