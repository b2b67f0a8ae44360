use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionClearReason {
    /// A session-consuming endpoint answered 401-class.
    Unauthorized,
    /// The user asked to leave.
    Logout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCleared {
    pub reason: SessionClearReason,
    /// The endpoint whose response triggered the clear.
    pub endpoint: String,
}

pub fn session_bus() -> SessionBus {
    expect_context()
}

/// In-process publish/subscribe channel for the "session cleared"
/// signal, provided once at the app root. Delivery is fire-and-forget
/// and at-least-once: an effect re-run may hand a subscriber the same
/// event twice, so handlers must be idempotent.
#[derive(Clone, Copy)]
pub struct SessionBus {
    seq: RwSignal<u64>,
    last: StoredValue<Option<SessionCleared>>,
}

impl Default for SessionBus {
    fn default() -> Self {
        Self {
            seq: RwSignal::new(0),
            last: StoredValue::new(None),
        }
    }
}

impl SessionBus {
    pub fn publish(&self, event: SessionCleared) {
        log::info!(
            "session cleared ({:?}) via {}",
            event.reason,
            event.endpoint
        );
        self.last.set_value(Some(event));
        self.seq.update(|s| *s += 1);
    }

    /// Runs `handler` for every published event from now on. The
    /// subscription lives as long as the calling reactive scope.
    pub fn subscribe(&self, handler: impl Fn(&SessionCleared) + Send + Sync + 'static) {
        let seq = self.seq;
        let last = self.last;
        Effect::new(move |_| {
            // seq 0 is the initial run before anything was published
            if seq.get() == 0 {
                return;
            }
            if let Some(ev) = last.get_value() {
                handler(&ev);
            }
        });
    }
}
