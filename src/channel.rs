use once_cell::sync::Lazy;
use serde::Serialize;
use slab::Slab;
use std::sync::{Arc, Mutex, Weak};

/// Name of the process-wide channel the overlay listens on.
pub const CHANNEL_NAME: &str = "debug-overlay";

/// A value pushed to the overlay.
///
/// Payloads are opaque: the channel never inspects them. A value that could
/// not be serialized is still delivered so the panel can show a placeholder
/// instead of silently keeping a stale value.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Value(serde_json::Value),
    Unformattable(String),
}

impl Payload {
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Payload::Value(v),
            Err(e) => {
                tracing::warn!(error = %e, "payload could not be serialized");
                Payload::Unformattable(e.to_string())
            }
        }
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Value(value)
    }
}

type Handler = Arc<dyn Fn(Arc<Payload>) + Send + Sync>;
type Registry = Mutex<Slab<Handler>>;

/// Fire-and-forget broadcast of payloads to whoever is currently listening.
///
/// Nothing is buffered. A payload published while no handler is registered
/// is dropped, and a handler registered later never sees it.
pub struct DataChannel {
    name: String,
    subscribers: Arc<Registry>,
}

static GLOBAL: Lazy<DataChannel> = Lazy::new(|| DataChannel::new(CHANNEL_NAME));

impl DataChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Arc::new(Mutex::new(Slab::new())),
        }
    }

    /// The process-wide channel. Created on first use and never torn down.
    pub fn global() -> &'static DataChannel {
        &GLOBAL
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Deliver `payload` to every registered handler.
    ///
    /// Handlers run after the registry lock is released, so a handler may
    /// publish again or drop its own subscription.
    pub fn publish(&self, payload: impl Into<Payload>) {
        let handlers: Vec<Handler> = {
            let Ok(subs) = self.subscribers.lock() else {
                return;
            };
            subs.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        if handlers.is_empty() {
            tracing::trace!(channel = %self.name, "publish without listeners dropped");
            return;
        }
        let payload = Arc::new(payload.into());
        tracing::trace!(channel = %self.name, listeners = handlers.len(), "publish");
        for handler in handlers {
            handler(Arc::clone(&payload));
        }
    }

    /// Register `handler` until the returned guard is dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(Arc<Payload>) + Send + Sync + 'static,
    {
        let key = match self.subscribers.lock() {
            Ok(mut subs) => Some(subs.insert(Arc::new(handler))),
            Err(_) => None,
        };
        tracing::debug!(channel = %self.name, ?key, "subscribed");
        Subscription {
            key,
            registry: Arc::downgrade(&self.subscribers),
        }
    }
}

/// Keeps a handler registered on a [`DataChannel`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    key: Option<usize>,
    registry: Weak<Registry>,
}

impl Subscription {
    pub fn unsubscribe(self) {}

    pub fn is_active(&self) -> bool {
        self.key.is_some() && self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(key) = self.key.take() else {
            return;
        };
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut subs) = registry.lock() {
            if subs.contains(key) {
                subs.remove(key);
            }
        }
        tracing::debug!(key, "unsubscribed");
    }
}

/// Push `payload` to the overlay, if one is mounted.
///
/// Never fails. Without a mounted overlay this is a no-op.
pub fn emit<T: Serialize + ?Sized>(payload: &T) {
    let channel = DataChannel::global();
    if channel.subscriber_count() == 0 {
        tracing::trace!(channel = %channel.name(), "emit without listeners dropped");
        return;
    }
    channel.publish(Payload::from_serialize(payload));
}
