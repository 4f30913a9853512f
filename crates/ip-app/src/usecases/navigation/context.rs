use std::sync::Arc;

use ip_core::navigation::NavigationFlags;
use tokio::sync::Mutex;

/// Shared navigation context containing the flag tuple and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `flags`.
/// - `dispatch_lock`: serializes dispatch calls so a whole
///   transition + action execution + emission runs without interleaving.
/// - `flags`: guards reads (`get_flags`) and writes (during dispatch).
#[derive(Clone)]
pub struct NavigationContext {
    /// Current flag tuple.
    flags: Arc<Mutex<NavigationFlags>>,
    /// Serializes dispatch calls to prevent concurrent state/action races.
    dispatch_lock: Arc<Mutex<()>>,
}

impl NavigationContext {
    pub fn new(initial: NavigationFlags) -> Self {
        Self {
            flags: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read that does NOT take the dispatch lock.
    pub async fn get_flags(&self) -> NavigationFlags {
        *self.flags.lock().await
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Updates the flags. Only call while holding the dispatch lock.
    pub async fn set_flags(&self, flags: NavigationFlags) {
        let mut guard = self.flags.lock().await;
        *guard = flags;
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new(NavigationFlags::default())
    }
}
