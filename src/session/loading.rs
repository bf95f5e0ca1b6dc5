use std::sync::Arc;
use tokio::sync::watch;

/// Visibility flag for the "loading" overlay, independent of the active screen.
///
/// Cloning shares the same flag. The overlay is only ever shown through a
/// [`LoadingGuard`], which hides it again when dropped, so a failed or
/// abandoned request cannot leave it stuck on screen.
#[derive(Debug, Clone)]
pub struct LoadingOverlay {
    tx: Arc<watch::Sender<bool>>,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Show the overlay until the returned guard is dropped.
    pub fn show(&self) -> LoadingGuard {
        self.tx.send_replace(true);
        LoadingGuard {
            tx: Arc::clone(&self.tx),
        }
    }

    pub fn is_visible(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[must_use = "the overlay hides as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard {
    tx: Arc<watch::Sender<bool>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tx.send_replace(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_hides_on_drop() {
        let overlay = LoadingOverlay::new();
        assert!(!overlay.is_visible());
        {
            let _guard = overlay.show();
            assert!(overlay.is_visible());
        }
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_clones_share_visibility() {
        let overlay = LoadingOverlay::new();
        let view = overlay.clone();
        let guard = overlay.show();
        assert!(view.is_visible());
        drop(guard);
        assert!(!view.is_visible());
    }

    #[test]
    fn test_subscribers_observe_changes() {
        let overlay = LoadingOverlay::new();
        let rx = overlay.subscribe();
        let guard = overlay.show();
        assert!(*rx.borrow());
        drop(guard);
        assert!(!*rx.borrow());
    }
}
