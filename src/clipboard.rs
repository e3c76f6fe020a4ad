use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;

use crate::timer::{replace_timer, Scheduler, TimerHandle};

pub const COPIED_RESET_DELAY: Duration = Duration::from_millis(2000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is unavailable")]
    Unavailable,
    #[error("Clipboard write was rejected: {0}")]
    Rejected(String),
}

#[allow(async_fn_in_trait)]
pub trait Clipboard: Send + Sync + 'static {
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// `navigator.clipboard.writeText`. Off the browser every write is
/// [`ClipboardError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
            let promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable)
        }
    }
}

#[derive(Default)]
struct FeedbackState {
    copied: bool,
    revert: Option<TimerHandle>,
}

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

/// Copy button state: `copied` turns on after a successful write and back off
/// [`COPIED_RESET_DELAY`] later. Each button owns its own instance.
pub struct CopyFeedback<C, S> {
    state: Arc<Mutex<FeedbackState>>,
    clipboard: Arc<C>,
    scheduler: Arc<S>,
    listener: Listener,
}

impl<C, S> Clone for CopyFeedback<C, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            clipboard: self.clipboard.clone(),
            scheduler: self.scheduler.clone(),
            listener: self.listener.clone(),
        }
    }
}

fn lock_state(state: &Mutex<FeedbackState>) -> MutexGuard<'_, FeedbackState> {
    state.lock().expect("should be able to lock copy state")
}

impl<C: Clipboard, S: Scheduler> CopyFeedback<C, S> {
    pub fn new(clipboard: C, scheduler: S) -> Self {
        Self {
            state: Arc::default(),
            clipboard: Arc::new(clipboard),
            scheduler: Arc::new(scheduler),
            listener: Arc::new(|_| {}),
        }
    }

    pub fn on_change(mut self, listener: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.listener = Arc::new(listener);
        self
    }

    pub fn copied(&self) -> bool {
        lock_state(&self.state).copied
    }

    /// Returns whether the text reached the clipboard. Failures only log.
    pub async fn copy(&self, text: &str) -> bool {
        if let Err(e) = self.clipboard.write(text).await {
            log::debug!("copy failed: {e}");
            return false;
        }

        {
            let mut state = lock_state(&self.state);
            state.copied = true;
            let scheduled = self
                .scheduler
                .schedule(COPIED_RESET_DELAY, self.reset_task());
            replace_timer(&mut state.revert, scheduled);
        }
        (self.listener)(true);
        true
    }

    pub fn dispose(&self) {
        if let Some(revert) = lock_state(&self.state).revert.take() {
            revert.cancel();
        }
    }

    fn reset_task(&self) -> Box<dyn FnOnce() + Send> {
        let state = self.state.clone();
        let listener = self.listener.clone();
        Box::new(move || {
            {
                let mut state = lock_state(&state);
                state.revert = None;
                state.copied = false;
            }
            listener(false);
        })
    }
}
