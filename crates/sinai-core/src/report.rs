//! Diagnostic logging and toast-style user messages.

use crate::config::ToastConfig;
use crate::query::escape_html;
use serde::Serialize;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::error;

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
    /// Attached but not yet faded in.
    Pending,
    Visible,
    /// Fading out; removed once the fade completes.
    Hiding,
}

/// A transient alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn render(&self) -> String {
        let class = match self.phase {
            ToastPhase::Visible => "error-toast error-toast--visible",
            ToastPhase::Pending | ToastPhase::Hiding => "error-toast",
        };
        format!(
            "<div class=\"{}\" role=\"alert\">{}</div>",
            class,
            escape_html(&self.message)
        )
    }
}

/// Logs failures and surfaces short messages to the user.
///
/// Clones share the same toast list.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    toasts: Arc<Mutex<Vec<Toast>>>,
    next_id: Arc<AtomicU64>,
}

impl ErrorReporter {
    pub const UNCAUGHT_MESSAGE: &'static str = "حدث خطأ غير متوقع. يرجى تحديث الصفحة.";
    pub const LOAD_FAILED_MESSAGE: &'static str = "فشل تحميل بعض المحتوى. يرجى المحاولة مرة أخرى.";

    pub fn new() -> Self {
        Self::default()
    }

    /// Write a failure to the diagnostic log.
    pub fn log_error(&self, context: &str, err: &dyn Display) {
        error!("[{}] {}", context, err);
    }

    /// Log an unexpected failure and tell the user to reload.
    pub fn report_uncaught(&self, context: &str, err: &dyn Display) -> JoinHandle<()> {
        self.log_error(context, err);
        self.show_user_message(Self::UNCAUGHT_MESSAGE)
    }

    /// Log a content loading failure and tell the user to retry.
    pub fn report_load_failure(&self, context: &str, err: &dyn Display) -> JoinHandle<()> {
        self.log_error(context, err);
        self.show_user_message(Self::LOAD_FAILED_MESSAGE)
    }

    /// Show `message` as a toast that fades in, stays, fades out and is
    /// removed. The handle resolves once the toast is gone.
    pub fn show_user_message(&self, message: &str) -> JoinHandle<()> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                phase: ToastPhase::Pending,
            });
        }

        let toasts = Arc::clone(&self.toasts);
        tokio::spawn(async move {
            tokio::time::sleep(ToastConfig::SHOW_DELAY).await;
            set_phase(&toasts, id, ToastPhase::Visible);

            tokio::time::sleep(ToastConfig::VISIBLE_FOR.saturating_sub(ToastConfig::SHOW_DELAY)).await;
            set_phase(&toasts, id, ToastPhase::Hiding);

            tokio::time::sleep(ToastConfig::FADE_OUT).await;
            if let Ok(mut toasts) = toasts.lock() {
                toasts.retain(|t| t.id != id);
            }
        })
    }

    /// Toasts currently attached, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

fn set_phase(toasts: &Mutex<Vec<Toast>>, id: u64, phase: ToastPhase) {
    if let Ok(mut toasts) = toasts.lock() {
        if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }
}
