use tracing::error;

/// User-notification collaborator: the screen's toast surface.
///
/// Fire-and-forget — no return value is consumed and a failing notifier must
/// never take the screen down with it.
pub trait ErrorNotifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Production notifier: emits the message on the error log stream, where the
/// serving shell picks it up for user display.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl ErrorNotifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        error!(notification = %message, "user-facing error notification");
    }
}
