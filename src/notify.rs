/// User-facing notification channel.
///
/// The host runtime decides how a fatal startup failure reaches the user
/// (a dialog, an overlay banner). The orchestration flow only knows that
/// every startup error must surface somewhere visible in addition to the
/// diagnostic log.
pub trait Notifier {
    fn fatal(&self, message: &str);
}

/// Notifier that forwards to the diagnostic log.
///
/// The fallback for headless hosts; interactive hosts supply their own.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn fatal(&self, message: &str) {
        log::error!("{message}");
    }
}
