//! Logging seam between the rules engine and its host.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// Fire-and-forget log sink. The engine never reads anything back from it,
/// so a sink cannot influence rules decisions.
pub trait Notifier {
    fn notify(&self, level: LogLevel, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, level: LogLevel, message: &str) {
        (**self).notify(level, message);
    }
}

#[cfg(feature = "std")]
impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, level: LogLevel, message: &str) {
        (**self).notify(level, message);
    }
}

/// Forwards notifications to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => log::info!("{}", message),
            LogLevel::Error => log::error!("{}", message),
        }
    }
}
