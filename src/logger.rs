//! # Logger Capability
//!
//! The engine reports through the narrow [`Logger`] trait instead of a concrete
//! logging backend. [`TracingLogger`] forwards to `tracing`; [`NullLogger`]
//! drops everything.

/// Sink for progress and outcome messages.
///
/// Shared across threads when several operations run concurrently, hence the
/// `Send + Sync` bound. Implementations are responsible for their own
/// synchronization.
pub trait Logger: Send + Sync {
    fn log_info(&self, message: &str);
    fn log_error(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log_info(&self, message: &str) {
        (**self).log_info(message);
    }

    fn log_error(&self, message: &str) {
        (**self).log_error(message);
    }
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    fn log_info(&self, message: &str) {
        (**self).log_info(message);
    }

    fn log_error(&self, message: &str) {
        (**self).log_error(message);
    }
}

/// Emits `tracing` events under the `filecrypt` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log_info(&self, message: &str) {
        tracing::info!(target: "filecrypt", "{message}");
    }

    fn log_error(&self, message: &str) {
        tracing::error!(target: "filecrypt", "{message}");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log_info(&self, _message: &str) {}
    fn log_error(&self, _message: &str) {}
}
