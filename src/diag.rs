// SPDX-License-Identifier: MIT

//! Diagnostic reporting for the reducer
//!
//! The reducer never fails; when it meets something it cannot act on it
//! reports through a [`DiagnosticSink`] and carries on. The default sink
//! forwards to the `log` facade.

/// Receiver for reducer diagnostics
pub trait DiagnosticSink {
    /// Report a condition the reducer noticed but did not act on
    fn error(&self, message: &str);
}

/// Sink that forwards diagnostics to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}
