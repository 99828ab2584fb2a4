// Diagnostics for lookups that degrade to "not found"

use parking_lot::Mutex;

/// A recoverable problem met during a lookup.
///
/// Lookups never fail; when one of these occurs the lookup returns
/// `SpellResult::NotFound` and hands the diagnostic to the configured sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// The locale passed to a lookup names no codeset.
    #[error("locale {locale:?} carries no encoding information")]
    EncodingInfoMissing { locale: String },

    /// The input could not be brought into the dictionary encoding.
    #[error("cannot convert from {from} to {to}: {reason}")]
    UnsupportedConversion {
        from: String,
        to: String,
        reason: String,
    },

    /// The input is not valid in the representation it was passed as.
    #[error("input is not valid {representation}")]
    InvalidInput { representation: &'static str },
}

/// Receiver for lookup diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps every diagnostic until taken.
#[derive(Debug, Default)]
pub struct CollectingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.seen.lock())
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.seen.lock().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_takes_in_order() {
        let sink = CollectingSink::new();
        sink.report(&Diagnostic::InvalidInput {
            representation: "UTF-16",
        });
        sink.report(&Diagnostic::EncodingInfoMissing {
            locale: "en_US".to_string(),
        });
        assert_eq!(sink.len(), 2);

        let taken = sink.take();
        assert!(sink.is_empty());
        assert_eq!(
            taken[0],
            Diagnostic::InvalidInput {
                representation: "UTF-16"
            }
        );
        assert!(matches!(taken[1], Diagnostic::EncodingInfoMissing { .. }));
    }

    #[test]
    fn messages() {
        let d = Diagnostic::EncodingInfoMissing {
            locale: "en_US".to_string(),
        };
        assert_eq!(d.to_string(), "locale \"en_US\" carries no encoding information");
        let d = Diagnostic::UnsupportedConversion {
            from: "UTF-8".to_string(),
            to: "ISO8859-1".to_string(),
            reason: "boom".to_string(),
        };
        assert_eq!(d.to_string(), "cannot convert from UTF-8 to ISO8859-1: boom");
    }

    #[test]
    fn silent_and_log_sinks_accept_anything() {
        let d = Diagnostic::InvalidInput {
            representation: "UTF-8",
        };
        SilentSink.report(&d);
        LogSink.report(&d);
    }
}
