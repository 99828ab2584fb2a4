// Dictionary options

use std::fmt;
use std::sync::Arc;

use morphspell_core::Locale;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::service::{EncodingRs, EncodingService};

/// Options carried by a [`Dictionary`](crate::Dictionary).
#[derive(Clone)]
pub struct DictionaryConfig {
    /// The locale `check_system_locale` treats as the environment's.
    /// The process environment is never consulted.
    pub system_locale: Locale,

    /// Where lookup diagnostics go.
    pub diagnostics: Arc<dyn DiagnosticSink>,

    /// Locale resolution and transcoding.
    pub encoding_service: Arc<dyn EncodingService>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            system_locale: Locale::c(),
            diagnostics: Arc::new(LogSink),
            encoding_service: Arc::new(EncodingRs),
        }
    }
}

impl fmt::Debug for DictionaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryConfig")
            .field("system_locale", &self.system_locale)
            .finish_non_exhaustive()
    }
}
