//! Collection point for recovered errors.
//!
//! Every failure inside the read/classify/route loop ends up here instead of
//! being propagated: it is logged immediately and kept for the run result.

use crate::error::EngineError;

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<EngineError>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: EngineError) {
        tracing::warn!("{error}");
        self.errors.push(error);
    }

    #[must_use]
    pub fn errors(&self) -> &[EngineError] {
        &self.errors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<EngineError> {
        self.errors
    }
}
