//! In-memory helpers for tests and examples.

use std::convert::Infallible;

use crate::{Dataset, DatasetSource};

/// Source that hands out clones of a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    dataset: Dataset,
}

impl MemorySource {
    /// Wrap an existing snapshot.
    #[must_use]
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DatasetSource for MemorySource {
    type Error = Infallible;

    fn snapshot(&self) -> Result<Dataset, Self::Error> {
        Ok(self.dataset.clone())
    }
}
