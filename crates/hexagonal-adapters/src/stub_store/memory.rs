//! In-memory stub store for tests.

use std::collections::BTreeMap;

use hexagonal_core::{application::ports::StubStore, error::HexResult};

use super::BundledStubStore;

/// Stub store backed by a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStubStore {
    stubs: BTreeMap<String, String>,
}

impl InMemoryStubStore {
    /// A copy of the bundled stubs, ready to be edited.
    pub fn from_bundled() -> Self {
        let stubs = BundledStubStore::entries()
            .map(|(name, content)| (name.to_owned(), content.to_owned()))
            .collect();
        Self { stubs }
    }

    pub fn without(mut self, name: &str) -> Self {
        self.stubs.remove(name);
        self
    }
}

impl StubStore for InMemoryStubStore {
    fn get(&self, name: &str) -> HexResult<Option<String>> {
        Ok(self.stubs.get(name).cloned())
    }

    fn names(&self) -> HexResult<Vec<String>> {
        Ok(self.stubs.keys().cloned().collect())
    }
}
