use url::Url;

use crate::ports::{ConfigStore, DispatchSink};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ConfigStore, S: DispatchSink> {
    store: C,
    sink: S,
    api_base: Url,
}

impl<C: ConfigStore, S: DispatchSink> AppContext<C, S> {
    /// Create a new application context.
    pub fn new(store: C, sink: S, api_base: Url) -> Self {
        Self { store, sink, api_base }
    }

    /// Get a reference to the configuration store.
    pub fn store(&self) -> &C {
        &self.store
    }

    /// Get a reference to the dispatch sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Base URL of the GitHub API surface.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }
}
