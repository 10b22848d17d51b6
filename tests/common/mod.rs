//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use shortscript::{ChatBackend, LlmRouter, ProviderError, ProviderFamily};

/// A single call seen by a [`ScriptedBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
}

/// Backend that replays canned replies and records every call.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    replies: Arc<Mutex<VecDeque<String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedBackend {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().map(Into::into).collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedBackend ran out of replies"))
    }
}

/// Router with one scripted backend per family.
///
/// Returns the router and the backends in `ProviderFamily::ALL` order.
pub fn scripted_router(replies: &[&str]) -> (LlmRouter, Vec<(ProviderFamily, ScriptedBackend)>) {
    let mut router = LlmRouter::new();
    let mut backends = Vec::new();
    for family in ProviderFamily::ALL {
        let backend = ScriptedBackend::new(replies.iter().copied());
        router = router.with_backend(family, backend.clone());
        backends.push((family, backend));
    }
    (router, backends)
}

/// Router where only `family` has a backend.
pub fn single_backend_router(family: ProviderFamily, replies: &[&str]) -> (LlmRouter, ScriptedBackend) {
    let backend = ScriptedBackend::new(replies.iter().copied());
    let router = LlmRouter::new().with_backend(family, backend.clone());
    (router, backend)
}
