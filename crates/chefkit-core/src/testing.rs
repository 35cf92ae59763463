//! In-memory doubles for the ports, for use in downstream tests.
//!
//! Enabled with the `test-utils` feature.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::CookbookManifest;
use crate::events::CookbookEvent;
use crate::ports::{
    CookbookEventEmitter, CookbookSourceError, CookbookSourcePort, CookbookSourceResult,
};

/// Canned behavior for one file URL.
#[derive(Debug, Clone)]
pub enum ScriptedFile {
    /// Write these bytes to the destination.
    Body(Vec<u8>),
    /// Fail with a non-2xx status without touching the destination.
    Status(u16),
    /// Fail with a transport error.
    Transport(String),
}

#[derive(Debug, Clone)]
struct FileScript {
    response: ScriptedFile,
    delay: Option<Duration>,
}

/// A request observed by [`ScriptedSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Manifest { name: String, version: String },
    File { url: String, destination: PathBuf },
}

/// A scripted [`CookbookSourcePort`].
///
/// Manifests are keyed by `(name, version)`; unknown keys answer 404.
/// Files are keyed by URL; unknown URLs answer 404. Every call is recorded
/// in the order it was made.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    base_url: String,
    manifests: HashMap<(String, String), CookbookManifest>,
    files: HashMap<String, FileScript>,
    calls: Mutex<Vec<SourceCall>>,
}

impl ScriptedSource {
    /// Create a source whose 404 messages are reported against `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Serve `manifest` for `name` at `version`.
    #[must_use]
    pub fn with_manifest(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        manifest: CookbookManifest,
    ) -> Self {
        self.manifests
            .insert((name.into(), version.into()), manifest);
        self
    }

    /// Serve `body` for `url`.
    #[must_use]
    pub fn with_file(self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.with_response(url, ScriptedFile::Body(body.into()), None)
    }

    /// Serve `response` for `url`, optionally after `delay`.
    #[must_use]
    pub fn with_response(
        mut self,
        url: impl Into<String>,
        response: ScriptedFile,
        delay: Option<Duration>,
    ) -> Self {
        self.files
            .insert(url.into(), FileScript { response, delay });
        self
    }

    /// Every call made so far.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// URLs of every file transfer that was started.
    pub fn file_urls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SourceCall::File { url, .. } => Some(url),
                SourceCall::Manifest { .. } => None,
            })
            .collect()
    }

    fn record(&self, call: SourceCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl CookbookSourcePort for ScriptedSource {
    async fn fetch_manifest(
        &self,
        name: &str,
        version: &str,
    ) -> CookbookSourceResult<CookbookManifest> {
        self.record(SourceCall::Manifest {
            name: name.to_string(),
            version: version.to_string(),
        });
        self.manifests
            .get(&(name.to_string(), version.to_string()))
            .cloned()
            .ok_or_else(|| CookbookSourceError::Status {
                status: 404,
                url: format!("{}/cookbooks/{name}/{version}", self.base_url),
            })
    }

    async fn fetch_file(&self, url: &str, destination: &Path) -> CookbookSourceResult<()> {
        self.record(SourceCall::File {
            url: url.to_string(),
            destination: destination.to_path_buf(),
        });
        let Some(script) = self.files.get(url).cloned() else {
            return Err(CookbookSourceError::Status {
                status: 404,
                url: url.to_string(),
            });
        };
        if let Some(delay) = script.delay {
            tokio::time::sleep(delay).await;
        }
        match script.response {
            ScriptedFile::Body(body) => tokio::fs::write(destination, body)
                .await
                .map_err(|e| CookbookSourceError::io(destination, e)),
            ScriptedFile::Status(status) => Err(CookbookSourceError::Status {
                status,
                url: url.to_string(),
            }),
            ScriptedFile::Transport(message) => Err(CookbookSourceError::Transport {
                url: url.to_string(),
                message,
            }),
        }
    }
}

/// Emitter that keeps every event it receives.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    events: Mutex<Vec<CookbookEvent>>,
}

impl RecordingEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in order.
    pub fn events(&self) -> Vec<CookbookEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// `type` tags of the events received so far.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(CookbookEvent::event_type)
            .collect()
    }
}

impl CookbookEventEmitter for RecordingEmitter {
    fn emit(&self, event: CookbookEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
