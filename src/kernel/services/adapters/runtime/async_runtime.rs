use super::message::AppMessage;
use crate::kernel::services::adapters::settings::persist_theme_to;
use crate::kernel::services::adapters::weather::WeatherClient;
use crate::kernel::session::SessionId;
use crate::kernel::theme::ThemeName;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// Orders settings writes: each request takes a ticket, and a request older than the
/// last written one is skipped, so the newest theme always ends up on disk.
#[derive(Default)]
struct SettingsWriter {
    issued: AtomicU64,
    written: Mutex<u64>,
}

impl SettingsWriter {
    fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn write(&self, ticket: u64, path: &Path, theme: ThemeName) -> io::Result<bool> {
        let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());
        if *written > ticket {
            return Ok(false);
        }
        persist_theme_to(path, theme)?;
        *written = ticket;
        Ok(true)
    }
}

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    settings: Arc<SettingsWriter>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            settings: Arc::default(),
        })
    }

    /// Looks up `location` off the UI thread; the reply arrives as an [`AppMessage`].
    pub fn fetch_weather(&self, client: WeatherClient, session: SessionId, location: String) {
        let tx = self.tx.clone();
        self.runtime.spawn_blocking(move || {
            let msg = match client.fetch(&location) {
                Ok(report) => {
                    tracing::info!(session = %session, "weather fetched");
                    AppMessage::WeatherLoaded { session, report }
                }
                Err(e) => {
                    tracing::warn!(session = %session, error = %e, "weather lookup failed");
                    AppMessage::WeatherFailed { session }
                }
            };
            let _ = tx.send(msg);
        });
    }

    /// Writes `theme` into the settings file at `path`, keeping its other fields.
    /// Writes are serialized; when calls overlap, the most recent theme wins.
    pub fn persist_theme(&self, path: PathBuf, theme: ThemeName) {
        let settings = Arc::clone(&self.settings);
        let ticket = settings.ticket();
        self.runtime.spawn_blocking(move || match settings.write(ticket, &path, theme) {
            Ok(true) => tracing::debug!(theme = theme.as_str(), "theme saved"),
            Ok(false) => tracing::debug!(theme = theme.as_str(), "stale theme write skipped"),
            Err(e) => tracing::warn!(
                path = %path.display(),
                theme = theme.as_str(),
                error = %e,
                "failed to save theme"
            ),
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
