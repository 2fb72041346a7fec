//! Best-effort unlock notifications.
//!
//! Unlock names are handed to a dedicated worker thread over a channel so
//! the caller never blocks on the network. Delivery failures are logged
//! and dropped; there is no retry and no result to await.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Queues one `POST {base_url}/api/achievements/{name}` per unlock.
pub struct Notifier {
    tx: Option<Sender<String>>,
}

impl Notifier {
    /// A notifier that silently drops everything.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Start the background delivery worker.
    ///
    /// The worker exits when the notifier is dropped (channel closed).
    /// If the thread cannot be spawned the notifier degrades to disabled.
    pub fn spawn(base_url: String) -> Self {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("achievement-notify".to_string())
            .spawn(move || notify_loop(rx, base_url));
        match spawned {
            Ok(_) => Self { tx: Some(tx) },
            Err(err) => {
                tracing::warn!(%err, "could not start notification worker");
                Self { tx: None }
            }
        }
    }

    /// Whether notifications will actually be sent.
    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Queue a notification for the given achievement name.
    pub fn notify(&self, name: &str) {
        if let Some(tx) = &self.tx {
            // Worker may already be gone on shutdown
            let _ = tx.send(name.to_string());
        }
    }
}

fn notify_loop(rx: Receiver<String>, base_url: String) {
    let client = match Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(%err, "could not build notification client");
            return;
        }
    };
    let base = base_url.trim_end_matches('/');
    while let Ok(name) = rx.recv() {
        let url = format!("{base}/api/achievements/{name}");
        match client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
        {
            Ok(response) => {
                tracing::debug!(status = %response.status(), %url, "unlock notification delivered");
            }
            Err(err) => {
                tracing::warn!(%err, %url, "unlock notification failed");
            }
        }
    }
}
