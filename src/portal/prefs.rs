//! Local preference storage
//!
//! Browser-local-storage equivalent: one JSON object file of string keys.
//! Reads are tolerant (missing or unreadable state falls back to defaults)
//! and write failures are logged and swallowed, so a read-only disk never
//! takes the portal down.

use parking_lot::Mutex as ParkingMutex;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Key the selected glass theme is stored under.
pub const THEME_KEY: &str = "store-portal.glassTheme";

#[derive(Clone)]
pub struct PrefStore {
    path: PathBuf,
    values: Arc<ParkingMutex<BTreeMap<String, String>>>,
}

impl PrefStore {
    /// Open the store at `path`, loading whatever state is readable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, String>>(&bytes) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        "Preference file {} is unreadable ({}); starting from defaults",
                        path.display(),
                        err
                    );
                    BTreeMap::new()
                }
            },
            // Missing file: first run.
            Err(_) => BTreeMap::new(),
        };

        Self {
            path,
            values: Arc::new(ParkingMutex::new(values)),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    /// Set and persist immediately. Storage failures are logged and ignored;
    /// the in-memory value still sticks for this process.
    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.values.lock().insert(key.to_string(), value.into());
        if let Err(err) = self.flush() {
            tracing::warn!(
                "Could not persist preferences to {}: {}",
                self.path.display(),
                err
            );
        }
    }

    fn flush(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&*self.values.lock())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.path, data)
    }
}
