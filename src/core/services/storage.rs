use wasm_bindgen::JsValue;

use crate::core::error::StorageError;
use crate::core::models::BoardState;

/// Somewhere a serialized board snapshot can live.
pub trait SnapshotStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, data: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`, under a single key.
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error_text(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl SnapshotStore for LocalStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(js_error_text(&e)))
    }

    fn write(&self, data: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, data)
            .map_err(|e| StorageError::Write(js_error_text(&e)))
    }
}

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Reads the stored board. `Ok(None)` means nothing (or an empty string) was
/// stored; unparsable data is `Err(StorageError::Malformed)`.
pub fn load_board(store: &impl SnapshotStore) -> Result<Option<BoardState>, StorageError> {
    match store.read()? {
        Some(data) if !data.trim().is_empty() => Ok(Some(serde_json::from_str(&data)?)),
        _ => Ok(None),
    }
}

/// Writes the whole board as one snapshot, replacing whatever was there.
pub fn save_board(store: &impl SnapshotStore, board: &BoardState) -> Result<(), StorageError> {
    let data = serde_json::to_string(board).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.write(&data)
}
