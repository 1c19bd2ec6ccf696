//! `localStorage` as the result store.
use crate::dom;
use mbti_quiz::{ResultStore, StorageError};
use web_sys::Storage;

/// Browser `localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebResultStore;

impl WebResultStore {
    fn storage() -> Result<Storage, StorageError> {
        let win = dom::window()
            .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
        win.local_storage()
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

impl ResultStore for WebResultStore {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }
}
