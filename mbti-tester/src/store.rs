//! File-backed result store standing in for browser `localStorage`.
use mbti_quiz::ResultStore;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a JSON object of strings: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON object on disk mapping keys to raw stored strings.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Map<String, Value>, FileStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(FileStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| FileStoreError::Format {
            path: self.path.clone(),
            source,
        })
    }
}

impl ResultStore for FileStore {
    type Error = FileStoreError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_str)
            .map(ToString::to_string))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        let text = serde_json::to_string_pretty(&entries).map_err(|source| {
            FileStoreError::Format {
                path: self.path.clone(),
                source,
            }
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| FileStoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, text).map_err(|source| FileStoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("wrote {key} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "mbti-store-{label}-{}.json",
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = FileStore::new(temp_path("absent"));
        assert!(store.read("mbti_result").unwrap().is_none());
    }

    #[test]
    fn writes_persist_and_keep_other_keys() {
        let path = temp_path("roundtrip");
        let store = FileStore::new(&path);
        store.write("other", "kept").unwrap();
        store.write("mbti_result", "INTP").unwrap();
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.read("mbti_result").unwrap().as_deref(), Some("INTP"));
        assert_eq!(reopened.read("other").unwrap().as_deref(), Some("kept"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let err = FileStore::new(&path).read("mbti_result").unwrap_err();
        assert!(matches!(err, FileStoreError::Format { .. }));
        let _ = fs::remove_file(path);
    }
}
