//! Local JSON document store.
//!
//! Layout inside the data directory:
//!
//! ```text
//! root_doc_id          uuid of the current document
//! docs/<uuid>.json     the document
//! docs/<uuid>.lock     held exclusively while a mutation is in flight
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;
use uuid::Uuid;

use super::{Callback, DocumentStore, Subscribers, Subscription};
use crate::constants::{DOCS_DIR, ROOT_ID_FILE};
use crate::error::{CountError, CountResult};
use crate::state::State;

pub struct FileStore {
    data_dir: PathBuf,
    doc_id: String,
    /// Last snapshot handed out, used by `refresh` to spot outside writes.
    last_seen: Mutex<Option<State>>,
    subscribers: Subscribers,
}

impl FileStore {
    /// Open the document referenced by the root pointer, creating an empty
    /// document and pointer on first use.
    ///
    /// A pointer whose document has disappeared is not an error here;
    /// reads report `CountError::DocumentMissing` instead.
    pub fn open(data_dir: &Path) -> CountResult<Self> {
        fs::create_dir_all(data_dir.join(DOCS_DIR))?;

        let doc_id = match read_root_id(data_dir)? {
            Some(id) => id,
            None => create_document(data_dir)?,
        };

        tracing::debug!(data_dir = %data_dir.display(), %doc_id, "opened document store");

        Ok(FileStore {
            data_dir: data_dir.to_path_buf(),
            doc_id,
            last_seen: Mutex::new(None),
            subscribers: Subscribers::default(),
        })
    }

    /// Forget the current document. The next `open` starts from an empty one.
    ///
    /// Returns false when there was nothing to reset.
    pub fn reset(data_dir: &Path) -> CountResult<bool> {
        let Some(doc_id) = read_root_id(data_dir)? else {
            return Ok(false);
        };

        fs::remove_file(data_dir.join(ROOT_ID_FILE))?;
        for path in [doc_path(data_dir, &doc_id), lock_path(data_dir, &doc_id)] {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }

        tracing::info!(%doc_id, "reset document store");
        Ok(true)
    }

    /// Path of the current document, if a root pointer exists. Unlike
    /// `open`, this never creates anything.
    pub fn existing_document_path(data_dir: &Path) -> CountResult<Option<PathBuf>> {
        Ok(read_root_id(data_dir)?.map(|id| doc_path(data_dir, &id)))
    }

    pub fn document_id(&self) -> &str {
        &self.doc_id
    }

    pub fn document_path(&self) -> PathBuf {
        doc_path(&self.data_dir, &self.doc_id)
    }

    /// Re-read the document and notify subscribers if it changed since the
    /// last snapshot this store handed out. Returns whether it changed.
    pub fn refresh(&self) -> CountResult<bool> {
        let state = self.read()?;

        let mut last_seen = self.last_seen.lock().unwrap_or_else(|e| e.into_inner());
        if last_seen.as_ref() == Some(&state) {
            return Ok(false);
        }
        *last_seen = Some(state.clone());
        drop(last_seen);

        tracing::debug!(doc_id = %self.doc_id, "document changed on disk");
        self.subscribers.notify(&state);
        Ok(true)
    }

    fn read(&self) -> CountResult<State> {
        let path = self.document_path();
        if !path.exists() {
            return Err(CountError::DocumentMissing(self.doc_id.clone()));
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| CountError::Serialization(e.to_string()))
    }

    fn remember(&self, state: &State) {
        *self.last_seen.lock().unwrap_or_else(|e| e.into_inner()) = Some(state.clone());
    }

    /// Exclusive lock on the document, released when the file is dropped.
    fn lock(&self) -> CountResult<File> {
        let file = File::create(lock_path(&self.data_dir, &self.doc_id))?;
        FileExt::lock_exclusive(&file).map_err(|e| CountError::Lock(e.to_string()))?;
        Ok(file)
    }
}

impl DocumentStore for FileStore {
    fn get(&self) -> CountResult<State> {
        let state = self.read()?;
        self.remember(&state);
        Ok(state)
    }

    fn mutate(&self, f: &mut dyn FnMut(&mut State)) -> CountResult<State> {
        let state = {
            let _lock = self.lock()?;
            // Start from what is on disk so fields written by another
            // process since our last read are kept.
            let mut state = self.read()?;
            f(&mut state);
            write_document(&self.document_path(), &state)?;
            state
        };

        tracing::debug!(doc_id = %self.doc_id, "document updated");
        self.remember(&state);
        self.subscribers.notify(&state);
        Ok(state)
    }

    fn subscribe(&self, callback: Callback) -> Subscription {
        self.subscribers.add(callback)
    }
}

fn doc_path(data_dir: &Path, doc_id: &str) -> PathBuf {
    data_dir.join(DOCS_DIR).join(format!("{doc_id}.json"))
}

fn lock_path(data_dir: &Path, doc_id: &str) -> PathBuf {
    data_dir.join(DOCS_DIR).join(format!("{doc_id}.lock"))
}

fn read_root_id(data_dir: &Path) -> CountResult<Option<String>> {
    let path = data_dir.join(ROOT_ID_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let id = fs::read_to_string(&path)?.trim().to_string();
    if id.is_empty() {
        tracing::warn!(path = %path.display(), "empty root document id, starting fresh");
        return Ok(None);
    }
    Ok(Some(id))
}

fn create_document(data_dir: &Path) -> CountResult<String> {
    let doc_id = Uuid::new_v4().to_string();

    write_document(&doc_path(data_dir, &doc_id), &State::default())?;
    write_atomic(&data_dir.join(ROOT_ID_FILE), &doc_id)?;

    tracing::info!(%doc_id, "created new document");
    Ok(doc_id)
}

fn write_document(path: &Path, state: &State) -> CountResult<()> {
    let content =
        serde_json::to_string_pretty(state).map_err(|e| CountError::Serialization(e.to_string()))?;
    write_atomic(path, &content)
}

fn write_atomic(path: &Path, content: &str) -> CountResult<()> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);

    fs::write(&temp, content)?;
    fs::rename(&temp, path)?;
    Ok(())
}
