/// Query keys of the share-link format.
pub const KEY_COUNT_UP: &str = "s";
pub const KEY_COUNT_DOWN: &str = "e";
pub const KEY_TITLE: &str = "t";
pub const KEY_DISPLAY: &str = "d";

/// Calendar date format used in links and on disk.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current schema version of the persisted `State` document.
pub const STATE_VERSION: u32 = 1;

/// File in the data directory holding the root document identifier.
pub const ROOT_ID_FILE: &str = "root_doc_id";

/// Directory in the data directory holding documents.
pub const DOCS_DIR: &str = "docs";
