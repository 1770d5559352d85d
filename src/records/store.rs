use crate::records::id::RecordId;
use crate::records::models::{Issue, IssueFilter, IssueUpdate};
use chrono::{DateTime, Utc};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
    NotFound(RecordId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Store I/O error: {}", e),
            StoreError::Serialize(e) => write!(f, "Store serialization error: {}", e),
            StoreError::NotFound(id) => write!(f, "Record '{}' not found", id),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialize(e)
    }
}

/// Document store holding issue records
pub trait IssueStore {
    fn insert(&mut self, issue: Issue) -> Result<Issue, StoreError>;

    /// Records under `project` matching every field of `filter`, in insertion order
    fn find(&self, project: &str, filter: &IssueFilter) -> Result<Vec<Issue>, StoreError>;

    /// Apply `update` to the record with `id`, regardless of project
    fn update(
        &mut self,
        id: &RecordId,
        update: &IssueUpdate,
        now: DateTime<Utc>,
    ) -> Result<Issue, StoreError>;

    fn remove(&mut self, id: &RecordId) -> Result<Issue, StoreError>;
}

/// Store that lives only as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    issues: Vec<Issue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl IssueStore for MemoryStore {
    fn insert(&mut self, issue: Issue) -> Result<Issue, StoreError> {
        self.issues.push(issue.clone());
        Ok(issue)
    }

    fn find(&self, project: &str, filter: &IssueFilter) -> Result<Vec<Issue>, StoreError> {
        Ok(self
            .issues
            .iter()
            .filter(|issue| issue.project == project && filter.matches(issue))
            .cloned()
            .collect())
    }

    fn update(
        &mut self,
        id: &RecordId,
        update: &IssueUpdate,
        now: DateTime<Utc>,
    ) -> Result<Issue, StoreError> {
        let issue = self
            .issues
            .iter_mut()
            .find(|issue| issue.id == *id)
            .ok_or(StoreError::NotFound(*id))?;
        issue.apply(update, now);
        Ok(issue.clone())
    }

    fn remove(&mut self, id: &RecordId) -> Result<Issue, StoreError> {
        let index = self
            .issues
            .iter()
            .position(|issue| issue.id == *id)
            .ok_or(StoreError::NotFound(*id))?;
        Ok(self.issues.remove(index))
    }
}

/// Persistent store: a JSON array of issues in one file, rewritten after every change
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Load the store at `path`; a missing file starts an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let issues = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };

        log::debug!("opened store {} ({} records)", path.display(), issues.len());
        Ok(Self {
            path,
            inner: MemoryStore::from_issues(issues),
        })
    }

    /// Run `change` against a copy of the records, persist the copy, then keep it
    /// A failed write leaves the loaded records untouched
    fn commit<T, F>(&mut self, change: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    {
        let mut staged = self.inner.clone();
        let result = change(&mut staged)?;
        self.write(staged.issues())?;
        self.inner = staged;
        Ok(result)
    }

    // Written to a temporary file first, then renamed over the store
    fn write(&self, issues: &[Issue]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(issues)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl IssueStore for JsonFileStore {
    fn insert(&mut self, issue: Issue) -> Result<Issue, StoreError> {
        self.commit(|staged| staged.insert(issue))
    }

    fn find(&self, project: &str, filter: &IssueFilter) -> Result<Vec<Issue>, StoreError> {
        self.inner.find(project, filter)
    }

    fn update(
        &mut self,
        id: &RecordId,
        update: &IssueUpdate,
        now: DateTime<Utc>,
    ) -> Result<Issue, StoreError> {
        self.commit(|staged| staged.update(id, update, now))
    }

    fn remove(&mut self, id: &RecordId) -> Result<Issue, StoreError> {
        self.commit(|staged| staged.remove(id))
    }
}
