use crate::records::id::RecordId;
use crate::records::models::{Issue, IssueFilter, IssueUpdate, NewIssue};
use crate::records::store::{IssueStore, StoreError};
use chrono::Utc;
use serde_json::{json, Value as JsonValue};

/// Issue tracking operations over an explicitly owned store
///
/// Every operation answers with a JSON payload; failures become `{"error": ...}`
/// objects instead of propagating to the caller.
pub struct IssueService<S: IssueStore> {
    store: S,
}

impl<S: IssueStore> IssueService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Issues under `project` that match `filter`, without their project field
    pub fn list(&self, project: &str, filter: &IssueFilter) -> JsonValue {
        if let Some(id) = &filter.id {
            if id.parse::<RecordId>().is_err() {
                log::warn!("list {}: malformed _id filter '{}'", project, id);
                return json!({ "error": "could not retrieve issues" });
            }
        }

        match self.store.find(project, filter) {
            Ok(issues) => JsonValue::Array(issues.iter().map(issue_json).collect()),
            Err(e) => {
                log::warn!("list {}: {}", project, e);
                json!({ "error": "could not retrieve issues" })
            }
        }
    }

    pub fn create(&mut self, project: &str, new_issue: NewIssue) -> JsonValue {
        if !new_issue.has_required_fields() {
            return json!({ "error": "required field(s) missing" });
        }

        let issue = Issue::new(project, new_issue, Utc::now());
        match self.store.insert(issue) {
            Ok(issue) => {
                log::info!("created issue {} in {}", issue.id, project);
                issue_json(&issue)
            }
            Err(e) => {
                log::warn!("create in {}: {}", project, e);
                json!({ "error": "could not create issue" })
            }
        }
    }

    pub fn update(&mut self, project: &str, update: &IssueUpdate) -> JsonValue {
        let raw_id = match update.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return json!({ "error": "missing _id" }),
        };

        if update.is_empty() {
            return json!({ "error": "no update field(s) sent", "_id": raw_id });
        }

        let id = match raw_id.parse::<RecordId>() {
            Ok(id) => id,
            Err(e) => {
                log::warn!("update in {}: {}", project, e);
                return json!({ "error": "could not update", "_id": raw_id });
            }
        };

        match self.store.update(&id, update, Utc::now()) {
            Ok(_) => {
                log::info!("updated issue {} in {}", id, project);
                json!({ "result": "successfully updated", "_id": raw_id })
            }
            Err(e) => {
                log_store_failure("update", project, &e);
                json!({ "error": "could not update", "_id": raw_id })
            }
        }
    }

    pub fn delete(&mut self, project: &str, raw_id: &str) -> JsonValue {
        if raw_id.is_empty() {
            return json!({ "error": "missing _id" });
        }

        let id = match raw_id.parse::<RecordId>() {
            Ok(id) => id,
            Err(e) => {
                log::warn!("delete in {}: {}", project, e);
                return json!({ "error": "could not delete", "_id": raw_id });
            }
        };

        match self.store.remove(&id) {
            Ok(_) => {
                log::info!("deleted issue {} in {}", id, project);
                json!({ "result": "successfully deleted", "_id": raw_id })
            }
            Err(e) => {
                log_store_failure("delete", project, &e);
                json!({ "error": "could not delete", "_id": raw_id })
            }
        }
    }
}

fn issue_json(issue: &Issue) -> JsonValue {
    serde_json::to_value(issue.view()).unwrap_or_else(|e| json!({ "error": e.to_string() }))
}

fn log_store_failure(operation: &str, project: &str, error: &StoreError) {
    match error {
        StoreError::NotFound(_) => log::info!("{} in {}: {}", operation, project, error),
        _ => log::warn!("{} in {}: {}", operation, project, error),
    }
}
