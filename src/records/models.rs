use crate::records::id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked issue as held by the store
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: RecordId,

    // Scope the issue belongs to, never included in responses
    pub project: String,

    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,

    #[serde(default)]
    pub assigned_to: String,

    #[serde(default)]
    pub status_text: String,

    pub open: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl Issue {
    /// Build a fresh open issue; both timestamps are `now`
    pub fn new(project: &str, new_issue: NewIssue, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::generate(),
            project: project.to_string(),
            issue_title: new_issue.issue_title,
            issue_text: new_issue.issue_text,
            created_by: new_issue.created_by,
            assigned_to: new_issue.assigned_to.unwrap_or_default(),
            status_text: new_issue.status_text.unwrap_or_default(),
            open: true,
            created_on: now,
            updated_on: now,
        }
    }

    /// Apply the supplied fields of an update and stamp `updated_on`
    pub fn apply(&mut self, update: &IssueUpdate, now: DateTime<Utc>) {
        if let Some(title) = &update.issue_title {
            self.issue_title = title.clone();
        }
        if let Some(text) = &update.issue_text {
            self.issue_text = text.clone();
        }
        if let Some(created_by) = &update.created_by {
            self.created_by = created_by.clone();
        }
        if let Some(assigned_to) = &update.assigned_to {
            self.assigned_to = assigned_to.clone();
        }
        if let Some(status_text) = &update.status_text {
            self.status_text = status_text.clone();
        }
        if let Some(open) = update.open {
            self.open = open;
        }
        self.updated_on = now;
    }

    /// Borrowed view used for responses (drops `project`)
    pub fn view(&self) -> IssueView<'_> {
        IssueView {
            id: &self.id,
            issue_title: &self.issue_title,
            issue_text: &self.issue_text,
            created_by: &self.created_by,
            assigned_to: &self.assigned_to,
            status_text: &self.status_text,
            created_on: &self.created_on,
            updated_on: &self.updated_on,
            open: self.open,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueView<'a> {
    #[serde(rename = "_id")]
    id: &'a RecordId,
    issue_title: &'a str,
    issue_text: &'a str,
    created_by: &'a str,
    assigned_to: &'a str,
    status_text: &'a str,
    created_on: &'a DateTime<Utc>,
    updated_on: &'a DateTime<Utc>,
    open: bool,
}

/// Body of a create request
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewIssue {
    #[serde(default)]
    pub issue_title: String,
    #[serde(default)]
    pub issue_text: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status_text: Option<String>,
}

impl NewIssue {
    pub fn has_required_fields(&self) -> bool {
        !self.issue_title.is_empty() && !self.issue_text.is_empty() && !self.created_by.is_empty()
    }
}

/// Body of an update request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IssueUpdate {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub issue_title: Option<String>,
    #[serde(default)]
    pub issue_text: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status_text: Option<String>,
    #[serde(default)]
    pub open: Option<bool>,
}

impl IssueUpdate {
    /// True when no field besides the id was sent
    pub fn is_empty(&self) -> bool {
        self.issue_title.is_none()
            && self.issue_text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }
}

/// Field filters for listing issues; every supplied field must match exactly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
    pub id: Option<String>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        fn field_matches(filter: &Option<String>, value: &str) -> bool {
            filter.as_deref().map_or(true, |f| f == value)
        }

        field_matches(&self.issue_title, &issue.issue_title)
            && field_matches(&self.issue_text, &issue.issue_text)
            && field_matches(&self.created_by, &issue.created_by)
            && field_matches(&self.assigned_to, &issue.assigned_to)
            && field_matches(&self.status_text, &issue.status_text)
            && self.open.map_or(true, |open| open == issue.open)
            && self
                .id
                .as_deref()
                .map_or(true, |id| id.eq_ignore_ascii_case(&issue.id.to_string()))
    }
}
