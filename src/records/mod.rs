// Issue tracking: project-scoped records kept in a document store
// The store is owned by the caller and handed to IssueService explicitly

pub mod id;
pub mod models;
pub mod query;
pub mod service;
pub mod store;


pub use id::{InvalidRecordId, RecordId};
pub use models::{Issue, IssueFilter, IssueUpdate, NewIssue};
pub use query::parse_query_pairs;
pub use service::IssueService;
pub use store::{IssueStore, JsonFileStore, MemoryStore, StoreError};
