/// Tower primary keys are integers.
pub type EntityId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The raw JSON object backing an entity.
pub type Record = serde_json::Map<String, serde_json::Value>;
