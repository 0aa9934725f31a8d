//! Generic wrapper over a JSON record returned by the tower API.
//!
//! Concrete entities such as [`InventoryScript`](crate::InventoryScript)
//! embed an [`Entity`] and build their typed accessors on top of
//! [`field_str`](Entity::field_str) and [`update_values`](Entity::update_values).

use std::sync::Arc;

use serde_json::Value;
use towerlib_core::error::TowerResult;
use towerlib_core::types::{EntityId, Record, Timestamp};

use crate::tower::Tower;

/// A single API object: its raw record plus the tower it came from.
#[derive(Debug, Clone)]
pub struct Entity {
    tower: Arc<Tower>,
    /// Collection path segment below the API root, e.g. `inventory_scripts`.
    endpoint: &'static str,
    data: Record,
}

impl Entity {
    pub fn new(tower: Arc<Tower>, endpoint: &'static str, data: Record) -> Self {
        Self {
            tower,
            endpoint,
            data,
        }
    }

    pub fn tower(&self) -> &Arc<Tower> {
        &self.tower
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// The raw backing record.
    pub fn data(&self) -> &Record {
        &self.data
    }

    pub fn id(&self) -> Option<EntityId> {
        self.data.get("id").and_then(Value::as_i64)
    }

    /// The API's own type label, e.g. `inventory_script`.
    pub fn type_name(&self) -> Option<&str> {
        self.field_str("type")
    }

    /// Relative URL of this object as reported by the API.
    pub fn url(&self) -> Option<&str> {
        self.field_str("url")
    }

    pub fn related(&self) -> Option<&Record> {
        self.data.get("related").and_then(Value::as_object)
    }

    pub fn summary_fields(&self) -> Option<&Record> {
        self.data.get("summary_fields").and_then(Value::as_object)
    }

    pub fn created(&self) -> Option<Timestamp> {
        self.field_timestamp("created")
    }

    pub fn modified(&self) -> Option<Timestamp> {
        self.field_timestamp("modified")
    }

    /// String value of `field`, or `None` if unset or not a string.
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }

    fn field_timestamp(&self, field: &str) -> Option<Timestamp> {
        let raw = self.field_str(field)?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&chrono::Utc))
    }

    /// Detail URL of this object: `{api}/{endpoint}/{id}/`.
    pub fn detail_url(&self) -> Option<String> {
        self.id()
            .map(|id| format!("{}/{}/{}/", self.tower.api(), self.endpoint, id))
    }

    /// Push a single field change to the tower and mirror it locally.
    ///
    /// Returns `Ok(true)` when the tower accepted the change, in which case
    /// the local record now holds `value`. A rejected change is logged and
    /// returns `Ok(false)` with the record untouched. Only transport failures
    /// are errors.
    pub async fn update_values(&mut self, field: &str, value: Value) -> TowerResult<bool> {
        let Some(url) = self.detail_url() else {
            tracing::error!(
                endpoint = self.endpoint,
                field,
                "Cannot update entity without an id"
            );
            return Ok(false);
        };

        let mut payload = Record::new();
        payload.insert(field.to_string(), value.clone());
        let response = self
            .tower
            .session()
            .patch(&url, &Value::Object(payload))
            .await?;

        if !response.ok() {
            tracing::error!(
                field,
                status = response.status,
                response = %response.text(),
                "Error updating entity field"
            );
            return Ok(false);
        }

        self.data.insert(field.to_string(), value);
        Ok(true)
    }
}
