//! Inventory scripts: named, organization-scoped scripts that generate
//! inventory data dynamically.

use std::sync::Arc;

use serde_json::Value;
use towerlib_core::error::TowerResult;
use towerlib_core::types::{EntityId, Record};
use towerlib_core::validation::ensure_max_length;

use crate::entity::Entity;
use crate::tower::Tower;

/// API collection path for inventory scripts.
pub const INVENTORY_SCRIPTS_ENDPOINT: &str = "inventory_scripts";

/// Maximum length of an inventory script name, in characters.
pub const MAX_NAME_LEN: usize = 512;

/// An inventory script as returned by the tower API.
///
/// Reads go straight to the backing record and never validate; writes go
/// through [`Entity::update_values`] so the tower and the local record stay
/// in step.
#[derive(Debug, Clone)]
pub struct InventoryScript {
    entity: Entity,
}

impl InventoryScript {
    /// Wrap a record returned by the API.
    pub fn new(tower: Arc<Tower>, data: Record) -> Self {
        Self {
            entity: Entity::new(tower, INVENTORY_SCRIPTS_ENDPOINT, data),
        }
    }

    /// Fetch an inventory script by id.
    ///
    /// A non-2xx response (including 404) is logged and yields `Ok(None)`.
    pub async fn get_by_id(tower: Arc<Tower>, id: EntityId) -> TowerResult<Option<Self>> {
        let url = format!("{}/{INVENTORY_SCRIPTS_ENDPOINT}/{id}/", tower.api());
        let response = tower.session().get(&url).await?;
        if !response.ok() {
            tracing::error!(
                id,
                status = response.status,
                response = %response.text(),
                "Error fetching inventory script"
            );
            return Ok(None);
        }
        let data: Record = response.json()?;
        Ok(Some(Self::new(tower, data)))
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn id(&self) -> Option<EntityId> {
        self.entity.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.entity.field_str("name")
    }

    /// Rename the script.
    ///
    /// Names longer than [`MAX_NAME_LEN`] characters are rejected with
    /// [`TowerError::InvalidValue`](towerlib_core::error::TowerError::InvalidValue)
    /// before any request is made. Otherwise returns whether the tower
    /// accepted the update.
    pub async fn set_name(&mut self, value: &str) -> TowerResult<bool> {
        ensure_max_length(value, MAX_NAME_LEN)?;
        self.entity
            .update_values("name", Value::String(value.to_string()))
            .await
    }

    pub fn description(&self) -> Option<&str> {
        self.entity.field_str("description")
    }

    pub async fn set_description(&mut self, value: &str) -> TowerResult<bool> {
        self.entity
            .update_values("description", Value::String(value.to_string()))
            .await
    }

    /// The script body.
    pub fn script(&self) -> Option<&str> {
        self.entity.field_str("script")
    }

    pub async fn set_script(&mut self, value: &str) -> TowerResult<bool> {
        self.entity
            .update_values("script", Value::String(value.to_string()))
            .await
    }

    /// Create a new inventory script on the tower.
    ///
    /// The payload links the new script to this entity's id through the
    /// `inventory` field. Returns the created object as returned by the API,
    /// or `None` if the tower rejected the request; a rejection is logged
    /// rather than returned as an error.
    pub async fn create_inventory_script(
        &self,
        name: &str,
        description: &str,
        script: &str,
        organization: impl Into<Value>,
    ) -> TowerResult<Option<Value>> {
        let tower = self.entity.tower();
        let url = format!("{}/{INVENTORY_SCRIPTS_ENDPOINT}/", tower.api());
        let organization: Value = organization.into();
        let payload = serde_json::json!({
            "name": name,
            "description": description,
            "inventory": self.id(),
            "script": script,
            "organization": organization,
        });

        let response = tower.session().post(&url, &payload).await?;
        if !response.ok() {
            tracing::error!(
                name,
                status = response.status,
                response = %response.text(),
                "Error creating inventory script"
            );
            return Ok(None);
        }

        tracing::info!(name, "Inventory script created");
        Ok(Some(response.json()?))
    }
}
