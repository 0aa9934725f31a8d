//! Async client for the Ansible Tower / AWX REST API.
//!
//! A [`Tower`] carries the API base URL and the HTTP [`Session`]; entities
//! such as [`InventoryScript`] wrap the JSON records the API returns and
//! push field changes back through that session.

pub mod config;
pub mod entity;
pub mod inventory_script;
pub mod session;
pub mod tower;

pub use config::TowerConfig;
pub use entity::Entity;
pub use inventory_script::InventoryScript;
pub use session::{HttpSession, Session, SessionResponse};
pub use tower::Tower;
pub use towerlib_core::error::{TowerError, TowerResult};
