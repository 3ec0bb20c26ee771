//! Asynchronous material lookups over the built-in catalogue
//!
//! Every call waits a fixed latency before answering, standing in for a remote
//! data source. Lookups never fail today, but they return `PurlinResult` so
//! callers already handle the failure path.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{catalogue, Material};
use crate::config::AppConfig;
use crate::errors::{PurlinError, PurlinResult};

#[derive(Debug, Clone)]
pub struct MaterialService {
    latency: Duration,
    materials: &'static [Material],
}

impl MaterialService {
    pub fn new(latency: Duration) -> Self {
        MaterialService {
            latency,
            materials: catalogue(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.material_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn get_all_materials(&self) -> PurlinResult<Vec<Material>> {
        self.wait().await;
        debug!(count = self.materials.len(), "materials fetched");
        Ok(self.materials.to_vec())
    }

    /// Material with the given id, or `None`
    pub async fn get_material_by_id(&self, id: &str) -> PurlinResult<Option<Material>> {
        self.wait().await;
        Ok(self.materials.iter().find(|m| m.id == id).cloned())
    }

    /// Like [`get_material_by_id`](Self::get_material_by_id) but a missing id is an error
    pub async fn require_material(&self, id: &str) -> PurlinResult<Material> {
        self.get_material_by_id(id)
            .await?
            .ok_or_else(|| PurlinError::material_not_found(id))
    }

    pub async fn get_materials_by_category(&self, category: &str) -> PurlinResult<Vec<Material>> {
        self.wait().await;
        Ok(self
            .materials
            .iter()
            .filter(|m| m.category == category)
            .cloned()
            .collect())
    }
}

impl Default for MaterialService {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Fetch status of the home page material list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data")]
pub enum MaterialsState {
    #[default]
    Loading,
    Loaded(Vec<Material>),
    /// Message shown in place of the list
    Failed(String),
}

impl MaterialsState {
    /// Fold a fetch result into a display state; failures keep only the
    /// user-facing message.
    pub fn from_result(result: PurlinResult<Vec<Material>>) -> Self {
        match result {
            Ok(materials) => MaterialsState::Loaded(materials),
            Err(e) => {
                error!(error = ?e, "error fetching materials");
                MaterialsState::Failed(PurlinError::material_fetch(e.to_string()).to_string())
            }
        }
    }

    pub fn materials(&self) -> &[Material] {
        match self {
            MaterialsState::Loaded(materials) => materials,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, MaterialsState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MaterialsState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Load the whole catalogue into a display state
pub async fn load_materials(service: MaterialService) -> MaterialsState {
    MaterialsState::from_result(service.get_all_materials().await)
}
