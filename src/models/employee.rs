use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

use super::shift::VehicleType;

/// Scheduling view of an employee, owned by the employee registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub certifications: BTreeSet<String>,
    #[serde(default)]
    pub vehicle_types: BTreeSet<VehicleType>,
}

impl Employee {
    /// Whether the employee shares at least one vehicle type with `required`.
    pub fn can_operate_any(&self, required: &BTreeSet<VehicleType>) -> bool {
        !self.vehicle_types.is_disjoint(required)
    }
}
