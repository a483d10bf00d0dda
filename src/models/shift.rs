use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use super::hh_mm;

/// Vehicle class an employee can operate or a shift needs staffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Ambulance,
    Van,
    Truck,
    Car,
    None,
}

impl VehicleType {
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Ambulance,
        VehicleType::Van,
        VehicleType::Truck,
        VehicleType::Car,
        VehicleType::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Ambulance => "ambulance",
            VehicleType::Van => "van",
            VehicleType::Truck => "truck",
            VehicleType::Car => "car",
            VehicleType::None => "none",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Open,
    Closed,
}

impl ShiftType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "open" => Some(ShiftType::Open),
            "closed" => Some(ShiftType::Closed),
            _ => None,
        }
    }

    /// Human label used in calendar titles
    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::Open => "Open",
            ShiftType::Closed => "Closed",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Open => write!(f, "open"),
            ShiftType::Closed => write!(f, "closed"),
        }
    }
}

/// Dispatcher-facing lifecycle. Transitions are owned by the dispatch layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    #[default]
    Draft,
    Published,
    Filled,
    Completed,
    Cancelled,
}

impl ShiftStatus {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "draft" => Some(ShiftStatus::Draft),
            "published" => Some(ShiftStatus::Published),
            "filled" => Some(ShiftStatus::Filled),
            "completed" => Some(ShiftStatus::Completed),
            "cancelled" => Some(ShiftStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleRequirement {
    pub role: String,
    pub quantity: u32,
}

/// Fields that only exist for one kind of shift, keyed on `shiftType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "shiftType", rename_all = "lowercase")]
pub enum ShiftDetails {
    Open {
        #[serde(rename = "availableEmployees", default)]
        available_employees: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        instructions: Option<String>,
    },
    Closed {
        #[serde(rename = "scheduleDetails", default, skip_serializing_if = "Option::is_none")]
        schedule_details: Option<String>,
        #[serde(rename = "assignedEmployees", default)]
        assigned_employees: Vec<String>,
    },
}

impl ShiftDetails {
    pub fn shift_type(&self) -> ShiftType {
        match self {
            ShiftDetails::Open { .. } => ShiftType::Open,
            ShiftDetails::Closed { .. } => ShiftType::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: Uuid,
    pub shift_date: NaiveDate,
    #[serde(with = "hh_mm")]
    #[schema(value_type = String, example = "08:00")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    #[schema(value_type = String, example = "16:00")]
    pub end_time: NaiveTime,
    pub work_location: String,
    pub has_vehicle_requirements: bool,
    #[serde(default)]
    pub vehicle_types: BTreeSet<VehicleType>,
    pub role_requirements: Vec<RoleRequirement>,
    #[serde(default)]
    pub status: ShiftStatus,
    #[serde(flatten)]
    pub details: ShiftDetails,
}

impl Shift {
    pub fn shift_type(&self) -> ShiftType {
        self.details.shift_type()
    }

    /// True when the vehicle gate is set and at least one type is listed.
    pub fn requires_vehicles(&self) -> bool {
        self.has_vehicle_requirements && !self.vehicle_types.is_empty()
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.shift_date.and_time(self.start_time)
    }

    /// End instant; an end at or before the start rolls over to the next day.
    /// A shift on the last representable date ends at `NaiveDateTime::MAX`.
    pub fn ends_at(&self) -> NaiveDateTime {
        let start = self.starts_at();
        let end = self.shift_date.and_time(self.end_time);
        if end <= start {
            end.checked_add_days(Days::new(1)).unwrap_or(NaiveDateTime::MAX)
        } else {
            end
        }
    }

    pub fn is_overnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.ends_at() - self.starts_at()).num_minutes()
    }

    pub fn instructions(&self) -> Option<&str> {
        match &self.details {
            ShiftDetails::Open { instructions, .. } => instructions.as_deref(),
            ShiftDetails::Closed { .. } => None,
        }
    }
}
