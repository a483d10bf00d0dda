use chrono::{NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::errors::ValidationErrors;
use crate::models::{hh_mm, RoleRequirement, Shift, ShiftDetails, ShiftStatus, ShiftType, VehicleType};

const OPEN_ONLY_FIELDS: [&str; 2] = ["availableEmployees", "instructions"];
const CLOSED_ONLY_FIELDS: [&str; 2] = ["scheduleDetails", "assignedEmployees"];

/// Fields common to both shift types, after they passed validation
struct BaseFields {
    shift_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    work_location: String,
    has_vehicle_requirements: bool,
    vehicle_types: BTreeSet<VehicleType>,
    role_requirements: Vec<RoleRequirement>,
    status: ShiftStatus,
}

impl BaseFields {
    fn into_shift(self, id: Uuid, details: ShiftDetails) -> Shift {
        Shift {
            id,
            shift_date: self.shift_date,
            start_time: self.start_time,
            end_time: self.end_time,
            work_location: self.work_location,
            has_vehicle_requirements: self.has_vehicle_requirements,
            vehicle_types: self.vehicle_types,
            role_requirements: self.role_requirements,
            status: self.status,
            details,
        }
    }
}

/// Validate a raw shift form submission.
///
/// The base rules shared by open and closed shifts run first, then the branch
/// selected by `shiftType` reads its own fields. Fields belonging to the other
/// branch are stripped, never reported. All failures are collected.
pub fn validate_shift(id: Uuid, raw: &Value) -> Result<Shift, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Some(obj) = raw.as_object() else {
        errors.push("", "Shift submission must be an object");
        return Err(errors);
    };

    let shift_type = validate_shift_type(obj, &mut errors);
    let base = validate_base(obj, &mut errors);
    let details = shift_type.map(|shift_type| {
        let own_fields = strip_foreign_fields(shift_type, obj);
        validate_details(shift_type, &own_fields, &mut errors)
    });

    match (base, details) {
        (Some(base), Some(details)) if errors.is_empty() => Ok(base.into_shift(id, details)),
        _ => Err(errors),
    }
}

fn validate_shift_type(obj: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<ShiftType> {
    match obj.get("shiftType") {
        None | Some(Value::Null) => {
            errors.push("shiftType", "Shift type is required");
            None
        }
        Some(Value::String(tag)) => {
            let parsed = ShiftType::parse(tag.trim());
            if parsed.is_none() {
                errors.push("shiftType", "Shift type must be 'open' or 'closed'");
            }
            parsed
        }
        Some(_) => {
            errors.push("shiftType", "Shift type must be 'open' or 'closed'");
            None
        }
    }
}

fn validate_base(obj: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<BaseFields> {
    let shift_date = required_str(obj, "shiftDate", "Shift date is required", errors).and_then(|raw| {
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) if date.succ_opt().is_none() => {
                errors.push("shiftDate", "Shift date is too far in the future");
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                errors.push("shiftDate", "Shift date must be a valid date (YYYY-MM-DD)");
                None
            }
        }
    });
    let start_time = required_time(obj, "startTime", "Start time", errors);
    let end_time = required_time(obj, "endTime", "End time", errors);
    let work_location = required_str(obj, "workLocation", "Work location is required", errors)
        .map(|location| location.trim().to_string());
    let has_vehicle_requirements = optional_bool(obj, "hasVehicleRequirements", errors);
    let vehicle_types = validate_vehicle_types(obj, has_vehicle_requirements, errors);
    let role_requirements = validate_role_requirements(obj, errors);
    let status = validate_status(obj, errors);

    Some(BaseFields {
        shift_date: shift_date?,
        start_time: start_time?,
        end_time: end_time?,
        work_location: work_location?,
        has_vehicle_requirements,
        vehicle_types: vehicle_types?,
        role_requirements: role_requirements?,
        status: status?,
    })
}

/// Vehicle types only count when the requirement gate is set; otherwise they are ignored.
fn validate_vehicle_types(
    obj: &Map<String, Value>,
    has_vehicle_requirements: bool,
    errors: &mut ValidationErrors,
) -> Option<BTreeSet<VehicleType>> {
    if !has_vehicle_requirements {
        return Some(BTreeSet::new());
    }

    let empty = Vec::new();
    let items = match obj.get("vehicleTypes") {
        None | Some(Value::Null) => &empty,
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push("vehicleTypes", "Vehicle types must be a list");
            return None;
        }
    };

    let before = errors.len();
    let mut vehicle_types = BTreeSet::new();
    for (index, item) in items.iter().enumerate() {
        match item.as_str().and_then(VehicleType::parse) {
            Some(vehicle) => {
                vehicle_types.insert(vehicle);
            }
            None => errors.push(
                format!("vehicleTypes[{}]", index),
                "Vehicle type must be one of ambulance, van, truck, car, none",
            ),
        }
    }

    if errors.len() != before {
        return None;
    }
    if vehicle_types.is_empty() {
        errors.push("vehicleTypes", "Please select at least one vehicle type");
        return None;
    }
    Some(vehicle_types)
}

fn validate_role_requirements(
    obj: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> Option<Vec<RoleRequirement>> {
    let items = match obj.get("roleRequirements") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        None | Some(Value::Null) | Some(Value::Array(_)) => {
            errors.push("roleRequirements", "At least one role requirement is required");
            return None;
        }
        Some(_) => {
            errors.push("roleRequirements", "Role requirements must be a list");
            return None;
        }
    };

    let before = errors.len();
    let mut requirements = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let path = format!("roleRequirements[{}]", index);
        let Some(entry) = item.as_object() else {
            errors.push(path, "Role requirement must be an object");
            continue;
        };

        let role = match entry.get("role") {
            Some(Value::String(role)) if !role.trim().is_empty() => Some(role.trim().to_string()),
            _ => {
                errors.push(format!("{}.role", path), "Role is required");
                None
            }
        };

        let quantity = match parse_quantity(entry.get("quantity")) {
            Ok(quantity) => Some(quantity),
            Err(message) => {
                errors.push(format!("{}.quantity", path), message);
                None
            }
        };

        if let (Some(role), Some(quantity)) = (role, quantity) {
            requirements.push(RoleRequirement { role, quantity });
        }
    }

    (errors.len() == before).then_some(requirements)
}

fn parse_quantity(value: Option<&Value>) -> Result<u32, &'static str> {
    let number = match value {
        None | Some(Value::Null) => return Err("Quantity is required"),
        Some(Value::Number(number)) => number,
        Some(_) => return Err("Quantity must be a number"),
    };

    let whole = match (number.as_u64(), number.as_f64()) {
        (Some(whole), _) => whole,
        (None, Some(float)) if float.fract() != 0.0 => return Err("Quantity must be a whole number"),
        (None, Some(float)) if float >= 1.0 => float as u64,
        _ => 0,
    };

    if whole < 1 {
        return Err("Quantity must be at least 1");
    }
    u32::try_from(whole).map_err(|_| "Quantity is too large")
}

fn validate_status(obj: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<ShiftStatus> {
    match obj.get("status") {
        None | Some(Value::Null) => Some(ShiftStatus::Draft),
        Some(value) => {
            let parsed = value.as_str().and_then(|tag| ShiftStatus::parse(tag.trim()));
            if parsed.is_none() {
                errors.push(
                    "status",
                    "Status must be one of draft, published, filled, completed, cancelled",
                );
            }
            parsed
        }
    }
}

/// Copy of the submission without the fields owned by the other shift type.
///
/// Those fields are dropped on purpose: the dashboard forms keep both groups
/// in state and submit whichever the user typed into last.
fn strip_foreign_fields(shift_type: ShiftType, obj: &Map<String, Value>) -> Map<String, Value> {
    let foreign = match shift_type {
        ShiftType::Open => CLOSED_ONLY_FIELDS,
        ShiftType::Closed => OPEN_ONLY_FIELDS,
    };

    let stripped: Vec<&str> = foreign.into_iter().filter(|key| obj.contains_key(*key)).collect();
    if !stripped.is_empty() {
        tracing::debug!(
            shift_type = %shift_type,
            ?stripped,
            "Stripping fields that belong to the other shift type"
        );
    }

    obj.iter()
        .filter(|(key, _)| !foreign.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn validate_details(
    shift_type: ShiftType,
    own_fields: &Map<String, Value>,
    errors: &mut ValidationErrors,
) -> ShiftDetails {
    match shift_type {
        ShiftType::Open => ShiftDetails::Open {
            available_employees: optional_id_list(own_fields, "availableEmployees", errors),
            instructions: optional_text(own_fields, "instructions", errors),
        },
        ShiftType::Closed => ShiftDetails::Closed {
            schedule_details: optional_text(own_fields, "scheduleDetails", errors),
            assigned_employees: optional_id_list(own_fields, "assignedEmployees", errors),
        },
    }
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    required_message: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match obj.get(key) {
        Some(Value::String(value)) if !value.trim().is_empty() => Some(value.as_str()),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            errors.push(key, required_message);
            None
        }
        Some(_) => {
            errors.push(key, format!("{} must be a string", key));
            None
        }
    }
}

fn required_time(
    obj: &Map<String, Value>,
    key: &str,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<NaiveTime> {
    let raw = required_str(obj, key, &format!("{} is required", label), errors)?;
    let parsed = hh_mm::parse(raw);
    if parsed.is_none() {
        errors.push(key, format!("{} must be a valid time (HH:MM)", label));
    }
    parsed
}

fn optional_bool(obj: &Map<String, Value>, key: &str, errors: &mut ValidationErrors) -> bool {
    match obj.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            errors.push(key, format!("{} must be true or false", key));
            false
        }
    }
}

/// Free text that is treated as absent when blank
fn optional_text(obj: &Map<String, Value>, key: &str, errors: &mut ValidationErrors) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.trim().is_empty() => None,
        Some(Value::String(text)) => Some(text.trim().to_string()),
        Some(_) => {
            errors.push(key, format!("{} must be text", key));
            None
        }
    }
}

fn optional_id_list(obj: &Map<String, Value>, key: &str, errors: &mut ValidationErrors) -> Vec<String> {
    let items = match obj.get(key) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(key, format!("{} must be a list of employee ids", key));
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::String(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
            Value::Number(id) => Some(id.to_string()),
            _ => {
                errors.push(format!("{}[{}]", key, index), "Employee id must be a non-empty string");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn open_submission() -> Value {
        json!({
            "shiftType": "open",
            "shiftDate": "2024-03-14",
            "startTime": "08:00",
            "endTime": "16:00",
            "workLocation": "Station 12 - Riverside",
            "hasVehicleRequirements": true,
            "vehicleTypes": ["ambulance"],
            "roleRequirements": [
                { "role": "Paramedic", "quantity": 2 },
                { "role": "Driver", "quantity": 1 }
            ],
            "instructions": "Report to dispatch desk"
        })
    }

    fn shift_id() -> Uuid {
        Uuid::from_u128(0x42)
    }

    #[test]
    fn accepts_a_complete_open_shift() {
        let shift = validate_shift(shift_id(), &open_submission()).unwrap();

        assert_eq!(shift.id, shift_id());
        assert_eq!(shift.shift_type(), ShiftType::Open);
        assert_eq!(shift.status, ShiftStatus::Draft);
        assert_eq!(shift.work_location, "Station 12 - Riverside");
        assert_eq!(shift.vehicle_types, BTreeSet::from([VehicleType::Ambulance]));
        assert_eq!(shift.role_requirements.len(), 2);
        assert_eq!(shift.instructions(), Some("Report to dispatch desk"));
    }

    #[test]
    fn vehicle_gate_requires_at_least_one_type() {
        let mut raw = open_submission();
        raw["vehicleTypes"] = json!([]);

        let errors = validate_shift(shift_id(), &raw).unwrap_err();
        assert!(errors.has_field("vehicleTypes"));
        assert_eq!(errors.len(), 1);

        raw["hasVehicleRequirements"] = json!(false);
        let shift = validate_shift(shift_id(), &raw).unwrap();
        assert!(!shift.has_vehicle_requirements);
        assert!(shift.vehicle_types.is_empty());
    }

    #[test]
    fn vehicle_types_are_ignored_without_the_gate() {
        let mut raw = open_submission();
        raw["hasVehicleRequirements"] = json!(false);
        raw["vehicleTypes"] = json!(["hovercraft"]);

        let shift = validate_shift(shift_id(), &raw).unwrap();
        assert!(shift.vehicle_types.is_empty());
    }

    #[test]
    fn unknown_vehicle_type_is_reported_by_index() {
        let mut raw = open_submission();
        raw["vehicleTypes"] = json!(["van", "hovercraft"]);

        let errors = validate_shift(shift_id(), &raw).unwrap_err();
        assert!(errors.has_field("vehicleTypes[1]"));
        assert!(!errors.has_field("vehicleTypes"));
    }

    #[test]
    fn collects_every_error_in_one_pass() {
        let raw = json!({
            "shiftType": "open",
            "shiftDate": "",
            "startTime": "25:99",
            "endTime": "06:00",
            "workLocation": "   ",
            "roleRequirements": [
                { "role": "", "quantity": 0 },
                { "role": "Driver", "quantity": 1.5 }
            ]
        });

        let errors = validate_shift(shift_id(), &raw).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "shiftDate",
                "startTime",
                "workLocation",
                "roleRequirements[0].role",
                "roleRequirements[0].quantity",
                "roleRequirements[1].quantity",
            ]
        );
    }

    #[test]
    fn empty_role_requirements_are_rejected() {
        let mut raw = open_submission();
        raw["roleRequirements"] = json!([]);

        let errors = validate_shift(shift_id(), &raw).unwrap_err();
        assert!(errors.has_field("roleRequirements"));
    }

    #[test]
    fn whole_float_quantities_are_accepted() {
        let mut raw = open_submission();
        raw["roleRequirements"] = json!([{ "role": "EMT", "quantity": 3.0 }]);

        let shift = validate_shift(shift_id(), &raw).unwrap();
        assert_eq!(shift.role_requirements[0].quantity, 3);
    }

    #[test]
    fn missing_or_unknown_shift_type_is_rejected() {
        let mut raw = open_submission();
        raw.as_object_mut().unwrap().remove("shiftType");
        let errors = validate_shift(shift_id(), &raw).unwrap_err();
        assert!(errors.has_field("shiftType"));

        raw["shiftType"] = json!("floating");
        let errors = validate_shift(shift_id(), &raw).unwrap_err();
        assert!(errors.has_field("shiftType"));
    }

    #[test]
    fn closed_shift_drops_open_only_fields() {
        let mut raw = open_submission();
        raw["shiftType"] = json!("closed");
        raw["scheduleDetails"] = json!("Fixed crew for the stadium event");
        raw["assignedEmployees"] = json!(["e1", "e2"]);
        raw["availableEmployees"] = json!(["e9"]);

        let shift = validate_shift(shift_id(), &raw).unwrap();
        assert_eq!(
            shift.details,
            ShiftDetails::Closed {
                schedule_details: Some("Fixed crew for the stadium event".to_string()),
                assigned_employees: vec!["e1".to_string(), "e2".to_string()],
            }
        );
        assert_eq!(shift.instructions(), None);
    }

    #[test]
    fn malformed_foreign_fields_do_not_fail_validation() {
        let mut raw = open_submission();
        raw["assignedEmployees"] = json!("not a list");
        raw["scheduleDetails"] = json!(42);

        let shift = validate_shift(shift_id(), &raw).unwrap();
        assert!(matches!(shift.details, ShiftDetails::Open { .. }));

        let value = serde_json::to_value(&shift).unwrap();
        assert!(value.get("assignedEmployees").is_none());
        assert!(value.get("scheduleDetails").is_none());
    }

    #[test]
    fn last_representable_date_is_rejected() {
        let mut raw = open_submission();
        raw["shiftDate"] = json!(NaiveDate::MAX.format("%Y-%m-%d").to_string());
        raw["startTime"] = json!("22:00");
        raw["endTime"] = json!("06:00");

        let errors = validate_shift(shift_id(), &raw).unwrap_err();
        assert!(errors.has_field("shiftDate"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn blank_instructions_become_absent() {
        let mut raw = open_submission();
        raw["instructions"] = json!("  ");

        let shift = validate_shift(shift_id(), &raw).unwrap();
        assert_eq!(shift.instructions(), None);
    }

    #[test]
    fn explicit_status_is_kept_and_unknown_status_rejected() {
        let mut raw = open_submission();
        raw["status"] = json!("published");
        assert_eq!(validate_shift(shift_id(), &raw).unwrap().status, ShiftStatus::Published);

        raw["status"] = json!("archived");
        assert!(validate_shift(shift_id(), &raw).unwrap_err().has_field("status"));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let errors = validate_shift(shift_id(), &json!(["shift"])).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
