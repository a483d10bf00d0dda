use crate::models::{Employee, Shift};

/// Whether `employee` may be offered `shift`.
///
/// Without vehicle requirements everyone qualifies. Otherwise the employee needs
/// at least one vehicle type in common with the shift.
pub fn is_eligible(shift: &Shift, employee: &Employee) -> bool {
    !shift.requires_vehicles() || employee.can_operate_any(&shift.vehicle_types)
}

/// Employees from `roster` that can work `shift`, in roster order.
pub fn matching_employees(shift: &Shift, roster: &[Employee]) -> Vec<Employee> {
    roster
        .iter()
        .filter(|employee| is_eligible(shift, employee))
        .cloned()
        .collect()
}
