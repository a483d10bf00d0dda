pub mod calendar;
pub mod employee;
pub mod hh_mm;
pub mod shift;
pub mod shift_input;
pub mod swap_input;
pub mod swap_request;

pub use calendar::{CalendarEvent, ColorTag};
pub use employee::Employee;
pub use shift::{RoleRequirement, Shift, ShiftDetails, ShiftStatus, ShiftType, VehicleType};
pub use shift_input::{MatchCandidatesInput, ProjectCalendarInput, ShiftSubmission};
pub use swap_input::{ResolveSwapInput, SubmitSwapInput, SwapDecision, SwapOutcome};
pub use swap_request::{SwapRequest, SwapState, SwapStatus, SwapSummary};
