//! Booking request types
//!
//! Timestamps arrive as local-time strings, matching the wire contract:
//! the caller sends "2025-06-07T18:00:00" and the engine anchors it to
//! the configured business timezone before any date arithmetic.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A booking attempt from an already-authenticated caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i32,
    #[validate(range(min = 1, message = "court_id must be positive"))]
    pub court_id: i32,
    pub start_time: String,
    pub end_time: String,
    #[validate(range(min = 1, message = "coach_id must be positive"))]
    pub coach_id: Option<i32>,
    #[validate(nested)]
    #[serde(default)]
    pub equipment: Vec<EquipmentLine>,
}

/// One requested equipment rental line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EquipmentLine {
    #[validate(range(min = 1, message = "equipment_id must be positive"))]
    pub equipment_id: i32,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> BookingRequest {
        BookingRequest {
            user_id: 7,
            court_id: 1,
            start_time: "2025-06-02T10:00:00".into(),
            end_time: "2025-06-02T11:00:00".into(),
            coach_id: None,
            equipment: vec![],
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut request = sample_request();
        request.equipment = vec![EquipmentLine {
            equipment_id: 1,
            quantity: 0,
        }];
        assert!(request.validate().is_err());
    }

    #[test]
    fn non_positive_ids_are_rejected() {
        let mut request = sample_request();
        request.court_id = 0;
        assert!(request.validate().is_err());

        let mut request = sample_request();
        request.coach_id = Some(-3);
        assert!(request.validate().is_err());
    }

    #[test]
    fn equipment_defaults_to_empty_on_deserialize() {
        let request: BookingRequest = serde_json::from_value(serde_json::json!({
            "user_id": 7,
            "court_id": 1,
            "start_time": "2025-06-02T10:00:00",
            "end_time": "2025-06-02T11:00:00"
        }))
        .unwrap();
        assert!(request.equipment.is_empty());
        assert!(request.coach_id.is_none());
    }
}
