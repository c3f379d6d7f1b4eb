//! Typed view of a radiology order resource.
//!
//! Everything except the identifier is optional: what the server includes
//! depends on the requested representation level, and older orders may miss
//! nested data entirely. Deserializing a partial payload must always work;
//! display code defaults the gaps.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order urgency as the search handler understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Routine,
    Stat,
    OnScheduledDate,
}

/// A linked resource reduced to its identifier and display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub uuid: Option<String>,
    pub display: Option<String>,
}

/// A radiology order at `full` representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiologyOrder {
    pub uuid: Uuid,
    #[serde(rename = "orderNumber")]
    pub order_number: Option<String>,
    pub action: Option<String>,
    // Kept as the raw wire string so an urgency this client does not know
    // about still round-trips and displays.
    pub urgency: Option<String>,
    pub patient: Option<Reference>,
    pub concept: Option<Reference>,
    pub orderer: Option<Reference>,
    #[serde(rename = "orderReason")]
    pub order_reason: Option<Reference>,
    #[serde(rename = "scheduledDate")]
    pub scheduled_date: Option<String>,
    #[serde(rename = "dateActivated")]
    pub date_activated: Option<String>,
    pub instructions: Option<String>,
}

impl RadiologyOrder {
    pub fn order_number(&self) -> &str {
        self.order_number.as_deref().unwrap_or("")
    }

    pub fn urgency(&self) -> &str {
        self.urgency.as_deref().unwrap_or("")
    }

    pub fn patient_display(&self) -> &str {
        reference_display(&self.patient)
    }

    pub fn concept_display(&self) -> &str {
        reference_display(&self.concept)
    }

    pub fn orderer_display(&self) -> &str {
        reference_display(&self.orderer)
    }

    pub fn order_reason_display(&self) -> &str {
        reference_display(&self.order_reason)
    }
}

fn reference_display(reference: &Option<Reference>) -> &str {
    reference
        .as_ref()
        .and_then(|r| r.display.as_deref())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_a_full_resource() {
        let order: RadiologyOrder = serde_json::from_value(json!({
            "uuid": "1bae735a-fca0-11e5-9e59-08002719a237",
            "orderNumber": "ORD-53",
            "action": "NEW",
            "urgency": "STAT",
            "patient": { "uuid": "p-1", "display": "100-07 - Doe, John" },
            "concept": { "uuid": "c-1", "display": "CT HEAD" },
            "orderer": { "uuid": "o-1", "display": "Shaw, Marc" },
            "scheduledDate": null,
            "dateActivated": "2016-03-14T09:33:00.000+0100",
            "instructions": "with contrast"
        }))
        .unwrap();

        assert_eq!(order.order_number(), "ORD-53");
        assert_eq!(order.urgency(), "STAT");
        assert_eq!(order.patient_display(), "100-07 - Doe, John");
        assert_eq!(order.concept_display(), "CT HEAD");
        assert_eq!(order.orderer_display(), "Shaw, Marc");
        assert_eq!(order.scheduled_date, None);
        assert_eq!(order.instructions.as_deref(), Some("with contrast"));
    }

    #[test]
    fn deserializes_a_partial_resource() {
        let order: RadiologyOrder = serde_json::from_value(json!({
            "uuid": "1bae735a-fca0-11e5-9e59-08002719a237"
        }))
        .unwrap();

        assert_eq!(order.order_number(), "");
        assert_eq!(order.urgency(), "");
        assert_eq!(order.patient_display(), "");
        assert_eq!(order.orderer_display(), "");
    }

    #[test]
    fn urgency_uses_wire_spelling() {
        assert_eq!(
            serde_json::to_value(Urgency::OnScheduledDate).unwrap(),
            json!("ON_SCHEDULED_DATE")
        );
        assert_eq!(serde_json::to_value(Urgency::Routine).unwrap(), json!("ROUTINE"));
    }
}
