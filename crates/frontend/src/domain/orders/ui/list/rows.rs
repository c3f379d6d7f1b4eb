use contracts::rest::get_property;
use serde_json::Value;

/// One order of a page response, reduced to its display values.
///
/// Every field is resolved through the safe property accessor, so a resource
/// missing any nested part shapes into empty cells instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub uuid: String,
    pub order_number: String,
    pub patient: String,
    pub urgency: String,
    pub concept: String,
    pub orderer: String,
    pub scheduled_date: String,
    pub date_activated: String,
    // Carried for the expandable detail panel.
    pub instructions: String,
    pub scheduled_status: String,
    pub mwl_status: String,
}

impl OrderRow {
    pub fn from_resource(resource: &Value) -> Self {
        Self {
            uuid: get_property(resource, "uuid"),
            order_number: get_property(resource, "orderNumber"),
            patient: get_property(resource, "patient.display"),
            urgency: get_property(resource, "urgency"),
            concept: get_property(resource, "concept.display"),
            orderer: get_property(resource, "orderer.display"),
            scheduled_date: get_property(resource, "scheduledDate"),
            date_activated: get_property(resource, "dateActivated"),
            instructions: get_property(resource, "instructions"),
            scheduled_status: get_property(resource, "study.scheduledStatus"),
            mwl_status: get_property(resource, "study.mwlStatus"),
        }
    }
}

pub fn shape_rows(results: &[Value]) -> Vec<OrderRow> {
    results.iter().map(OrderRow::from_resource).collect()
}

/// Expansion state of one row's detail panel.
///
/// The panel markup is built on first expansion and kept around afterwards;
/// collapsing only hides it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelState {
    pub expanded: bool,
    pub rendered: bool,
}

impl PanelState {
    pub fn toggle(&mut self) {
        if !self.expanded {
            self.rendered = true;
        }
        self.expanded = !self.expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_a_complete_resource() {
        let row = OrderRow::from_resource(&json!({
            "uuid": "1bae735a-fca0-11e5-9e59-08002719a237",
            "orderNumber": "ORD-17",
            "urgency": "ROUTINE",
            "patient": { "display": "100-07 - Doe, John" },
            "concept": { "display": "CT HEAD" },
            "orderer": { "display": "Shaw, Marc" },
            "scheduledDate": "2016-03-20T10:00:00.000+0100",
            "dateActivated": "2016-03-14T09:33:00.000+0100",
            "instructions": "with contrast",
            "study": { "scheduledStatus": "SCHEDULED", "mwlStatus": "IN_SYNC" }
        }));

        assert_eq!(row.order_number, "ORD-17");
        assert_eq!(row.patient, "100-07 - Doe, John");
        assert_eq!(row.urgency, "ROUTINE");
        assert_eq!(row.concept, "CT HEAD");
        assert_eq!(row.orderer, "Shaw, Marc");
        assert_eq!(row.scheduled_date, "2016-03-20T10:00:00.000+0100");
        assert_eq!(row.date_activated, "2016-03-14T09:33:00.000+0100");
        assert_eq!(row.scheduled_status, "SCHEDULED");
        assert_eq!(row.mwl_status, "IN_SYNC");
    }

    #[test]
    fn missing_fields_shape_into_empty_cells() {
        let row = OrderRow::from_resource(&json!({
            "uuid": "1bae735a-fca0-11e5-9e59-08002719a237",
            "patient": null,
            "concept": { "display": null }
        }));

        assert_eq!(row.order_number, "");
        assert_eq!(row.patient, "");
        assert_eq!(row.concept, "");
        assert_eq!(row.orderer, "");
        assert_eq!(row.scheduled_date, "");
        assert_eq!(row.mwl_status, "");
    }

    #[test]
    fn panel_starts_collapsed_and_unrendered() {
        assert_eq!(
            PanelState::default(),
            PanelState {
                expanded: false,
                rendered: false
            }
        );
    }

    #[test]
    fn toggling_twice_restores_visibility_but_keeps_the_panel() {
        let mut panel = PanelState::default();
        panel.toggle();
        assert!(panel.expanded);
        assert!(panel.rendered);
        panel.toggle();
        assert!(!panel.expanded);
        assert!(panel.rendered);
    }

    #[test]
    fn shapes_every_result_of_a_page() {
        let rows = shape_rows(&[
            json!({ "uuid": "u1", "orderNumber": "ORD-1" }),
            json!({ "uuid": "u2" }),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].order_number, "ORD-1");
        assert_eq!(rows[1].order_number, "");
    }
}
