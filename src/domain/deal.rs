//! Negotiated deal records.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::repository::Record;
use super::{DealId, MeetingId};
use crate::error::ConsoleError;

/// A deal negotiated during a concluded meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Deal {
    /// Deal identifier.
    pub id: DealId,
    /// Meeting the deal came out of.
    pub meeting_id: MeetingId,
    /// What was agreed.
    pub description: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit in the event's currency, smallest unit.
    pub unit_price: u64,
    /// Day the deal was recorded.
    #[schema(value_type = String, format = Date)]
    pub negotiated_on: NaiveDate,
}

/// Fields supplied when recording a [`Deal`].
#[derive(Debug, Clone)]
pub struct DealDraft {
    /// Meeting the deal came out of.
    pub meeting_id: MeetingId,
    /// What was agreed.
    pub description: String,
    /// Number of units.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: u64,
}

impl DealDraft {
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] when the description is
    /// blank or the quantity is zero.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.description.trim().is_empty() {
            return Err(ConsoleError::InvalidRequest(
                "deal description is required".to_string(),
            ));
        }
        if self.quantity == 0 {
            return Err(ConsoleError::InvalidRequest(
                "deal quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Deal {
    /// Records a deal dated `negotiated_on`.
    #[must_use]
    pub fn new(id: DealId, draft: DealDraft, negotiated_on: NaiveDate) -> Self {
        Self {
            id,
            meeting_id: draft.meeting_id,
            description: draft.description,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            negotiated_on,
        }
    }

    /// Quantity times unit price, saturating.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.unit_price)
    }
}

impl Record for Deal {
    type Id = DealId;
    const COLLECTION: &'static str = "deal";

    fn id(&self) -> DealId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_multiplies_and_saturates() {
        let draft = DealDraft {
            meeting_id: MeetingId::new(1),
            description: "Licencias".to_string(),
            quantity: 25,
            unit_price: 150_000,
        };
        let Some(day) = NaiveDate::from_ymd_opt(2024, 3, 11) else {
            return;
        };
        let deal = Deal::new(DealId::new(1), draft.clone(), day);
        assert_eq!(deal.total(), 3_750_000);

        let huge = Deal::new(
            DealId::new(2),
            DealDraft {
                unit_price: u64::MAX,
                ..draft
            },
            day,
        );
        assert_eq!(huge.total(), u64::MAX);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let draft = DealDraft {
            meeting_id: MeetingId::new(1),
            description: "x".to_string(),
            quantity: 0,
            unit_price: 1,
        };
        assert!(draft.validate().is_err());
    }
}
