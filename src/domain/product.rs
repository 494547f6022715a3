//! Company product catalogs.

use serde::Serialize;
use utoipa::ToSchema;

use super::repository::Record;
use super::{CompanyId, ProductId};
use crate::error::ConsoleError;

/// A product or service a company offers during the business round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Owning company.
    pub company_id: CompanyId,
    /// Product name.
    pub name: String,
    /// Available quantity.
    pub quantity: u32,
    /// Unit of measure (see `/config/catalogs`).
    pub unit: String,
    /// Delivery lead time in days.
    pub delivery_days: u32,
}

/// Editable fields of a [`Product`].
#[derive(Debug, Clone)]
pub struct ProductDraft {
    /// Owning company.
    pub company_id: CompanyId,
    /// Product name.
    pub name: String,
    /// Available quantity.
    pub quantity: u32,
    /// Unit of measure.
    pub unit: String,
    /// Delivery lead time in days.
    pub delivery_days: u32,
}

impl ProductDraft {
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] when the name or unit is
    /// blank.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::InvalidRequest(
                "product name is required".to_string(),
            ));
        }
        if self.unit.trim().is_empty() {
            return Err(ConsoleError::InvalidRequest(
                "unit of measure is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Product {
    /// Builds a product from a validated draft.
    #[must_use]
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            company_id: draft.company_id,
            name: draft.name,
            quantity: draft.quantity,
            unit: draft.unit,
            delivery_days: draft.delivery_days,
        }
    }

    /// Overwrites every editable field.
    pub fn apply(&mut self, draft: ProductDraft) {
        *self = Self::new(self.id, draft);
    }
}

impl Record for Product {
    type Id = ProductId;
    const COLLECTION: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }
}
