//! Participating companies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CompanyId;
use super::repository::Record;
use crate::error::ConsoleError;

/// Role a company plays in the business round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompanyKind {
    /// Looking to purchase.
    Buyer,
    /// Looking to sell.
    Seller,
}

/// A company that can register for events and take part in meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Company {
    /// Company identifier.
    pub id: CompanyId,
    /// Generated registry code, e.g. `EMP004`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Business sector.
    pub sector: String,
    /// Buyer or seller.
    pub kind: CompanyKind,
    /// Department (region).
    pub department: String,
    /// Street address.
    pub address: String,
    /// Website.
    pub website: String,
    /// Facebook page.
    pub facebook_url: String,
    /// Logo reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Editable fields of a [`Company`].
#[derive(Debug, Clone)]
pub struct CompanyDraft {
    /// Display name.
    pub name: String,
    /// Business sector.
    pub sector: String,
    /// Buyer or seller.
    pub kind: CompanyKind,
    /// Department.
    pub department: String,
    /// Street address.
    pub address: String,
    /// Website.
    pub website: String,
    /// Facebook page.
    pub facebook_url: String,
    /// Logo reference.
    pub logo_url: Option<String>,
}

impl CompanyDraft {
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] when the name is blank.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::InvalidRequest(
                "company name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Registry code for a company id: `EMP` followed by at least three digits.
#[must_use]
pub fn company_code(id: CompanyId) -> String {
    format!("EMP{:03}", id.get())
}

impl Company {
    /// Builds a company from a validated draft, generating its code.
    #[must_use]
    pub fn new(id: CompanyId, draft: CompanyDraft) -> Self {
        Self {
            id,
            code: company_code(id),
            name: draft.name,
            sector: draft.sector,
            kind: draft.kind,
            department: draft.department,
            address: draft.address,
            website: draft.website,
            facebook_url: draft.facebook_url,
            logo_url: draft.logo_url,
        }
    }

    /// Overwrites every editable field. The code never changes.
    pub fn apply(&mut self, draft: CompanyDraft) {
        let code = std::mem::take(&mut self.code);
        *self = Self {
            code,
            ..Self::new(self.id, draft)
        };
    }
}

impl Record for Company {
    type Id = CompanyId;
    const COLLECTION: &'static str = "company";

    fn id(&self) -> CompanyId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> CompanyDraft {
        CompanyDraft {
            name: name.to_string(),
            sector: "Tecnología".to_string(),
            kind: CompanyKind::Seller,
            department: "La Paz".to_string(),
            address: String::new(),
            website: String::new(),
            facebook_url: String::new(),
            logo_url: None,
        }
    }

    #[test]
    fn code_is_zero_padded() {
        assert_eq!(company_code(CompanyId::new(4)), "EMP004");
        assert_eq!(company_code(CompanyId::new(1234)), "EMP1234");
    }

    #[test]
    fn apply_keeps_code() {
        let mut company = Company::new(CompanyId::new(7), draft("Andes Tech"));
        assert_eq!(company.code, "EMP007");

        company.apply(draft("Andes Technologies"));
        assert_eq!(company.code, "EMP007");
        assert_eq!(company.name, "Andes Technologies");
    }

    #[test]
    fn kind_uses_snake_case() {
        let json = serde_json::to_string(&CompanyKind::Buyer).unwrap_or_default();
        assert_eq!(json, "\"buyer\"");
    }
}
