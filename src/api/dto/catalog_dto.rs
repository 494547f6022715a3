//! Contact, company and product request bodies.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{CompanyDraft, CompanyId, CompanyKind, ContactDraft, ProductDraft};

/// Request body for creating or replacing a contact.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// Full name.
    pub name: String,
    /// E-mail address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Job title or role.
    #[serde(default)]
    pub role: String,
}

impl From<ContactRequest> for ContactDraft {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            role: req.role,
        }
    }
}

/// Request body for creating or replacing a company.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CompanyRequest {
    /// Display name.
    pub name: String,
    /// Business sector.
    #[serde(default)]
    pub sector: String,
    /// Buyer or seller.
    pub kind: CompanyKind,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Website.
    #[serde(default)]
    pub website: String,
    /// Facebook page.
    #[serde(default)]
    pub facebook_url: String,
    /// Logo reference.
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl From<CompanyRequest> for CompanyDraft {
    fn from(req: CompanyRequest) -> Self {
        Self {
            name: req.name,
            sector: req.sector,
            kind: req.kind,
            department: req.department,
            address: req.address,
            website: req.website,
            facebook_url: req.facebook_url,
            logo_url: req.logo_url.filter(|url| !url.trim().is_empty()),
        }
    }
}

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductRequest {
    /// Owning company.
    pub company_id: CompanyId,
    /// Product name.
    pub name: String,
    /// Available quantity.
    #[serde(default)]
    pub quantity: u32,
    /// Unit of measure, see `GET /config/catalogs`.
    pub unit: String,
    /// Delivery lead time in days.
    #[serde(default)]
    pub delivery_days: u32,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        Self {
            company_id: req.company_id,
            name: req.name,
            quantity: req.quantity,
            unit: req.unit,
            delivery_days: req.delivery_days,
        }
    }
}
