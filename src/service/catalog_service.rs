//! Catalog service: contacts, companies, and their products.

use std::sync::Arc;

use crate::domain::{
    Company, CompanyDraft, CompanyId, ConsoleStore, Contact, ContactDraft, ContactId, Product,
    ProductDraft, ProductId, Record,
};
use crate::error::ConsoleError;

/// Orchestration for the master data staff maintain between events.
///
/// Every mutation validates its draft, checks references against the
/// other collections, writes, then logs.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<ConsoleStore>,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(store: Arc<ConsoleStore>) -> Self {
        Self { store }
    }

    // ── Contacts ────────────────────────────────────────────────────────

    /// Creates a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] if the draft is invalid.
    pub async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, ConsoleError> {
        draft.validate()?;
        let contact = self
            .store
            .contacts
            .create(|id| Contact::new(id, draft))
            .await;
        tracing::info!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }

    /// Returns all contacts in id order.
    pub async fn list_contacts(&self) -> Vec<Contact> {
        self.store.contacts.list().await
    }

    /// Fetches one contact.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if it does not exist.
    pub async fn get_contact(&self, id: ContactId) -> Result<Contact, ConsoleError> {
        self.store.contacts.get(id).await
    }

    /// Replaces a contact's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] or [`ConsoleError::NotFound`].
    pub async fn update_contact(
        &self,
        id: ContactId,
        draft: ContactDraft,
    ) -> Result<Contact, ConsoleError> {
        draft.validate()?;
        let contact = self
            .store
            .contacts
            .update(id, |c| {
                c.apply(draft);
                Ok(())
            })
            .await?;
        tracing::info!(contact_id = %id, "contact updated");
        Ok(contact)
    }

    /// Deletes a contact no event refers to.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Conflict`] while an event lists the contact,
    /// or [`ConsoleError::NotFound`].
    pub async fn delete_contact(&self, id: ContactId) -> Result<(), ConsoleError> {
        if self.store.events.any(|e| e.contact_id == id).await {
            return Err(ConsoleError::Conflict(format!(
                "contact {id} is assigned to an event"
            )));
        }
        self.store.contacts.remove(id).await?;
        tracing::info!(contact_id = %id, "contact deleted");
        Ok(())
    }

    // ── Companies ───────────────────────────────────────────────────────

    /// Registers a company and generates its code.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] if the draft is invalid.
    pub async fn create_company(&self, draft: CompanyDraft) -> Result<Company, ConsoleError> {
        draft.validate()?;
        let company = self
            .store
            .companies
            .create(|id| Company::new(id, draft))
            .await;
        tracing::info!(company_id = %company.id, code = %company.code, "company created");
        Ok(company)
    }

    /// Returns all companies in id order.
    pub async fn list_companies(&self) -> Vec<Company> {
        self.store.companies.list().await
    }

    /// Fetches one company.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if it does not exist.
    pub async fn get_company(&self, id: CompanyId) -> Result<Company, ConsoleError> {
        self.store.companies.get(id).await
    }

    /// Replaces a company's editable fields, keeping its code.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] or [`ConsoleError::NotFound`].
    pub async fn update_company(
        &self,
        id: CompanyId,
        draft: CompanyDraft,
    ) -> Result<Company, ConsoleError> {
        draft.validate()?;
        let company = self
            .store
            .companies
            .update(id, |c| {
                c.apply(draft);
                Ok(())
            })
            .await?;
        tracing::info!(company_id = %id, "company updated");
        Ok(company)
    }

    /// Deletes a company that has no products and no registrations.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Conflict`] while dependent records exist,
    /// or [`ConsoleError::NotFound`].
    pub async fn delete_company(&self, id: CompanyId) -> Result<(), ConsoleError> {
        if self.store.products.any(|p| p.company_id == id).await {
            return Err(ConsoleError::Conflict(format!(
                "company {id} still has products"
            )));
        }
        if self.store.attendance.any(|a| a.company_id == id).await {
            return Err(ConsoleError::Conflict(format!(
                "company {id} is registered to an event"
            )));
        }
        self.store.companies.remove(id).await?;
        tracing::info!(company_id = %id, "company deleted");
        Ok(())
    }

    // ── Products ────────────────────────────────────────────────────────

    /// Adds a product to a company's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] for an invalid draft or
    /// [`ConsoleError::NotFound`] if the company does not exist.
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ConsoleError> {
        draft.validate()?;
        self.ensure_company(draft.company_id).await?;
        let product = self
            .store
            .products
            .create(|id| Product::new(id, draft))
            .await;
        tracing::info!(
            product_id = %product.id,
            company_id = %product.company_id,
            "product created"
        );
        Ok(product)
    }

    /// Returns all products in id order.
    pub async fn list_products(&self) -> Vec<Product> {
        self.store.products.list().await
    }

    /// Returns the catalog of one company.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if the company does not exist.
    pub async fn products_of(&self, company: CompanyId) -> Result<Vec<Product>, ConsoleError> {
        self.ensure_company(company).await?;
        Ok(self
            .store
            .products
            .filter(|p| p.company_id == company)
            .await)
    }

    /// Fetches one product.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if it does not exist.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ConsoleError> {
        self.store.products.get(id).await
    }

    /// Replaces a product's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] or [`ConsoleError::NotFound`]
    /// for the product or its new company.
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ConsoleError> {
        draft.validate()?;
        self.ensure_company(draft.company_id).await?;
        let product = self
            .store
            .products
            .update(id, |p| {
                p.apply(draft);
                Ok(())
            })
            .await?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if it does not exist.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ConsoleError> {
        self.store.products.remove(id).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    async fn ensure_company(&self, id: CompanyId) -> Result<(), ConsoleError> {
        if self.store.companies.contains(id).await {
            Ok(())
        } else {
            Err(ConsoleError::not_found(Company::COLLECTION, id.get()))
        }
    }
}
