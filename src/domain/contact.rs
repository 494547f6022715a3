//! Event contact persons.

use serde::Serialize;
use utoipa::ToSchema;

use super::ContactId;
use super::repository::Record;
use crate::error::ConsoleError;

/// A person who can be listed as the contact for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Contact {
    /// Contact identifier.
    pub id: ContactId,
    /// Full name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number, free form.
    pub phone: String,
    /// Job title or role.
    pub role: String,
}

/// Editable fields of a [`Contact`].
#[derive(Debug, Clone)]
pub struct ContactDraft {
    /// Full name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Job title or role.
    pub role: String,
}

impl ContactDraft {
    /// Checks that a name is present and the e-mail looks like one.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] on the first failing field.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::InvalidRequest(
                "contact name is required".to_string(),
            ));
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(ConsoleError::InvalidRequest(format!(
                "invalid e-mail address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

impl Contact {
    /// Builds a contact from a validated draft.
    #[must_use]
    pub fn new(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            role: draft.role,
        }
    }

    /// Overwrites every editable field.
    pub fn apply(&mut self, draft: ContactDraft) {
        *self = Self::new(self.id, draft);
    }
}

impl Record for Contact {
    type Id = ContactId;
    const COLLECTION: &'static str = "contact";

    fn id(&self) -> ContactId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name_and_bad_email() {
        let mut draft = ContactDraft {
            name: " ".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            role: String::new(),
        };
        assert!(draft.validate().is_err());

        draft.name = "Ana".to_string();
        assert!(draft.validate().is_ok());

        draft.email = "ana.example.com".to_string();
        assert!(draft.validate().is_err());
    }
}
