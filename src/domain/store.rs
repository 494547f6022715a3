//! The console's full set of collections.

use super::{
    Attendance, Company, Contact, Deal, Event, MeetingRequest, Product, Repository,
};

/// One [`Repository`] per record type.
///
/// Shared behind an `Arc` by all services.
#[derive(Debug, Default)]
pub struct ConsoleStore {
    /// Events.
    pub events: Repository<Event>,
    /// Contact persons.
    pub contacts: Repository<Contact>,
    /// Companies.
    pub companies: Repository<Company>,
    /// Product catalogs.
    pub products: Repository<Product>,
    /// Attendance registrations.
    pub attendance: Repository<Attendance>,
    /// Meeting requests.
    pub meetings: Repository<MeetingRequest>,
    /// Negotiated deals.
    pub deals: Repository<Deal>,
}

impl ConsoleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
