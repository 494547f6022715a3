//! Event service: events and attendance registrations.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    Attendance, AttendanceId, AttendanceStatus, Company, CompanyId, ConsoleStore, Contact,
    ContactId, Event, EventDraft, EventId, Record,
};
use crate::error::ConsoleError;

/// Orchestration for events and who attends them.
///
/// Date-dependent rules take `today` from the caller so that handlers use
/// the wall clock and tests stay deterministic.
#[derive(Debug, Clone)]
pub struct EventService {
    store: Arc<ConsoleStore>,
}

impl EventService {
    /// Creates a new `EventService`.
    #[must_use]
    pub fn new(store: Arc<ConsoleStore>) -> Self {
        Self { store }
    }

    /// Creates an event.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] for invalid timing or
    /// [`ConsoleError::NotFound`] if the contact does not exist.
    pub async fn create_event(&self, draft: EventDraft) -> Result<Event, ConsoleError> {
        draft.validate()?;
        self.ensure_contact(draft.contact_id).await?;
        let event = self.store.events.create(|id| Event::new(id, draft)).await;
        tracing::info!(
            event_id = %event.id,
            date = %event.event_date,
            tables = event.table_capacity,
            "event created"
        );
        Ok(event)
    }

    /// Returns all events in id order.
    pub async fn list_events(&self) -> Vec<Event> {
        self.store.events.list().await
    }

    /// Fetches one event.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if it does not exist.
    pub async fn get_event(&self, id: EventId) -> Result<Event, ConsoleError> {
        self.store.events.get(id).await
    }

    /// Replaces an event's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidRequest`] or [`ConsoleError::NotFound`]
    /// for the event or its contact.
    pub async fn update_event(&self, id: EventId, draft: EventDraft) -> Result<Event, ConsoleError> {
        draft.validate()?;
        self.ensure_contact(draft.contact_id).await?;
        let event = self
            .store
            .events
            .update(id, |e| {
                e.apply(draft);
                Ok(())
            })
            .await?;
        tracing::info!(event_id = %id, "event updated");
        Ok(event)
    }

    /// Deletes an event nobody is registered to.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Conflict`] while registrations exist, or
    /// [`ConsoleError::NotFound`].
    pub async fn delete_event(&self, id: EventId) -> Result<(), ConsoleError> {
        if self.store.attendance.any(|a| a.event_id == id).await {
            return Err(ConsoleError::Conflict(format!(
                "event {id} has attendance registrations"
            )));
        }
        self.store.events.remove(id).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }

    // ── Attendance ──────────────────────────────────────────────────────

    /// Registers a company to an event as [`AttendanceStatus::Pending`].
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::NotFound`] for an unknown event or company.
    /// - [`ConsoleError::RuleViolation`] once the event day has passed.
    /// - [`ConsoleError::Conflict`] if the company already holds an active
    ///   registration for the event.
    pub async fn register_attendance(
        &self,
        event_id: EventId,
        company_id: CompanyId,
        today: NaiveDate,
    ) -> Result<Attendance, ConsoleError> {
        let event = self.store.events.get(event_id).await?;
        if !self.store.companies.contains(company_id).await {
            return Err(ConsoleError::not_found(
                Company::COLLECTION,
                company_id.get(),
            ));
        }
        if !event.accepts_registrations(today) {
            return Err(ConsoleError::RuleViolation(format!(
                "event {event_id} took place on {}; registrations are closed",
                event.event_date
            )));
        }
        let attendance = self
            .store
            .attendance
            .create_unless(
                |a| a.event_id == event_id && a.company_id == company_id && a.is_active(),
                |id| Attendance::pending(id, event_id, company_id, today),
            )
            .await
            .map_err(|_| {
                ConsoleError::Conflict(format!(
                    "company {company_id} is already registered to event {event_id}"
                ))
            })?;
        tracing::info!(
            attendance_id = %attendance.id,
            %event_id,
            %company_id,
            "attendance registered"
        );
        Ok(attendance)
    }

    /// Registrations for one event, in id order.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if the event does not exist.
    pub async fn attendance_for(
        &self,
        event_id: EventId,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<Attendance>, ConsoleError> {
        self.store.events.get(event_id).await?;
        Ok(self
            .store
            .attendance
            .filter(|a| a.event_id == event_id && status.is_none_or(|s| a.status == s))
            .await)
    }

    /// Moves a registration to `status`.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::NotFound`] for an unknown registration.
    /// - [`ConsoleError::RuleViolation`] when cancelling on or after the
    ///   event day, or reviving a registration for a past event.
    /// - [`ConsoleError::Conflict`] when reviving a cancelled registration
    ///   while the company already holds another active one for the event.
    pub async fn set_attendance_status(
        &self,
        id: AttendanceId,
        status: AttendanceStatus,
        today: NaiveDate,
    ) -> Result<Attendance, ConsoleError> {
        let current = self.store.attendance.get(id).await?;
        let event = self.store.events.get(current.event_id).await?;

        match status {
            AttendanceStatus::Cancelled if !event.allows_cancellation(today) => {
                return Err(ConsoleError::RuleViolation(format!(
                    "attendance can only be cancelled until the day before {}",
                    event.event_date
                )));
            }
            AttendanceStatus::Confirmed | AttendanceStatus::Pending
                if !event.accepts_registrations(today) =>
            {
                return Err(ConsoleError::RuleViolation(format!(
                    "event {} already took place",
                    event.id
                )));
            }
            _ => {}
        }

        let updated = self
            .store
            .attendance
            .update_unless(
                id,
                |updated, other| updated.is_active() && holds_same_seat(updated, other),
                |a| {
                    a.status = status;
                    Ok(())
                },
            )
            .await
            .map_err(|e| match e {
                ConsoleError::Conflict(_) => ConsoleError::Conflict(format!(
                    "company {} already holds an active registration to event {}",
                    current.company_id, current.event_id
                )),
                other => other,
            })?;
        tracing::info!(attendance_id = %id, ?status, "attendance status changed");
        Ok(updated)
    }

    /// Companies a registration may request a meeting with: every company
    /// with a confirmed registration to the same event, other than the
    /// requester's own registration.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] for an unknown registration.
    pub async fn available_companies(
        &self,
        attendance_id: AttendanceId,
    ) -> Result<Vec<Company>, ConsoleError> {
        let requester = self.store.attendance.get(attendance_id).await?;
        let confirmed: Vec<CompanyId> = self
            .store
            .attendance
            .filter(|a| {
                a.event_id == requester.event_id && a.id != attendance_id && a.is_confirmed()
            })
            .await
            .into_iter()
            .map(|a| a.company_id)
            .collect();
        Ok(self
            .store
            .companies
            .filter(|c| confirmed.contains(&c.id))
            .await)
    }

    async fn ensure_contact(&self, id: ContactId) -> Result<(), ConsoleError> {
        if self.store.contacts.contains(id).await {
            Ok(())
        } else {
            Err(ConsoleError::not_found(Contact::COLLECTION, id.get()))
        }
    }
}

/// `true` if `other` is an active registration of the same company to the
/// same event.
fn holds_same_seat(registration: &Attendance, other: &Attendance) -> bool {
    other.is_active()
        && other.event_id == registration.event_id
        && other.company_id == registration.company_id
}
