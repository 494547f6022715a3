//! Meeting service: meeting requests, deals, and schedule generation.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    AttendanceId, Company, CompanyId, ConsoleStore, Deal, DealDraft, EventId, MeetingId,
    MeetingRequest, MeetingStatus,
};
use crate::error::ConsoleError;
use crate::scheduler::{self, Participant, Schedule};

/// A schedule produced for one event, kept until the next generation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GeneratedSchedule {
    /// Identifier of this generation run.
    pub schedule_id: Uuid,
    /// Event the schedule belongs to.
    pub event_id: EventId,
    /// When it was generated.
    pub generated_at: DateTime<Utc>,
    /// Companies that were confirmed at generation time.
    pub participants: Vec<Participant>,
    /// The meetings.
    pub schedule: Schedule,
}

/// Orchestration for what happens between registered companies.
#[derive(Debug)]
pub struct MeetingService {
    store: Arc<ConsoleStore>,
    schedules: RwLock<HashMap<EventId, GeneratedSchedule>>,
}

impl MeetingService {
    /// Creates a new `MeetingService` with no generated schedules.
    #[must_use]
    pub fn new(store: Arc<ConsoleStore>) -> Self {
        Self {
            store,
            schedules: RwLock::new(HashMap::new()),
        }
    }

    // ── Meeting requests ────────────────────────────────────────────────

    /// Records a meeting request from the company behind `attendance_id`
    /// to `requested_company_id`.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::NotFound`] for an unknown registration.
    /// - [`ConsoleError::RuleViolation`] if the requester's registration is
    ///   cancelled, the requested company is the requester itself, or it is
    ///   not confirmed for the same event.
    pub async fn request_meeting(
        &self,
        attendance_id: AttendanceId,
        requested_company_id: CompanyId,
        today: NaiveDate,
    ) -> Result<MeetingRequest, ConsoleError> {
        let requester = self.store.attendance.get(attendance_id).await?;
        if !requester.is_active() {
            return Err(ConsoleError::RuleViolation(format!(
                "attendance {attendance_id} was cancelled"
            )));
        }
        if requester.company_id == requested_company_id {
            return Err(ConsoleError::RuleViolation(
                "a company cannot request a meeting with itself".to_string(),
            ));
        }
        let confirmed = self
            .store
            .attendance
            .any(|a| {
                a.event_id == requester.event_id
                    && a.company_id == requested_company_id
                    && a.is_confirmed()
            })
            .await;
        if !confirmed {
            return Err(ConsoleError::RuleViolation(format!(
                "company {requested_company_id} is not confirmed for event {}",
                requester.event_id
            )));
        }

        let meeting = self
            .store
            .meetings
            .create(|id| MeetingRequest::scheduled(id, attendance_id, requested_company_id, today))
            .await;
        tracing::info!(
            meeting_id = %meeting.id,
            %attendance_id,
            %requested_company_id,
            "meeting requested"
        );
        Ok(meeting)
    }

    /// Meeting requests in id order, optionally limited to one registration.
    pub async fn list_meetings(&self, attendance: Option<AttendanceId>) -> Vec<MeetingRequest> {
        match attendance {
            Some(id) => self.store.meetings.filter(|m| m.attendance_id == id).await,
            None => self.store.meetings.list().await,
        }
    }

    /// Fetches one meeting request.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if it does not exist.
    pub async fn get_meeting(&self, id: MeetingId) -> Result<MeetingRequest, ConsoleError> {
        self.store.meetings.get(id).await
    }

    /// Moves a meeting request to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Conflict`] when reopening a concluded meeting
    /// that already has deals, or [`ConsoleError::NotFound`].
    pub async fn set_meeting_status(
        &self,
        id: MeetingId,
        status: MeetingStatus,
    ) -> Result<MeetingRequest, ConsoleError> {
        if status != MeetingStatus::Concluded && self.store.deals.any(|d| d.meeting_id == id).await
        {
            return Err(ConsoleError::Conflict(format!(
                "meeting {id} has recorded deals"
            )));
        }
        let meeting = self
            .store
            .meetings
            .update(id, |m| {
                m.status = status;
                Ok(())
            })
            .await?;
        tracing::info!(meeting_id = %id, ?status, "meeting status changed");
        Ok(meeting)
    }

    /// Concluded meetings, the ones deals can be recorded against.
    pub async fn negotiable_meetings(&self) -> Vec<MeetingRequest> {
        self.store
            .meetings
            .filter(|m| m.status == MeetingStatus::Concluded)
            .await
    }

    // ── Deals ───────────────────────────────────────────────────────────

    /// Records a deal dated `today`.
    ///
    /// # Errors
    ///
    /// - [`ConsoleError::InvalidRequest`] for an invalid draft.
    /// - [`ConsoleError::NotFound`] for an unknown meeting.
    /// - [`ConsoleError::RuleViolation`] if the meeting is not concluded.
    pub async fn record_deal(&self, draft: DealDraft, today: NaiveDate) -> Result<Deal, ConsoleError> {
        draft.validate()?;
        let meeting = self.store.meetings.get(draft.meeting_id).await?;
        if meeting.status != MeetingStatus::Concluded {
            return Err(ConsoleError::RuleViolation(format!(
                "meeting {} is not concluded",
                meeting.id
            )));
        }
        let deal = self
            .store
            .deals
            .create(|id| Deal::new(id, draft, today))
            .await;
        tracing::info!(
            deal_id = %deal.id,
            meeting_id = %deal.meeting_id,
            total = deal.total(),
            "deal recorded"
        );
        Ok(deal)
    }

    /// All deals in id order.
    pub async fn list_deals(&self) -> Vec<Deal> {
        self.store.deals.list().await
    }

    /// Deals that came out of one meeting.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if the meeting does not exist.
    pub async fn deals_for_meeting(&self, meeting: MeetingId) -> Result<Vec<Deal>, ConsoleError> {
        self.store.meetings.get(meeting).await?;
        Ok(self.store.deals.filter(|d| d.meeting_id == meeting).await)
    }

    // ── Schedules ───────────────────────────────────────────────────────

    /// Confirmed companies of an event in registration order, as the
    /// scheduler sees them.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if the event does not exist.
    pub async fn confirmed_participants(
        &self,
        event_id: EventId,
    ) -> Result<Vec<Participant>, ConsoleError> {
        self.store.events.get(event_id).await?;
        let confirmed = self
            .store
            .attendance
            .filter(|a| a.event_id == event_id && a.is_confirmed())
            .await;

        let mut participants = Vec::with_capacity(confirmed.len());
        for attendance in confirmed {
            match self.store.companies.get(attendance.company_id).await {
                Ok(company) => participants.push(participant(company)),
                Err(_) => tracing::warn!(
                    attendance_id = %attendance.id,
                    company_id = %attendance.company_id,
                    "confirmed attendance refers to a missing company"
                ),
            }
        }
        Ok(participants)
    }

    /// Runs the scheduler for an event and stores the result, replacing
    /// any schedule generated earlier.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::NotFound`] if the event does not exist.
    pub async fn generate_schedule(
        &self,
        event_id: EventId,
    ) -> Result<GeneratedSchedule, ConsoleError> {
        let event = self.store.events.get(event_id).await?;
        let participants = self.confirmed_participants(event_id).await?;
        let schedule = scheduler::generate(&event.slot_window(), &participants);

        let generated = GeneratedSchedule {
            schedule_id: Uuid::new_v4(),
            event_id,
            generated_at: Utc::now(),
            participants,
            schedule,
        };
        tracing::info!(
            %event_id,
            schedule_id = %generated.schedule_id,
            participants = generated.participants.len(),
            meetings = generated.schedule.len(),
            "schedule generated"
        );
        self.schedules
            .write()
            .await
            .insert(event_id, generated.clone());
        Ok(generated)
    }

    /// The latest schedule generated for an event.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ScheduleNotGenerated`] if none exists yet.
    pub async fn latest_schedule(
        &self,
        event_id: EventId,
    ) -> Result<GeneratedSchedule, ConsoleError> {
        self.schedules
            .read()
            .await
            .get(&event_id)
            .cloned()
            .ok_or(ConsoleError::ScheduleNotGenerated(event_id.get()))
    }

    /// Drops the stored schedule of a deleted event.
    pub async fn discard_schedule(&self, event_id: EventId) {
        if self.schedules.write().await.remove(&event_id).is_some() {
            tracing::debug!(%event_id, "schedule discarded");
        }
    }
}

fn participant(company: Company) -> Participant {
    Participant {
        company_id: company.id,
        display_name: company.name,
        logo_ref: company.logo_url,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AttendanceStatus;
    use crate::service::event_service::tests::{before_event, fixture};
    use crate::service::EventService;

    /// Registers companies `1..=count` and confirms those in `confirm`.
    async fn registered(
        events: &EventService,
        event_id: EventId,
        count: u32,
        confirm: &[u32],
    ) -> Vec<AttendanceId> {
        let mut ids = Vec::new();
        for company in 1..=count {
            let Ok(reg) = events
                .register_attendance(event_id, CompanyId::new(company), before_event())
                .await
            else {
                panic!("registration failed");
            };
            if confirm.contains(&company) {
                let _ = events
                    .set_attendance_status(reg.id, AttendanceStatus::Confirmed, before_event())
                    .await;
            }
            ids.push(reg.id);
        }
        ids
    }

    #[tokio::test]
    async fn meeting_requires_confirmed_peer() {
        let (store, events, event) = fixture(3).await;
        let regs = registered(&events, event.id, 3, &[1, 2]).await;
        let service = MeetingService::new(store);
        let Some(&requester) = regs.first() else {
            panic!("no registrations");
        };

        let ok = service
            .request_meeting(requester, CompanyId::new(2), before_event())
            .await;
        assert!(matches!(ok, Ok(ref m) if m.status == MeetingStatus::Scheduled));

        let pending_peer = service
            .request_meeting(requester, CompanyId::new(3), before_event())
            .await;
        assert!(matches!(pending_peer, Err(ConsoleError::RuleViolation(_))));

        let itself = service
            .request_meeting(requester, CompanyId::new(1), before_event())
            .await;
        assert!(matches!(itself, Err(ConsoleError::RuleViolation(_))));
    }

    #[tokio::test]
    async fn deals_only_on_concluded_meetings() {
        let (store, events, event) = fixture(2).await;
        let regs = registered(&events, event.id, 2, &[1, 2]).await;
        let service = MeetingService::new(store);
        let Some(&requester) = regs.first() else {
            panic!("no registrations");
        };
        let Ok(meeting) = service
            .request_meeting(requester, CompanyId::new(2), before_event())
            .await
        else {
            panic!("request failed");
        };
        let draft = DealDraft {
            meeting_id: meeting.id,
            description: "Lote de quinua".to_string(),
            quantity: 10,
            unit_price: 500,
        };

        let early = service.record_deal(draft.clone(), before_event()).await;
        assert!(matches!(early, Err(ConsoleError::RuleViolation(_))));
        assert!(service.negotiable_meetings().await.is_empty());

        let _ = service
            .set_meeting_status(meeting.id, MeetingStatus::Concluded)
            .await;
        assert_eq!(service.negotiable_meetings().await.len(), 1);
        let Ok(deal) = service.record_deal(draft, before_event()).await else {
            panic!("deal rejected");
        };
        assert_eq!(deal.total(), 5_000);

        let Ok(deals) = service.deals_for_meeting(meeting.id).await else {
            panic!("listing failed");
        };
        assert_eq!(deals.len(), 1);

        let reopen = service
            .set_meeting_status(meeting.id, MeetingStatus::Scheduled)
            .await;
        assert!(matches!(reopen, Err(ConsoleError::Conflict(_))));
    }

    #[tokio::test]
    async fn schedule_uses_confirmed_companies_only() {
        let (store, events, event) = fixture(5).await;
        let _ = registered(&events, event.id, 5, &[1, 2, 4, 5]).await;
        let service = MeetingService::new(store);

        let missing = service.latest_schedule(event.id).await;
        assert!(matches!(missing, Err(ConsoleError::ScheduleNotGenerated(_))));

        let Ok(generated) = service.generate_schedule(event.id).await else {
            panic!("generation failed");
        };
        let roster: Vec<u32> = generated
            .participants
            .iter()
            .map(|p| p.company_id.get())
            .collect();
        assert_eq!(roster, vec![1, 2, 4, 5]);
        assert_eq!(generated.schedule.len(), 6);
        assert!(!generated
            .schedule
            .meetings()
            .iter()
            .any(|m| m.involves(CompanyId::new(3))));
    }

    #[tokio::test]
    async fn regeneration_replaces_previous_schedule() {
        let (store, events, event) = fixture(3).await;
        let _ = registered(&events, event.id, 3, &[1, 2, 3]).await;
        let service = MeetingService::new(store);

        let Ok(first) = service.generate_schedule(event.id).await else {
            panic!("generation failed");
        };
        let Ok(second) = service.generate_schedule(event.id).await else {
            panic!("generation failed");
        };
        assert_ne!(first.schedule_id, second.schedule_id);
        assert_eq!(first.schedule, second.schedule);

        let Ok(latest) = service.latest_schedule(event.id).await else {
            panic!("schedule missing");
        };
        assert_eq!(latest.schedule_id, second.schedule_id);

        service.discard_schedule(event.id).await;
        assert!(service.latest_schedule(event.id).await.is_err());
    }

    #[tokio::test]
    async fn unknown_event_cannot_be_scheduled() {
        let service = MeetingService::new(Arc::new(ConsoleStore::new()));
        let result = service.generate_schedule(EventId::new(42)).await;
        assert!(matches!(result, Err(ConsoleError::NotFound { .. })));
    }
}
