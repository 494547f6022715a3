//! Sample records loaded on boot when `SEED_DEMO_DATA` is enabled.

use chrono::{NaiveDate, NaiveTime};

use super::{
    Attendance, AttendanceId, AttendanceStatus, Company, CompanyDraft, CompanyId, CompanyKind,
    ConsoleStore, Contact, ContactDraft, ContactId, Deal, DealDraft, Event, EventDraft, EventId,
    MeetingId, MeetingRequest, MeetingStatus, Product, ProductDraft,
};
use crate::error::ConsoleError;

fn day(y: i32, m: u32, d: u32) -> Result<NaiveDate, ConsoleError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| ConsoleError::InvalidRequest(format!("invalid seed date {y}-{m}-{d}")))
}

fn at(h: u32, m: u32) -> Result<NaiveTime, ConsoleError> {
    NaiveTime::from_hms_opt(h, m, 0)
        .ok_or_else(|| ConsoleError::InvalidRequest(format!("invalid seed time {h}:{m}")))
}

fn contact(name: &str, email: &str, phone: &str, role: &str) -> ContactDraft {
    ContactDraft {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role: role.to_string(),
    }
}

fn company(
    name: &str,
    sector: &str,
    kind: CompanyKind,
    department: &str,
    address: &str,
    website: &str,
    facebook_url: &str,
) -> CompanyDraft {
    CompanyDraft {
        name: name.to_string(),
        sector: sector.to_string(),
        kind,
        department: department.to_string(),
        address: address.to_string(),
        website: website.to_string(),
        facebook_url: facebook_url.to_string(),
        logo_url: None,
    }
}

fn product(company: u32, name: &str, quantity: u32, unit: &str, delivery_days: u32) -> ProductDraft {
    ProductDraft {
        company_id: CompanyId::new(company),
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        delivery_days,
    }
}

/// Populates an empty store with the demo data set.
///
/// Does nothing if the store already holds events.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidRequest`] if a hard-coded date or time
/// is out of range.
pub async fn seed_demo_data(store: &ConsoleStore) -> Result<(), ConsoleError> {
    if !store.events.is_empty().await {
        tracing::debug!("store already populated, skipping demo data");
        return Ok(());
    }

    for draft in [
        contact(
            "María González",
            "maria.gonzalez@empresa.com",
            "+57 300 123 4567",
            "Coordinadora de Eventos",
        ),
        contact(
            "Carlos Rodríguez",
            "carlos.rodriguez@camara.com",
            "+57 301 234 5678",
            "Director Comercial",
        ),
        contact(
            "Ana Martínez",
            "ana.martinez@fundacion.org",
            "+57 302 345 6789",
            "Gerente de Proyectos",
        ),
    ] {
        store.contacts.create(|id| Contact::new(id, draft)).await;
    }

    let events = [
        EventDraft {
            description: "Rueda de Negocios Tecnológica 2024".to_string(),
            organizer: "Cámara de Comercio".to_string(),
            venue: "Centro de Convenciones Ágora".to_string(),
            department: "La Paz".to_string(),
            address: "Calle 24 #38-47".to_string(),
            website: "https://ccb.org.co".to_string(),
            event_date: day(2024, 3, 15)?,
            start_time: at(8, 0)?,
            end_time: at(17, 0)?,
            currency: "BS".to_string(),
            logo_url: "/camara-comercio-logo.png".to_string(),
            contact_id: ContactId::new(1),
            table_capacity: 50,
            meeting_duration_minutes: 20,
            break_start: at(12, 0)?,
            break_end: at(13, 0)?,
        },
        EventDraft {
            description: "Encuentro Empresarial".to_string(),
            organizer: "Hotel Radisson".to_string(),
            venue: "Hotel Intercontinental".to_string(),
            department: "Cochabamba".to_string(),
            address: "Avenida Colombia #2-72".to_string(),
            website: "https://propacifico.org".to_string(),
            event_date: day(2025, 9, 25)?,
            start_time: at(9, 0)?,
            end_time: at(18, 0)?,
            currency: "BS".to_string(),
            logo_url: "/propacifico-logo.png".to_string(),
            contact_id: ContactId::new(2),
            table_capacity: 50,
            meeting_duration_minutes: 20,
            break_start: at(12, 0)?,
            break_end: at(13, 0)?,
        },
    ];
    for draft in events {
        store.events.create(|id| Event::new(id, draft)).await;
    }

    for draft in [
        company(
            "TechSolutions Colombia",
            "Tecnología",
            CompanyKind::Seller,
            "Cundinamarca",
            "Carrera 15 #93-47, Bogotá",
            "https://techsolutions.co",
            "https://facebook.com/techsolutions",
        ),
        company(
            "Distribuidora del Valle",
            "Distribución",
            CompanyKind::Buyer,
            "Valle del Cauca",
            "Avenida 6N #23-45, Cali",
            "https://distvalle.com",
            "https://facebook.com/distvalle",
        ),
        company(
            "Manufacturas del Norte",
            "Manufactura",
            CompanyKind::Seller,
            "Antioquia",
            "Calle 50 #45-67, Medellín",
            "https://manufnorte.com",
            "",
        ),
    ] {
        store.companies.create(|id| Company::new(id, draft)).await;
    }

    for draft in [
        product(1, "Software de Gestión Empresarial", 50, "licencias", 15),
        product(1, "Aplicación Móvil Personalizada", 10, "proyectos", 45),
        product(2, "Productos Alimentarios", 1000, "unidades", 7),
        product(2, "Equipos de Oficina", 200, "unidades", 10),
        product(3, "Maquinaria Industrial", 5, "equipos", 30),
        product(3, "Repuestos Especializados", 500, "piezas", 20),
    ] {
        store.products.create(|id| Product::new(id, draft)).await;
    }

    for (event, company, status, registered_on) in [
        (1, 1, AttendanceStatus::Confirmed, day(2024, 3, 10)?),
        (1, 2, AttendanceStatus::Pending, day(2024, 3, 12)?),
        (2, 3, AttendanceStatus::Confirmed, day(2024, 4, 15)?),
    ] {
        store
            .attendance
            .create(|id| Attendance {
                status,
                ..Attendance::pending(
                    id,
                    EventId::new(event),
                    CompanyId::new(company),
                    registered_on,
                )
            })
            .await;
    }

    for (attendance, requested, status, requested_on) in [
        (1, 2, MeetingStatus::Concluded, day(2024, 3, 11)?),
        (1, 3, MeetingStatus::Concluded, day(2024, 3, 11)?),
        (2, 1, MeetingStatus::Cancelled, day(2024, 3, 13)?),
    ] {
        store
            .meetings
            .create(|id| MeetingRequest {
                status,
                ..MeetingRequest::scheduled(
                    id,
                    AttendanceId::new(attendance),
                    CompanyId::new(requested),
                    requested_on,
                )
            })
            .await;
    }

    let negotiated_on = day(2024, 3, 11)?;
    for (meeting, description, quantity, unit_price) in [
        (1, "Licencias de Software de Gestión Empresarial", 25, 150_000),
        (1, "Servicio de Implementación y Capacitación", 1, 2_500_000),
        (2, "Maquinaria Industrial Especializada", 2, 45_000_000),
    ] {
        let draft = DealDraft {
            meeting_id: MeetingId::new(meeting),
            description: description.to_string(),
            quantity,
            unit_price,
        };
        store
            .deals
            .create(|id| Deal::new(id, draft, negotiated_on))
            .await;
    }

    tracing::info!(
        events = store.events.len().await,
        companies = store.companies.len().await,
        "demo data loaded"
    );
    Ok(())
}
