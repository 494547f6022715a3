//! REST endpoint handlers organized by resource.

pub mod attendance;
pub mod company;
pub mod contact;
pub mod event;
pub mod meeting;
pub mod product;
pub mod schedule;
pub mod system;

use axum::Router;
use chrono::{NaiveDate, Utc};

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(event::routes())
        .merge(schedule::routes())
        .merge(attendance::routes())
        .merge(contact::routes())
        .merge(company::routes())
        .merge(product::routes())
        .merge(meeting::routes())
}

/// Calendar day used by the date rules of registrations and deals.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
