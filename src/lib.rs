//! # rueda-console
//!
//! Back-office REST API for business-matchmaking events ("ruedas de
//! negocios").
//!
//! Staff register events, contacts, companies and their products, track
//! which companies attend each event, record meeting requests and the deals
//! that come out of them, and generate the one-on-one meeting schedule for
//! an event's confirmed companies.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── CatalogService / EventService / MeetingService (service/)
//!     │
//!     ├── Scheduler (scheduler/)
//!     │
//!     └── ConsoleStore: one Repository per collection (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod scheduler;
pub mod server;
pub mod service;
