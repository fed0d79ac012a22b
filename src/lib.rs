//! Grievance: civic complaint intake, triage and tracking.
//!
//! Citizens file complaints as free text. A keyword classifier routes each
//! one to a municipal department with an urgency estimate, the ticket then
//! moves through a fixed lifecycle driven by officers and administrators,
//! submitters are notified of every change, and an aggregator summarises
//! the population for oversight dashboards.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores, etc.)
//! - **Services**: Orchestration of domain rules over ports
//!
//! # Modules
//!
//! - [`classification`]: Keyword-rule department and urgency inference
//! - [`identity`]: Authenticated principals and their roles
//! - [`ticket`]: Ticket intake, numbering, visibility and status lifecycle
//! - [`notification`]: Submitter inboxes fed by ticket events
//! - [`analytics`]: Dashboard statistics over a ticket population
//! - [`http`]: axum binding of the operations under `/api`
//! - [`config`]: TOML configuration with environment overrides
//! - [`telemetry`]: `tracing` subscriber setup

pub mod analytics;
pub mod classification;
pub mod config;
pub mod http;
pub mod identity;
pub mod notification;
pub mod telemetry;
pub mod ticket;
