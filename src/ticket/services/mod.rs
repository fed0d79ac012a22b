//! Application services for ticket intake and lifecycle orchestration.

mod error;
mod events;
mod intake;
mod lifecycle;

pub use error::{TicketServiceError, TicketServiceResult};
pub use intake::{IntakeService, SubmitComplaintRequest};
pub use lifecycle::{TicketLifecycleService, TransitionTicketRequest};
