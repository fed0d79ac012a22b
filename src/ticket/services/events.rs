//! Best-effort delivery of committed ticket events.

use crate::ticket::ports::{TicketEvent, TicketEventSink};
use std::sync::Arc;
use tracing::warn;

/// Optional sink shared by the ticket services.
pub(super) type EventSink = Option<Arc<dyn TicketEventSink>>;

pub(super) async fn publish(
    sink: Option<&Arc<dyn TicketEventSink>>,
    event: TicketEvent<'_>,
) {
    let Some(events) = sink else {
        return;
    };
    if let Err(err) = events.publish(event).await {
        warn!(
            ticket = %event.ticket().number(),
            error = %err,
            "ticket event not delivered"
        );
    }
}
