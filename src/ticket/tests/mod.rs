//! Unit tests for ticket intake and lifecycle.


use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI32, Ordering};

/// Clock that advances by a fixed step on every reading.
struct StepClock {
    start: DateTime<Utc>,
    step: TimeDelta,
    ticks: AtomicI32,
}

impl StepClock {
    fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            step: TimeDelta::minutes(1),
            ticks: AtomicI32::new(0),
        }
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::starting_at(
            Utc.with_ymd_and_hms(2026, 5, 10, 10, 0, 0)
                .single()
                .expect("valid start timestamp"),
        )
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + self.step * tick
    }
}
