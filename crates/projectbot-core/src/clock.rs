//! Source of the reference date for date-sensitive queries.

use time::{Date, OffsetDateTime};

/// Supplies "today" on demand.
pub trait Clock {
    /// Current calendar date.
    fn today(&self) -> Date;
}

/// Wall-clock date in the local offset, or UTC when the offset is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn today(&self) -> Date {
        (*self).today()
    }
}
