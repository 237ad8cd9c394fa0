use service::clock::ClockService;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Uses the local offset of the host and falls back to UTC when it is unknown.
pub struct ClockServiceImpl;

impl ClockServiceImpl {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

impl ClockService for ClockServiceImpl {
    fn date_time_now(&self) -> PrimitiveDateTime {
        let now = self.now();
        PrimitiveDateTime::new(now.date(), now.time())
    }
}
