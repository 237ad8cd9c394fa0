use mockall::automock;

/// Source of the current local time, used for `created` and `deleted` stamps.
#[automock]
pub trait ClockService {
    fn date_time_now(&self) -> time::PrimitiveDateTime;
}
