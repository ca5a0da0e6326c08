use std::time::Duration;

/// Anything that can be read as a gating interval in milliseconds.
///
/// Non-positive results disable gating. Unsigned and `Duration` values larger
/// than `i64::MAX` milliseconds saturate.
pub trait IntervalMillis {
    fn as_interval_millis(&self) -> i64;
}

impl IntervalMillis for i64 {
    fn as_interval_millis(&self) -> i64 {
        *self
    }
}

impl IntervalMillis for i32 {
    fn as_interval_millis(&self) -> i64 {
        i64::from(*self)
    }
}

impl IntervalMillis for u32 {
    fn as_interval_millis(&self) -> i64 {
        i64::from(*self)
    }
}

impl IntervalMillis for u64 {
    fn as_interval_millis(&self) -> i64 {
        i64::try_from(*self).unwrap_or(i64::MAX)
    }
}

impl IntervalMillis for Duration {
    fn as_interval_millis(&self) -> i64 {
        i64::try_from(self.as_millis()).unwrap_or(i64::MAX)
    }
}

impl<T: IntervalMillis + ?Sized> IntervalMillis for &T {
    fn as_interval_millis(&self) -> i64 {
        (**self).as_interval_millis()
    }
}
