//! Time Provider Trait and Implementations
//!
//! Provides time abstraction for deterministic testing and production use.
//! Submission timestamps must be reproducible in tests, so the clock is
//! injected rather than read from the system directly.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Trait for providing time functionality
pub trait TimeProvider: Send + Sync {
    /// Get the current UTC time
    fn now_utc(&self) -> DateTime<Utc>;

    /// Get current time in a specific timezone
    fn now_in_timezone(&self, timezone: Tz) -> DateTime<Tz> {
        self.now_utc().with_timezone(&timezone)
    }
}

/// System time provider for production use
#[derive(Debug, Clone, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    /// Create a new system time provider
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mock time provider for testing
#[derive(Debug, Clone)]
pub struct MockTimeProvider {
    /// Current mock time
    current_time: Arc<std::sync::Mutex<DateTime<Utc>>>,
}

impl MockTimeProvider {
    /// Create a new mock time provider starting from the given time
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            current_time: Arc::new(std::sync::Mutex::new(start_time)),
        }
    }

    /// Set the current mock time
    pub fn set_time(&self, new_time: DateTime<Utc>) {
        if let Ok(mut time) = self.current_time.lock() {
            *time = new_time;
        }
    }

    /// Advance the mock time by the specified duration
    pub fn advance(&self, duration: chrono::Duration) {
        if let Ok(mut time) = self.current_time.lock() {
            *time += duration;
        }
    }

    /// Get the current mock time
    pub fn current_time(&self) -> DateTime<Utc> {
        if let Ok(time) = self.current_time.lock() {
            *time
        } else {
            Utc::now() // Fallback to system time if lock fails
        }
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        self.current_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_system_time_provider() {
        let provider = SystemTimeProvider::new();
        let now = provider.now_utc();

        // System time should be reasonable (within last minute)
        let system_now = Utc::now();
        assert!((system_now - now).num_seconds().abs() < 60);
    }

    #[test]
    fn test_mock_time_provider() {
        let start_time = Utc.with_ymd_and_hms(2025, 1, 7, 10, 30, 0).single().unwrap();
        let provider = MockTimeProvider::new(start_time);

        assert_eq!(provider.now_utc(), start_time);

        provider.advance(chrono::Duration::seconds(90));
        assert_eq!(provider.now_utc(), start_time + chrono::Duration::seconds(90));

        let new_time = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).single().unwrap();
        provider.set_time(new_time);
        assert_eq!(provider.now_utc(), new_time);
    }

    #[test]
    fn test_timezone_conversion() {
        let start_time = Utc.with_ymd_and_hms(2025, 1, 7, 15, 0, 0).single().unwrap();
        let provider = MockTimeProvider::new(start_time);

        let ny_time = provider.now_in_timezone(chrono_tz::America::New_York);
        assert_eq!(ny_time.with_timezone(&Utc), start_time);
    }
}
