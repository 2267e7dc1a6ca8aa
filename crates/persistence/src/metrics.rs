//! Database metrics collection.
//!
//! Provides functions for recording database-related metrics.

use metrics::histogram;
use std::time::Instant;

/// Record database query duration.
///
/// Call this function after executing a query to record its duration.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// A helper to time database operations and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("create_person");
/// let result = sqlx::query_as::<_, PersonEntity>(...).fetch_one(&mut *tx).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    /// Create a new timer for the given query name.
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(self.query_name, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_creation() {
        let timer = QueryTimer::new("find_persons");
        assert_eq!(timer.query_name, "find_persons");
    }

    #[test]
    fn test_query_timer_record_without_recorder() {
        // No recorder installed: recording must be a silent no-op.
        QueryTimer::new("delete_phone").record();
    }
}
