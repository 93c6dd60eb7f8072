use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};

use crate::placeholder::{PlaceholderContext, PlaceholderProvider};

const TOKENS: &[&str] = &[
    "date_now",
    "date_date",
    "date_time",
    "date_year",
    "date_month",
    "date_day",
    "date_hour",
    "date_minute",
    "date_second",
    "date_weekday",
    "date_timestamp",
    "date_millis",
];

/// Wall-clock source for the date/time provider.
pub type Clock = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

/// Current date and time.
///
/// Every `resolve` call takes its own snapshot of the clock, so two tokens in
/// one template may observe different instants.
pub struct DateTimeProvider {
    clock: Clock,
}

impl DateTimeProvider {
    /// Provider reading the host's local time zone.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(|| Local::now().fixed_offset()))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for DateTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderProvider for DateTimeProvider {
    fn identifier(&self) -> &'static str {
        "date"
    }

    fn resolve(&self, token: &str, _ctx: &PlaceholderContext<'_>) -> Option<String> {
        let field = token.strip_prefix("date_")?;
        let now = (self.clock)();

        let value = match field {
            "now" => now.format("%Y-%m-%d %H:%M:%S").to_string(),
            "date" => now.format("%Y-%m-%d").to_string(),
            "time" => now.format("%H:%M:%S").to_string(),
            "year" => now.year().to_string(),
            "month" => now.month().to_string(),
            "day" => now.day().to_string(),
            "hour" => now.hour().to_string(),
            "minute" => now.minute().to_string(),
            "second" => now.second().to_string(),
            "weekday" => now.format("%A").to_string(),
            "timestamp" => now.timestamp().to_string(),
            "millis" => now.timestamp_millis().to_string(),
            _ => return None,
        };

        Some(value)
    }

    fn supported_tokens(&self) -> &[&'static str] {
        TOKENS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> DateTimeProvider {
        DateTimeProvider::with_clock(Arc::new(|| {
            DateTime::parse_from_rfc3339("2024-03-09T14:05:07+00:00").expect("valid timestamp")
        }))
    }

    #[test]
    fn formats_snapshot_fields() {
        let provider = fixed();
        let ctx = PlaceholderContext::detached();
        assert_eq!(provider.resolve("date_now", &ctx).as_deref(), Some("2024-03-09 14:05:07"));
        assert_eq!(provider.resolve("date_date", &ctx).as_deref(), Some("2024-03-09"));
        assert_eq!(provider.resolve("date_time", &ctx).as_deref(), Some("14:05:07"));
        assert_eq!(provider.resolve("date_month", &ctx).as_deref(), Some("3"));
        assert_eq!(provider.resolve("date_weekday", &ctx).as_deref(), Some("Saturday"));
        assert_eq!(provider.resolve("date_timestamp", &ctx).as_deref(), Some("1709993107"));
    }

    #[test]
    fn unknown_field_is_unresolved() {
        let ctx = PlaceholderContext::detached();
        assert_eq!(fixed().resolve("date_century", &ctx), None);
        assert_eq!(fixed().resolve("player_name", &ctx), None);
    }
}
