use chrono::Utc;

/// Creation timestamp for stored records, ISO-8601 with second precision.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
