/// Fallback timestamp for records without one: 2024-01-01 00:00:00 UTC (ms)
pub const DEFAULT_TIMESTAMP_MS: i64 = 1_704_067_200_000;
