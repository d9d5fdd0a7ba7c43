/// Primary keys are `BIGSERIAL` throughout the store.
pub type DbId = i64;

/// Timestamps are stored and served in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts are exact decimals (`NUMERIC(10,2)` in the store).
pub type Money = rust_decimal::Decimal;
