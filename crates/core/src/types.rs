/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Concert start times are stored without a zone, as the venue's local time.
pub type LocalDateTime = chrono::NaiveDateTime;
