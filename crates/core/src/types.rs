/// All database primary keys are PostgreSQL BIGINT.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Release dates carry no time component.
pub type ReleaseDate = chrono::NaiveDate;
