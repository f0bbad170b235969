use chrono::Utc;

/// Layout stored in the `date_created` column.
pub const DB_DATE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_db_format() -> String {
    Utc::now().format(DB_DATE_LAYOUT).to_string()
}
