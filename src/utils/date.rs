use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Date column of the Markdown log (`MM-DD-YY`).
pub fn format_log_date(d: NaiveDate) -> String {
    d.format("%m-%d-%y").to_string()
}
