use chrono::{DateTime, Utc};

/// Hour and minute of a chat message, e.g. `22:13`.
#[must_use]
pub fn format_message_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::time::fixed_now;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_message_time(fixed_now()), "22:13");
    }
}
