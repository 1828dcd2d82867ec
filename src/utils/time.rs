use chrono::{DateTime, Duration, FixedOffset, Local, Utc};

use crate::consts::auth_const::INVITATION_VALID_DAYS;

pub fn time_now() -> String {
    to_rfc3339(Local::now())
}

pub fn time_now_plus_seven_days() -> String {
    to_rfc3339(Local::now() + Duration::days(INVITATION_VALID_DAYS))
}

/// Unparseable timestamps count as already past.
pub fn is_past(timestamp: &str) -> bool {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc) < Utc::now())
        .unwrap_or(true)
}

fn to_rfc3339(t: DateTime<Local>) -> String {
    let t: DateTime<FixedOffset> = t.with_timezone(t.offset());
    t.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_not_past_and_expiry_is_ahead() {
        assert!(!is_past(&time_now_plus_seven_days()));
    }

    #[test]
    fn old_timestamps_are_past() {
        let eight_days_ago = to_rfc3339(Local::now() - Duration::days(8));
        assert!(is_past(&eight_days_ago));
    }

    #[test]
    fn garbage_counts_as_past() {
        assert!(is_past("not a timestamp"));
        assert!(is_past(""));
    }
}
