use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Deserialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ExpirationChoice {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "24h")]
    TwentyFourHours,
}

// unrecognized choices fall back to one hour rather than failing the request
impl From<String> for ExpirationChoice {
    fn from(value: String) -> ExpirationChoice {
        match value.as_str() {
            "12h" => ExpirationChoice::TwelveHours,
            "24h" => ExpirationChoice::TwentyFourHours,
            _ => ExpirationChoice::OneHour,
        }
    }
}

impl ExpirationChoice {
    pub fn duration(self) -> Duration {
        match self {
            ExpirationChoice::OneHour => Duration::hours(1),
            ExpirationChoice::TwelveHours => Duration::hours(12),
            ExpirationChoice::TwentyFourHours => Duration::hours(24),
        }
    }
}

// a poll at exactly its deadline has not yet expired
pub fn is_expired(deadline: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > deadline
}

pub fn remaining_label(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if is_expired(deadline, now) {
        return String::from("Expired");
    }

    let remaining = deadline - now;
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m remaining")
    }
    else {
        format!("{minutes}m remaining")
    }
}
