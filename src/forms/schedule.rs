//! Schedule form
//!
//! Times are local wall-clock times; `now` is passed in by the caller.

use chrono::{NaiveDateTime, TimeDelta, Timelike};

use super::FormError;
use crate::api::ScheduleRequest;
use crate::model::{Post, TargetChannel, preferred_channel};

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    pub post_id: i64,
    pub target_channel_id: Option<i64>,
    /// Raw user input
    pub scheduled_at: String,
}

impl ScheduleForm {
    pub fn new(post: &Post, channels: &[TargetChannel]) -> Self {
        Self {
            post_id: post.id,
            target_channel_id: preferred_channel(channels, post.target_channel_id),
            scheduled_at: String::new(),
        }
    }

    /// Prefill the input with `now` plus one hour, rounded down to the minute
    pub fn suggest_time(&mut self, now: NaiveDateTime) {
        let suggestion = truncate_to_minute(now) + TimeDelta::hours(1);
        self.scheduled_at = suggestion.format(DISPLAY_FORMAT).to_string();
    }

    pub fn submit(&self, now: NaiveDateTime) -> Result<ScheduleRequest, FormError> {
        let target_channel_id = self.target_channel_id.ok_or(FormError::NoChannel)?;

        let input = self.scheduled_at.trim();
        if input.is_empty() {
            return Err(FormError::NoScheduleTime);
        }
        let at = parse_schedule_time(input)?;

        let earliest = truncate_to_minute(now) + TimeDelta::minutes(1);
        if at < earliest {
            return Err(FormError::ScheduleTooSoon);
        }

        Ok(ScheduleRequest {
            target_channel_id,
            scheduled_at: at.format(WIRE_FORMAT).to_string(),
            admin_notes: None,
            processed_text: None,
        })
    }
}

/// Parse `YYYY-MM-DD HH:MM` or `YYYY-MM-DDTHH:MM`
pub fn parse_schedule_time(input: &str) -> Result<NaiveDateTime, FormError> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| FormError::InvalidScheduleTime(input.to_string()))
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{channel, sample_post};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 30)
            .unwrap()
    }

    fn form(input: &str) -> ScheduleForm {
        let mut form = ScheduleForm::new(&sample_post(1), &[channel(3, "main")]);
        form.scheduled_at = input.to_string();
        form
    }

    #[test]
    fn test_valid_schedule() {
        let request = form("2024-05-01 12:30").submit(now()).unwrap();
        assert_eq!(request.target_channel_id, 3);
        assert_eq!(request.scheduled_at, "2024-05-01T12:30:00");
    }

    #[test]
    fn test_accepts_iso_t_separator() {
        let request = form("2024-05-02T08:05").submit(now()).unwrap();
        assert_eq!(request.scheduled_at, "2024-05-02T08:05:00");
    }

    #[test]
    fn test_missing_channel_checked_first() {
        let mut f = ScheduleForm::new(&sample_post(1), &[]);
        f.scheduled_at = String::new();
        assert_eq!(f.submit(now()), Err(FormError::NoChannel));
    }

    #[test]
    fn test_missing_time() {
        assert_eq!(form("  ").submit(now()), Err(FormError::NoScheduleTime));
    }

    #[test]
    fn test_invalid_time() {
        assert_eq!(
            form("tomorrow noon").submit(now()),
            Err(FormError::InvalidScheduleTime("tomorrow noon".to_string()))
        );
        assert!(matches!(
            form("2024-13-01 10:00").submit(now()),
            Err(FormError::InvalidScheduleTime(_))
        ));
    }

    #[test]
    fn test_minimum_lead_time_is_one_minute() {
        // now = 10:00:30, so 10:01 is the earliest accepted minute
        assert_eq!(form("2024-05-01 10:00").submit(now()), Err(FormError::ScheduleTooSoon));
        assert_eq!(form("2024-04-30 23:59").submit(now()), Err(FormError::ScheduleTooSoon));
        assert!(form("2024-05-01 10:01").submit(now()).is_ok());
    }

    #[test]
    fn test_suggest_time() {
        let mut f = form("");
        f.suggest_time(now());
        assert_eq!(f.scheduled_at, "2024-05-01 11:00");
        assert!(f.submit(now()).is_ok());
    }
}
