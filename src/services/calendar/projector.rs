use chrono::{Datelike, Days, FixedOffset, NaiveDate, TimeZone, Weekday};

use crate::errors::{ClassroomError, Result};
use crate::models::calendar::entities::{CalendarEvent, EventDateTime};
use crate::models::classrooms::entities::{Classroom, TimeSlot};
use crate::utils::validate::parse_hhmm;

/// 星期名称（不区分大小写）到 RRULE 两字母代码
pub fn weekday_code(day: &str) -> Option<(Weekday, &'static str)> {
    match day.trim().to_ascii_lowercase().as_str() {
        "monday" => Some((Weekday::Mon, "MO")),
        "tuesday" => Some((Weekday::Tue, "TU")),
        "wednesday" => Some((Weekday::Wed, "WE")),
        "thursday" => Some((Weekday::Thu, "TH")),
        "friday" => Some((Weekday::Fri, "FR")),
        "saturday" => Some((Weekday::Sat, "SA")),
        "sunday" => Some((Weekday::Sun, "SU")),
        _ => None,
    }
}

/// start 当天或之后第一个落在 weekday 的日期
pub fn first_occurrence(start: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut date = start;
    for _ in 0..7 {
        if date.weekday() == weekday {
            return Some(date);
        }
        date = date.checked_add_days(Days::new(1))?;
    }
    None
}

/// 解析形如 "+05:30" 的固定偏移
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset> {
    value.trim().parse::<FixedOffset>().map_err(|e| {
        ClassroomError::validation(format!("Invalid calendar utc_offset '{value}': {e}"))
    })
}

/// 把一个时间段投影为周期事件；无法投影时返回跳过原因
pub fn project_slot(
    classroom: &Classroom,
    slot: &TimeSlot,
    offset: FixedOffset,
    time_zone: &str,
) -> std::result::Result<CalendarEvent, String> {
    let (weekday, code) =
        weekday_code(&slot.day).ok_or_else(|| format!("unrecognised day '{}'", slot.day))?;

    let start_time = parse_hhmm(&slot.start_time)
        .ok_or_else(|| format!("invalid start time '{}'", slot.start_time))?;
    let end_time = parse_hhmm(&slot.end_time)
        .ok_or_else(|| format!("invalid end time '{}'", slot.end_time))?;

    let date = first_occurrence(classroom.start_date, weekday)
        .ok_or_else(|| "no matching date after start date".to_string())?;
    if date > classroom.end_date {
        return Err("no occurrence before end date".to_string());
    }

    let to_event_time = |time| {
        offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|dt| EventDateTime {
                date_time: dt.to_rfc3339(),
                time_zone: time_zone.to_string(),
            })
            .ok_or_else(|| "ambiguous local time".to_string())
    };

    Ok(CalendarEvent {
        summary: classroom.name.clone(),
        description: classroom.description.clone(),
        start: to_event_time(start_time)?,
        end: to_event_time(end_time)?,
        recurrence: vec![format!(
            "RRULE:FREQ=WEEKLY;BYDAY={code};UNTIL={}T235959Z",
            classroom.end_date.format("%Y%m%d")
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classroom(slots: Vec<TimeSlot>) -> Classroom {
        Classroom {
            id: 1,
            name: "Physics".to_string(),
            description: Some("Mechanics".to_string()),
            image: None,
            code: "ABCDEFGH".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            owner_id: 1,
            time_slots: slots,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn slot(day: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            id: 0,
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            position: 0,
        }
    }

    #[test]
    fn test_weekday_codes() {
        assert_eq!(weekday_code("Monday"), Some((Weekday::Mon, "MO")));
        assert_eq!(weekday_code("wednesday"), Some((Weekday::Wed, "WE")));
        assert_eq!(weekday_code(" SUNDAY "), Some((Weekday::Sun, "SU")));
        assert_eq!(weekday_code("Funday"), None);
        assert_eq!(weekday_code("Mon"), None);
    }

    #[test]
    fn test_first_occurrence() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(first_occurrence(monday, Weekday::Mon), Some(monday));
        assert_eq!(
            first_occurrence(monday, Weekday::Sun),
            NaiveDate::from_ymd_opt(2024, 1, 7)
        );
    }

    #[test]
    fn test_wednesday_projection() {
        let offset = parse_utc_offset("+05:30").unwrap();
        let room = classroom(vec![]);
        let event = project_slot(
            &room,
            &slot("Wednesday", "10:00", "11:00"),
            offset,
            "Asia/Kolkata",
        )
        .unwrap();

        assert_eq!(event.start.date_time, "2024-01-03T10:00:00+05:30");
        assert_eq!(event.end.date_time, "2024-01-03T11:00:00+05:30");
        assert_eq!(event.start.time_zone, "Asia/Kolkata");
        assert_eq!(
            event.recurrence,
            vec!["RRULE:FREQ=WEEKLY;BYDAY=WE;UNTIL=20240301T235959Z".to_string()]
        );
        assert_eq!(event.summary, "Physics");
    }

    #[test]
    fn test_skip_unrecognised_day_and_bad_time() {
        let offset = parse_utc_offset("+00:00").unwrap();
        let room = classroom(vec![]);

        let reason = project_slot(&room, &slot("Someday", "10:00", "11:00"), offset, "UTC")
            .unwrap_err();
        assert!(reason.contains("Someday"));

        assert!(project_slot(&room, &slot("Friday", "9:00", "11:00"), offset, "UTC").is_err());
    }

    #[test]
    fn test_skip_day_outside_short_term() {
        let offset = parse_utc_offset("+00:00").unwrap();
        let mut room = classroom(vec![]);
        room.end_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let reason = project_slot(&room, &slot("Friday", "10:00", "11:00"), offset, "UTC")
            .unwrap_err();
        assert_eq!(reason, "no occurrence before end date");

        assert!(project_slot(&room, &slot("Tuesday", "10:00", "11:00"), offset, "UTC").is_ok());
    }

    #[test]
    fn test_parse_utc_offset_rejects_garbage() {
        assert!(parse_utc_offset("+05:30").is_ok());
        assert!(parse_utc_offset("IST").is_err());
    }
}
