//! Calendar policy: decides whether attendance marking is required on a
//! given date at all.
//!
//! The policy is a pure function of the date and an injected school
//! calendar (non-school weekday, fixed public-holiday table, declared
//! vacation dates). It has no side effects and no failure modes; a date
//! that needs no marking is an outcome, not an error.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeMap, BTreeSet};

/// Static calendar configuration the policy evaluates against.
/// Read-only at runtime; built once in the app config.
#[derive(Debug, Clone)]
pub struct SchoolCalendar {
    /// The weekly day off. Sundays for the schools this app was written for.
    pub non_school_weekday: Weekday,
    /// Fixed public-holiday table, keyed by date.
    pub holidays: BTreeMap<NaiveDate, String>,
    /// Explicitly declared vacation dates.
    pub vacations: BTreeSet<NaiveDate>,
}

impl SchoolCalendar {
    /// Indian public holidays for the 2026 school year. A fixed table, not
    /// a holiday computation: dates of movable festivals are entered for
    /// this year only.
    pub fn india_2026() -> BTreeMap<NaiveDate, String> {
        let entries = [
            (2026, 1, 26, "Republic Day"),
            (2026, 3, 4, "Holi"),
            (2026, 4, 3, "Good Friday"),
            (2026, 8, 15, "Independence Day"),
            (2026, 10, 2, "Gandhi Jayanti"),
            (2026, 11, 8, "Diwali"),
            (2026, 12, 25, "Christmas"),
        ];

        entries
            .into_iter()
            .map(|(y, m, d, name)| {
                let date = NaiveDate::from_ymd_opt(y, m, d)
                    .unwrap_or_else(|| panic!("invalid holiday table entry {}-{}-{}", d, m, y));
                (date, name.to_string())
            })
            .collect()
    }
}

/// Why no attendance is required on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The date falls on the weekly non-school day.
    NonSchoolDay,
    /// The date is in the public-holiday table.
    Holiday(String),
    /// The date is in the declared vacation list.
    Vacation,
}

impl SkipReason {
    /// Message for the modal surface.
    pub fn user_message(&self, date: NaiveDate) -> String {
        match self {
            SkipReason::NonSchoolDay => format!("{} - No school", date.format("%A")),
            SkipReason::Holiday(_) => "Holiday - No school".to_string(),
            SkipReason::Vacation => "Vacation - No attendance needed".to_string(),
        }
    }
}

/// Whether marking is required on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkingDecision {
    Required,
    NotRequired(SkipReason),
}

/// Calendar policy service.
#[derive(Clone)]
pub struct CalendarPolicy {
    calendar: SchoolCalendar,
}

impl CalendarPolicy {
    pub fn new(calendar: SchoolCalendar) -> Self {
        Self { calendar }
    }

    /// Decide whether attendance must be marked on `date`.
    ///
    /// Checks apply in priority order: weekly day off, then holiday table,
    /// then vacation list. The first match wins when a date is several of
    /// these at once.
    pub fn check(&self, date: NaiveDate) -> MarkingDecision {
        if date.weekday() == self.calendar.non_school_weekday {
            return MarkingDecision::NotRequired(SkipReason::NonSchoolDay);
        }

        if let Some(name) = self.calendar.holidays.get(&date) {
            return MarkingDecision::NotRequired(SkipReason::Holiday(name.clone()));
        }

        if self.calendar.vacations.contains(&date) {
            return MarkingDecision::NotRequired(SkipReason::Vacation);
        }

        MarkingDecision::Required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn empty_calendar() -> SchoolCalendar {
        SchoolCalendar {
            non_school_weekday: Weekday::Sun,
            holidays: BTreeMap::new(),
            vacations: BTreeSet::new(),
        }
    }

    #[test]
    fn regular_weekday_requires_marking() {
        let policy = CalendarPolicy::new(empty_calendar());
        // 2026-01-01 is a Thursday.
        assert_eq!(policy.check(date(2026, 1, 1)), MarkingDecision::Required);
    }

    #[test]
    fn sunday_needs_no_marking() {
        let policy = CalendarPolicy::new(empty_calendar());
        // 2026-01-04 is a Sunday.
        assert_eq!(
            policy.check(date(2026, 1, 4)),
            MarkingDecision::NotRequired(SkipReason::NonSchoolDay)
        );
    }

    #[test]
    fn holiday_needs_no_marking() {
        let mut calendar = empty_calendar();
        calendar.holidays = SchoolCalendar::india_2026();
        let policy = CalendarPolicy::new(calendar);

        // Republic Day 2026 falls on a Monday.
        assert_eq!(
            policy.check(date(2026, 1, 26)),
            MarkingDecision::NotRequired(SkipReason::Holiday("Republic Day".to_string()))
        );
    }

    #[test]
    fn vacation_needs_no_marking() {
        let mut calendar = empty_calendar();
        calendar.vacations.insert(date(2026, 6, 15));
        let policy = CalendarPolicy::new(calendar);

        // 2026-06-15 is a Monday, not a holiday, but declared vacation.
        assert_eq!(
            policy.check(date(2026, 6, 15)),
            MarkingDecision::NotRequired(SkipReason::Vacation)
        );
    }

    #[test]
    fn weekend_outranks_holiday_outranks_vacation() {
        // Pick a Sunday and declare it holiday and vacation as well.
        let sunday = date(2026, 1, 4);
        let mut calendar = empty_calendar();
        calendar.holidays.insert(sunday, "Some Holiday".to_string());
        calendar.vacations.insert(sunday);
        let policy = CalendarPolicy::new(calendar.clone());

        assert_eq!(
            policy.check(sunday),
            MarkingDecision::NotRequired(SkipReason::NonSchoolDay)
        );

        // Same date on a school weekday: holiday wins over vacation.
        calendar.non_school_weekday = Weekday::Mon;
        let policy = CalendarPolicy::new(calendar);
        assert_eq!(
            policy.check(sunday),
            MarkingDecision::NotRequired(SkipReason::Holiday("Some Holiday".to_string()))
        );
    }

    #[test]
    fn skip_reason_messages_match_the_popup_texts() {
        let sunday = date(2026, 1, 4);
        assert_eq!(
            SkipReason::NonSchoolDay.user_message(sunday),
            "Sunday - No school"
        );
        assert_eq!(
            SkipReason::Holiday("Holi".to_string()).user_message(sunday),
            "Holiday - No school"
        );
        assert_eq!(
            SkipReason::Vacation.user_message(sunday),
            "Vacation - No attendance needed"
        );
    }
}
