use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc, Weekday};

use crate::config;

const MONTHS: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
    "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
];

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

pub const WEEKDAYS_SHORT: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Current wall-clock time at the banya, whatever the visitor's time zone is.
pub fn now_in_business_tz() -> NaiveDateTime {
    Utc::now().with_timezone(&config::BUSINESS_TZ).naive_local()
}

pub fn today_in_business_tz() -> NaiveDate {
    now_in_business_tz().date()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        let days = self.next().first_day().signed_duration_since(self.first_day()).num_days();
        days as u32
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTHS[(self.month - 1) as usize], self.year)
    }

    /// Monday-first grid, padded with `None` on both ends to whole weeks.
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        let first = self.first_day();
        let leading = first.weekday().num_days_from_monday() as usize;
        let days = self.days_in_month();

        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        cells.extend((0..days).map(|offset| Some(first + Duration::days(offset as i64))));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    pub fn can_go_prev(&self, today: NaiveDate) -> bool {
        *self > MonthView::containing(today)
    }

    pub fn can_go_next(&self, today: NaiveDate) -> bool {
        *self < MonthView::containing(last_bookable_day(today))
    }
}

impl PartialOrd for MonthView {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthView {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

pub fn last_bookable_day(today: NaiveDate) -> NaiveDate {
    today + Duration::days(config::BOOKING_HORIZON_DAYS)
}

pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today && date <= last_bookable_day(today)
}

/// Friday to Sunday are billed at the weekend rate.
pub fn is_weekend_rate(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun)
}

/// "16 октября, пт"
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        WEEKDAYS_SHORT[date.weekday().num_days_from_monday() as usize].to_lowercase()
    )
}

pub fn format_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Session start times on `date` for a session of `hours` hours.
///
/// A session must finish by closing time. On the current day a session
/// must start at least `SAME_DAY_LEAD_HOURS` after `now`.
pub fn available_starts(date: NaiveDate, hours: u8, now: NaiveDateTime) -> Vec<NaiveTime> {
    let last_start_hour = config::CLOSING_HOUR.saturating_sub(hours as u32);
    let earliest = now + Duration::hours(config::SAME_DAY_LEAD_HOURS);

    (config::OPENING_HOUR..=last_start_hour)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .filter(|start| date.and_time(*start) >= earliest)
        .collect()
}

pub fn session_end(start: NaiveTime, hours: u8) -> NaiveTime {
    start + Duration::hours(hours as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn month_navigation_rolls_over_years() {
        let december = MonthView { year: 2026, month: 12 };
        assert_eq!(december.next(), MonthView { year: 2027, month: 1 });
        assert_eq!(december.next().prev(), december);
        assert_eq!(MonthView { year: 2027, month: 1 }.prev(), december);
    }

    #[test]
    fn february_length_follows_leap_years() {
        assert_eq!(MonthView { year: 2028, month: 2 }.days_in_month(), 29);
        assert_eq!(MonthView { year: 2027, month: 2 }.days_in_month(), 28);
        assert_eq!(MonthView { year: 2026, month: 10 }.days_in_month(), 31);
    }

    #[test]
    fn grid_starts_on_monday() {
        // 1 October 2026 is a Thursday.
        let cells = MonthView { year: 2026, month: 10 }.cells();
        assert_eq!(&cells[..3], &[None, None, None]);
        assert_eq!(cells[3], Some(date(2026, 10, 1)));
        assert_eq!(cells.len() % 7, 0);
        assert_eq!(cells.iter().flatten().count(), 31);
    }

    #[test]
    fn month_starting_on_sunday_has_six_leading_blanks() {
        // 1 November 2026 is a Sunday.
        let cells = MonthView { year: 2026, month: 11 }.cells();
        assert!(cells[..6].iter().all(Option::is_none));
        assert_eq!(cells[6], Some(date(2026, 11, 1)));
        assert_eq!(cells.len(), 42);
    }

    #[test]
    fn past_dates_are_not_selectable() {
        let today = date(2026, 10, 16);
        assert!(!is_selectable(date(2026, 10, 15), today));
        assert!(is_selectable(today, today));
        assert!(is_selectable(date(2026, 12, 15), today));
        assert!(!is_selectable(date(2026, 12, 16), today));
    }

    #[test]
    fn navigation_is_bounded_by_horizon() {
        let today = date(2026, 10, 16);
        let current = MonthView::containing(today);
        assert!(!current.can_go_prev(today));
        assert!(current.can_go_next(today));
        let december = current.next().next();
        assert!(december.can_go_prev(today));
        assert!(!december.can_go_next(today));
    }

    #[test]
    fn weekend_rate_covers_friday_to_sunday() {
        assert!(!is_weekend_rate(date(2026, 10, 15)));
        assert!(is_weekend_rate(date(2026, 10, 16)));
        assert!(is_weekend_rate(date(2026, 10, 18)));
        assert!(!is_weekend_rate(date(2026, 10, 19)));
    }

    #[test]
    fn future_day_offers_every_start_that_ends_by_closing() {
        let starts = available_starts(date(2026, 10, 20), 2, at(2026, 10, 16, 12, 0));
        assert_eq!(starts.first().map(|t| t.hour()), Some(10));
        assert_eq!(starts.last().map(|t| t.hour()), Some(21));
        assert_eq!(starts.len(), 12);

        let long = available_starts(date(2026, 10, 20), 4, at(2026, 10, 16, 12, 0));
        assert_eq!(long.last().map(|t| t.hour()), Some(19));
    }

    #[test]
    fn same_day_starts_need_lead_time() {
        let starts = available_starts(date(2026, 10, 16), 2, at(2026, 10, 16, 14, 30));
        assert_eq!(starts.first().map(|t| t.hour()), Some(16));
    }

    #[test]
    fn late_evening_leaves_no_same_day_starts() {
        assert!(available_starts(date(2026, 10, 16), 2, at(2026, 10, 16, 21, 0)).is_empty());
    }

    #[test]
    fn formats_in_russian() {
        assert_eq!(MonthView { year: 2026, month: 10 }.title(), "Октябрь 2026");
        assert_eq!(format_long(date(2026, 10, 16)), "16 октября, пт");
        assert_eq!(format_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()), "09:00");
    }
}
