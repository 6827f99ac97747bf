//! State of the booking wizard: sauna → date → time → contacts and consent.
//!
//! Each selection fills its field and moves one step forward. Going back
//! never clears what the guest already picked; only [`BookingWizard::reset`]
//! ("book another visit" on the last screen) does.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use thiserror::Error;

use crate::calendar;
use crate::config;
use crate::content::{self, Sauna};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Sauna,
    Date,
    Time,
    Consent,
    Done,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::Sauna => 1,
            Step::Date => 2,
            Step::Time => 3,
            Step::Consent => 4,
            Step::Done => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Sauna => "Выберите баню",
            Step::Date => "Выберите дату",
            Step::Time => "Выберите время",
            Step::Consent => "Контакты",
            Step::Done => "Заявка отправлена",
        }
    }

    fn previous(&self) -> Option<Step> {
        match self {
            Step::Sauna | Step::Done => None,
            Step::Date => Some(Step::Sauna),
            Step::Time => Some(Step::Date),
            Step::Consent => Some(Step::Time),
        }
    }
}

pub const FORM_STEPS: u8 = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("unknown sauna `{0}`")]
    UnknownSauna(String),
    #[error("{0} is outside the booking window")]
    DateNotSelectable(NaiveDate),
    #[error("pick a date before choosing a time")]
    NoDate,
    #[error("session at {0} is not available")]
    SlotUnavailable(NaiveTime),
    #[error("session length must be {min}..={max} hours, got {got}")]
    InvalidDuration { min: u8, max: u8, got: u8 },
    #[error("booking is incomplete")]
    Incomplete,
}

/// What the wizard hands over on submit. Logged to the console.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookingRequest {
    pub sauna: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub hours: u8,
    pub name: String,
    pub phone: String,
    pub estimated_price: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingWizard {
    pub step: Step,
    pub sauna: Option<&'static str>,
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub hours: u8,
    pub name: String,
    pub phone: String,
    pub consent: bool,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self {
            step: Step::Sauna,
            sauna: None,
            date: None,
            start: None,
            hours: config::MIN_SESSION_HOURS,
            name: String::new(),
            phone: String::new(),
            consent: false,
        }
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_sauna(&self) -> Option<&'static Sauna> {
        self.sauna.and_then(content::sauna_by_id)
    }

    pub fn select_sauna(&mut self, id: &str) -> Result<(), BookingError> {
        let sauna = content::sauna_by_id(id).ok_or_else(|| BookingError::UnknownSauna(id.to_string()))?;
        self.sauna = Some(sauna.id);
        self.step = Step::Date;
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate, now: NaiveDateTime) -> Result<(), BookingError> {
        if !calendar::is_selectable(date, now.date()) {
            return Err(BookingError::DateNotSelectable(date));
        }
        self.date = Some(date);
        // A time picked for another day may not exist on this one.
        if let Some(start) = self.start {
            if !calendar::available_starts(date, self.hours, now).contains(&start) {
                self.start = None;
            }
        }
        self.step = Step::Time;
        Ok(())
    }

    pub fn set_hours(&mut self, hours: u8) -> Result<(), BookingError> {
        if !(config::MIN_SESSION_HOURS..=config::MAX_SESSION_HOURS).contains(&hours) {
            return Err(BookingError::InvalidDuration {
                min: config::MIN_SESSION_HOURS,
                max: config::MAX_SESSION_HOURS,
                got: hours,
            });
        }
        self.hours = hours;
        if let Some(start) = self.start {
            if calendar::session_end(start, hours) > config::closing_time() || calendar::session_end(start, hours) < start {
                self.start = None;
            }
        }
        Ok(())
    }

    pub fn available_starts(&self, now: NaiveDateTime) -> Vec<NaiveTime> {
        match self.date {
            Some(date) => calendar::available_starts(date, self.hours, now),
            None => Vec::new(),
        }
    }

    pub fn select_time(&mut self, start: NaiveTime, now: NaiveDateTime) -> Result<(), BookingError> {
        if self.date.is_none() {
            return Err(BookingError::NoDate);
        }
        if !self.available_starts(now).contains(&start) {
            return Err(BookingError::SlotUnavailable(start));
        }
        self.start = Some(start);
        self.step = Step::Consent;
        Ok(())
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn estimate_price(&self) -> Option<u32> {
        let sauna = self.selected_sauna()?;
        let date = self.date?;
        let hourly = if calendar::is_weekend_rate(date) {
            sauna.weekend_price
        } else {
            sauna.weekday_price
        };
        Some(hourly * self.hours as u32)
    }

    pub fn can_submit(&self) -> bool {
        self.sauna.is_some()
            && self.date.is_some()
            && self.start.is_some()
            && !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self.consent
    }

    pub fn submit(&mut self, now: NaiveDateTime) -> Result<BookingRequest, BookingError> {
        if !self.can_submit() {
            return Err(BookingError::Incomplete);
        }
        let (Some(sauna), Some(date), Some(start)) = (self.sauna, self.date, self.start) else {
            return Err(BookingError::Incomplete);
        };
        // The page may have been open long enough for the slot to pass.
        if !calendar::available_starts(date, self.hours, now).contains(&start) {
            return Err(BookingError::SlotUnavailable(start));
        }

        let request = BookingRequest {
            sauna: sauna.to_string(),
            date,
            start,
            hours: self.hours,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            estimated_price: self.estimate_price().unwrap_or_default(),
        };
        self.step = Step::Done;
        Ok(request)
    }

    /// Fraction of the form steps completed, for the progress bar.
    pub fn progress(&self) -> f64 {
        let done = self.step.number().min(FORM_STEPS + 1) - 1;
        done as f64 / FORM_STEPS as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn hour(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn filled() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.select_sauna("russkaya").unwrap();
        wizard.select_date(day(20), now()).unwrap();
        wizard.select_time(hour(18), now()).unwrap();
        wizard.set_name("Иван".into());
        wizard.set_phone("+7 900 000-00-00".into());
        wizard.set_consent(true);
        wizard
    }

    #[test]
    fn selections_advance_one_step_each() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.step, Step::Sauna);
        wizard.select_sauna("finskaya").unwrap();
        assert_eq!(wizard.step, Step::Date);
        wizard.select_date(day(17), now()).unwrap();
        assert_eq!(wizard.step, Step::Time);
        wizard.select_time(hour(10), now()).unwrap();
        assert_eq!(wizard.step, Step::Consent);
    }

    #[test]
    fn back_keeps_collected_fields() {
        let mut wizard = filled();
        wizard.back();
        assert_eq!(wizard.step, Step::Time);
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step, Step::Sauna);
        wizard.back();
        assert_eq!(wizard.step, Step::Sauna);
        assert_eq!(wizard.sauna, Some("russkaya"));
        assert_eq!(wizard.date, Some(day(20)));
        assert_eq!(wizard.start, Some(hour(18)));
        assert!(wizard.consent);
    }

    #[test]
    fn reset_starts_over() {
        let mut wizard = filled();
        wizard.reset();
        assert_eq!(wizard, BookingWizard::new());
    }

    #[test]
    fn rejects_unknown_sauna_and_past_dates() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.select_sauna("hammam"), Err(BookingError::UnknownSauna("hammam".into())));
        assert_eq!(wizard.step, Step::Sauna);

        wizard.select_sauna("chan").unwrap();
        assert_eq!(wizard.select_date(day(15), now()), Err(BookingError::DateNotSelectable(day(15))));
        assert_eq!(wizard.step, Step::Date);
        assert!(wizard.date.is_none());
    }

    #[test]
    fn rejects_slots_that_already_passed_today() {
        let mut wizard = BookingWizard::new();
        wizard.select_sauna("chan").unwrap();
        wizard.select_date(day(16), now()).unwrap();
        assert_eq!(wizard.select_time(hour(12), now()), Err(BookingError::SlotUnavailable(hour(12))));
        assert!(wizard.select_time(hour(13), now()).is_ok());
    }

    #[test]
    fn changing_date_drops_time_that_no_longer_fits() {
        let mut wizard = BookingWizard::new();
        wizard.select_sauna("chan").unwrap();
        wizard.select_date(day(18), now()).unwrap();
        wizard.select_time(hour(11), now()).unwrap();
        wizard.back();
        wizard.back();
        wizard.select_date(day(19), now()).unwrap();
        assert_eq!(wizard.start, Some(hour(11)));
        wizard.select_date(day(16), now()).unwrap();
        assert_eq!(wizard.start, None);
    }

    #[test]
    fn longer_session_clears_start_past_closing() {
        let mut wizard = filled();
        wizard.back();
        wizard.select_time(hour(21), now()).unwrap();
        wizard.set_hours(3).unwrap();
        assert_eq!(wizard.start, None);
        assert!(matches!(wizard.set_hours(5), Err(BookingError::InvalidDuration { got: 5, .. })));
    }

    #[test]
    fn submit_requires_every_field_and_consent() {
        let mut wizard = filled();
        wizard.set_consent(false);
        assert!(!wizard.can_submit());
        assert_eq!(wizard.submit(now()), Err(BookingError::Incomplete));

        wizard.set_consent(true);
        wizard.set_name("   ".into());
        assert!(!wizard.can_submit());

        wizard.set_name(" Иван ".into());
        let request = wizard.submit(now()).unwrap();
        assert_eq!(wizard.step, Step::Done);
        assert_eq!(request.name, "Иван");
        assert_eq!(request.sauna, "russkaya");
    }

    #[test]
    fn submit_rechecks_a_same_day_slot_that_has_since_passed() {
        let mut wizard = BookingWizard::new();
        wizard.select_sauna("russkaya").unwrap();
        wizard.select_date(day(16), now()).unwrap();
        wizard.select_time(hour(14), now()).unwrap();
        wizard.set_name("Иван".into());
        wizard.set_phone("+7 900 000-00-00".into());
        wizard.set_consent(true);
        assert!(wizard.can_submit());

        let later = now() + chrono::Duration::hours(2);
        assert_eq!(wizard.submit(later), Err(BookingError::SlotUnavailable(hour(14))));
        assert_eq!(wizard.step, Step::Consent);
        assert_eq!(wizard.start, Some(hour(14)));
    }

    #[test]
    fn price_uses_weekend_rate_from_friday() {
        let mut wizard = filled();
        // 20 October 2026 is a Tuesday.
        assert_eq!(wizard.estimate_price(), Some(3500 * 2));
        wizard.select_date(day(23), now()).unwrap();
        wizard.set_hours(3).unwrap();
        assert_eq!(wizard.estimate_price(), Some(4200 * 3));
    }

    #[test]
    fn progress_tracks_steps() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.progress(), 0.0);
        wizard.select_sauna("russkaya").unwrap();
        assert_eq!(wizard.progress(), 0.25);
        let mut done = filled();
        done.submit(now()).unwrap();
        assert_eq!(done.progress(), 1.0);
        done.back();
        assert_eq!(done.step, Step::Done);
    }
}
