use chrono::NaiveTime;
use chrono_tz::Tz;

pub const SITE_NAME: &str = "Баня «Лесная»";
pub const PHONE: &str = "+7 (921) 555-17-45";
pub const PHONE_LINK: &str = "tel:+79215551745";
pub const EMAIL: &str = "hello@lesnaya-banya.ru";
pub const HR_EMAIL: &str = "job@lesnaya-banya.ru";
pub const ADDRESS: &str = "Ленинградская обл., пос. Сосново, ул. Озёрная, 12";
pub const MAP_URL: &str = "https://yandex.ru/maps/?text=%D0%A1%D0%BE%D1%81%D0%BD%D0%BE%D0%B2%D0%BE%2C%20%D0%9E%D0%B7%D1%91%D1%80%D0%BD%D0%B0%D1%8F%2C%2012";

pub const YCLIENTS_COMPANY_ID: u32 = 912_384;
pub const VK_GROUP_ID: u32 = 218_770_455;
pub const VK_GROUP_URL: &str = "https://vk.com/lesnaya_banya";
pub const TELEGRAM_URL: &str = "https://t.me/lesnaya_banya";

pub const BUSINESS_TZ: Tz = chrono_tz::Europe::Moscow;

pub const OPENING_HOUR: u32 = 10;
pub const CLOSING_HOUR: u32 = 23;
/// How far ahead the booking calendar lets you pick a date.
pub const BOOKING_HORIZON_DAYS: i64 = 60;
/// Same-day sessions must start at least this many hours from now.
pub const SAME_DAY_LEAD_HOURS: i64 = 1;
pub const MIN_SESSION_HOURS: u8 = 2;
pub const MAX_SESSION_HOURS: u8 = 4;

pub fn opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(OPENING_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub fn closing_time() -> NaiveTime {
    NaiveTime::from_hms_opt(CLOSING_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

pub fn yclients_url() -> String {
    format!("https://n{}.yclients.com/", YCLIENTS_COMPANY_ID)
}

#[cfg(debug_assertions)]
pub fn analytics_enabled() -> bool {
    false // Keep local clicks out of the production dashboard
}

#[cfg(not(debug_assertions))]
pub fn analytics_enabled() -> bool {
    true
}
