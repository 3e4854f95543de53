//! pt-BR date strings for post and comment headers.
//!
//! Two views of the same instant: an absolute label (`6 de agosto às 20:00h`)
//! used as the tooltip, and a relative one (`há cerca de 1 hora`) used as the
//! visible text. Both are recomputed on every render.

use chrono::{DateTime, Datelike, FixedOffset, Locale, TimeZone, Timelike, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// `d de MMMM às HH:mm'h'` in the timestamp's own offset.
pub fn format_published_absolute<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format_localized("%-d de %B às %H:%Mh", Locale::pt_BR)
        .to_string()
}

/// RFC 3339 form, the counterpart of an HTML `datetime` attribute.
pub fn machine_readable(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339()
}

/// Relative label against the current wall clock.
pub fn format_relative<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format_relative_to(at, Utc::now())
}

/// Relative label such as `há 5 minutos` or `em 3 dias`.
pub fn format_relative_to<Tz: TimeZone>(at: &DateTime<Tz>, now: DateTime<Utc>) -> String {
    let at = at.with_timezone(&Utc);
    let in_future = at > now;
    let (earlier, later) = if in_future { (now, at) } else { (at, now) };

    let millis = (later - earlier).num_milliseconds();
    let minutes = (millis as f64 / 60_000.0).round() as i64;
    let distance = distance_phrase(minutes, || calendar_months_between(earlier, later));

    if in_future {
        format!("em {}", distance)
    } else {
        format!("há {}", distance)
    }
}

fn distance_phrase(minutes: i64, months: impl FnOnce() -> i64) -> String {
    if minutes == 0 {
        return "menos de um minuto".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "1 minuto", "minutos");
    }
    if minutes < 90 {
        return "cerca de 1 hora".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = round_div(minutes, 60);
        return format!("cerca de {} horas", hours);
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 dia".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(round_div(minutes, MINUTES_IN_DAY), "1 dia", "dias");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = round_div(minutes, MINUTES_IN_MONTH);
        return format!("cerca de {}", plural(months, "1 mês", "meses"));
    }

    let months = months();
    if months < 12 {
        return plural(round_div(minutes, MINUTES_IN_MONTH), "1 mês", "meses");
    }

    let years = months / 12;
    let remainder = months % 12;
    if remainder < 3 {
        format!("cerca de {}", plural(years, "1 ano", "anos"))
    } else if remainder < 9 {
        format!("mais de {}", plural(years, "1 ano", "anos"))
    } else {
        format!("quase {}", plural(years + 1, "1 ano", "anos"))
    }
}

fn plural(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        format!("{} {}", count, many)
    }
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());

    let later_key = (later.day(), later.num_seconds_from_midnight());
    let earlier_key = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_key < earlier_key {
        months -= 1;
    }
    months
}
