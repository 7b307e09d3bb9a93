use crate::timetable::Period;

pub const NO_CLASS_NOW: &str = "no class now";
pub const BREAK_TIME: &str = "break time";
pub const NO_MORE_CLASSES: &str = "no more classes today";

/// The two labels the host renders for the home view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassStatus {
    pub current: String,
    pub next: String,
}

/// Subjects that mark non-class time rather than a real subject.
pub fn is_break(subject: &str) -> bool {
    matches!(subject.to_ascii_lowercase().as_str(), "break" | "lunch")
}

/// Resolve the active and upcoming period labels for one day's ordered list.
///
/// Single pass in list order. A period is active when `start <= now <= end`,
/// compared lexically on "HH:MM" strings; the first match wins and the scan
/// stops there. While no match has been found, the first period whose `start`
/// is later than `now` is recorded as the tentative next. A matched period
/// with a successor replaces that tentative value; a matched period without
/// one leaves it untouched.
pub fn current_and_next(periods: &[Period], now: &str) -> ClassStatus {
    let mut current = None;
    let mut upcoming = None;

    for (i, period) in periods.iter().enumerate() {
        if period.start.as_str() <= now && now <= period.end.as_str() {
            current = Some(if is_break(&period.subject) {
                BREAK_TIME.to_string()
            } else {
                period.subject.clone()
            });
            if let Some(successor) = periods.get(i + 1) {
                upcoming = Some(successor.subject.clone());
            }
            break;
        }

        if period.start.as_str() > now && upcoming.is_none() {
            upcoming = Some(period.subject.clone());
        }
    }

    ClassStatus {
        current: current.unwrap_or_else(|| NO_CLASS_NOW.to_string()),
        next: upcoming.unwrap_or_else(|| NO_MORE_CLASSES.to_string()),
    }
}
