use chrono::Local;

/// Canonical lowercase day names in week order. Timetable keys, display
/// ordering, and CSV export ordering all follow this list.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub fn is_weekday(name: &str) -> bool {
    WEEKDAYS.contains(&name)
}

/// Lowercase weekday name for the local clock, matching timetable keys.
pub fn today_name() -> String {
    Local::now().format("%A").to_string().to_ascii_lowercase()
}

/// Current wall-clock time as zero-padded "HH:MM".
pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Capitalized day name for display.
pub fn day_title(name: &str) -> String {
    let mut title = name.to_owned();
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekdays_cover_the_week_in_order() {
        assert_eq!(WEEKDAYS.len(), 7);
        assert_eq!(WEEKDAYS[0], "monday");
        assert_eq!(WEEKDAYS[6], "sunday");
    }

    #[test]
    fn is_weekday_accepts_lowercase_names_only() {
        assert!(is_weekday("wednesday"));
        assert!(!is_weekday("Wednesday"));
        assert!(!is_weekday("someday"));
    }

    #[test]
    fn day_title_capitalizes_first_letter() {
        assert_eq!(day_title("monday"), "Monday");
        assert_eq!(day_title(""), "");
    }

    #[test]
    fn now_hhmm_is_fixed_width() {
        let now = now_hhmm();
        assert_eq!(now.len(), 5);
        assert_eq!(now.as_bytes()[2], b':');
    }
}
