use timetable_tool::resolver::{BREAK_TIME, NO_CLASS_NOW, NO_MORE_CLASSES};
use timetable_tool::{Period, current_and_next};

fn sample_day() -> Vec<Period> {
    vec![
        Period::new("08:00", "08:50", "Math"),
        Period::new("08:50", "09:00", "Break"),
        Period::new("09:00", "09:50", "Physics"),
    ]
}

#[test]
fn active_subject_is_reported_verbatim() {
    let status = current_and_next(&sample_day(), "08:10");
    assert_eq!(status.current, "Math");
    assert_eq!(status.next, "Break");
}

#[test]
fn break_period_reports_break_time_and_true_successor() {
    let status = current_and_next(&sample_day(), "08:55");
    assert_eq!(status.current, BREAK_TIME);
    assert_eq!(status.next, "Physics");
}

#[test]
fn before_first_period_reports_first_upcoming() {
    let status = current_and_next(&sample_day(), "07:00");
    assert_eq!(status.current, NO_CLASS_NOW);
    assert_eq!(status.next, "Math");
}

#[test]
fn after_last_period_reports_defaults() {
    let status = current_and_next(&sample_day(), "10:00");
    assert_eq!(status.current, NO_CLASS_NOW);
    assert_eq!(status.next, NO_MORE_CLASSES);
}

#[test]
fn empty_day_reports_defaults() {
    let status = current_and_next(&[], "12:00");
    assert_eq!(status.current, NO_CLASS_NOW);
    assert_eq!(status.next, NO_MORE_CLASSES);
}

#[test]
fn interval_bounds_are_inclusive() {
    let status = current_and_next(&sample_day(), "08:00");
    assert_eq!(status.current, "Math");

    // 08:50 is both Math's end and Break's start; the earlier period wins.
    let status = current_and_next(&sample_day(), "08:50");
    assert_eq!(status.current, "Math");
    assert_eq!(status.next, "Break");
}

#[test]
fn break_sentinel_is_case_insensitive() {
    for subject in ["break", "Break", "BREAK", "lunch", "Lunch", "LUNCH"] {
        let periods = vec![Period::new("12:00", "12:45", subject)];
        let status = current_and_next(&periods, "12:15");
        assert_eq!(status.current, BREAK_TIME, "subject {subject}");
    }
}

#[test]
fn sentinel_lookalikes_are_real_subjects() {
    let periods = vec![Period::new("12:00", "12:45", "Lunch Theory")];
    let status = current_and_next(&periods, "12:15");
    assert_eq!(status.current, "Lunch Theory");
}

#[test]
fn overlapping_periods_first_match_wins() {
    let periods = vec![
        Period::new("09:00", "10:00", "Math"),
        Period::new("09:30", "10:30", "Physics"),
    ];
    let status = current_and_next(&periods, "09:45");
    assert_eq!(status.current, "Math");
    assert_eq!(status.next, "Physics");
}

#[test]
fn successor_is_reported_regardless_of_its_bounds() {
    // The period after the current one counts as next even when its own
    // interval is nonsense.
    let periods = vec![
        Period::new("09:00", "10:00", "Math"),
        Period::new("05:00", "04:00", "Chemistry"),
    ];
    let status = current_and_next(&periods, "09:30");
    assert_eq!(status.current, "Math");
    assert_eq!(status.next, "Chemistry");
}

#[test]
fn tentative_next_survives_match_without_successor() {
    // Out-of-order list: the first entry is recorded as the tentative next,
    // then the last entry matches and has no successor to overwrite it with.
    let periods = vec![
        Period::new("10:00", "11:00", "Late"),
        Period::new("08:00", "09:00", "Early"),
    ];
    let status = current_and_next(&periods, "08:30");
    assert_eq!(status.current, "Early");
    assert_eq!(status.next, "Late");
}

#[test]
fn last_period_without_successor_reports_no_more_classes() {
    let status = current_and_next(&sample_day(), "09:30");
    assert_eq!(status.current, "Physics");
    assert_eq!(status.next, NO_MORE_CLASSES);
}

#[test]
fn malformed_times_compare_without_panicking() {
    // "8:00" is not zero-padded, so it sorts after "09:00" lexically and the
    // period is treated as upcoming. Deterministic, not meaningful.
    let periods = vec![Period::new("8:00", "8:50", "Math")];
    let status = current_and_next(&periods, "09:00");
    assert_eq!(status.current, NO_CLASS_NOW);
    assert_eq!(status.next, "Math");
}
