use chrono::NaiveDate;
use gapcheck::core::calculator::gaps::{detect_gaps, detect_gaps_with_clock};
use gapcheck::models::gap::Gap;
use gapcheck::models::interval::EmploymentInterval;
use gapcheck::models::threshold::GapThreshold;
use gapcheck::utils::date::FixedClock;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn closed(id: i64, employer: &str, start: &str, end: &str) -> EmploymentInterval {
    EmploymentInterval::new(employer, Some(d(start)), Some(d(end)), false).with_id(id)
}

fn current(id: i64, employer: &str, start: &str) -> EmploymentInterval {
    EmploymentInterval::new(employer, Some(d(start)), None, true).with_id(id)
}

fn ranges(gs: &[Gap]) -> Vec<(NaiveDate, NaiveDate, i64, i64, i64)> {
    gs.iter()
        .map(|g| (g.start_date, g.end_date, g.days, g.preceding_id, g.following_id))
        .collect()
}

fn today() -> NaiveDate {
    d("2024-06-30")
}

#[test]
fn two_intervals_with_summer_gap() {
    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-30"),
        closed(2, "B", "2020-09-01", "2021-01-01"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Any);

    assert_eq!(gaps.len(), 1);
    let g = &gaps[0];
    assert_eq!(g.start_date, d("2020-07-01"));
    assert_eq!(g.end_date, d("2020-08-31"));
    assert_eq!(g.days, 62);
    assert_eq!(g.preceding_id, 1);
    assert_eq!(g.following_id, 2);
    assert_eq!(g.preceding_index, 0);
    assert_eq!(g.following_index, 1);
}

#[test]
fn gap_below_threshold_is_not_reported() {
    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-30"),
        closed(2, "B", "2020-09-01", "2021-01-01"),
    ];

    assert!(detect_gaps(&history, today(), GapThreshold::Days(90)).is_empty());
    assert_eq!(detect_gaps(&history, today(), GapThreshold::Regulatory).len(), 1);
}

#[test]
fn threshold_boundary_is_inclusive() {
    // 2020-07-01 .. 2020-07-31 uncovered: exactly 31 days
    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-30"),
        closed(2, "B", "2020-08-01", "2020-12-31"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Regulatory);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].days, 31);

    assert!(detect_gaps(&history, today(), GapThreshold::Days(32)).is_empty());
}

#[test]
fn one_day_gap_needs_live_threshold() {
    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-29"),
        closed(2, "B", "2020-07-01", "2020-12-31"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Any);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].start_date, d("2020-06-30"));
    assert_eq!(gaps[0].end_date, d("2020-06-30"));
    assert_eq!(gaps[0].days, 1);

    assert!(detect_gaps(&history, today(), GapThreshold::Days(2)).is_empty());
}

#[test]
fn touching_and_overlapping_intervals_have_no_gap() {
    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-30"),
        closed(2, "B", "2020-07-01", "2020-12-31"),
        closed(3, "C", "2020-11-01", "2021-03-31"),
    ];

    assert!(detect_gaps(&history, today(), GapThreshold::Any).is_empty());
}

#[test]
fn input_order_does_not_matter() {
    let a = closed(1, "A", "2018-01-01", "2018-12-31");
    let b = closed(2, "B", "2019-03-01", "2019-12-31");
    let c = closed(3, "C", "2020-06-01", "2021-12-31");

    let sorted = detect_gaps(&[a.clone(), b.clone(), c.clone()], today(), GapThreshold::Any);
    let shuffled = detect_gaps(&[c, a, b], today(), GapThreshold::Any);

    assert_eq!(sorted.len(), 2);
    assert_eq!(ranges(&sorted), ranges(&shuffled));
}

#[test]
fn indices_refer_to_caller_order() {
    let history = vec![
        closed(7, "Late", "2020-09-01", "2021-01-01"),
        closed(3, "Early", "2020-01-01", "2020-06-30"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Any);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].preceding_index, 1);
    assert_eq!(gaps[0].following_index, 0);
    assert_eq!(gaps[0].preceding_id, 3);
}

#[test]
fn single_current_interval_has_no_gaps() {
    let history = vec![current(1, "Only job", "2015-03-01")];
    assert!(detect_gaps(&history, today(), GapThreshold::Any).is_empty());
}

#[test]
fn fewer_than_two_valid_intervals_is_empty() {
    assert!(detect_gaps(&[], today(), GapThreshold::Any).is_empty());

    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-30"),
        EmploymentInterval::new("No dates", None, None, false).with_id(2),
        EmploymentInterval::new("No end", Some(d("2021-01-01")), None, false).with_id(3),
    ];
    assert!(detect_gaps(&history, today(), GapThreshold::Any).is_empty());
}

#[test]
fn current_position_covers_everything_after_it() {
    let history = vec![
        current(1, "Main job", "2018-01-01"),
        closed(2, "Side gig", "2020-01-01", "2020-03-31"),
        closed(3, "Summer", "2022-06-01", "2022-08-31"),
    ];

    assert!(detect_gaps(&history, today(), GapThreshold::Any).is_empty());
}

#[test]
fn gap_before_current_position_is_reported() {
    let history = vec![
        closed(1, "A", "2019-01-01", "2021-12-31"),
        current(2, "B", "2022-03-01"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Any);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].start_date, d("2022-01-01"));
    assert_eq!(gaps[0].end_date, d("2022-02-28"));
    assert_eq!(gaps[0].days, 59);
}

#[test]
fn current_flag_wins_over_stored_end_date() {
    let history = vec![
        EmploymentInterval::new("A", Some(d("2019-01-01")), Some(d("2019-06-30")), true).with_id(1),
        closed(2, "B", "2021-01-01", "2021-12-31"),
    ];

    assert!(detect_gaps(&history, today(), GapThreshold::Any).is_empty());
}

#[test]
fn contained_interval_does_not_open_a_gap() {
    let history = vec![
        closed(1, "Long", "2015-01-01", "2020-12-31"),
        closed(2, "Short", "2016-01-01", "2016-06-30"),
        closed(3, "Next", "2021-01-01", "2022-12-31"),
    ];

    assert!(detect_gaps(&history, today(), GapThreshold::Any).is_empty());
}

#[test]
fn gap_after_contained_interval_is_attributed_to_the_longer_one() {
    let history = vec![
        closed(1, "Long", "2015-01-01", "2020-12-31"),
        closed(2, "Short", "2016-01-01", "2016-06-30"),
        closed(3, "Next", "2021-03-01", "2022-12-31"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Any);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].preceding_id, 1);
    assert_eq!(gaps[0].start_date, d("2021-01-01"));
    assert_eq!(gaps[0].days, 59);
}

#[test]
fn duplicates_are_tolerated() {
    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-30"),
        closed(2, "A", "2020-01-01", "2020-06-30"),
        closed(3, "B", "2020-09-01", "2021-01-01"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Any);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].days, 62);
}

#[test]
fn gaps_are_chronological_and_within_bounds() {
    let history = vec![
        closed(1, "C", "2022-01-01", "2022-12-31"),
        closed(2, "A", "2019-01-01", "2019-12-31"),
        closed(3, "B", "2020-06-01", "2021-06-30"),
    ];

    let gaps = detect_gaps(&history, today(), GapThreshold::Any);
    assert_eq!(gaps.len(), 2);
    assert!(gaps[0].start_date < gaps[1].start_date);

    for g in &gaps {
        assert!(g.start_date <= g.end_date);
        assert_eq!((g.end_date - g.start_date).num_days() + 1, g.days);
    }
}

#[test]
fn detection_is_deterministic_with_a_fixed_clock() {
    let history = vec![
        closed(1, "A", "2020-01-01", "2020-06-30"),
        current(2, "B", "2020-09-01"),
    ];

    let clock = FixedClock(today());
    let first = detect_gaps_with_clock(&history, &clock, GapThreshold::Any);
    let second = detect_gaps_with_clock(&history, &clock, GapThreshold::Any);

    assert_eq!(first, second);
    assert_eq!(first, detect_gaps(&history, today(), GapThreshold::Any));
}

#[test]
fn threshold_parsing() {
    assert_eq!(GapThreshold::parse("any").unwrap(), GapThreshold::Any);
    assert_eq!(GapThreshold::parse("regulatory").unwrap(), GapThreshold::Regulatory);
    assert_eq!(GapThreshold::parse("31").unwrap(), GapThreshold::Regulatory);
    assert_eq!(GapThreshold::parse("90").unwrap(), GapThreshold::Days(90));
    assert!(GapThreshold::parse("0").is_err());
    assert!(GapThreshold::parse("soon").is_err());
    assert_eq!(GapThreshold::Days(-5).min_days(), 1);
}
