use pretty_assertions::assert_eq;
use scheduler::{fcfs, Scheduler};

use super::{check_schedule, completions, processes, slices};
use crate::config::demo;

#[test]
pub fn demo_set() {
    let schedule = fcfs().schedule(&demo()).unwrap();

    check_schedule(&demo(), &schedule);
    assert_eq!(
        completions(&schedule),
        vec![(1, 6, 0), (2, 8, 5), (3, 16, 6), (4, 19, 13), (5, 23, 15)]
    );
    let total: usize = schedule.results.iter().map(|result| result.waiting).sum();
    assert_eq!(total, 39);
}

#[test]
pub fn sorts_by_arrival() {
    let processes = processes(&[(5, 2, 0), (0, 3, 0), (1, 1, 0)]);
    let schedule = fcfs().schedule(&processes).unwrap();

    check_schedule(&processes, &schedule);
    assert_eq!(slices(&schedule), vec![(2, 0, 3), (3, 3, 4), (1, 5, 7)]);
}

#[test]
pub fn equal_arrivals_keep_input_order() {
    let processes = processes(&[(2, 1, 0), (2, 4, 0), (2, 2, 0)]);
    let schedule = fcfs().schedule(&processes).unwrap();

    assert_eq!(slices(&schedule), vec![(1, 2, 3), (2, 3, 7), (3, 7, 9)]);
}

#[test]
pub fn idle_gaps_are_not_in_the_timeline() {
    let processes = processes(&[(0, 2, 0), (10, 3, 0)]);
    let schedule = fcfs().schedule(&processes).unwrap();

    check_schedule(&processes, &schedule);
    assert_eq!(slices(&schedule), vec![(1, 0, 2), (2, 10, 13)]);
    assert_eq!(completions(&schedule), vec![(1, 2, 0), (2, 13, 0)]);
}
