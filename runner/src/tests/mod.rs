use std::collections::HashMap;
use std::env;
use std::fs;

use scheduler::{Pid, Process, Schedule};

mod fcfs;

fn write_logs(folder: &str, name: &str, logs: &str) {
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}.log"), logs).unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    fs::read_to_string(format!("../outputs/{folder}/{name}.log")).unwrap()
}

/// Compares `output` with the reference output of the test,
/// or replaces the reference if `WRITE_OUTPUT` is set.
fn run(folder: &str, name: &str, output: &str) {
    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn pid(pid: usize) -> Pid {
    Pid::new(pid).unwrap()
}

/// Builds processes P1, P2, ... from `(arrival, burst, priority)` triples.
fn processes(specs: &[(usize, usize, i32)]) -> Vec<Process> {
    specs
        .iter()
        .enumerate()
        .map(|(index, &(arrival, burst, priority))| {
            Process::new(pid(index + 1), arrival, burst, priority)
        })
        .collect()
}

/// `(pid, completion, waiting)` for every result, in result order.
fn completions(schedule: &Schedule) -> Vec<(usize, usize, usize)> {
    schedule
        .results
        .iter()
        .map(|result| (result.pid.get(), result.completion, result.waiting))
        .collect()
}

/// `(pid, start, end)` for every timeline entry.
fn slices(schedule: &Schedule) -> Vec<(usize, usize, usize)> {
    schedule
        .timeline
        .iter()
        .map(|entry| (entry.pid.get(), entry.start, entry.end))
        .collect()
}

/// Checks the invariants that hold for every policy.
fn check_schedule(processes: &[Process], schedule: &Schedule) {
    assert_eq!(schedule.results.len(), processes.len());

    let mut executed: HashMap<Pid, usize> = HashMap::new();
    for entry in &schedule.timeline {
        assert!(entry.end > entry.start, "empty slice {entry}");
        *executed.entry(entry.pid).or_default() += entry.duration();
    }

    for window in schedule.timeline.windows(2) {
        assert!(
            window[0].end <= window[1].start,
            "overlapping slices {} and {}",
            window[0],
            window[1]
        );
    }

    for process in processes {
        let result = schedule
            .results
            .iter()
            .find(|result| result.pid == process.pid)
            .unwrap();
        assert_eq!(result.arrival, process.arrival);
        assert_eq!(result.burst, process.burst);
        assert_eq!(result.turnaround, result.completion - result.arrival);
        assert_eq!(result.waiting, result.turnaround - result.burst);
        assert_eq!(executed[&process.pid], process.burst);

        let first = schedule
            .timeline
            .iter()
            .find(|entry| entry.pid == process.pid)
            .unwrap();
        let last = schedule
            .timeline
            .iter()
            .rev()
            .find(|entry| entry.pid == process.pid)
            .unwrap();
        assert!(first.start >= process.arrival);
        assert_eq!(last.end, result.completion);
    }
}
