use crate::{SchedulingError, SchedulingResult};

/// Average waiting and turnaround times of a result set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Averages {
    pub waiting: f64,
    pub turnaround: f64,
}

/// Returns the arithmetic means of the waiting and turnaround times.
///
/// Fails with [`SchedulingError::EmptyInput`] if `results` is empty.
pub fn averages(results: &[SchedulingResult]) -> Result<Averages, SchedulingError> {
    if results.is_empty() {
        return Err(SchedulingError::EmptyInput);
    }

    let count = results.len() as f64;
    // summed as floats, the times can be close to usize::MAX
    let waiting: f64 = results.iter().map(|result| result.waiting as f64).sum();
    let turnaround: f64 = results.iter().map(|result| result.turnaround as f64).sum();

    Ok(Averages {
        waiting: waiting / count,
        turnaround: turnaround / count,
    })
}
