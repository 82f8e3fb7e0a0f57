use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statistics {
  pub(crate) accuracy: u64,
  pub(crate) elapsed_time: f64,
  pub(crate) wpm: u64,
}

impl Statistics {
  pub(crate) fn since(
    start_time: Instant,
    typed: &str,
    reference: &str,
    alignment: Alignment,
  ) -> Self {
    Self::compute(start_time.elapsed(), typed, reference, alignment)
  }

  pub(crate) fn compute(
    elapsed: Duration,
    typed: &str,
    reference: &str,
    alignment: Alignment,
  ) -> Self {
    let elapsed_time = elapsed.as_secs_f64();

    Self {
      accuracy: accuracy(typed, reference, alignment),
      elapsed_time,
      wpm: wpm(reference, elapsed_time),
    }
  }

  pub(crate) fn rating(&self) -> Rating {
    Rating::from_wpm(self.wpm)
  }
}

/// Words are counted in the reference text, so skipped or extra words typed
/// do not change the result.
fn wpm(reference: &str, elapsed_time: f64) -> u64 {
  if !elapsed_time.is_finite() || elapsed_time <= 0.0 {
    return 0;
  }

  let words = reference.split_whitespace().count();

  let wpm = words as f64 * 60.0 / elapsed_time;

  if wpm.is_finite() { wpm as u64 } else { 0 }
}

fn accuracy(typed: &str, reference: &str, alignment: Alignment) -> u64 {
  let length = reference.chars().count();

  if length == 0 {
    return 0;
  }

  let matching = alignment.matching_characters(typed, reference).min(length);

  (matching * 100 / length) as u64
}
