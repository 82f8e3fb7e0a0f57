use super::*;

const SAMPLES: &[&str] = &[
  "Programs must be written for people to read, and only incidentally for machines to execute.",
  "Make it work, make it right, make it fast.",
  "The cheapest, fastest, and most reliable components are those that are not there.",
  "Talk is cheap. Show me the code.",
  "cargo test --workspace --all-features",
  "git rebase --interactive HEAD~3",
  "SELECT name, email FROM users WHERE active = 1 ORDER BY name;",
  "fn main() { println!(\"hello, world\"); }",
  "for line in stdin.lock().lines() { total += line?.len(); }",
];

#[derive(Debug)]
pub(crate) struct Corpus {
  rng: StdRng,
  samples: &'static [&'static str],
}

impl Corpus {
  pub(crate) fn new(seed: Option<u64>) -> Self {
    Self::with_samples(SAMPLES, seed)
  }

  pub(crate) fn with_samples(samples: &'static [&'static str], seed: Option<u64>) -> Self {
    Self {
      rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
      samples,
    }
  }

  /// Picks a sample uniformly at random, independent of difficulty.
  pub(crate) fn choose(&mut self) -> Result<&'static str> {
    self
      .samples
      .choose(&mut self.rng)
      .copied()
      .ok_or_else(|| anyhow!("sample corpus is empty"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn samples_are_not_empty() {
    assert!(!SAMPLES.is_empty());
    assert!(SAMPLES.iter().all(|sample| !sample.trim().is_empty()));
  }

  #[test]
  fn choose_returns_a_known_sample() {
    let mut corpus = Corpus::new(None);

    for _ in 0..32 {
      assert!(SAMPLES.contains(&corpus.choose().unwrap()));
    }
  }

  #[test]
  fn seeded_choice_is_reproducible() {
    let mut a = Corpus::new(Some(7));
    let mut b = Corpus::new(Some(7));

    for _ in 0..16 {
      assert_eq!(a.choose().unwrap(), b.choose().unwrap());
    }
  }

  #[test]
  fn single_sample() {
    let mut corpus = Corpus::with_samples(&["only"], None);
    assert_eq!(corpus.choose().unwrap(), "only");
  }

  #[test]
  fn empty_corpus() {
    let mut corpus = Corpus::with_samples(&[], Some(1));
    assert!(corpus.choose().is_err());
  }
}
