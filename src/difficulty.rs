use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub(crate) const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

  pub(crate) fn name(self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }

  /// Words per minute a typist should reach to be comfortable at this level.
  pub(crate) fn target_wpm(self) -> u64 {
    match self {
      Self::Easy => 30,
      Self::Medium => 50,
      Self::Hard => 80,
    }
  }
}

impl Display for Difficulty {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Difficulty {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let input = s.trim();

    Self::ALL
      .into_iter()
      .find(|difficulty| difficulty.name().eq_ignore_ascii_case(input))
      .ok_or_else(|| Error::InvalidDifficulty(input.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_lowercase() {
    assert_eq!("easy".parse(), Ok(Difficulty::Easy));
    assert_eq!("medium".parse(), Ok(Difficulty::Medium));
    assert_eq!("hard".parse(), Ok(Difficulty::Hard));
  }

  #[test]
  fn parse_ignores_case() {
    assert_eq!("MEDIUM".parse(), Ok(Difficulty::Medium));
    assert_eq!("HaRd".parse(), Ok(Difficulty::Hard));
  }

  #[test]
  fn parse_trims_whitespace() {
    assert_eq!(" easy \n".parse(), Ok(Difficulty::Easy));
  }

  #[test]
  fn parse_unknown() {
    assert_eq!(
      "expert".parse::<Difficulty>(),
      Err(Error::InvalidDifficulty("expert".into()))
    );
  }

  #[test]
  fn parse_empty() {
    assert_eq!(
      "".parse::<Difficulty>(),
      Err(Error::InvalidDifficulty(String::new()))
    );
  }

  #[test]
  fn display_round_trips_through_parse() {
    for difficulty in Difficulty::ALL {
      assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
    }
  }

  #[test]
  fn targets_increase_with_difficulty() {
    assert_eq!(Difficulty::Easy.target_wpm(), 30);
    assert_eq!(Difficulty::Medium.target_wpm(), 50);
    assert_eq!(Difficulty::Hard.target_wpm(), 80);
  }
}
