use {super::*, style::Style};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Rating {
  Top,
  Middle,
  Bottom,
}

impl Rating {
  pub(crate) fn from_wpm(wpm: u64) -> Self {
    if wpm > 80 {
      Self::Top
    } else if wpm > 50 {
      Self::Middle
    } else {
      Self::Bottom
    }
  }

  pub(crate) fn message(self) -> &'static str {
    match self {
      Self::Top => "Blazing fast! Your keyboard can barely keep up.",
      Self::Middle => "Solid speed. A little more practice and you'll fly.",
      Self::Bottom => "Keep practicing, speed comes with repetition.",
    }
  }

  pub(crate) fn style(self) -> Style {
    match self {
      Self::Top => Style::Blue,
      Self::Middle => Style::Green,
      Self::Bottom => Style::Red,
    }
  }
}

impl Display for Rating {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.style().paint(self.message()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn thresholds_are_exclusive() {
    assert_eq!(Rating::from_wpm(81), Rating::Top);
    assert_eq!(Rating::from_wpm(80), Rating::Middle);
    assert_eq!(Rating::from_wpm(51), Rating::Middle);
    assert_eq!(Rating::from_wpm(50), Rating::Bottom);
  }

  #[test]
  fn extremes() {
    assert_eq!(Rating::from_wpm(0), Rating::Bottom);
    assert_eq!(Rating::from_wpm(u64::MAX), Rating::Top);
  }

  #[test]
  fn display_contains_message() {
    for rating in [Rating::Top, Rating::Middle, Rating::Bottom] {
      assert!(rating.to_string().contains(rating.message()));
    }
  }
}
