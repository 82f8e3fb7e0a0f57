use super::*;

/// Strategy used to count correctly typed characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum Alignment {
  /// Compare characters at the same index, up to the shorter string. A single
  /// inserted or dropped character shifts every later comparison.
  #[default]
  Positional,
  /// Reference length minus the edit distance between the two strings.
  Levenshtein,
}

impl Alignment {
  pub(crate) fn matching_characters(self, typed: &str, reference: &str) -> usize {
    match self {
      Self::Positional => typed
        .chars()
        .zip(reference.chars())
        .filter(|(typed, expected)| typed == expected)
        .count(),
      Self::Levenshtein => reference
        .chars()
        .count()
        .saturating_sub(edit_distance(typed, reference)),
    }
  }
}

fn edit_distance(a: &str, b: &str) -> usize {
  let b = b.chars().collect::<Vec<char>>();

  let mut previous = (0..=b.len()).collect::<Vec<usize>>();
  let mut current = vec![0; b.len() + 1];

  for (i, a_character) in a.chars().enumerate() {
    current[0] = i + 1;

    for (j, &b_character) in b.iter().enumerate() {
      let substitution = previous[j] + usize::from(a_character != b_character);
      current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
    }

    std::mem::swap(&mut previous, &mut current);
  }

  previous[b.len()]
}
