use {
  super::*,
  crossterm::style::{StyledContent, Stylize, style},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Style {
  Blue,
  Bold,
  Green,
  Red,
}

impl Style {
  pub(crate) fn paint<D: Display>(self, content: D) -> StyledContent<D> {
    let content = style(content);

    match self {
      Self::Blue => content.blue(),
      Self::Bold => content.bold(),
      Self::Green => content.green(),
      Self::Red => content.red(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn painted_content_keeps_text() {
    for style in [Style::Blue, Style::Bold, Style::Green, Style::Red] {
      let painted = style.paint("WPM: 42").to_string();
      assert!(painted.contains("WPM: 42"), "{style:?} produced {painted:?}");
    }
  }

  #[test]
  fn painted_content_is_wrapped() {
    let painted = Style::Bold.paint("GO!").to_string();
    assert!(painted.starts_with('\u{1b}'), "{painted:?}");
    assert!(painted.ends_with('m'), "{painted:?}");
  }
}
