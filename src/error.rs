#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum Error {
  #[error("invalid difficulty `{0}`, expected one of easy, medium or hard")]
  InvalidDifficulty(String),
  #[error("standard input closed before the session finished")]
  UnexpectedEndOfInput,
}
