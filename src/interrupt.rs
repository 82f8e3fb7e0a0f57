use {super::*, style::Style};

/// Ends the process with a short notice when the user interrupts a blocking
/// read. Must run before the session starts.
pub(crate) fn install() -> Result {
  ctrlc::set_handler(|| {
    let mut stdout = stdout();
    let _ = writeln!(stdout, "\n{}", Style::Red.paint("Session terminated"));
    let _ = stdout.flush();
    process::exit(0);
  })?;

  Ok(())
}
