use super::*;

thread_local! {
  static CAPTURE: Cell<bool> = const { Cell::new(false) };
  static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Scoped ownership of the parser-diagnostic capture toggle.
///
/// Acquiring forces capture mode on; dropping restores whatever mode was
/// active beforehand, on every exit path. The warning log is cleared on
/// drop only if it was empty at acquisition, so diagnostics recorded by
/// an outer caller survive nested use.
pub(crate) struct CaptureGuard {
  previous: bool,
  was_empty: bool,
}

impl CaptureGuard {
  pub(crate) fn acquire() -> Self {
    Self {
      previous: CAPTURE.with(|capture| capture.replace(true)),
      was_empty: WARNINGS.with(|warnings| warnings.borrow().is_empty()),
    }
  }
}

impl Drop for CaptureGuard {
  fn drop(&mut self) {
    CAPTURE.with(|capture| capture.set(self.previous));

    if self.was_empty {
      WARNINGS.with(|warnings| warnings.borrow_mut().clear());
    }
  }
}

pub(crate) fn record(message: impl Into<String>) {
  let message = message.into();

  if CAPTURE.with(Cell::get) {
    WARNINGS.with(|warnings| warnings.borrow_mut().push(message));
  } else {
    log::warn!("{message}");
  }
}

#[cfg(test)]
pub(crate) fn recorded() -> Vec<String> {
  WARNINGS.with(|warnings| warnings.borrow().clone())
}
