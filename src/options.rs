use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
  /// Tags that receive anchor ids during injection.
  pub inject_tags: TagSet,
  /// Class attribute applied to the assembled `<nav>` wrapper.
  pub list_class: String,
  /// Tags collected into the link list; may be narrower than
  /// `inject_tags`.
  pub select_tags: TagSet,
}

impl Default for TocOptions {
  fn default() -> Self {
    Self {
      inject_tags: TagSet::from("h1,h2,h3,h4,h5,h6"),
      list_class: String::from("table-of-contents"),
      select_tags: TagSet::from("h1,h2,h3"),
    }
  }
}

impl TocOptions {
  #[must_use]
  pub fn builder() -> TocOptionsBuilder {
    TocOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct TocOptionsBuilder {
  inner: TocOptions,
}

impl TocOptionsBuilder {
  #[must_use]
  pub fn build(self) -> TocOptions {
    self.inner
  }

  #[must_use]
  pub fn inject_tags(self, tags: impl Into<TagSet>) -> Self {
    Self {
      inner: TocOptions {
        inject_tags: tags.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn list_class(self, list_class: impl Into<String>) -> Self {
    Self {
      inner: TocOptions {
        list_class: list_class.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn select_tags(self, tags: impl Into<TagSet>) -> Self {
    Self {
      inner: TocOptions {
        select_tags: tags.into(),
        ..self.inner
      },
    }
  }
}
