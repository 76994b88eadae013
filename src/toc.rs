use super::*;

/// Anchors headings in an HTML fragment and derives a table of contents
/// from them.
///
/// One value can be reused across renders; every operation parses its
/// input fresh and keeps no state between calls.
pub struct TableOfContents {
  #[cfg(feature = "dom")]
  hooks: Hooks,
  options: TocOptions,
}

/// The product of a full render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
  /// The input fragment with anchor ids injected.
  pub content: String,
  /// Link descriptors for every surviving match, in document order.
  pub links: Vec<Link>,
  /// Assembled list markup; `None` when no links survived, so callers
  /// can skip rendering an empty wrapper.
  pub markup: Option<String>,
}

impl TableOfContents {
  pub fn new(options: TocOptions) -> Self {
    Self {
      #[cfg(feature = "dom")]
      hooks: Hooks::default(),
      options,
    }
  }
}

impl Default for TableOfContents {
  fn default() -> Self {
    Self::new(TocOptions::default())
  }
}

#[cfg(feature = "dom")]
impl TableOfContents {
  /// Assigns a slug id to every whitelisted element that does not
  /// already carry one.
  ///
  /// Existing non-empty ids are kept, so the operation is idempotent.
  /// Headings whose text sanitizes to the same slug end up sharing an
  /// id; no deduplication is attempted.
  pub fn inject_heading_ids(&self, content: &str) -> Result<String> {
    let _capture = CaptureGuard::acquire();

    let mut fragment = Fragment::from_markup(content);

    inject::inject_heading_ids(
      &mut fragment,
      &self.options.inject_tags,
      &self.hooks,
    );

    fragment.into_markup()
  }

  /// Collects link descriptors from the id-bearing elements of an
  /// already-anchored fragment, in document order.
  pub fn link_list(&self, content: &str) -> Result<Vec<Link>> {
    let _capture = CaptureGuard::acquire();

    let fragment = Fragment::from_markup(content);

    Ok(links::collect(&fragment, &self.options.select_tags, &self.hooks))
  }

  /// Runs the full pipeline: inject ids, collect links, assemble the
  /// list markup.
  pub fn render(&self, content: &str) -> Result<Outline> {
    let _capture = CaptureGuard::acquire();

    let mut fragment = Fragment::from_markup(content);

    inject::inject_heading_ids(
      &mut fragment,
      &self.options.inject_tags,
      &self.hooks,
    );

    let links =
      links::collect(&fragment, &self.options.select_tags, &self.hooks);

    let markup = (!links.is_empty()).then(|| {
      self.hooks.apply_output(
        render::link_list(&links, &self.options.list_class),
        &links,
      )
    });

    Ok(Outline {
      content: fragment.into_markup()?,
      links,
      markup,
    })
  }

  /// Registers a transform over the computed slug for each heading.
  pub fn on_heading_id(
    &mut self,
    hook: impl Fn(String, &str) -> String + 'static,
  ) -> &mut Self {
    self.hooks.add_slug(Box::new(hook));
    self
  }

  /// Registers a transform over anchor text before link assembly.
  pub fn on_anchor_text(
    &mut self,
    hook: impl Fn(String, ElementRef<'_>) -> String + 'static,
  ) -> &mut Self {
    self.hooks.add_anchor_text(Box::new(hook));
    self
  }

  /// Registers a transform over the assembled list markup.
  pub fn on_output(
    &mut self,
    hook: impl Fn(String, &[Link]) -> String + 'static,
  ) -> &mut Self {
    self.hooks.add_output(Box::new(hook));
    self
  }
}

#[cfg(not(feature = "dom"))]
impl TableOfContents {
  pub fn inject_heading_ids(&self, content: &str) -> Result<String> {
    log::warn!(
      "unable to inject id attributes; html parsing support was compiled out"
    );

    Ok(content.to_string())
  }

  pub fn link_list(&self, _content: &str) -> Result<Vec<Link>> {
    log::warn!(
      "unable to collect links; html parsing support was compiled out"
    );

    Ok(Vec::new())
  }

  pub fn render(&self, content: &str) -> Result<Outline> {
    log::warn!(
      "unable to build a table of contents; html parsing support was compiled out"
    );

    Ok(Outline {
      content: content.to_string(),
      links: Vec::new(),
      markup: None,
    })
  }
}
