use super::*;

/// Transforms the computed slug for a heading before it is applied,
/// receiving the sanitized slug and the heading's raw anchor text.
pub type SlugHook = Box<dyn Fn(String, &str) -> String>;

/// Transforms anchor text before a link descriptor is assembled.
pub type AnchorTextHook = Box<dyn Fn(String, ElementRef<'_>) -> String>;

/// Post-processes the fully assembled list markup.
pub type OutputHook = Box<dyn Fn(String, &[Link]) -> String>;

/// Ordered hook chains for the three extension points.
///
/// Hooks run in registration order, each fully applied before the next.
/// The anchor-text chain starts out with [`truncate_at_line_break`] so
/// host-registered transforms see single-line text.
pub(crate) struct Hooks {
  anchor_text: Vec<AnchorTextHook>,
  output: Vec<OutputHook>,
  slug: Vec<SlugHook>,
}

impl Default for Hooks {
  fn default() -> Self {
    Self {
      anchor_text: vec![Box::new(truncate_at_line_break)],
      output: Vec::new(),
      slug: Vec::new(),
    }
  }
}

impl Hooks {
  pub(crate) fn add_anchor_text(&mut self, hook: AnchorTextHook) {
    self.anchor_text.push(hook);
  }

  pub(crate) fn add_output(&mut self, hook: OutputHook) {
    self.output.push(hook);
  }

  pub(crate) fn add_slug(&mut self, hook: SlugHook) {
    self.slug.push(hook);
  }

  pub(crate) fn apply_anchor_text(
    &self,
    text: String,
    element: ElementRef<'_>,
  ) -> String {
    self
      .anchor_text
      .iter()
      .fold(text, |text, hook| hook(text, element))
  }

  pub(crate) fn apply_output(&self, markup: String, links: &[Link]) -> String {
    self
      .output
      .iter()
      .fold(markup, |markup, hook| hook(markup, links))
  }

  pub(crate) fn apply_slug(&self, slug: String, anchor: &str) -> String {
    self.slug.iter().fold(slug, |slug, hook| hook(slug, anchor))
  }
}

/// Truncates anchor text at the first line break and trims surrounding
/// whitespace.
///
/// Upstream renderers sometimes leave stray line breaks inside heading
/// text, and only the first line is useful as a link label. The break is
/// found by literal character search, so regex metacharacters in the
/// text (`$`, `^`, `?`) carry no meaning.
pub fn truncate_at_line_break(
  text: String,
  _element: ElementRef<'_>,
) -> String {
  let text = text.trim();

  let text = match text.find(['\r', '\n']) {
    Some(position) => text[..position].trim_end(),
    None => text,
  };

  text.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn heading_fragment() -> Html {
    Html::parse_fragment("<h2>placeholder</h2>")
  }

  fn heading(html: &Html) -> ElementRef<'_> {
    html
      .tree
      .root()
      .descendants()
      .filter_map(ElementRef::wrap)
      .find(|element| element.value().name() == "h2")
      .expect("fragment should contain the heading")
  }

  #[test]
  fn truncation_leaves_breakless_text_alone() {
    let html = heading_fragment();

    assert_eq!(
      truncate_at_line_break("Gimme a $5 footlong".to_string(), heading(&html)),
      "Gimme a $5 footlong"
    );
  }

  #[test]
  fn truncation_cuts_at_the_first_line_break() {
    let html = heading_fragment();

    for input in
      ["Line one\nLine two", "Line one\r\nLine two", "Line one\rLine two"]
    {
      assert_eq!(
        truncate_at_line_break(input.to_string(), heading(&html)),
        "Line one"
      );
    }
  }

  #[test]
  fn truncation_trims_surrounding_whitespace() {
    let html = heading_fragment();

    assert_eq!(
      truncate_at_line_break("  padded \n tail".to_string(), heading(&html)),
      "padded"
    );
    assert_eq!(
      truncate_at_line_break(
        "\u{a0} nothing but space \u{a0}".to_string(),
        heading(&html)
      ),
      "nothing but space"
    );
  }

  #[test]
  fn anchor_text_hooks_run_in_registration_order() {
    let html = heading_fragment();

    let mut hooks = Hooks::default();

    hooks.add_anchor_text(Box::new(|text, _element: ElementRef<'_>| {
      format!("[{text}")
    }));
    hooks.add_anchor_text(Box::new(|text, _element: ElementRef<'_>| {
      format!("{text}]")
    }));

    assert_eq!(
      hooks.apply_anchor_text("label".to_string(), heading(&html)),
      "[label]"
    );
  }

  #[test]
  fn slug_hooks_see_the_raw_anchor_text() {
    let mut hooks = Hooks::default();

    hooks.add_slug(Box::new(|slug, anchor| {
      assert_eq!(anchor, "My Heading Text");
      format!("{slug}-custom")
    }));

    assert_eq!(
      hooks.apply_slug("my-heading-text".to_string(), "My Heading Text"),
      "my-heading-text-custom"
    );
  }
}
