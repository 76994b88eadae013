use super::*;

pub(crate) fn inject_heading_ids(
  fragment: &mut Fragment,
  tags: &TagSet,
  hooks: &Hooks,
) {
  let Some(root) = fragment.root() else {
    return;
  };

  let headings: Vec<(NodeId, String)> = root
    .descendants()
    .filter(|node| {
      matches!(
        node.value(),
        Node::Element(element)
          if tags.contains(element.name())
            && element.attr("id").is_none_or(str::is_empty)
      )
    })
    .map(|node| (node.id(), fragment::text_content(node)))
    .collect();

  for (node_id, anchor) in headings {
    let id = heading_id(&anchor, hooks);

    let Some(mut node) = fragment.html.tree.get_mut(node_id) else {
      continue;
    };

    let Node::Element(element) = node.value() else {
      continue;
    };

    set_attribute(element, "id", &id);
  }
}

/// Derives the id for a heading from its anchor text: the title
/// sanitizer first, then any registered slug hooks. Collisions between
/// headings that sanitize to the same slug are left as-is.
pub(crate) fn heading_id(anchor: &str, hooks: &Hooks) -> String {
  hooks.apply_slug(slug::slugify(anchor), anchor)
}

fn set_attribute(element: &mut Element, name: &str, value: &str) {
  if let Some(index) = element
    .attrs
    .iter()
    .position(|(attr_name, _)| attr_name.local.as_ref() == name)
  {
    element.attrs[index].1.clear();
    element.attrs[index].1.push_slice(value);
  } else {
    let mut attr_value = StrTendril::new();
    attr_value.push_slice(value);

    element.attrs.push((
      QualName::new(None, ns!(), LocalName::from(name)),
      attr_value,
    ));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn inject(markup: &str, tags: &str) -> String {
    let mut fragment = Fragment::from_markup(markup);

    inject_heading_ids(&mut fragment, &TagSet::from(tags), &Hooks::default());

    fragment.into_markup().unwrap()
  }

  #[test]
  fn assigns_slug_ids_to_bare_headings() {
    assert_eq!(
      inject("<h2>First heading</h2>", "h1,h2,h3"),
      "<h2 id=\"first-heading\">First heading</h2>"
    );
  }

  #[test]
  fn walks_every_whitelisted_tag() {
    assert_eq!(
      inject("<h1>Heading 1</h1><h2>Heading 2</h2>", "h1,h2,h3,h4,h5,h6"),
      "<h1 id=\"heading-1\">Heading 1</h1><h2 id=\"heading-2\">Heading 2</h2>"
    );
  }

  #[test]
  fn respects_the_tag_whitelist() {
    assert_eq!(
      inject(
        "<h1>Heading 1</h1><blockquote>Some quote</blockquote>",
        "h2,blockquote"
      ),
      "<h1>Heading 1</h1><blockquote id=\"some-quote\">Some quote</blockquote>"
    );
  }

  #[test]
  fn keeps_existing_ids() {
    assert_eq!(
      inject("<h2 id=\"my-custom-id\">First heading</h2>", "h1,h2,h3"),
      "<h2 id=\"my-custom-id\">First heading</h2>"
    );
  }

  #[test]
  fn fills_in_an_empty_id_in_place() {
    assert_eq!(
      inject("<h2 id=\"\" class=\"plain\">First heading</h2>", "h1,h2,h3"),
      "<h2 id=\"first-heading\" class=\"plain\">First heading</h2>"
    );
  }

  #[test]
  fn derives_ids_from_nested_inline_text() {
    assert_eq!(
      inject("<h2>First <em>heading</em></h2>", "h1,h2,h3"),
      "<h2 id=\"first-heading\">First <em>heading</em></h2>"
    );
  }

  #[test]
  fn slug_hooks_override_the_sanitized_id() {
    let mut fragment = Fragment::from_markup("<h2>First heading</h2>");

    let mut hooks = Hooks::default();

    hooks.add_slug(Box::new(|id, _anchor| format!("section-{id}")));

    inject_heading_ids(&mut fragment, &TagSet::from("h2"), &hooks);

    assert_eq!(
      fragment.into_markup().unwrap(),
      "<h2 id=\"section-first-heading\">First heading</h2>"
    );
  }
}
