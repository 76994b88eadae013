use super::*;

/// A single table-of-contents entry pointing at an anchored heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
  pub id: String,
  pub text: String,
}

#[cfg(feature = "dom")]
pub(crate) fn collect(
  fragment: &Fragment,
  tags: &TagSet,
  hooks: &Hooks,
) -> Vec<Link> {
  let Some(root) = fragment.root() else {
    return Vec::new();
  };

  let mut links = Vec::new();

  for node in root.descendants() {
    let Some(element) = ElementRef::wrap(node) else {
      continue;
    };

    if !tags.contains(element.value().name()) {
      continue;
    }

    let id = match element.value().attr("id") {
      Some(id) if !id.is_empty() => id.to_string(),
      _ => continue,
    };

    let text = hooks.apply_anchor_text(fragment::text_content(node), element);

    if text.is_empty() {
      continue;
    }

    links.push(Link { id, text });
  }

  links
}
