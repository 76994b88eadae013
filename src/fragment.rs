use {super::*, html5ever::serialize::Serialize};

const ROOT_ID: &str = "toc-root";

/// A forgiving DOM view of a root-less HTML fragment.
///
/// The underlying tree needs a single root element, so the markup is
/// parsed inside a synthetic `div#toc-root` container that is stripped
/// back out during serialization. The synthetic wrapper is always the
/// outermost element, so it shadows any identically-named element the
/// input may contain.
pub(crate) struct Fragment {
  pub(crate) html: Html,
  root_id: NodeId,
}

impl Fragment {
  pub(crate) fn from_markup(markup: &str) -> Self {
    let wrapped = format!("<div id=\"{ROOT_ID}\">{markup}</div>");

    let html = Html::parse_fragment(&wrapped);

    for error in &html.errors {
      diagnostics::record(error.to_string());
    }

    let root_id = html
      .tree
      .root()
      .descendants()
      .find(|node| {
        matches!(
          node.value(),
          Node::Element(element) if element.id() == Some(ROOT_ID)
        )
      })
      .map_or_else(|| html.tree.root().id(), |node| node.id());

    Self { html, root_id }
  }

  pub(crate) fn into_markup(self) -> Result<String> {
    let Some(root) = self.html.tree.get(self.root_id) else {
      return Ok(String::new());
    };

    let mut buffer = Vec::new();

    serialize(
      &mut buffer,
      &FragmentRoot { node: root },
      SerializeOpts {
        scripting_enabled: false,
        traversal_scope: TraversalScope::ChildrenOnly(None),
        create_missing_parent: false,
      },
    )?;

    Ok(String::from_utf8(buffer)?.trim().to_string())
  }

  pub(crate) fn root(&self) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(self.root_id)
  }
}

/// Concatenates every descendant text node in document order, mirroring
/// a heading's visible text across nested inline markup.
pub(crate) fn text_content(node: NodeRef<'_, Node>) -> String {
  let mut text = String::new();

  for descendant in node.descendants() {
    if let Node::Text(value) = descendant.value() {
      text.push_str(value);
    }
  }

  text
}

struct FragmentRoot<'a> {
  node: NodeRef<'a, Node>,
}

impl Serialize for FragmentRoot<'_> {
  fn serialize<S: Serializer>(
    &self,
    serializer: &mut S,
    traversal_scope: TraversalScope,
  ) -> io::Result<()> {
    let children_only = traversal_scope == TraversalScope::ChildrenOnly(None);

    for edge in self.node.traverse() {
      match edge {
        Edge::Open(node) => {
          if children_only && node == self.node {
            continue;
          }

          match node.value() {
            Node::Element(element) => serializer.start_elem(
              element.name.clone(),
              element.attrs.iter().map(|(name, value)| (name, &value[..])),
            )?,
            Node::Text(text) => serializer.write_text(text)?,
            Node::Comment(comment) => serializer.write_comment(comment)?,
            Node::Doctype(doctype) => {
              serializer.write_doctype(doctype.name())?
            }
            _ => {}
          }
        }
        Edge::Close(node) => {
          if children_only && node == self.node {
            continue;
          }

          if let Some(element) = node.value().as_element() {
            serializer.end_elem(element.name.clone())?;
          }
        }
      }
    }

    Ok(())
  }
}
