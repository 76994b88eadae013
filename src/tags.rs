/// An ordered set of tag names parsed from a comma-separated list.
///
/// Tags are trimmed and lowercased; duplicates collapse to the first
/// occurrence. Membership checks are case-insensitive. Traversal order
/// of matched elements always follows document order, never the order
/// tags appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
  tags: Vec<String>,
}

impl TagSet {
  pub fn contains(&self, name: &str) -> bool {
    self.tags.iter().any(|tag| tag.eq_ignore_ascii_case(name))
  }

  pub fn is_empty(&self) -> bool {
    self.tags.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.tags.iter().map(String::as_str)
  }

  pub fn parse(input: &str) -> Self {
    let mut tags = Vec::new();

    for tag in input.split(',') {
      let tag = tag.trim().to_lowercase();

      if !tag.is_empty() && !tags.contains(&tag) {
        tags.push(tag);
      }
    }

    Self { tags }
  }
}

impl From<&str> for TagSet {
  fn from(input: &str) -> Self {
    Self::parse(input)
  }
}
