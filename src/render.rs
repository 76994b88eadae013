use super::*;

pub(crate) fn link_list(links: &[Link], class: &str) -> String {
  let items: String = links
    .iter()
    .map(|link| {
      format!(
        "<li><a href=\"#{}\">{}</a></li>",
        html_escape::encode_double_quoted_attribute(&link.id),
        html_escape::encode_text(&link.text),
      )
    })
    .collect();

  format!(
    "<nav class=\"{}\"><ul>{items}</ul></nav>",
    html_escape::encode_double_quoted_attribute(class),
  )
}
