use super::*;

#[derive(Parser)]
#[command(name = "toc")]
#[command(
  about = "Inject heading anchor ids into an HTML fragment and build a table of contents",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(value_name = "FILE", help = "Path to the HTML fragment to process")]
  input: PathBuf,
  #[arg(
    long,
    default_value = "h1,h2,h3,h4,h5,h6",
    help = "Comma-separated tags that receive anchor ids"
  )]
  inject_tags: String,
  #[arg(
    long,
    default_value = "h1,h2,h3",
    help = "Comma-separated tags collected into the link list"
  )]
  select_tags: String,
  #[arg(
    long,
    conflicts_with = "markup",
    help = "Print the link list as JSON instead of the content"
  )]
  links: bool,
  #[arg(
    long,
    help = "Print the assembled list markup instead of the content"
  )]
  markup: bool,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let content = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let options = TocOptions::builder()
      .inject_tags(self.inject_tags.as_str())
      .select_tags(self.select_tags.as_str())
      .build();

    let outline = TableOfContents::new(options)
      .render(&content)
      .context("failed to process fragment")?;

    if self.links {
      println!("{}", serde_json::to_string_pretty(&outline.links)?);
    } else if self.markup {
      if let Some(markup) = outline.markup {
        println!("{markup}");
      }
    } else {
      println!("{}", outline.content);
    }

    Ok(())
  }
}
