use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  log::LevelFilter,
  simple_logger::SimpleLogger,
  std::{fs, path::PathBuf, process},
  toc::{TableOfContents, TocOptions},
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}

fn run() -> Result {
  SimpleLogger::new()
    .with_level(LevelFilter::Warn)
    .init()
    .context("failed to initialize logging")?;

  Arguments::parse().run()
}
