#[cfg(feature = "dom")]
use {
  diagnostics::CaptureGuard,
  ego_tree::{NodeId, NodeRef, iter::Edge},
  fragment::Fragment,
  hooks::Hooks,
  html5ever::{
    LocalName, QualName, namespace_url, ns,
    serialize::{SerializeOpts, Serializer, TraversalScope, serialize},
  },
  scraper::{ElementRef, Html, Node, node::Element},
  std::io,
  tendril::StrTendril,
};

use {
  serde::{Deserialize, Serialize},
  std::cell::{Cell, RefCell},
};

pub use crate::{
  error::Error,
  links::Link,
  options::{TocOptions, TocOptionsBuilder},
  tags::TagSet,
  toc::{Outline, TableOfContents},
};

#[cfg(feature = "dom")]
pub use crate::hooks::{
  AnchorTextHook, OutputHook, SlugHook, truncate_at_line_break,
};

mod diagnostics;
mod error;
#[cfg(feature = "dom")]
mod fragment;
#[cfg(feature = "dom")]
mod hooks;
#[cfg(feature = "dom")]
mod inject;
mod links;
mod options;
mod render;
mod tags;
mod toc;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
