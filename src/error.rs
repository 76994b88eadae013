#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("serialized fragment is not valid utf-8: {source}")]
  Encoding {
    #[from]
    source: std::string::FromUtf8Error,
  },
  #[error("failed to serialize fragment: {source}")]
  Serialize {
    #[from]
    source: std::io::Error,
  },
}
