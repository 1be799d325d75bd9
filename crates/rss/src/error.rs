use thiserror::Error;

#[derive(Debug, Error)]
pub enum RssError {
    #[error("Failed to write RSS document: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("RSS document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
