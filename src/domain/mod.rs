pub mod article;
pub mod digest;
pub mod language;
pub mod source;

pub use article::ArticleEntry;
pub use digest::{DigestFragment, OutboundMessage};
pub use language::Language;
pub use source::Source;
