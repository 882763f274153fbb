pub mod rss_atom;
pub mod traits;

pub use rss_atom::RssAtomReader;
pub use traits::FeedReader;
