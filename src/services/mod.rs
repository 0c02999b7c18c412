pub mod discovery;
pub mod lexicon;
pub mod library;
pub mod providers;
pub mod resolver;

pub use lexicon::Lexicon;
pub use providers::MetadataProvider;
