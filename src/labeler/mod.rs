// Labeler module: turns product titles into short thumbnail labels.

pub mod thumbnail;

pub use thumbnail::ThumbnailLabeler;

/// Derives a display label from a product title.
pub trait LabelExtractor {
    fn extract(&self, title: &str) -> String;
}
