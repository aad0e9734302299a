use std::path::Path;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::models::Article;
use crate::Result;

/// Read-only handle over the load-time article sequence.
///
/// Cloning is cheap; every clone sees the same immutable slice. Articles
/// are identified positionally: the article at index `i` has id `i + 1`.
/// Ids are only stable because the sequence never changes after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    articles: Arc<[Article]>,
}

impl Dataset {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: articles.into(),
        }
    }

    /// Parse a JSON array of articles.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let articles: Vec<Article> = serde_json::from_str(raw)?;
        Ok(Self::new(articles))
    }

    /// Read and parse a dataset file. Any failure here is a startup
    /// failure; the process must not serve traffic without a dataset.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The full sequence, in load order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Positional lookup with `id = index + 1`; valid iff `1 <= id <= len`.
    /// Anything else, including whatever a non-numeric path segment parses
    /// to, is `None`.
    pub fn by_id(&self, id: i64) -> Option<&Article> {
        if id < 1 {
            return None;
        }
        self.articles.get(id as usize - 1)
    }

    /// Exact string equality on the `date` field, load order preserved.
    pub fn by_date(&self, date: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.date == date).collect()
    }

    /// Exact string equality on the `category` field.
    pub fn by_category(&self, category: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Case-sensitive full-name match on the `authors` field.
    pub fn by_author(&self, author: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.authors == author)
            .collect()
    }

    /// Case-insensitive substring match on the `authors` field.
    pub fn by_author_partial(&self, partial: &str) -> Vec<&Article> {
        let needle = partial.to_lowercase();
        self.articles
            .iter()
            .filter(|a| a.authors.to_lowercase().contains(&needle))
            .collect()
    }

    /// Uniform pick over the sequence; `None` when it is empty.
    pub fn random(&self) -> Option<&Article> {
        self.articles.choose(&mut rand::thread_rng())
    }
}
