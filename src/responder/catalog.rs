//! Intent catalog: ordered keyword categories plus the fallback pool
//!
//! Declaration order is match priority. The catalog is validated once at
//! construction and is read-only afterwards.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// One intent: trigger keywords and the replies it may answer with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IntentCategory {
    pub id: String,
    pub keywords: Vec<String>,
    pub replies: Vec<String>,
}

impl IntentCategory {
    pub fn new<K, R>(id: impl Into<String>, keywords: K, replies: R) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            id: id.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }

    /// First keyword contained in `normalized`, in declaration order
    pub fn first_hit(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|kw| normalized.contains(kw))
    }
}

/// Errors raised while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("category at position {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate category id: {0}")]
    DuplicateId(String),

    #[error("category {0} has no keywords")]
    NoKeywords(String),

    #[error("category {0} has a blank keyword")]
    BlankKeyword(String),

    #[error("category {0} has no replies")]
    NoReplies(String),

    #[error("fallback reply pool is empty")]
    EmptyFallback,

    #[error("fallback reply is also used by category {category}: {reply}")]
    SharedFallbackReply { category: String, reply: String },

    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk catalog shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<IntentCategory>,
    fallback: Vec<String>,
}

/// Validated, immutable intent table
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    categories: Vec<IntentCategory>,
    fallback: Vec<String>,
}

impl IntentCatalog {
    /// Validate and build a catalog. Keywords are trimmed and lower-cased.
    pub fn new(
        categories: Vec<IntentCategory>,
        fallback: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(categories.len());

        for (position, category) in categories.into_iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(category.id.clone()) {
                return Err(CatalogError::DuplicateId(category.id));
            }
            if category.keywords.is_empty() {
                return Err(CatalogError::NoKeywords(category.id));
            }
            if category.replies.is_empty() {
                return Err(CatalogError::NoReplies(category.id));
            }

            let keywords: Vec<String> = category
                .keywords
                .iter()
                .map(|kw| kw.trim().to_lowercase())
                .collect();
            if keywords.iter().any(String::is_empty) {
                return Err(CatalogError::BlankKeyword(category.id));
            }

            normalized.push(IntentCategory {
                id: category.id,
                keywords,
                replies: category.replies,
            });
        }

        if fallback.is_empty() {
            return Err(CatalogError::EmptyFallback);
        }
        for reply in &fallback {
            if let Some(owner) = normalized.iter().find(|c| c.replies.contains(reply)) {
                return Err(CatalogError::SharedFallbackReply {
                    category: owner.id.clone(),
                    reply: reply.clone(),
                });
            }
        }

        Ok(Self {
            categories: normalized,
            fallback,
        })
    }

    /// Parse a JSON catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories, file.fallback)
    }

    /// Load a JSON catalog from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn categories(&self) -> &[IntentCategory] {
        &self.categories
    }

    pub fn fallback(&self) -> &[String] {
        &self.fallback
    }

    #[allow(dead_code)] // Used by tests and tooling
    pub fn get(&self, id: &str) -> Option<&IntentCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[allow(dead_code)] // Pairs with len()
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
