//! Keyword intent responder for the chat widget
//!
//! Maps free text to a canned reply: normalize (trim, lowercase), walk the
//! catalog in declaration order, stop at the first category with a keyword
//! contained in the input, pick one of its replies at random. Inputs that
//! match nothing get a reply from the fallback pool.
//!
//! The responder holds no conversation state. Each call is independent.

mod builtin;
mod catalog;
mod picker;

#[cfg(test)]
mod proptests;

pub use builtin::WELCOME_MESSAGE;
pub use catalog::{IntentCatalog, IntentCategory};
pub use picker::{ReplyPicker, SeededPicker, ThreadRngPicker};

#[cfg(test)]
pub use picker::FixedPicker;

use std::sync::Arc;

/// Outcome of a lookup: the chosen reply and the category it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// `None` when the reply came from the fallback pool
    pub intent: Option<&'a str>,
    pub reply: &'a str,
}

pub struct IntentResponder {
    catalog: IntentCatalog,
    picker: Arc<dyn ReplyPicker>,
}

impl IntentResponder {
    pub fn new(catalog: IntentCatalog, picker: Arc<dyn ReplyPicker>) -> Self {
        Self { catalog, picker }
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Reply for `input`. Total over all strings.
    #[allow(dead_code)] // Plain-text entry point; the HTTP layer uses resolve()
    pub fn get_response(&self, input: &str) -> &str {
        self.resolve(input).reply
    }

    /// Same as `get_response`, also reporting which category answered
    pub fn resolve(&self, input: &str) -> Resolution<'_> {
        match self.match_category(input) {
            Some(category) => Resolution {
                intent: Some(category.id.as_str()),
                reply: self.choose(&category.replies),
            },
            None => Resolution {
                intent: None,
                reply: self.choose(self.catalog.fallback()),
            },
        }
    }

    /// First category (in declaration order) with a keyword in `input`
    pub fn match_category(&self, input: &str) -> Option<&IntentCategory> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }
        self.catalog
            .categories()
            .iter()
            .find(|category| category.first_hit(&normalized).is_some())
    }

    /// Greeting for a freshly opened chat window
    pub fn welcome(&self) -> &'static str {
        WELCOME_MESSAGE
    }

    fn choose<'a>(&self, pool: &'a [String]) -> &'a str {
        // Catalog validation guarantees non-empty pools; clamp a misbehaving picker
        let index = self.picker.pick(pool.len()).min(pool.len().saturating_sub(1));
        pool.get(index).map_or("", String::as_str)
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
