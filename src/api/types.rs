//! Listing API response types.
//!
//! Post records themselves stay opaque [`serde_json::Value`]s: which fields
//! matter depends on the media type strategy applied to them, and the raw
//! data strategy saves the record verbatim.

use serde::Deserialize;
use serde_json::Value;

/// Envelope the listing endpoint wraps every response in.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

/// Listing payload: one page of posts plus the cursor for the next page.
#[derive(Debug, Deserialize)]
pub struct ListingData {
    /// Opaque pagination cursor. Absent or null on the last page.
    #[serde(default)]
    pub after: Option<String>,

    #[serde(default)]
    pub children: Vec<ListingChild>,
}

/// One listing entry; the post record lives under `data`.
#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: Value,
}

/// A flattened page of post records, as consumed by the scrape loop.
#[derive(Debug)]
pub struct ListingPage {
    pub posts: Vec<Value>,
    pub after: Option<String>,
}

impl Listing {
    /// Flatten the envelope into the page shape the scrape loop works with.
    pub fn into_page(self) -> ListingPage {
        ListingPage {
            after: self.data.after,
            posts: self.data.children.into_iter().map(|c| c.data).collect(),
        }
    }
}
