//! Domain types for one aggregation request.

use serde::{Deserialize, Serialize};

/// Sentinel standing in for data no source could supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// The merged company profile produced per request.
///
/// The field set is fixed and closed: every field is always present, and
/// missing data is the [`NOT_AVAILABLE`] sentinel rather than an absent
/// key. Records are created fresh for each request and discarded after
/// one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Short description of the company
    pub description: String,

    /// Company website URL (or a best-effort substitute)
    pub website: String,

    /// Chief executive officer
    pub ceo: String,

    /// Industry sector
    pub industry: String,

    /// Career opportunities
    pub career: String,

    /// Main products or services
    pub products: String,

    /// Headquarters location
    pub location: String,

    /// Main competitors
    pub competitors: String,

    /// Contact email
    pub email: String,
}

impl Default for CompanyRecord {
    fn default() -> Self {
        Self {
            description: NOT_AVAILABLE.to_string(),
            website: NOT_AVAILABLE.to_string(),
            ceo: NOT_AVAILABLE.to_string(),
            industry: NOT_AVAILABLE.to_string(),
            career: NOT_AVAILABLE.to_string(),
            products: NOT_AVAILABLE.to_string(),
            location: NOT_AVAILABLE.to_string(),
            competitors: NOT_AVAILABLE.to_string(),
            email: NOT_AVAILABLE.to_string(),
        }
    }
}

impl CompanyRecord {
    /// Create a record with every field at the sentinel value.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Normalized output of the search-snippet fetcher.
///
/// Empty strings stand for "no usable result"; the merge pipeline falls
/// back to the language-model source for empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSnippet {
    /// Snippet text from the top organic result
    pub description: String,

    /// Result link, or its title when the link is absent
    pub website: String,
}

impl SearchSnippet {
    /// Create a snippet with both fields populated.
    pub fn new(description: impl Into<String>, website: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            website: website.into(),
        }
    }

    /// Snippet standing for "the search found nothing usable".
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A single record field, used by the parser to route matched lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Website,
    Ceo,
    Industry,
    Career,
    Products,
    Location,
    Competitors,
    Email,
}

/// Marker table for key matching, in checked order.
///
/// A lowercased key is matched by substring against each marker in turn;
/// the first hit wins. The order is part of the parser's contract: a key
/// containing two markers (e.g. "location of competitors") resolves to
/// whichever appears first here.
pub(crate) const FIELD_MARKERS: [(&str, Field); 9] = [
    ("description", Field::Description),
    ("website", Field::Website),
    ("ceo", Field::Ceo),
    ("industry", Field::Industry),
    ("career", Field::Career),
    ("products", Field::Products),
    ("location", Field::Location),
    ("competitors", Field::Competitors),
    ("email", Field::Email),
];

impl Field {
    /// Overwrite this field on `record`.
    pub(crate) fn set(self, record: &mut CompanyRecord, value: impl Into<String>) {
        let value = value.into();
        match self {
            Field::Description => record.description = value,
            Field::Website => record.website = value,
            Field::Ceo => record.ceo = value,
            Field::Industry => record.industry = value,
            Field::Career => record.career = value,
            Field::Products => record.products = value,
            Field::Location => record.location = value,
            Field::Competitors => record.competitors = value,
            Field::Email => record.email = value,
        }
    }
}
