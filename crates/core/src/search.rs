//! Search constants and helpers.
//!
//! This module lives in `core` (zero internal deps) so the pattern builders
//! used by the repository layer and the pagination rules used by the
//! aggregator share a single definition.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per page when pagination is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum number of rows per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Number of movies shown on the landing page.
pub const POPULAR_MOVIES_LIMIT: i64 = 8;

// ---------------------------------------------------------------------------
// Credit matching
// ---------------------------------------------------------------------------

/// `ILIKE` pattern a crew job must match for the person to count as a director.
///
/// Substring match: "Assistant Director" and "Director of Photography"
/// qualify as well.
pub const DIRECTOR_JOB_PATTERN: &str = "%director%";

// ---------------------------------------------------------------------------
// Pattern builders
// ---------------------------------------------------------------------------

/// Trim surrounding whitespace from a raw search term.
pub fn normalize_term(raw: &str) -> &str {
    raw.trim()
}

/// Escape `ILIKE` metacharacters (`%`, `_`, and the `\` escape itself).
///
/// # Examples
///
/// ```
/// use cinedex_core::search::escape_like;
/// assert_eq!(escape_like("100%"), "100\\%");
/// assert_eq!(escape_like("a_b"), "a\\_b");
/// ```
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Pattern matching `term` anywhere in a column.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// Pattern matching `term` as a space-delimited word inside longer text.
pub fn word_pattern(term: &str) -> String {
    format!("% {} %", escape_like(term))
}

/// Pattern matching the whole column case-insensitively.
pub fn exact_pattern(value: &str) -> String {
    escape_like(value.trim())
}

// ---------------------------------------------------------------------------
// Category filters
// ---------------------------------------------------------------------------

/// Lookup dimension a movie listing can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Genre,
    Country,
    Language,
}

impl Category {
    /// Parse a path segment. Accepts the English names and the Spanish
    /// route names (`genero`, `pais`, `idioma`) used by older links.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "genre" | "genero" => Ok(Self::Genre),
            "country" | "pais" => Ok(Self::Country),
            "language" | "idioma" => Ok(Self::Language),
            other => Err(format!(
                "Invalid category '{other}'. Must be one of: genre, country, language"
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Country => "country",
            Self::Language => "language",
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A validated page request (1-based page number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Build a page request, clamping the page to `>= 1` and the size to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: clamp_page_size(page_size),
        }
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }

    /// Number of pages needed for `total` rows.
    pub fn total_pages(&self, total: usize) -> u32 {
        total.div_ceil(self.page_size as usize) as u32
    }
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_page_size(page_size: Option<u32>) -> u32 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// One ranked result list, optionally paginated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultList<T> {
    pub rows: Vec<T>,
    /// Size of the full ranked list before slicing.
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
}

impl<T> ResultList<T> {
    /// Wrap a complete list without pagination metadata.
    pub fn complete(rows: Vec<T>) -> Self {
        Self {
            total_count: rows.len(),
            rows,
            total_pages: None,
            current_page: None,
        }
    }

    /// Slice an already ordered list down to the requested page.
    ///
    /// Totals always describe the full list; a page past the end yields no rows.
    pub fn paginate(rows: Vec<T>, page: PageRequest) -> Self {
        let total_count = rows.len();
        let rows = rows
            .into_iter()
            .skip(page.offset())
            .take(page.page_size as usize)
            .collect();
        Self {
            rows,
            total_count,
            total_pages: Some(page.total_pages(total_count)),
            current_page: Some(page.page),
        }
    }

    /// Wrap a list, paginating only when a page request is present.
    pub fn build(rows: Vec<T>, page: Option<PageRequest>) -> Self {
        match page {
            Some(page) => Self::paginate(rows, page),
            None => Self::complete(rows),
        }
    }

    pub fn empty(page: Option<PageRequest>) -> Self {
        Self::build(Vec::new(), page)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
