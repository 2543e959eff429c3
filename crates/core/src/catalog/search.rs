//! Search aggregator.
//!
//! Turns a free-text term (or a category filter) into three ranked,
//! de-duplicated lists: movies, actors and directors. Ranking is a fixed
//! set of tiers concatenated in order; there is no relevance scoring.
//!
//! Movie tiers:
//! 1. title starts with the term,
//! 2. title contains the term,
//! 3. overview or tagline contains the term as a space-delimited word.
//!
//! People tiers: name starts with the term, then name contains it.
//! All comparisons are case-insensitive. An empty term skips tiering and
//! lists everything alphabetically.

use std::collections::HashSet;

use serde::Serialize;

use super::model::{MovieSummary, PersonRole, PersonSummary};
use super::source::{CatalogError, CatalogSource};
use crate::search::{normalize_term, Category, PageRequest, ResultList};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Category filter that replaces term search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFilter {
    pub category: Category,
    pub value: String,
}

/// Independent page positions for the three result lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPages {
    pub movies: PageRequest,
    pub actors: PageRequest,
    pub directors: PageRequest,
}

#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub term: String,
    pub filter: Option<CategoryFilter>,
    /// `None` returns complete lists.
    pub pagination: Option<SearchPages>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// The normalized term, or `None` in category mode.
    pub to_search: Option<String>,
    pub filter: Option<CategoryFilter>,
    pub movies: ResultList<MovieSummary>,
    pub actors: ResultList<PersonSummary>,
    pub directors: ResultList<PersonSummary>,
    /// Page of the movie list, when paginated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Priority bucket a candidate falls into. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Prefix,
    Substring,
    RelatedText,
}

/// Best tier for a movie, or `None` if it does not match at all.
///
/// `term` must already be lowercase.
pub fn movie_tier(term: &str, movie: &MovieSummary) -> Option<MatchTier> {
    let title = movie.title.to_lowercase();
    if title.starts_with(term) {
        return Some(MatchTier::Prefix);
    }
    if title.contains(term) {
        return Some(MatchTier::Substring);
    }

    let word = format!(" {term} ");
    let in_text = |text: &Option<String>| {
        text.as_deref()
            .is_some_and(|t| t.to_lowercase().contains(&word))
    };
    if in_text(&movie.overview) || in_text(&movie.tagline) {
        return Some(MatchTier::RelatedText);
    }
    None
}

/// Best tier for a person name. People have no related-text tier.
///
/// `term` must already be lowercase.
pub fn person_tier(term: &str, name: &str) -> Option<MatchTier> {
    let name = name.to_lowercase();
    if name.starts_with(term) {
        Some(MatchTier::Prefix)
    } else if name.contains(term) {
        Some(MatchTier::Substring)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Drop repeated ids, keeping the first occurrence.
fn dedup_by_id<T>(rows: Vec<T>, id: impl Fn(&T) -> DbId) -> Vec<T> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|row| seen.insert(id(row))).collect()
}

/// Order movie candidates for `term`.
///
/// Non-matching candidates are dropped. Each movie lands in its best tier
/// only, so a movie never appears twice.
pub fn rank_movies(term: &str, candidates: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut movies = dedup_by_id(candidates, |m| m.id);

    if term.is_empty() {
        movies.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        return movies;
    }

    let term = term.to_lowercase();
    let mut tiered: Vec<(MatchTier, MovieSummary)> = movies
        .into_iter()
        .filter_map(|m| movie_tier(&term, &m).map(|tier| (tier, m)))
        .collect();
    tiered.sort_by(|(ta, a), (tb, b)| {
        ta.cmp(tb)
            .then_with(|| a.title.cmp(&b.title))
            .then(a.id.cmp(&b.id))
    });
    tiered.into_iter().map(|(_, m)| m).collect()
}

/// Order people candidates for `term`, one entry per person id.
pub fn rank_people(term: &str, candidates: Vec<PersonSummary>) -> Vec<PersonSummary> {
    let mut people = dedup_by_id(candidates, |p| p.id);

    if term.is_empty() {
        people.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        return people;
    }

    let term = term.to_lowercase();
    let mut tiered: Vec<(MatchTier, PersonSummary)> = people
        .into_iter()
        .filter_map(|p| person_tier(&term, &p.name).map(|tier| (tier, p)))
        .collect();
    tiered.sort_by(|(ta, a), (tb, b)| {
        ta.cmp(tb)
            .then_with(|| a.name.cmp(&b.name))
            .then(a.id.cmp(&b.id))
    });
    tiered.into_iter().map(|(_, p)| p).collect()
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Unwrap a sub-search result, degrading failures to an empty list.
fn rows_or_empty<T>(sub_search: &'static str, result: Result<Vec<T>, CatalogError>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(sub_search, error = %err, "Sub-search failed, returning empty list");
            Vec::new()
        }
    }
}

/// Run a search against `source`.
///
/// Never fails: each sub-search that errors contributes an empty list.
pub async fn search<S: CatalogSource>(source: &S, request: &SearchRequest) -> SearchResults {
    let pages = request.pagination;

    if let Some(filter) = &request.filter {
        return search_category(source, filter, pages).await;
    }

    let term = normalize_term(&request.term);

    // The three sub-searches are independent.
    let (movies, actors, directors) = tokio::join!(
        source.movie_candidates(term),
        source.people_candidates(term, PersonRole::Actor),
        source.people_candidates(term, PersonRole::Director),
    );

    let movies = rank_movies(term, rows_or_empty("movies", movies));
    let actors = rank_people(term, rows_or_empty("actors", actors));
    let directors = rank_people(term, rows_or_empty("directors", directors));

    tracing::debug!(
        term,
        movies = movies.len(),
        actors = actors.len(),
        directors = directors.len(),
        "Search ranked",
    );

    SearchResults {
        to_search: Some(term.to_string()),
        filter: None,
        movies: ResultList::build(movies, pages.map(|p| p.movies)),
        actors: ResultList::build(actors, pages.map(|p| p.actors)),
        directors: ResultList::build(directors, pages.map(|p| p.directors)),
        current_page: pages.map(|p| p.movies.page),
    }
}

/// Category mode: one alphabetical movie list, no people.
async fn search_category<S: CatalogSource>(
    source: &S,
    filter: &CategoryFilter,
    pages: Option<SearchPages>,
) -> SearchResults {
    let rows = rows_or_empty(
        "category",
        source.movies_in_category(filter.category, &filter.value).await,
    );
    let mut movies = dedup_by_id(rows, |m| m.id);
    movies.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

    tracing::debug!(
        category = filter.category.as_str(),
        value = %filter.value,
        movies = movies.len(),
        "Category listing built",
    );

    SearchResults {
        to_search: None,
        filter: Some(filter.clone()),
        movies: ResultList::build(movies, pages.map(|p| p.movies)),
        actors: ResultList::empty(pages.map(|p| p.actors)),
        directors: ResultList::empty(pages.map(|p| p.directors)),
        current_page: pages.map(|p| p.movies.page),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
