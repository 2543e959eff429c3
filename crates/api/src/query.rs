//! Query parameter types for the search endpoints.

use cinedex_core::catalog::search::SearchPages;
use cinedex_core::search::PageRequest;
use serde::Deserialize;

/// Query parameters for `GET /search`.
///
/// Each result list pages independently. Pagination is enabled as soon as
/// `page_size` or any page number is present.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub movies_page: Option<u32>,
    pub actors_page: Option<u32>,
    pub directors_page: Option<u32>,
    pub page_size: Option<u32>,
}

impl SearchParams {
    pub fn pagination(&self) -> Option<SearchPages> {
        let requested = self.page_size.is_some()
            || self.movies_page.is_some()
            || self.actors_page.is_some()
            || self.directors_page.is_some();
        requested.then(|| SearchPages {
            movies: PageRequest::new(self.movies_page, self.page_size),
            actors: PageRequest::new(self.actors_page, self.page_size),
            directors: PageRequest::new(self.directors_page, self.page_size),
        })
    }
}

/// Query parameters for `GET /search/{category}/{value}`.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl CategoryPageParams {
    pub fn pagination(&self) -> Option<SearchPages> {
        if self.page.is_none() && self.page_size.is_none() {
            return None;
        }
        let page = PageRequest::new(self.page, self.page_size);
        Some(SearchPages {
            movies: page,
            actors: page,
            directors: page,
        })
    }
}
