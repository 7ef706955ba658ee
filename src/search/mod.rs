pub mod policy;
pub mod score;

use crate::catalog::{Catalog, Category, FileEntry};
use serde::Serialize;
use tracing::debug;

pub use policy::{max_results, min_threshold};
pub use score::{score, score_with, FuzzyMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFile<'a> {
    #[serde(flatten)]
    pub file: &'a FileEntry,
    /// Only set while a query is active.
    pub relevance: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCategory<'a> {
    pub category: &'a Category,
    pub files: Vec<ScoredFile<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub query: String,
    pub categories: Vec<RankedCategory<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    pub fn has_matches(&self, category_id: &str) -> bool {
        self.categories.iter().any(|c| c.category.id == category_id)
    }
}

pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
    fuzzy: FuzzyMode,
}

impl<'a> SearchEngine<'a> {
    pub fn new(catalog: &'a Catalog, fuzzy: FuzzyMode) -> Self {
        Self { catalog, fuzzy }
    }

    /// Scores every file, drops those under the length-dependent floor, keeps
    /// the top N by score and regroups them under their categories.
    pub fn search(&self, query: &str) -> SearchResults<'a> {
        let query_len = query.chars().count();
        let active = query_len > 0;
        let cap = max_results(query_len);
        let floor = min_threshold(query_len);
        let fuzzy = self.fuzzy;

        let mut hits: Vec<(usize, &'a FileEntry, u8)> = self
            .catalog
            .categories()
            .iter()
            .enumerate()
            .flat_map(|(cat_idx, cat)| {
                cat.files
                    .iter()
                    .map(move |f| (cat_idx, f, score_with(&f.name, query, fuzzy)))
            })
            .filter(|(_, _, s)| !active || (*s > 0 && *s >= floor))
            .collect();

        // sort_by is stable: equal scores keep catalog order
        hits.sort_by(|a, b| b.2.cmp(&a.2));
        hits.truncate(cap);

        let categories: Vec<RankedCategory<'a>> = self
            .catalog
            .categories()
            .iter()
            .enumerate()
            .filter_map(|(cat_idx, category)| {
                let files: Vec<ScoredFile<'a>> = hits
                    .iter()
                    .filter(|&&(idx, _, _)| idx == cat_idx)
                    .map(|&(_, file, s)| ScoredFile {
                        file,
                        relevance: active.then_some(s),
                    })
                    .collect();
                (!files.is_empty()).then_some(RankedCategory { category, files })
            })
            .collect();

        debug!(
            query,
            cap,
            floor,
            hits = hits.len(),
            categories = categories.len(),
            "ranked catalog"
        );

        SearchResults {
            query: query.to_string(),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<'a>(results: &'a SearchResults<'_>) -> Vec<&'a str> {
        results
            .categories
            .iter()
            .flat_map(|c| c.files.iter().map(|f| f.file.id.as_str()))
            .collect()
    }

    #[test]
    fn empty_query_returns_everything_unscored() {
        let catalog = Catalog::sample();
        let results = SearchEngine::new(&catalog, FuzzyMode::default()).search("");
        assert_eq!(results.categories.len(), 5);
        assert_eq!(results.file_count(), catalog.file_count());
        assert!(results
            .categories
            .iter()
            .flat_map(|c| &c.files)
            .all(|f| f.relevance.is_none()));
    }

    #[test]
    fn rfi_query_keeps_only_rfis() {
        let catalog = Catalog::sample();
        let results = SearchEngine::new(&catalog, FuzzyMode::default()).search("RFI");
        assert_eq!(results.categories.len(), 1);
        assert_eq!(results.categories[0].category.id, "rfis");
        assert_eq!(ids(&results), ["rfi-1", "rfi-2", "rfi-3"]);
        assert!(results.categories[0]
            .files
            .iter()
            .all(|f| f.relevance.is_some_and(|s| s >= 80)));
    }

    #[test]
    fn prefix_outranks_whole_word_across_categories() {
        let catalog = Catalog::sample();
        let results = SearchEngine::new(&catalog, FuzzyMode::default()).search("site");
        // category order follows the catalog, not the score
        let cats: Vec<&str> = results.categories.iter().map(|c| c.category.id.as_str()).collect();
        assert_eq!(cats, ["drawings", "teams"]);
        let drawing = &results.categories[0].files[0];
        let team = &results.categories[1].files[0];
        assert_eq!((drawing.file.id.as_str(), drawing.relevance), ("draw-1", Some(80)));
        assert_eq!((team.file.id.as_str(), team.relevance), ("team-3", Some(90)));
    }

    #[test]
    fn exact_name_ranks_first_in_category() {
        let catalog = Catalog::sample();
        let results =
            SearchEngine::new(&catalog, FuzzyMode::default()).search("Site_Management");
        let teams = results
            .categories
            .iter()
            .find(|c| c.category.id == "teams")
            .expect("teams survives");
        assert_eq!(teams.files[0].file.id, "team-3");
        assert_eq!(teams.files[0].relevance, Some(100));
    }

    #[test]
    fn cap_limits_short_queries() {
        let catalog = Catalog::sample();
        let results = SearchEngine::new(&catalog, FuzzyMode::default()).search("e");
        assert!(results.file_count() <= 8);
        assert!(results.file_count() > 0);
    }

    #[test]
    fn nonsense_query_yields_empty_results() {
        let catalog = Catalog::sample();
        let results = SearchEngine::new(&catalog, FuzzyMode::default()).search("zzzzqqqq");
        assert!(results.is_empty());
        assert!(!results.has_matches("projects"));
    }

    #[test]
    fn search_is_idempotent() {
        let catalog = Catalog::sample();
        let engine = SearchEngine::new(&catalog, FuzzyMode::default());
        assert_eq!(engine.search("struct").categories, engine.search("struct").categories);
    }
}
