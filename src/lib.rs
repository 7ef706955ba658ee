pub mod catalog;
pub mod catalog_builders;
pub mod config;
pub mod connector;
pub mod expansion;
pub mod hub;
pub mod layout;
pub mod search;
pub mod session_server;
pub mod style;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::expansion::{Expansion, ExpansionState};
use crate::hub::{hub_layout, sample_platforms, HubLayout, PlatformCard};
use crate::layout::{layout, GraphLayout};
use crate::search::{SearchEngine, SearchResults};
use anyhow::{bail, Result};
use serde::Serialize;
use tracing::info;

/// What the canvas should show for the current query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum View {
    Hub(HubLayout),
    Search(GraphLayout),
}

/// One search session: static catalog plus the query and expansion choices.
#[derive(Debug, Clone)]
pub struct DatumEngine {
    catalog: Catalog,
    platforms: Vec<PlatformCard>,
    config: Config,
    query: String,
    expansion: ExpansionState,
}

impl DatumEngine {
    pub fn new(catalog: Catalog, platforms: Vec<PlatformCard>, config: Config) -> Self {
        Self {
            catalog,
            platforms,
            config,
            query: String::new(),
            expansion: ExpansionState::new(),
        }
    }

    pub fn with_sample_data(config: Config) -> Self {
        Self::new(Catalog::sample(), sample_platforms(), config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Returns whether the query actually changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        info!(from = %self.query, to = %query, "query changed");
        self.query = query.to_string();
        self.expansion.on_query_change();
        true
    }

    pub fn search(&self) -> SearchResults<'_> {
        SearchEngine::new(&self.catalog, self.config.fuzzy).search(&self.query)
    }

    pub fn graph(&self) -> GraphLayout {
        let results = self.search();
        layout(
            &results.categories,
            &self.query,
            &self.expansion,
            &self.config.layout,
        )
    }

    pub fn hub(&self) -> HubLayout {
        hub_layout(&self.platforms)
    }

    pub fn view(&self) -> View {
        if self.query.is_empty() {
            View::Hub(self.hub())
        } else {
            View::Search(self.graph())
        }
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        let has_matches = self.search().has_matches(category_id);
        self.expansion
            .is_expanded(category_id, !self.query.is_empty(), has_matches)
    }

    /// Flips the category relative to what is currently shown. Categories the
    /// current query filtered out are accepted and end up explicitly expanded,
    /// so they open as soon as a later query (or an empty one) shows them.
    pub fn toggle_category(&mut self, category_id: &str) -> Result<Expansion> {
        self.ensure_category(category_id)?;
        let currently_expanded = self.is_expanded(category_id);
        let next = self.expansion.toggle(category_id, currently_expanded);
        info!(category = category_id, state = next.as_str(), "toggled category");
        Ok(next)
    }

    pub fn set_expansion(&mut self, category_id: &str, expansion: Expansion) -> Result<()> {
        self.ensure_category(category_id)?;
        self.expansion.set(category_id, expansion);
        Ok(())
    }

    fn ensure_category(&self, category_id: &str) -> Result<()> {
        if self.catalog.category(category_id).is_none() {
            bail!("unknown category: {category_id}");
        }
        Ok(())
    }
}
