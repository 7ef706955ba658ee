use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// User override for one category's expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expansion {
    /// Expanded only when a query is active and the category has matches.
    #[default]
    Auto,
    ExplicitExpanded,
    ExplicitCollapsed,
}

impl Expansion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::ExplicitExpanded => "expanded",
            Self::ExplicitCollapsed => "collapsed",
        }
    }

    pub fn resolve(&self, query_active: bool, has_matches: bool) -> bool {
        match self {
            Self::ExplicitExpanded => true,
            Self::ExplicitCollapsed => false,
            Self::Auto => query_active && has_matches,
        }
    }
}

/// Per-category overrides. Categories without an entry are `Auto`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    overrides: BTreeMap<String, Expansion>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category_id: &str) -> Expansion {
        self.overrides
            .get(category_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn set(&mut self, category_id: &str, expansion: Expansion) {
        if expansion == Expansion::Auto {
            self.overrides.remove(category_id);
        } else {
            self.overrides.insert(category_id.to_string(), expansion);
        }
    }

    pub fn is_expanded(&self, category_id: &str, query_active: bool, has_matches: bool) -> bool {
        self.get(category_id).resolve(query_active, has_matches)
    }

    /// Flips a category between expanded and explicitly collapsed, starting
    /// from what is currently on screen.
    pub fn toggle(&mut self, category_id: &str, currently_expanded: bool) -> Expansion {
        let next = if currently_expanded {
            Expansion::ExplicitCollapsed
        } else {
            Expansion::ExplicitExpanded
        };
        self.set(category_id, next);
        next
    }

    /// A new query re-runs auto-expansion, so collapses made for the old one go.
    /// Explicit expansions stay.
    pub fn on_query_change(&mut self) {
        let before = self.overrides.len();
        self.overrides
            .retain(|_, e| *e != Expansion::ExplicitCollapsed);
        debug!(cleared = before - self.overrides.len(), "cleared explicit collapses");
    }

    pub fn overrides(&self) -> impl Iterator<Item = (&str, Expansion)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
