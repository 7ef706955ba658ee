use crate::catalog::Platform;
use crate::connector::{connector, Connector, Point, Rect, Size};
use crate::expansion::ExpansionState;
use crate::search::RankedCategory;
use crate::style::{EdgeStyle, RelevanceTone};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ROOT_ID: &str = "search";
pub const ROOT_PLACEHOLDER: &str = "Search Query";

pub const ROOT_SIZE: Size = Size::new(120.0, 48.0);
pub const CATEGORY_SIZE: Size = Size::new(120.0, 120.0);
pub const FILE_SIZE: Size = Size::new(200.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Distance between neighbouring category centers.
    pub horizontal_spacing: f64,
    /// Root top to category row top.
    pub category_offset: f64,
    /// Category top to first file top.
    pub file_offset: f64,
    /// Distance between stacked files.
    pub file_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 350.0,
            category_offset: 250.0,
            file_offset: 180.0,
            file_spacing: 140.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeData {
    Root {
        label: String,
    },
    Category {
        label: String,
        count: usize,
        expanded: bool,
        color: String,
        icon: String,
    },
    File {
        label: String,
        extension: String,
        file_type: String,
        platform: Platform,
        color: String,
        relevance: Option<u8>,
        tone: Option<RelevanceTone>,
        summary: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// Top-left corner.
    pub position: Point,
    pub size: Size,
    pub data: NodeData,
}

impl GraphNode {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    RootLink,
    FileLink,
    Spoke,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub animated: bool,
    pub style: EdgeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedEdge {
    pub edge_id: String,
    pub connector: Connector,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphLayout {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphLayout {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn root(&self) -> Option<&GraphNode> {
        self.nodes
            .iter()
            .find(|n| matches!(n.data, NodeData::Root { .. }))
    }

    pub fn category_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.data, NodeData::Category { .. }))
    }

    pub fn file_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.data, NodeData::File { .. }))
    }

    /// Endpoints for every edge whose nodes are both present.
    pub fn connectors(&self) -> Vec<RoutedEdge> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let source = self.node(&edge.source)?;
                let target = self.node(&edge.target)?;
                Some(RoutedEdge {
                    edge_id: edge.id.clone(),
                    connector: connector(&source.rect(), &target.rect()),
                })
            })
            .collect()
    }
}

/// Places the root, a centered row of categories beneath it, and a vertical
/// file stack under each expanded category.
pub fn layout(
    categories: &[RankedCategory<'_>],
    query: &str,
    expansion: &ExpansionState,
    config: &LayoutConfig,
) -> GraphLayout {
    let query_active = !query.is_empty();
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    let label = if query_active { query } else { ROOT_PLACEHOLDER };
    nodes.push(GraphNode {
        id: ROOT_ID.to_string(),
        position: Point::new(-ROOT_SIZE.width / 2.0, 0.0),
        size: ROOT_SIZE,
        data: NodeData::Root {
            label: label.to_string(),
        },
    });

    let row_span = categories.len().saturating_sub(1) as f64 * config.horizontal_spacing;
    let first_center = -row_span / 2.0;
    let category_y = config.category_offset;

    for (idx, ranked) in categories.iter().enumerate() {
        let category = ranked.category;
        let expanded = expansion.is_expanded(&category.id, query_active, !ranked.files.is_empty());
        let center_x = first_center + idx as f64 * config.horizontal_spacing;
        let category_x = center_x - CATEGORY_SIZE.width / 2.0;

        nodes.push(GraphNode {
            id: category.id.clone(),
            position: Point::new(category_x, category_y),
            size: CATEGORY_SIZE,
            data: NodeData::Category {
                label: category.label.clone(),
                count: ranked.files.len(),
                expanded,
                color: category.style.color.clone(),
                icon: category.style.icon.clone(),
            },
        });
        edges.push(GraphEdge {
            id: format!("{ROOT_ID}-{}", category.id),
            source: ROOT_ID.to_string(),
            target: category.id.clone(),
            kind: EdgeKind::RootLink,
            animated: !expanded,
            style: EdgeStyle::root_link(),
        });

        if !expanded {
            continue;
        }

        let file_x = center_x - FILE_SIZE.width / 2.0;
        for (file_idx, scored) in ranked.files.iter().enumerate() {
            let file = scored.file;
            let file_y = category_y + config.file_offset + file_idx as f64 * config.file_spacing;
            nodes.push(GraphNode {
                id: file.id.clone(),
                position: Point::new(file_x, file_y),
                size: FILE_SIZE,
                data: NodeData::File {
                    label: file.name.clone(),
                    extension: file.extension.clone(),
                    file_type: file.extension.to_uppercase(),
                    platform: file.platform,
                    color: category.style.color.clone(),
                    relevance: scored.relevance,
                    tone: RelevanceTone::for_score(scored.relevance),
                    summary: file.summary.clone(),
                },
            });
            edges.push(GraphEdge {
                id: format!("{}-{}", category.id, file.id),
                source: category.id.clone(),
                target: file.id.clone(),
                kind: EdgeKind::FileLink,
                animated: false,
                style: EdgeStyle::file_link(),
            });
        }
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "laid out search graph");
    GraphLayout { nodes, edges }
}
