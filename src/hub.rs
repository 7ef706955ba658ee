use crate::catalog::Platform;
use crate::connector::{Point, Size};
use crate::layout::{EdgeKind, GraphEdge};
use crate::style::EdgeStyle;
use serde::{Deserialize, Serialize};

pub const HUB_ID: &str = "hub";
pub const FRAME: Size = Size::new(900.0, 650.0);
pub const RING_RADIUS: f64 = 270.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncStats {
    pub uptime: String,
    pub sync_errors: u32,
    pub last_sync: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Health {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCard {
    /// Node id, also the source of the platform's spoke.
    pub id: String,
    pub platform: Platform,
    pub name: String,
    /// Opaque logo reference.
    pub logo: String,
    pub color: String,
    /// Degrees clockwise from the positive x axis (screen coordinates).
    pub angle: f64,
    pub stats: SyncStats,
}

impl PlatformCard {
    pub fn health(&self) -> Health {
        if self.stats.sync_errors == 0 {
            Health::Healthy
        } else {
            Health::Degraded
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlatform {
    #[serde(flatten)]
    pub card: PlatformCard,
    /// Center of the card inside the frame.
    pub center: Point,
    pub health: Health,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubLayout {
    pub frame: Size,
    pub hub_id: String,
    pub hub_center: Point,
    pub title: String,
    pub subtitle: String,
    pub platforms: Vec<PlacedPlatform>,
    pub edges: Vec<GraphEdge>,
}

impl HubLayout {
    pub fn platform(&self, id: &str) -> Option<&PlacedPlatform> {
        self.platforms.iter().find(|p| p.card.id == id)
    }
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: &str,
    platform: Platform,
    name: &str,
    logo: &str,
    color: &str,
    angle: f64,
    uptime: &str,
    sync_errors: u32,
    last_sync: &str,
) -> PlatformCard {
    PlatformCard {
        id: id.to_string(),
        platform,
        name: name.to_string(),
        logo: logo.to_string(),
        color: color.to_string(),
        angle,
        stats: SyncStats {
            uptime: uptime.to_string(),
            sync_errors,
            last_sync: last_sync.to_string(),
        },
    }
}

pub fn sample_platforms() -> Vec<PlatformCard> {
    vec![
        card(
            "acc",
            Platform::Acc,
            "Autodesk ACC",
            "/services/autodesk-logo.svg",
            "#0696D7",
            0.0,
            "99.8%",
            0,
            "2m ago",
        ),
        card(
            "m365",
            Platform::M365,
            "Microsoft 365",
            "/services/ms-sharepoint.svg",
            "#0078D4",
            90.0,
            "100%",
            0,
            "5m ago",
        ),
        card(
            "bluebeam",
            Platform::Bluebeam,
            "Bluebeam",
            "/services/bluebeam.svg",
            "#0066CC",
            180.0,
            "98.5%",
            2,
            "1m ago",
        ),
        card(
            "procore",
            Platform::Procore,
            "Procore",
            "/services/procore.png",
            "#FF6900",
            270.0,
            "99.9%",
            0,
            "3m ago",
        ),
    ]
}

/// Offset from the ring center for `angle` degrees at `radius`.
pub fn ring_offset(angle: f64, radius: f64) -> Point {
    let radians = angle.to_radians();
    Point::new(radians.cos() * radius, radians.sin() * radius)
}

pub fn hub_layout(platforms: &[PlatformCard]) -> HubLayout {
    let hub_center = Point::new(FRAME.width / 2.0, FRAME.height / 2.0);

    let placed: Vec<PlacedPlatform> = platforms
        .iter()
        .map(|card| {
            let offset = ring_offset(card.angle, RING_RADIUS);
            PlacedPlatform {
                center: Point::new(hub_center.x + offset.x, hub_center.y + offset.y),
                health: card.health(),
                card: card.clone(),
            }
        })
        .collect();

    let edges = platforms
        .iter()
        .map(|card| GraphEdge {
            id: format!("spoke-{}", card.id),
            source: card.id.clone(),
            target: HUB_ID.to_string(),
            kind: EdgeKind::Spoke,
            animated: true,
            style: EdgeStyle::spoke(),
        })
        .collect();

    HubLayout {
        frame: FRAME,
        hub_id: HUB_ID.to_string(),
        hub_center,
        title: "DatumOS".to_string(),
        subtitle: "Knowledge Hub".to_string(),
        platforms: placed,
        edges,
    }
}
