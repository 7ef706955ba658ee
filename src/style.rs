use serde::{Deserialize, Serialize};

pub const NEUTRAL_GRAY: &str = "#6b7280";
const TONE_STRONG: &str = "#10b981";
const TONE_MEDIUM: &str = "#f59e0b";
const TONE_WEAK: &str = "#64748b";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub color: String,
    /// Opaque icon reference, resolved by the renderer.
    pub icon: String,
}

impl CategoryStyle {
    pub fn new(color: &str, icon: &str) -> Self {
        Self {
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self::new(NEUTRAL_GRAY, "folder")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub dash: Option<String>,
    pub marker_size: Option<f64>,
}

impl EdgeStyle {
    /// Root to category: solid stroke, default arrow head.
    pub fn root_link() -> Self {
        Self {
            stroke: NEUTRAL_GRAY.to_string(),
            stroke_width: 2.0,
            dash: None,
            marker_size: None,
        }
    }

    /// Category to file: dashed stroke, small arrow head.
    pub fn file_link() -> Self {
        Self {
            stroke: NEUTRAL_GRAY.to_string(),
            stroke_width: 1.5,
            dash: Some("5,5".to_string()),
            marker_size: Some(15.0),
        }
    }

    /// Platform spoke in the hub view.
    pub fn spoke() -> Self {
        Self {
            stroke: NEUTRAL_GRAY.to_string(),
            stroke_width: 1.0,
            dash: Some("8,4".to_string()),
            marker_size: Some(8.0),
        }
    }
}

/// Badge band for a file's relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceTone {
    Strong,
    Medium,
    Weak,
}

impl RelevanceTone {
    /// `None` for an absent or zero score, which renders no badge.
    pub fn for_score(score: Option<u8>) -> Option<Self> {
        match score? {
            0 => None,
            s if s >= 80 => Some(Self::Strong),
            s if s >= 50 => Some(Self::Medium),
            _ => Some(Self::Weak),
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Strong => TONE_STRONG,
            Self::Medium => TONE_MEDIUM,
            Self::Weak => TONE_WEAK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_bands() {
        assert_eq!(RelevanceTone::for_score(Some(100)), Some(RelevanceTone::Strong));
        assert_eq!(RelevanceTone::for_score(Some(80)), Some(RelevanceTone::Strong));
        assert_eq!(RelevanceTone::for_score(Some(79)), Some(RelevanceTone::Medium));
        assert_eq!(RelevanceTone::for_score(Some(50)), Some(RelevanceTone::Medium));
        assert_eq!(RelevanceTone::for_score(Some(12)), Some(RelevanceTone::Weak));
    }

    #[test]
    fn no_badge_without_score() {
        assert_eq!(RelevanceTone::for_score(None), None);
        assert_eq!(RelevanceTone::for_score(Some(0)), None);
    }

    #[test]
    fn file_links_are_dashed() {
        assert!(EdgeStyle::file_link().dash.is_some());
        assert!(EdgeStyle::root_link().dash.is_none());
        assert_eq!(RelevanceTone::Strong.color(), "#10b981");
    }
}
