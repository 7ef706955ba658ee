use serde::{Deserialize, Serialize};

pub use crate::catalog_builders::{CategoryBuilder, FileBuilder};
use crate::style::{CategoryStyle, NEUTRAL_GRAY};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    #[serde(rename = "ACC")]
    Acc,
    #[serde(rename = "M365")]
    M365,
    Bluebeam,
    Procore,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acc => "ACC",
            Self::M365 => "M365",
            Self::Bluebeam => "Bluebeam",
            Self::Procore => "Procore",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "acc" => Some(Self::Acc),
            "m365" => Some(Self::M365),
            "bluebeam" => Some(Self::Bluebeam),
            "procore" => Some(Self::Procore),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub extension: String,
    pub platform: Platform,
    pub summary: Option<String>,
}

impl FileEntry {
    pub fn builder(id: &str) -> FileBuilder {
        FileBuilder::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub style: CategoryStyle,
    pub files: Vec<FileEntry>,
}

impl Category {
    pub fn builder(id: &str) -> CategoryBuilder {
        CategoryBuilder::new(id)
    }
}

/// Fixed set of categories, built once per session and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn file_count(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    /// The construction-project sample data the search view ships with.
    pub fn sample() -> Self {
        Self::new(vec![
            projects(),
            documents(),
            drawings(),
            rfis(),
            teams(),
        ])
    }
}

fn file(id: &str, name: &str, ext: &str, platform: Platform, summary: &str) -> FileEntry {
    FileEntry::builder(id)
        .name(name)
        .extension(ext)
        .platform(platform)
        .summary(summary)
        .build()
}

fn projects() -> Category {
    Category::builder("projects")
        .label("Projects")
        .style(CategoryStyle::new(NEUTRAL_GRAY, "folder"))
        .file(file(
            "proj-1",
            "Downtown_Tower_Construction",
            "mpp",
            Platform::Acc,
            "42-story mixed-use tower project currently in foundation phase. Schedule shows 18-month timeline with steel erection beginning Q2 2025.",
        ))
        .file(file(
            "proj-2",
            "Harbor_Bridge_Renovation",
            "mpp",
            Platform::Acc,
            "Historic bridge restoration involving structural reinforcement and seismic retrofitting. Critical path includes night work during low traffic periods.",
        ))
        .file(file(
            "proj-3",
            "Medical_Center_Expansion",
            "mpp",
            Platform::Acc,
            "Three-phase hospital expansion adding 200 beds and surgical facilities. Coordination with active medical operations requires detailed sequencing.",
        ))
        .file(file(
            "proj-4",
            "Transit_Hub_Development",
            "mpp",
            Platform::Acc,
            "Multi-modal transportation facility integrating bus, rail, and pedestrian infrastructure. Fast-tracked delivery using design-build methodology.",
        ))
        .build()
}

fn documents() -> Category {
    Category::builder("documents")
        .label("Documents")
        .style(CategoryStyle::new(NEUTRAL_GRAY, "file-text"))
        .file(file(
            "doc-1",
            "Project_Specifications_v3.2",
            "docx",
            Platform::M365,
            "Updated technical specifications including revised concrete mix designs and waterproofing requirements. Incorporates feedback from structural engineer review.",
        ))
        .file(file(
            "doc-2",
            "Safety_Compliance_Report",
            "pdf",
            Platform::M365,
            "Monthly OSHA compliance audit showing zero recordable incidents. Highlights improved fall protection procedures and crane operator certification updates.",
        ))
        .file(file(
            "doc-3",
            "Meeting_Notes_Week_12",
            "docx",
            Platform::M365,
            "OAC meeting covering MEP coordination conflicts and schedule acceleration strategies. Action items assigned to subcontractor leads with two-week deadline.",
        ))
        .file(file(
            "doc-4",
            "Budget_Analysis_Q4",
            "xlsx",
            Platform::Acc,
            "Financial tracking report showing 3% cost savings in structural steel procurement. Forecasts minor overrun in sitework due to unexpected soil conditions.",
        ))
        .file(file(
            "doc-5",
            "Contract_Amendment_2024",
            "pdf",
            Platform::M365,
            "Change order package covering scope additions and extended project duration. Includes approved value engineering proposals and updated payment schedule.",
        ))
        .build()
}

fn drawings() -> Category {
    Category::builder("drawings")
        .label("Drawings")
        .style(CategoryStyle::new(NEUTRAL_GRAY, "layers"))
        .file(file(
            "draw-1",
            "A-101_Site_Plan",
            "dwg",
            Platform::Bluebeam,
            "Overall site layout showing building footprint, parking areas, and utility connections. Latest revision incorporates fire department access requirements and landscape buffer zones.",
        ))
        .file(file(
            "draw-2",
            "S-201_Structural_Detail",
            "dwg",
            Platform::Acc,
            "Foundation connection details for seismic zone compliance. Includes post-tensioned slab specifications and column base plate anchor configurations.",
        ))
        .file(file(
            "draw-3",
            "M-301_HVAC_Layout",
            "dwg",
            Platform::Bluebeam,
            "Mechanical system routing for floors 3-8 showing ductwork, equipment locations, and coordination with structural beams. Reflects recent value engineering changes.",
        ))
        .build()
}

fn rfis() -> Category {
    Category::builder("rfis")
        .label("RFIs")
        .style(CategoryStyle::new(NEUTRAL_GRAY, "alert-circle"))
        .file(file(
            "rfi-1",
            "RFI-024_Foundation_Clarification",
            "pdf",
            Platform::Bluebeam,
            "Request for clarification on pile cap reinforcement spacing due to conflicting details between structural drawings. Response received approving alternate bar configuration.",
        ))
        .file(file(
            "rfi-2",
            "RFI-031_Material_Substitution",
            "pdf",
            Platform::Acc,
            "Proposal to substitute specified curtain wall system with alternative manufacturer due to delivery delays. Architect approved with modifications to glazing specifications.",
        ))
        .file(file(
            "rfi-3",
            "RFI-045_Schedule_Conflict",
            "pdf",
            Platform::Bluebeam,
            "Coordination issue between electrical rough-in and drywall installation sequences. Resolution requires two-week schedule adjustment to avoid rework.",
        ))
        .build()
}

fn teams() -> Category {
    Category::builder("teams")
        .label("Teams")
        .style(CategoryStyle::new(NEUTRAL_GRAY, "users"))
        .file(file(
            "team-1",
            "Structural_Engineering_Team",
            "csv",
            Platform::Acc,
            "Six licensed engineers specializing in high-rise concrete design and seismic analysis. Lead by principal with 25 years experience in complex urban projects.",
        ))
        .file(file(
            "team-2",
            "MEP_Coordination_Group",
            "csv",
            Platform::Acc,
            "Cross-functional coordination team managing mechanical, electrical, and plumbing system integration. Conducts weekly BIM clash detection reviews and resolution workshops.",
        ))
        .file(file(
            "team-3",
            "Site_Management",
            "csv",
            Platform::M365,
            "On-site leadership including project superintendent, safety manager, and quality control inspector. Responsible for daily field operations and subcontractor coordination.",
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_has_five_categories() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["projects", "documents", "drawings", "rfis", "teams"]);
        assert_eq!(catalog.file_count(), 18);
    }

    #[test]
    fn file_ids_are_unique_across_categories() {
        let catalog = Catalog::sample();
        let mut seen = HashSet::new();
        for cat in catalog.categories() {
            for f in &cat.files {
                assert!(seen.insert(f.id.clone()), "duplicate file id {}", f.id);
            }
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.category("rfis").map(|c| c.label.as_str()), Some("RFIs"));
        assert!(catalog.category("nope").is_none());
    }

    #[test]
    fn platform_round_trips_through_str() {
        for p in [Platform::Acc, Platform::M365, Platform::Bluebeam, Platform::Procore] {
            assert_eq!(Platform::parse_str(p.as_str()), Some(p));
        }
        assert_eq!(Platform::parse_str("dropbox"), None);
    }

    #[test]
    fn builder_defaults() {
        let f = FileEntry::builder("x").name("Plan").extension("pdf").build();
        assert_eq!(f.platform, Platform::Acc);
        assert!(f.summary.is_none());
        let c = Category::builder("c").label("C").file(f).build();
        assert_eq!(c.files.len(), 1);
        assert_eq!(c.style, CategoryStyle::default());
    }
}
