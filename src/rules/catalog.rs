//! Release labels this tool knows how to create.
use crate::forge::types::CreateLabelRequest;

/// Color shared by every release label, in hex without a leading `#`.
pub const RELEASE_LABEL_COLOR: &str = "c5def5";

/// Canonical definition of a creatable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCatalogEntry {
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

impl LabelCatalogEntry {
    pub fn create_request(&self) -> CreateLabelRequest {
        CreateLabelRequest {
            name: self.name.to_string(),
            color: self.color.to_string(),
            description: self.description.to_string(),
        }
    }
}

pub const MAJOR: LabelCatalogEntry = LabelCatalogEntry {
    name: "Version: Major",
    color: RELEASE_LABEL_COLOR,
    description: "breaking change",
};

pub const MINOR: LabelCatalogEntry = LabelCatalogEntry {
    name: "Version: Minor",
    color: RELEASE_LABEL_COLOR,
    description: "feature",
};

pub const PATCH: LabelCatalogEntry = LabelCatalogEntry {
    name: "Version: Patch",
    color: RELEASE_LABEL_COLOR,
    description: "fix",
};

pub const TRIVIAL: LabelCatalogEntry = LabelCatalogEntry {
    name: "Version: Trivial",
    color: RELEASE_LABEL_COLOR,
    description: "no release notes needed",
};

pub const DOCS: LabelCatalogEntry = LabelCatalogEntry {
    name: "Docs",
    color: RELEASE_LABEL_COLOR,
    description: "documentation only",
};

/// Every label seeded into a repository, in creation order.
pub static LABEL_CATALOG: [LabelCatalogEntry; 5] =
    [MAJOR, MINOR, PATCH, TRIVIAL, DOCS];
