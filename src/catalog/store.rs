use thiserror::Error;

use super::data::{Project, ProjectKind};

/// Anchor ids the detail page always provides, in page order
pub const RESERVED_ANCHORS: [&str; 3] = ["overview", "screenshots", "reflection"];

/// The catalog JSON compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../assets/projects.json");

/// Errors raised while loading or validating the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project id '{0}'")]
    DuplicateProject(String),

    #[error("project '{project}' has duplicate section id '{section}'")]
    DuplicateSection { project: String, section: String },

    #[error("project '{project}' uses reserved anchor id '{section}'")]
    ReservedAnchor { project: String, section: String },
}

/// The Catalog holds the ordered, read-only project table.
///
/// It is constructed once at startup and handed to whatever renders the
/// home and detail screens; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Load the catalog shipped inside the binary
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// Validate an already-built project list (used by tests with fixtures)
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        validate(&projects)?;
        Ok(Catalog { projects })
    }

    /// Number of projects in the catalog
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// All projects in catalog order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Exact lookup by slug. Unknown ids return None; callers render the
    /// not-found screen instead of failing.
    pub fn get_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All projects of one kind, preserving catalog order.
    /// Returns an empty vec when nothing matches.
    pub fn get_by_kind(&self, kind: ProjectKind) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.kind == kind).collect()
    }
}

/// One entry of the detail page's quick-nav sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Anchor id of the target section
    pub anchor: String,
    /// Label shown in the sidebar
    pub title: String,
}

impl NavItem {
    fn new(anchor: &str, title: &str) -> Self {
        NavItem {
            anchor: anchor.to_string(),
            title: title.to_string(),
        }
    }
}

/// Build the ordered quick-nav list for a project: the reserved overview
/// and screenshots anchors first, then the project's own sections, then
/// the reflection anchor.
pub fn nav_items(project: &Project) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::new("overview", "Project Overview"),
        NavItem::new("screenshots", "Screenshots"),
    ];
    for section in &project.sections {
        items.push(NavItem::new(&section.id, &section.title));
    }
    items.push(NavItem::new("reflection", "Reflection"));
    items
}

/// Check catalog invariants: project ids unique across the catalog,
/// section ids unique within a project and distinct from reserved anchors.
fn validate(projects: &[Project]) -> Result<(), CatalogError> {
    let mut seen_ids: Vec<&str> = Vec::with_capacity(projects.len());

    for project in projects {
        if seen_ids.contains(&project.id.as_str()) {
            return Err(CatalogError::DuplicateProject(project.id.clone()));
        }
        seen_ids.push(&project.id);

        let mut seen_sections: Vec<&str> = Vec::with_capacity(project.sections.len());
        for section in &project.sections {
            if RESERVED_ANCHORS.contains(&section.id.as_str()) {
                return Err(CatalogError::ReservedAnchor {
                    project: project.id.clone(),
                    section: section.id.clone(),
                });
            }
            if seen_sections.contains(&section.id.as_str()) {
                return Err(CatalogError::DuplicateSection {
                    project: project.id.clone(),
                    section: section.id.clone(),
                });
            }
            seen_sections.push(&section.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::{Overview, RoleSkills, Section};

    fn project(id: &str, kind: ProjectKind) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            genre: "Puzzle".to_string(),
            role: "Solo Developer".to_string(),
            kind,
            image: format!("/projects/{}/cover.png", id),
            overview: Overview {
                description: vec!["A test project.".to_string()],
                engine: "Unreal Engine 5".to_string(),
                timeframe: "2 weeks".to_string(),
                team: "Solo".to_string(),
            },
            role_skills: RoleSkills {
                description: vec!["Everything".to_string()],
                badges: vec!["Testing".to_string()],
            },
            screenshots: Vec::new(),
            sections: Vec::new(),
            links: None,
            video: None,
            pdf: None,
        }
    }

    fn section(id: &str) -> Section {
        Section {
            title: id.to_uppercase(),
            id: id.to_string(),
            content: vec!["Text.".to_string()],
            bullets: None,
            subsections: None,
            images: None,
        }
    }

    #[test]
    fn test_embedded_catalog_loads_and_validates() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());

        // Every record is reachable by its own id.
        for project in catalog.projects() {
            let found = catalog.get_by_id(&project.id).unwrap();
            assert_eq!(found, project);
        }
    }

    #[test]
    fn test_kind_partitions_cover_catalog() {
        let catalog = Catalog::load().unwrap();
        let personal = catalog.get_by_kind(ProjectKind::Personal);
        let professional = catalog.get_by_kind(ProjectKind::Professional);

        assert!(personal.iter().all(|p| p.kind == ProjectKind::Personal));
        assert!(professional
            .iter()
            .all(|p| p.kind == ProjectKind::Professional));
        assert_eq!(personal.len() + professional.len(), catalog.len());
    }

    #[test]
    fn test_get_by_id_unknown_returns_none() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.get_by_id("unknown-id").is_none());
        assert!(catalog.get_by_id("").is_none());
    }

    #[test]
    fn test_get_by_kind_preserves_catalog_order() {
        let catalog = Catalog::from_projects(vec![
            project("a", ProjectKind::Personal),
            project("b", ProjectKind::Professional),
            project("c", ProjectKind::Personal),
            project("d", ProjectKind::Professional),
            project("e", ProjectKind::Professional),
        ])
        .unwrap();

        let personal: Vec<&str> = catalog
            .get_by_kind(ProjectKind::Personal)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let professional: Vec<&str> = catalog
            .get_by_kind(ProjectKind::Professional)
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(personal, vec!["a", "c"]);
        assert_eq!(professional, vec!["b", "d", "e"]);
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let result = Catalog::from_projects(vec![
            project("same", ProjectKind::Personal),
            project("same", ProjectKind::Professional),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateProject(id)) if id == "same"));
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let mut p = project("demo", ProjectKind::Personal);
        p.sections = vec![section("design"), section("design")];

        let result = Catalog::from_projects(vec![p]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateSection { section, .. }) if section == "design"
        ));
    }

    #[test]
    fn test_reserved_anchor_rejected() {
        let mut p = project("demo", ProjectKind::Personal);
        p.sections = vec![section("overview")];

        let result = Catalog::from_projects(vec![p]);
        assert!(matches!(
            result,
            Err(CatalogError::ReservedAnchor { section, .. }) if section == "overview"
        ));
    }

    #[test]
    fn test_nav_items_wrap_project_sections() {
        let mut p = project("demo", ProjectKind::Personal);
        p.sections = vec![section("design"), section("layout")];

        let anchors: Vec<String> = nav_items(&p).into_iter().map(|i| i.anchor).collect();
        assert_eq!(
            anchors,
            vec!["overview", "screenshots", "design", "layout", "reflection"]
        );
    }

    #[test]
    fn test_nav_items_without_sections() {
        let p = project("demo", ProjectKind::Personal);
        let anchors: Vec<String> = nav_items(&p).into_iter().map(|i| i.anchor).collect();
        assert_eq!(anchors, vec!["overview", "screenshots", "reflection"]);
    }
}
