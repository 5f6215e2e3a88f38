/// Shared data structures for the project catalog
///
/// These structs represent the data model that flows between
/// the embedded catalog and the UI layer.

use serde::{Deserialize, Serialize};

/// Partition of the catalog into the two home-screen groups
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Personal,
    Professional,
}

impl ProjectKind {
    /// Section heading used on the home screen
    pub fn heading(&self) -> &'static str {
        match self {
            ProjectKind::Personal => "Personal Projects",
            ProjectKind::Professional => "Professional Work",
        }
    }

    /// Short label used on back buttons ("Personal" / "Professional")
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Personal => "Personal",
            ProjectKind::Professional => "Professional",
        }
    }
}

/// A single project in the catalog
///
/// Projects are loaded once at startup and never mutated. Image fields hold
/// site-absolute references ("/projects/...") that the asset library
/// resolves against the local assets root.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique slug, stable identifier used for routing and lookups
    pub id: String,
    pub title: String,
    pub genre: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    /// Primary thumbnail/hero reference
    pub image: String,
    pub overview: Overview,
    pub role_skills: RoleSkills,
    /// Ordered screenshot references; may be empty
    #[serde(default)]
    pub screenshots: Vec<String>,
    /// Ordered narrative sections; each id doubles as an in-page anchor
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

impl Project {
    /// Whether the gallery has anything to show
    pub fn has_screenshots(&self) -> bool {
        !self.screenshots.is_empty()
    }
}

/// Project overview facts shown in the detail header panel
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Overview {
    /// Ordered paragraphs
    pub description: Vec<String>,
    pub engine: String,
    pub timeframe: String,
    pub team: String,
}

/// Role description bullets plus short skill badges
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleSkills {
    pub description: Vec<String>,
    pub badges: Vec<String>,
}

/// A narrative section of the detail page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    /// Anchor target; unique within a project and distinct from the
    /// reserved anchors (overview, screenshots, reflection)
    pub id: String,
    /// Ordered paragraphs
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsections: Option<Vec<Subsection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<SectionImage>>,
}

/// A titled card inside a section, holding either a bullet list
/// or a grid of pillar tiles
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subsection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillars: Option<Vec<Pillar>>,
}

/// One tile of a design-pillar grid
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pillar {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
}

/// A section image, with or without a caption
///
/// The catalog allows both shapes, so this deserializes from either a bare
/// path string or a {src, caption} object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SectionImage {
    Plain(String),
    Captioned { src: String, caption: String },
}

impl SectionImage {
    pub fn src(&self) -> &str {
        match self {
            SectionImage::Plain(src) => src,
            SectionImage::Captioned { src, .. } => src,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            SectionImage::Plain(_) => None,
            SectionImage::Captioned { caption, .. } => Some(caption),
        }
    }
}

/// Outbound store/repository links
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        let json = serde_json::to_string(&ProjectKind::Professional).unwrap();
        assert_eq!(json, "\"professional\"");

        let kind: ProjectKind = serde_json::from_str("\"personal\"").unwrap();
        assert_eq!(kind, ProjectKind::Personal);
    }

    #[test]
    fn test_section_image_accepts_both_shapes() {
        let plain: SectionImage = serde_json::from_str("\"/projects/map.png\"").unwrap();
        assert_eq!(plain.src(), "/projects/map.png");
        assert!(plain.caption().is_none());

        let captioned: SectionImage =
            serde_json::from_str(r#"{"src": "/projects/floor.png", "caption": "Floor 1"}"#)
                .unwrap();
        assert_eq!(captioned.src(), "/projects/floor.png");
        assert_eq!(captioned.caption(), Some("Floor 1"));
    }

    #[test]
    fn test_project_deserializes_camel_case() {
        let json = r#"{
            "id": "demo",
            "title": "Demo",
            "genre": "Puzzle",
            "role": "Solo Developer",
            "type": "personal",
            "image": "/projects/demo/cover.png",
            "overview": {
                "description": ["One paragraph."],
                "engine": "Unreal Engine 5",
                "timeframe": "2 weeks",
                "team": "Solo"
            },
            "roleSkills": {
                "description": ["Did everything"],
                "badges": ["Unreal Engine 5"]
            },
            "screenshots": [],
            "sections": [],
            "links": { "playStore": "https://example.com" }
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "demo");
        assert_eq!(project.kind, ProjectKind::Personal);
        assert!(!project.has_screenshots());
        assert_eq!(
            project.links.unwrap().play_store.as_deref(),
            Some("https://example.com")
        );
        assert!(project.video.is_none());
    }
}
