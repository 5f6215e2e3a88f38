use iced::widget::{container, scrollable};
use iced::{keyboard, Element, Rectangle, Subscription, Task, Theme};
use std::collections::HashMap;
use std::path::PathBuf;

// Declare the application modules
mod catalog;
mod config;
mod gallery;
mod media;
mod nav;
mod ui;

use catalog::store::{nav_items, Catalog};
use config::SiteConfig;
use gallery::{Gallery, KeyPress};
use media::assets::AssetLibrary;
use media::player::HeroMedia;
use media::thumbnail;
use nav::scroll_spy::{Band, ScrollSpy};

/// Id of the home screen's scroll pane
pub fn home_scroll_id() -> scrollable::Id {
    scrollable::Id::new("home-scroll")
}

/// Id of the detail screen's scroll pane
pub fn detail_scroll_id() -> scrollable::Id {
    scrollable::Id::new("detail-scroll")
}

/// Main application state
pub struct Portfolio {
    pub config: SiteConfig,
    /// The injected, read-only project table
    pub catalog: Catalog,
    /// Index of the media files on disk
    pub assets: AssetLibrary,
    /// Card-size cover renditions, filled in by the background warm-up
    pub covers: HashMap<PathBuf, PathBuf>,
    /// Hero reel playback state
    pub reel: HeroMedia,
    pub screen: Screen,
    /// Status line shown in the footer bar
    pub status: String,
}

/// The two logical views plus the fallback for unknown project ids
pub enum Screen {
    Home,
    Detail(DetailScreen),
    NotFound { requested: String },
}

/// Per-visit state of the project detail screen.
///
/// Dropping this (by navigating elsewhere) is the scroll-spy teardown:
/// probe results still in flight are recognized as stale and ignored.
pub struct DetailScreen {
    pub id: String,
    pub gallery: Gallery,
    pub spy: ScrollSpy,
    /// Chip-size screenshot renditions keyed by source path
    pub chips: HashMap<PathBuf, PathBuf>,
    /// Visibility band derived from the latest scroll event
    band: Option<Band>,
    /// Scroll pane bounds in window coordinates
    pane: Option<Rectangle>,
    /// Absolute scroll offset at the latest scroll event
    scroll_top: f32,
    /// Content offsets of anchors whose top edge has been on screen,
    /// used to scroll to a clicked nav entry
    offsets: HashMap<String, f32>,
}

impl DetailScreen {
    /// Build the per-visit state and kick off chip thumbnail generation
    fn new(
        project: &catalog::data::Project,
        assets: &AssetLibrary,
    ) -> (Self, Task<Message>) {
        let anchors = nav_items(project)
            .into_iter()
            .map(|item| item.anchor)
            .collect();

        let sources: Vec<PathBuf> = project
            .screenshots
            .iter()
            .map(|reference| assets.resolve(reference))
            .collect();

        let id = project.id.clone();
        let warm = Task::perform(
            thumbnail::warm(sources, thumbnail::TIER_CHIP),
            move |chips| Message::ChipsWarmed(id.clone(), chips),
        );

        let screen = DetailScreen {
            id: project.id.clone(),
            gallery: Gallery::new(project.screenshots.len()),
            spy: ScrollSpy::new(anchors),
            chips: HashMap::new(),
            band: None,
            pane: None,
            scroll_top: 0.0,
            offsets: HashMap::new(),
        };

        (screen, warm)
    }

    /// A scroll happened: refresh the band geometry and probe every
    /// anchor's visible bounds. Results arrive as AnchorProbed messages
    /// in whatever order the runtime delivers them.
    fn on_scrolled(&mut self, viewport: scrollable::Viewport) -> Task<Message> {
        let pane = viewport.bounds();
        self.scroll_top = viewport.absolute_offset().y;
        self.pane = Some(pane);
        self.band = Some(Band::from_viewport(pane));

        let probes = self
            .spy
            .anchors()
            .iter()
            .cloned()
            .map(|anchor| {
                container::visible_bounds(container::Id::new(anchor.clone()))
                    .map(move |bounds| Message::AnchorProbed(anchor.clone(), bounds))
            })
            .collect::<Vec<_>>();

        Task::batch(probes)
    }

    /// One anchor's probe result came back
    fn on_probed(&mut self, anchor: &str, bounds: Option<Rectangle>) {
        let Some(band) = self.band else {
            return;
        };

        // Learn the anchor's content offset while its top edge is on
        // screen; visible_bounds clips rectangles at the pane top, so a
        // clipped top would record the current scroll position instead.
        if let (Some(rect), Some(pane)) = (bounds, self.pane) {
            if rect.y > pane.y + 0.5 {
                self.offsets
                    .insert(anchor.to_string(), self.scroll_top + (rect.y - pane.y));
            }
        }

        self.spy.observe(anchor, bounds, band);
    }

    /// Scroll the pane toward a clicked nav entry. The highlight itself is
    /// already updated; this is best-effort positioning.
    fn scroll_to(&self, anchor: &str) -> Task<Message> {
        if Some(anchor) == self.spy.anchors().first().map(String::as_str) {
            return scrollable::scroll_to(
                detail_scroll_id(),
                scrollable::AbsoluteOffset::default(),
            );
        }

        if let Some(&offset) = self.offsets.get(anchor) {
            return scrollable::scroll_to(
                detail_scroll_id(),
                scrollable::AbsoluteOffset {
                    x: 0.0,
                    y: (offset - 60.0).max(0.0),
                },
            );
        }

        // The anchor has never been measured; estimate from its position
        // in the nav list.
        if let Some(index) = self.spy.anchors().iter().position(|a| a == anchor) {
            let count = self.spy.anchors().len();
            if count > 1 {
                return scrollable::snap_to(
                    detail_scroll_id(),
                    scrollable::RelativeOffset {
                        x: 0.0,
                        y: index as f32 / (count - 1) as f32,
                    },
                );
            }
        }

        Task::none()
    }
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A project card or link was activated
    OpenProject(String),
    /// Return to the home screen
    GoHome,
    ToggleReelPlay,
    ToggleReelMute,
    /// A quick-nav entry was clicked
    NavClicked(String),
    /// The detail pane scrolled
    DetailScrolled(scrollable::Viewport),
    /// An anchor visibility probe completed
    AnchorProbed(String, Option<Rectangle>),
    GalleryAdvance(i32),
    GalleryOpenFeatured,
    GalleryJump(usize),
    GalleryClose,
    KeyPressed(KeyPress),
    /// Background cover warm-up finished
    CoversWarmed(Vec<(PathBuf, PathBuf)>),
    /// Chip warm-up finished for one project's screenshots
    ChipsWarmed(String, Vec<(PathBuf, PathBuf)>),
    OpenLink(String),
    CopyPageLink(String),
}

impl Portfolio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = SiteConfig::default();

        // If this fails the binary shipped with a broken catalog and
        // cannot render anything.
        let catalog = Catalog::load().expect("Failed to load the embedded project catalog.");

        let assets = AssetLibrary::scan(&config.assets_root);
        let missing = assets.verify(&catalog);

        println!("🎨 Portfolio initialized with {} projects", catalog.len());

        let status = if missing.is_empty() {
            format!("{} projects in portfolio.", catalog.len())
        } else {
            format!(
                "{} projects in portfolio. {} images missing from disk.",
                catalog.len(),
                missing.len()
            )
        };

        // Warm the home-grid cover thumbnails in the background.
        let cover_sources: Vec<PathBuf> = catalog
            .projects()
            .iter()
            .map(|project| assets.resolve(&project.image))
            .collect();
        let warm = Task::perform(
            thumbnail::warm(cover_sources, thumbnail::TIER_CARD),
            Message::CoversWarmed,
        );

        (
            Portfolio {
                config,
                catalog,
                assets,
                covers: HashMap::new(),
                reel: HeroMedia::default(),
                screen: Screen::Home,
                status,
            },
            warm,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenProject(id) => match self.catalog.get_by_id(&id) {
                Some(project) => {
                    let (screen, warm) = DetailScreen::new(project, &self.assets);
                    self.screen = Screen::Detail(screen);

                    // Fresh page starts at the top, like a route change.
                    Task::batch([
                        scrollable::scroll_to(
                            detail_scroll_id(),
                            scrollable::AbsoluteOffset::default(),
                        ),
                        warm,
                    ])
                }
                None => {
                    eprintln!("⚠️  Unknown project id '{}'", id);
                    self.screen = Screen::NotFound { requested: id };
                    Task::none()
                }
            },
            Message::GoHome => {
                self.screen = Screen::Home;
                scrollable::scroll_to(home_scroll_id(), scrollable::AbsoluteOffset::default())
            }
            Message::ToggleReelPlay => {
                self.reel.toggle_play();
                Task::none()
            }
            Message::ToggleReelMute => {
                self.reel.toggle_mute();
                Task::none()
            }
            Message::NavClicked(anchor) => {
                if let Some(screen) = self.detail_mut() {
                    // Optimistic highlight first; scrolling follows.
                    screen.spy.activate(&anchor);
                    return screen.scroll_to(&anchor);
                }
                Task::none()
            }
            Message::DetailScrolled(viewport) => {
                if let Some(screen) = self.detail_mut() {
                    return screen.on_scrolled(viewport);
                }
                Task::none()
            }
            Message::AnchorProbed(anchor, bounds) => {
                if let Some(screen) = self.detail_mut() {
                    screen.on_probed(&anchor, bounds);
                }
                Task::none()
            }
            Message::GalleryAdvance(delta) => {
                if let Some(screen) = self.detail_mut() {
                    screen.gallery.advance(delta);
                }
                Task::none()
            }
            Message::GalleryOpenFeatured => {
                if let Some(screen) = self.detail_mut() {
                    screen.gallery.open_current();
                }
                Task::none()
            }
            Message::GalleryJump(index) => {
                if let Some(screen) = self.detail_mut() {
                    screen.gallery.jump(index);
                }
                Task::none()
            }
            Message::GalleryClose => {
                if let Some(screen) = self.detail_mut() {
                    screen.gallery.close();
                }
                Task::none()
            }
            Message::KeyPressed(key) => {
                if let Some(screen) = self.detail_mut() {
                    screen.gallery.handle_key(key);
                }
                Task::none()
            }
            Message::CoversWarmed(pairs) => {
                if !pairs.is_empty() {
                    println!("✅ Warmed {} cover thumbnails", pairs.len());
                }
                self.covers.extend(pairs);
                Task::none()
            }
            Message::ChipsWarmed(project_id, pairs) => {
                // Results for a project we already navigated away from are
                // stale and dropped.
                if let Some(screen) = self.detail_mut() {
                    if screen.id == project_id {
                        screen.chips.extend(pairs);
                    }
                }
                Task::none()
            }
            Message::OpenLink(reference) => {
                self.open_external(&reference);
                Task::none()
            }
            Message::CopyPageLink(id) => {
                let url = format!("{}/project/{}", self.config.url, id);
                println!("🔗 Copied {}", url);
                iced::clipboard::write(url)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Home => ui::home::view(self),
            Screen::Detail(screen) => ui::detail::view(self, screen),
            Screen::NotFound { requested } => ui::not_found::view(requested),
        }
    }

    /// Reconcile the window title with the current screen
    fn title(&self) -> String {
        match &self.screen {
            Screen::Home => self.config.window_title(None),
            Screen::Detail(screen) => {
                let page = self
                    .catalog
                    .get_by_id(&screen.id)
                    .map(|project| project.title.as_str());
                self.config.window_title(page)
            }
            Screen::NotFound { .. } => self.config.window_title(Some("Project not found")),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn detail_mut(&mut self) -> Option<&mut DetailScreen> {
        match &mut self.screen {
            Screen::Detail(screen) => Some(screen),
            _ => None,
        }
    }

    /// Launch an outbound reference: web links directly, local media
    /// (resume, reels, design documents) through the file handler
    fn open_external(&self, reference: &str) {
        let target = if reference.starts_with("http") || reference.starts_with("mailto:") {
            reference.to_string()
        } else {
            let path = self.assets.resolve(reference);
            let path = path.canonicalize().unwrap_or(path);
            format!("file://{}", path.display())
        };

        match webbrowser::open(&target) {
            Ok(()) => println!("🌐 Opened {}", target),
            Err(e) => eprintln!("⚠️  Failed to open {}: {}", target, e),
        }
    }
}

/// Map raw key presses onto gallery inputs; everything else stays with
/// the widgets
fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(Message::KeyPressed(KeyPress::Left)),
        keyboard::Key::Named(Named::ArrowRight) => Some(Message::KeyPressed(KeyPress::Right)),
        keyboard::Key::Named(Named::Escape) => Some(Message::KeyPressed(KeyPress::Escape)),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size(iced::Size::new(1280.0, 840.0))
        .centered()
        .run_with(Portfolio::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::data::{Overview, Project, ProjectKind, RoleSkills};
    use std::path::Path;

    fn project(id: &str, kind: ProjectKind, screenshots: &[&str]) -> Project {
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
            screenshots: screenshots.iter().map(|s| s.to_string()).collect(),
            sections: Vec::new(),
            links: None,
            video: None,
            pdf: None,
        }
    }

    fn fixture_app() -> Portfolio {
        let catalog = Catalog::from_projects(vec![
            project("alpha", ProjectKind::Personal, &["/a.png", "/b.png", "/c.png"]),
            project("beta", ProjectKind::Personal, &[]),
            project("gamma", ProjectKind::Professional, &["/g.png"]),
            project("delta", ProjectKind::Professional, &[]),
            project("epsilon", ProjectKind::Professional, &[]),
        ])
        .unwrap();

        Portfolio {
            config: SiteConfig::default(),
            catalog,
            assets: AssetLibrary::scan(Path::new("/nonexistent/portfolio-assets")),
            covers: HashMap::new(),
            reel: HeroMedia::default(),
            screen: Screen::Home,
            status: String::new(),
        }
    }

    #[test]
    fn test_home_partitions_match_fixture() {
        let app = fixture_app();
        let personal = app.catalog.get_by_kind(ProjectKind::Personal);
        let professional = app.catalog.get_by_kind(ProjectKind::Professional);

        let personal: Vec<&str> = personal.iter().map(|p| p.id.as_str()).collect();
        let professional: Vec<&str> = professional.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(personal, vec!["alpha", "beta"]);
        assert_eq!(professional, vec!["gamma", "delta", "epsilon"]);
    }

    #[test]
    fn test_open_known_project_shows_detail() {
        let mut app = fixture_app();
        let _ = app.update(Message::OpenProject("alpha".to_string()));

        match &app.screen {
            Screen::Detail(screen) => {
                assert_eq!(screen.id, "alpha");
                assert_eq!(screen.gallery.count(), 3);
                assert_eq!(screen.spy.active_id(), Some("overview"));
            }
            _ => panic!("expected the detail screen"),
        }
    }

    #[test]
    fn test_open_unknown_project_shows_not_found() {
        let mut app = fixture_app();
        let _ = app.update(Message::OpenProject("unknown-id".to_string()));

        assert!(matches!(
            &app.screen,
            Screen::NotFound { requested } if requested == "unknown-id"
        ));

        // And home is one message away.
        let _ = app.update(Message::GoHome);
        assert!(matches!(app.screen, Screen::Home));
    }

    #[test]
    fn test_gallery_walk_through_messages() {
        let mut app = fixture_app();
        let _ = app.update(Message::OpenProject("alpha".to_string()));

        let _ = app.update(Message::GalleryAdvance(1));
        let _ = app.update(Message::GalleryAdvance(1));
        match &app.screen {
            Screen::Detail(screen) => assert_eq!(screen.gallery.current(), 2),
            _ => panic!("expected the detail screen"),
        }

        // One more wraps back around.
        let _ = app.update(Message::GalleryAdvance(1));
        match &app.screen {
            Screen::Detail(screen) => assert_eq!(screen.gallery.current(), 0),
            _ => panic!("expected the detail screen"),
        }
    }

    #[test]
    fn test_nav_click_highlights_synchronously() {
        let mut app = fixture_app();
        let _ = app.update(Message::OpenProject("alpha".to_string()));
        let _ = app.update(Message::NavClicked("reflection".to_string()));

        match &app.screen {
            Screen::Detail(screen) => assert_eq!(screen.spy.active_id(), Some("reflection")),
            _ => panic!("expected the detail screen"),
        }
    }

    #[test]
    fn test_keyboard_routes_by_gallery_state() {
        let mut app = fixture_app();
        let _ = app.update(Message::OpenProject("alpha".to_string()));

        let _ = app.update(Message::KeyPressed(KeyPress::Right));
        let _ = app.update(Message::GalleryOpenFeatured);
        let _ = app.update(Message::KeyPressed(KeyPress::Right));

        match &app.screen {
            Screen::Detail(screen) => {
                assert_eq!(screen.gallery.current(), 1);
                assert_eq!(screen.gallery.lightbox(), Some(2));
            }
            _ => panic!("expected the detail screen"),
        }

        let _ = app.update(Message::KeyPressed(KeyPress::Escape));
        match &app.screen {
            Screen::Detail(screen) => {
                assert!(screen.gallery.lightbox().is_none());
                assert_eq!(screen.gallery.current(), 1);
            }
            _ => panic!("expected the detail screen"),
        }
    }

    #[test]
    fn test_lightbox_leaves_reel_widget_alone() {
        let mut app = fixture_app();
        let _ = app.update(Message::ToggleReelMute);
        assert!(!app.reel.is_muted());

        let _ = app.update(Message::OpenProject("alpha".to_string()));
        let _ = app.update(Message::GalleryOpenFeatured);
        let _ = app.update(Message::GalleryAdvance(1));
        let _ = app.update(Message::GalleryClose);

        assert!(app.reel.is_playing());
        assert!(!app.reel.is_muted());
    }

    #[test]
    fn test_stale_chip_results_dropped() {
        let mut app = fixture_app();
        let _ = app.update(Message::OpenProject("alpha".to_string()));
        let _ = app.update(Message::OpenProject("gamma".to_string()));

        let stale = vec![(PathBuf::from("/a.png"), PathBuf::from("/cache/a.jpg"))];
        let _ = app.update(Message::ChipsWarmed("alpha".to_string(), stale));

        match &app.screen {
            Screen::Detail(screen) => {
                assert_eq!(screen.id, "gamma");
                assert!(screen.chips.is_empty());
            }
            _ => panic!("expected the detail screen"),
        }
    }

    #[test]
    fn test_probes_only_apply_after_scroll_geometry() {
        let mut app = fixture_app();
        let _ = app.update(Message::OpenProject("alpha".to_string()));

        // No scroll event yet: probes carry no band and change nothing.
        let rect = Rectangle {
            x: 0.0,
            y: 220.0,
            width: 800.0,
            height: 50.0,
        };
        let _ = app.update(Message::AnchorProbed("screenshots".to_string(), Some(rect)));
        match &app.screen {
            Screen::Detail(screen) => assert_eq!(screen.spy.active_id(), Some("overview")),
            _ => panic!("expected the detail screen"),
        }

        // With geometry in place the same probe activates the anchor.
        if let Screen::Detail(screen) = &mut app.screen {
            let pane = Rectangle {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 1000.0,
            };
            screen.pane = Some(pane);
            screen.band = Some(Band::from_viewport(pane));
        }
        let _ = app.update(Message::AnchorProbed("screenshots".to_string(), Some(rect)));
        match &app.screen {
            Screen::Detail(screen) => assert_eq!(screen.spy.active_id(), Some("screenshots")),
            _ => panic!("expected the detail screen"),
        }
    }
}
