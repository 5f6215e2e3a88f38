/// Site configuration
///
/// Central configuration for site metadata. The window-title reconciler,
/// the home/footer views, and the asset resolver all read from here.

use std::path::PathBuf;

/// Environment variable overriding where media assets live on disk
const ASSETS_ENV: &str = "PORTFOLIO_ASSETS";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub social: Social,
    /// Site-absolute reference to the resume PDF
    pub resume: &'static str,
    /// Local directory the site-absolute media references resolve against
    pub assets_root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Social {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub youtube: &'static str,
    pub email: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            url: "https://fahimkamal.miit.uk",
            title: "Fahim Kamal Ahmed | Game Developer & Level Designer",
            description: "Game Developer with 3+ years of experience specializing in \
                          Unreal Engine and Unity. Creating immersive gameplay experiences \
                          and innovative game mechanics.",
            keywords: "Game Developer, Level Designer, Unreal Engine, Unity, C++, C#, Game Design",
            author: "Fahim Kamal Ahmed",
            social: Social {
                github: "https://github.com/FahimKamal",
                linkedin: "https://www.linkedin.com/in/fk-ahmed",
                youtube: "https://www.youtube.com/@FK_1_3",
                email: "mailto:fahimkamal63@gmail.com",
            },
            resume: "/Fahim_Kamal_Resume.pdf",
            assets_root: assets_root(),
        }
    }
}

impl SiteConfig {
    /// Window title for a given screen heading, mirroring how the web
    /// original reconciles document metadata per page
    pub fn window_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => format!("{} | {}", page, self.author),
            None => self.title.to_string(),
        }
    }
}

/// Resolve the assets directory: an explicit override wins, otherwise
/// `assets/` next to the working directory
fn assets_root() -> PathBuf {
    std::env::var_os(ASSETS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title_per_page() {
        let config = SiteConfig::default();
        assert_eq!(config.window_title(None), config.title);
        assert_eq!(
            config.window_title(Some("Spellcaster")),
            "Spellcaster | Fahim Kamal Ahmed"
        );
    }
}
