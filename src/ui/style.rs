/// Shared palette and widget styles for the dark portfolio theme
///
/// Color values follow the published site's background/surface/accent
/// scheme; the base theme stays iced's Dark.

use iced::widget::{button, container};
use iced::{border, Background, Color, Theme};

pub const BACKGROUND: Color = Color::from_rgb(0.063, 0.078, 0.098);
pub const SURFACE: Color = Color::from_rgb(0.086, 0.106, 0.133);
pub const SURFACE_LIGHT: Color = Color::from_rgb(0.122, 0.149, 0.188);
pub const BORDER: Color = Color::from_rgb(0.165, 0.200, 0.251);
pub const TEXT_PRIMARY: Color = Color::from_rgb(0.902, 0.929, 0.953);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.624, 0.690, 0.753);
pub const TEXT_MUTED: Color = Color::from_rgb(0.420, 0.478, 0.549);
pub const ACCENT: Color = Color::from_rgb(0.910, 0.639, 0.239);
pub const ACCENT_LIGHT: Color = Color::from_rgb(0.957, 0.761, 0.439);

/// Full-width page band; `alt` flips between the two background shades
/// so consecutive sections alternate
pub fn band(alt: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(if alt { SURFACE } else { BACKGROUND })),
        ..container::Style::default()
    }
}

/// Raised panel with rounded corners (overview, screenshots)
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: border::rounded(8.0),
        ..container::Style::default()
    }
}

/// Title bar across the top of a panel
pub fn panel_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_LIGHT)),
        border: border::rounded(8.0),
        ..container::Style::default()
    }
}

/// Card for subsection content inside a section
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE_LIGHT)),
        border: border::rounded(8.0).color(BORDER).width(1),
        ..container::Style::default()
    }
}

/// Small tile inside a pillar grid
pub fn tile(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        border: border::rounded(6.0).color(BORDER).width(1),
        ..container::Style::default()
    }
}

/// Short rounded chip behind a skill badge
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ACCENT),
        background: Some(Background::Color(Color { a: 0.2, ..ACCENT })),
        border: border::rounded(4.0),
        ..container::Style::default()
    }
}

/// Box standing in for an image that is missing from disk
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(TEXT_MUTED),
        background: Some(Background::Color(SURFACE_LIGHT)),
        border: border::rounded(8.0).color(BORDER).width(1),
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind the lightbox overlay
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.85,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

/// Filled accent button (primary calls to action)
pub fn accent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_LIGHT,
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: BACKGROUND,
        border: border::rounded(4.0),
        ..button::Style::default()
    }
}

/// Outlined button for secondary links (GitHub, Play Store)
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (border_color, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (ACCENT, ACCENT),
        _ => (BORDER, TEXT_PRIMARY),
    };
    button::Style {
        background: None,
        text_color,
        border: border::rounded(4.0).color(border_color).width(1),
        ..button::Style::default()
    }
}

/// Flat surface button (back-to-section links)
pub fn surface_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => BORDER,
        _ => SURFACE_LIGHT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: border::rounded(4.0),
        ..button::Style::default()
    }
}

/// Borderless text link; accent when highlighted
pub fn link_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = if active {
            ACCENT
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => ACCENT_LIGHT,
                _ => TEXT_SECONDARY,
            }
        };
        button::Style {
            background: None,
            text_color,
            ..button::Style::default()
        }
    }
}
