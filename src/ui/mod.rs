/// UI composition module
///
/// One submodule per screen, plus the shared palette. Screens are plain
/// view functions over the application state; all interaction goes through
/// `crate::Message`.

pub mod detail;
pub mod home;
pub mod not_found;
pub mod style;

use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::{column, container, horizontal_rule, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::{Message, Portfolio};

/// Render a catalog image reference, preferring a cached thumbnail when one
/// is available. References with no file behind them render as a labeled
/// placeholder box instead of failing.
pub fn asset_image<'a>(
    app: &Portfolio,
    reference: &str,
    cache: Option<&HashMap<PathBuf, PathBuf>>,
    width: Length,
    height: Length,
    fit: ContentFit,
) -> Element<'a, Message> {
    let source = app.assets.resolve(reference);

    if app.assets.exists(reference) {
        let path = cache
            .and_then(|thumbs| thumbs.get(&source))
            .cloned()
            .unwrap_or(source);

        return image(image::Handle::from_path(path))
            .width(width)
            .height(height)
            .content_fit(fit)
            .into();
    }

    let label = source
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| reference.to_string());

    container(text(label).size(12))
        .style(style::placeholder)
        .width(width)
        .height(height)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Centered section heading with a short underline
pub fn section_heading<'a>(title: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(22).color(style::TEXT_PRIMARY),
        container(horizontal_rule(1)).width(48),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .into()
}

/// Divider line with the section title set into it
pub fn section_divider<'a>(title: &'a str) -> Element<'a, Message> {
    row![
        container(horizontal_rule(1)).width(Length::Fill),
        text(title.to_uppercase()).size(13).color(style::ACCENT),
        container(horizontal_rule(1)).width(Length::Fill),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .padding(iced::Padding {
        top: 18.0,
        right: 24.0,
        bottom: 18.0,
        left: 24.0,
    })
    .into()
}

/// Bullet line with an accent dot
pub fn bullet_line<'a>(content: &'a str) -> Element<'a, Message> {
    row![
        text("•").color(style::ACCENT),
        text(content).size(14).color(style::TEXT_SECONDARY),
    ]
    .spacing(8)
    .into()
}
