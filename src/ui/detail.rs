/// Project detail screen: header, quick-nav sidebar, overview and role
/// panels, screenshot carousel with lightbox, narrative sections,
/// reflection, and the project footer

use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, stack, text, Column,
    Row,
};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::catalog::data::{Project, Section, SectionImage, Subsection};
use crate::catalog::store::nav_items;
use crate::ui::{asset_image, bullet_line, section_divider, style};
use crate::{detail_scroll_id, ui, DetailScreen, Message, Portfolio};

pub fn view<'a>(app: &'a Portfolio, screen: &'a DetailScreen) -> Element<'a, Message> {
    let Some(project) = app.catalog.get_by_id(&screen.id) else {
        return ui::not_found::view(&screen.id);
    };

    let mut page = Column::new()
        .width(Length::Fill)
        .push(header(project))
        .push(hero(app, project))
        .push(anchored("overview", overview_band(project)))
        .push(anchored(
            "screenshots",
            screenshots_band(app, screen, project),
        ));

    for (index, section) in project.sections.iter().enumerate() {
        page = page.push(anchored(
            &section.id,
            section_band(app, section, index % 2 == 0),
        ));
    }

    page = page
        .push(anchored(
            "reflection",
            reflection_band(project, project.sections.len() % 2 == 0),
        ))
        .push(project_footer(project));

    let content = scrollable(page)
        .id(detail_scroll_id())
        .on_scroll(Message::DetailScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let base = container(row![content, quick_nav(screen, project)])
        .style(style::band(false))
        .width(Length::Fill)
        .height(Length::Fill);

    match screen.gallery.lightbox() {
        Some(index) => stack![base, lightbox(app, screen, project, index)].into(),
        None => base.into(),
    }
}

/// Wrap a page block in an addressable container so the scroll-spy can
/// probe its on-screen bounds
fn anchored<'a>(anchor: &str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .id(container::Id::new(anchor.to_string()))
        .width(Length::Fill)
        .into()
}

fn header(project: &Project) -> Element<Message> {
    let breadcrumbs = row![
        button(text("← Back").size(13))
            .style(style::link_button(false))
            .on_press(Message::GoHome),
        text("|").color(style::TEXT_MUTED),
        text(project.genre.to_uppercase())
            .size(12)
            .color(style::TEXT_MUTED),
        iced::widget::Space::with_width(Length::Fill),
        button(text("🔗 Copy page link").size(12))
            .style(style::link_button(false))
            .on_press(Message::CopyPageLink(project.id.clone())),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(
        column![
            breadcrumbs,
            text(&project.title).size(40).color(style::TEXT_PRIMARY),
            text(&project.role).size(17).color(style::ACCENT),
        ]
        .spacing(10)
        .padding(32),
    )
    .style(style::band(true))
    .width(Length::Fill)
    .into()
}

fn hero<'a>(app: &'a Portfolio, project: &'a Project) -> Element<'a, Message> {
    container(asset_image(
        app,
        &project.image,
        None,
        Length::Fill,
        Length::Fixed(420.0),
        ContentFit::Cover,
    ))
    .width(Length::Fill)
    .into()
}

fn overview_band(project: &Project) -> Element<Message> {
    let mut overview = Column::new()
        .spacing(10)
        .push(text("Project Overview").size(17).color(style::TEXT_PRIMARY));
    for para in &project.overview.description {
        overview = overview.push(text(para).size(14).color(style::TEXT_SECONDARY));
    }
    overview = overview.push(
        row![
            fact("Engine", &project.overview.engine),
            fact("Timeframe", &project.overview.timeframe),
            fact("Team", &project.overview.team),
        ]
        .spacing(24),
    );

    let mut role = Column::new()
        .spacing(10)
        .push(text("Role & Skills").size(17).color(style::TEXT_PRIMARY));
    for item in &project.role_skills.description {
        role = role.push(
            row![
                text("›").color(style::ACCENT),
                text(item).size(14).color(style::TEXT_SECONDARY),
            ]
            .spacing(8),
        );
    }

    let badges: Vec<Element<Message>> = project
        .role_skills
        .badges
        .iter()
        .map(|badge| {
            container(text(badge).size(12))
                .style(style::badge)
                .padding(iced::Padding {
                    top: 4.0,
                    right: 10.0,
                    bottom: 4.0,
                    left: 10.0,
                })
                .into()
        })
        .collect();
    role = role.push(Wrap::with_elements(badges).spacing(8.0).line_spacing(8.0));

    container(
        row![
            overview.width(Length::Fill),
            role.width(Length::Fill),
        ]
        .spacing(40)
        .padding(40),
    )
    .style(style::band(true))
    .width(Length::Fill)
    .into()
}

fn fact<'a>(label: &'static str, value: &'a str) -> Element<'a, Message> {
    row![
        text(format!("{}:", label)).size(13).color(style::TEXT_PRIMARY),
        text(value).size(13).color(style::TEXT_MUTED),
    ]
    .spacing(6)
    .into()
}

fn screenshots_band<'a>(
    app: &'a Portfolio,
    screen: &'a DetailScreen,
    project: &'a Project,
) -> Element<'a, Message> {
    let bar = container(text("Screenshots").size(15).color(style::TEXT_PRIMARY))
        .style(style::panel_bar)
        .width(Length::Fill)
        .padding(14);

    let body: Element<Message> = if project.has_screenshots() {
        carousel(app, screen, project)
    } else {
        text("No screenshots yet.")
            .size(14)
            .color(style::TEXT_MUTED)
            .into()
    };

    container(
        container(column![bar, container(body).padding(20)])
            .style(style::panel)
            .width(Length::Fill),
    )
    .padding(40)
    .width(Length::Fill)
    .into()
}

/// Inline carousel: featured image, prev/next controls, thumbnail chips.
/// Clicking the featured image or a chip opens the lightbox.
fn carousel<'a>(
    app: &'a Portfolio,
    screen: &'a DetailScreen,
    project: &'a Project,
) -> Element<'a, Message> {
    let gallery = &screen.gallery;
    let current = gallery.current();

    let featured = button(asset_image(
        app,
        &project.screenshots[current],
        None,
        Length::Fill,
        Length::Fixed(440.0),
        ContentFit::Contain,
    ))
    .style(style::link_button(false))
    .padding(0)
    .on_press(Message::GalleryOpenFeatured);

    let mut strip = Column::new().spacing(14).push(featured);

    // Single-image sequences have nothing to advance to; the controls are
    // not rendered at all.
    if gallery.can_advance() {
        strip = strip.push(
            row![
                button(text("‹").size(18))
                    .style(style::surface_button)
                    .on_press(Message::GalleryAdvance(-1)),
                text(format!("{} / {}", current + 1, gallery.count()))
                    .size(13)
                    .color(style::TEXT_MUTED),
                button(text("›").size(18))
                    .style(style::surface_button)
                    .on_press(Message::GalleryAdvance(1)),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        );
    }

    let chips: Vec<Element<Message>> = project
        .screenshots
        .iter()
        .enumerate()
        .map(|(index, reference)| {
            button(asset_image(
                app,
                reference,
                Some(&screen.chips),
                Length::Fixed(96.0),
                Length::Fixed(56.0),
                ContentFit::Cover,
            ))
            .style(style::link_button(index == current))
            .padding(2)
            .on_press(Message::GalleryJump(index))
            .into()
        })
        .collect();
    strip = strip.push(Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0));

    strip.align_x(Alignment::Center).width(Length::Fill).into()
}

/// Fullscreen overlay with its own cursor; the backdrop click and the
/// close button both return to the inline carousel untouched.
fn lightbox<'a>(
    app: &'a Portfolio,
    screen: &'a DetailScreen,
    project: &'a Project,
    index: usize,
) -> Element<'a, Message> {
    let total = project.screenshots.len();

    let mut controls = Row::new().spacing(18).align_y(Alignment::Center);
    if total > 1 {
        controls = controls.push(
            button(text("‹ Prev").size(14))
                .style(style::surface_button)
                .on_press(Message::GalleryAdvance(-1)),
        );
    }
    controls = controls.push(
        text(format!("{} / {}", index + 1, total))
            .size(14)
            .color(style::TEXT_SECONDARY),
    );
    if total > 1 {
        controls = controls.push(
            button(text("Next ›").size(14))
                .style(style::surface_button)
                .on_press(Message::GalleryAdvance(1)),
        );
    }
    controls = controls.push(
        button(text("✕ Close").size(14))
            .style(style::outline_button)
            .on_press(Message::GalleryClose),
    );

    // Chips jump the lightbox cursor straight to an index; the carousel
    // cursor below stays where it was.
    let chips: Vec<Element<Message>> = project
        .screenshots
        .iter()
        .enumerate()
        .map(|(i, reference)| {
            button(asset_image(
                app,
                reference,
                Some(&screen.chips),
                Length::Fixed(72.0),
                Length::Fixed(42.0),
                ContentFit::Cover,
            ))
            .style(style::link_button(i == index))
            .padding(2)
            .on_press(Message::GalleryJump(i))
            .into()
        })
        .collect();

    let card = column![
        asset_image(
            app,
            &project.screenshots[index],
            None,
            Length::Fill,
            Length::FillPortion(5),
            ContentFit::Contain,
        ),
        controls,
        Wrap::with_elements(chips).spacing(6.0).line_spacing(6.0),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill);

    opaque(
        mouse_area(center(opaque(card)).style(style::backdrop))
            .on_press(Message::GalleryClose),
    )
}

fn section_band<'a>(app: &'a Portfolio, section: &'a Section, alt: bool) -> Element<'a, Message> {
    let mut body = Column::new().spacing(12);

    for para in &section.content {
        body = body.push(text(para).size(14).color(style::TEXT_SECONDARY));
    }

    if let Some(bullets) = &section.bullets {
        let mut list = Column::new().spacing(6);
        for bullet in bullets {
            list = list.push(bullet_line(bullet));
        }
        body = body.push(list);
    }

    if let Some(subsections) = &section.subsections {
        let cards: Vec<Element<Message>> = subsections
            .iter()
            .map(|sub| subsection_card(sub))
            .collect();
        body = body.push(Wrap::with_elements(cards).spacing(20.0).line_spacing(20.0));
    }

    if let Some(images) = &section.images {
        let mut figures = Column::new().spacing(16);
        for img in images {
            figures = figures.push(figure(app, img));
        }
        body = body.push(figures);
    }

    column![
        section_divider(&section.title),
        container(body.padding(40).width(Length::Fill))
            .style(style::band(alt))
            .width(Length::Fill),
    ]
    .width(Length::Fill)
    .into()
}

fn subsection_card(sub: &Subsection) -> Element<Message> {
    let mut card = Column::new()
        .spacing(12)
        .push(text(&sub.title).size(15).color(style::TEXT_PRIMARY));

    if let Some(bullets) = &sub.bullets {
        let mut list = Column::new().spacing(6);
        for bullet in bullets {
            list = list.push(bullet_line(bullet));
        }
        card = card.push(list);
    }

    if let Some(pillars) = &sub.pillars {
        let tiles: Vec<Element<Message>> = pillars
            .iter()
            .map(|pillar| {
                container(
                    row![
                        text(&pillar.icon).size(22),
                        column![
                            text(&pillar.title).size(13).color(style::TEXT_PRIMARY),
                            text(&pillar.subtitle).size(11).color(style::TEXT_MUTED),
                        ]
                        .spacing(2),
                    ]
                    .spacing(10)
                    .align_y(Alignment::Center),
                )
                .style(style::tile)
                .padding(10)
                .width(Length::Fixed(210.0))
                .into()
            })
            .collect();
        card = card.push(Wrap::with_elements(tiles).spacing(10.0).line_spacing(10.0));
    }

    container(card)
        .style(style::card)
        .padding(18)
        .width(Length::Fixed(460.0))
        .into()
}

fn figure<'a>(app: &'a Portfolio, img: &'a SectionImage) -> Element<'a, Message> {
    let mut figure = Column::new().spacing(6).push(asset_image(
        app,
        img.src(),
        None,
        Length::Fill,
        Length::Fixed(320.0),
        ContentFit::Contain,
    ));

    if let Some(caption) = img.caption() {
        figure = figure.push(text(caption).size(12).color(style::TEXT_MUTED));
    }

    figure.width(Length::Fill).into()
}

fn reflection_band(project: &Project, alt: bool) -> Element<Message> {
    let blurb = format!(
        "This project was a valuable learning experience that helped me grow as a \
         game developer. Each challenge encountered contributed to my understanding \
         of {} and game development best practices.",
        project.overview.engine
    );

    let mut actions = Row::new().spacing(14).push(
        button(
            text(format!("← Back to {} Projects", project.kind.label())).size(13),
        )
        .style(style::surface_button)
        .on_press(Message::GoHome),
    );

    if let Some(links) = &project.links {
        if let Some(url) = &links.github {
            actions = actions.push(
                button(text("View on GitHub").size(13))
                    .style(style::outline_button)
                    .on_press(Message::OpenLink(url.clone())),
            );
        }
        if let Some(url) = &links.play_store {
            actions = actions.push(
                button(text("View on Play Store").size(13))
                    .style(style::outline_button)
                    .on_press(Message::OpenLink(url.clone())),
            );
        }
    }
    if let Some(video) = &project.video {
        actions = actions.push(
            button(text("Watch Gameplay Video").size(13))
                .style(style::outline_button)
                .on_press(Message::OpenLink(video.clone())),
        );
    }
    if let Some(pdf) = &project.pdf {
        actions = actions.push(
            button(text("Design Document (PDF)").size(13))
                .style(style::outline_button)
                .on_press(Message::OpenLink(pdf.clone())),
        );
    }

    column![
        section_divider("Reflection"),
        container(
            column![
                text(blurb).size(14).color(style::TEXT_SECONDARY),
                actions,
            ]
            .spacing(20)
            .padding(40),
        )
        .style(style::band(alt))
        .width(Length::Fill),
    ]
    .width(Length::Fill)
    .into()
}

fn project_footer(project: &Project) -> Element<Message> {
    let mut anchors = Row::new().spacing(18).push(
        button(text("Overview").size(13))
            .style(style::link_button(false))
            .on_press(Message::NavClicked("overview".to_string())),
    );
    for section in project.sections.iter().take(3) {
        anchors = anchors.push(
            button(text(&section.title).size(13))
                .style(style::link_button(false))
                .on_press(Message::NavClicked(section.id.clone())),
        );
    }

    container(
        row![
            column![
                text(&project.title).size(15).color(style::TEXT_PRIMARY),
                text(&project.role).size(13).color(style::TEXT_MUTED),
            ]
            .spacing(2),
            iced::widget::Space::with_width(Length::Fill),
            anchors,
        ]
        .align_y(Alignment::Center)
        .padding(24),
    )
    .style(style::band(true))
    .width(Length::Fill)
    .into()
}

/// Quick-nav sidebar; exactly one entry is highlighted, driven by the
/// scroll-spy (or an optimistic click)
fn quick_nav<'a>(screen: &'a DetailScreen, project: &'a Project) -> Element<'a, Message> {
    let active = screen.spy.active_id().unwrap_or_default().to_string();

    let mut nav = Column::new()
        .spacing(8)
        .push(text("NAVIGATE").size(11).color(style::TEXT_MUTED));

    for item in nav_items(project) {
        let is_active = item.anchor == active;
        nav = nav.push(
            button(text(item.title).size(13))
                .style(style::link_button(is_active))
                .padding(2)
                .on_press(Message::NavClicked(item.anchor)),
        );
    }

    container(nav)
        .width(Length::Fixed(200.0))
        .padding(24)
        .into()
}
