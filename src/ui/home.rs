/// Home screen: hero reel, capabilities strip, the two project grids,
/// about and journey panels, footer

use iced::widget::{button, column, container, row, scrollable, stack, text, Column, Row};
use iced::{Alignment, Background, Color, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::catalog::data::{Project, ProjectKind};
use crate::ui::{asset_image, bullet_line, section_heading, style};
use crate::{home_scroll_id, Message, Portfolio};

/// Showcase reel looping behind the hero titles
const REEL: &str = "/projects/unreal-paradise/unreal-paradise.mp4";
/// Poster frame shown for the reel
const REEL_POSTER: &str = "/projects/unreal-paradise/Unreal Paradise-cover.png";

const CARD_WIDTH: f32 = 340.0;

const CAPABILITIES: [(&str, &str, &str); 3] = [
    (
        "🎮",
        "Game Development",
        "Skilled in gameplay mechanics, game physics, and core development \
         fundamentals to deliver engaging game experiences.",
    ),
    (
        "🏰",
        "Level Design",
        "Strong understanding of player engagement and guidance to craft \
         cohesive, immersive, and intuitive gameplay environments.",
    ),
    (
        "⚙️",
        "Game Production",
        "Excellent production proficiency with strong skills in effective \
         communication, team dynamics, and technical leadership.",
    ),
];

const ROLES: [(&str, &str); 4] = [
    ("Unreal Engine Specialist", "focusing on advanced game mechanics"),
    ("3D Level Designer", "creating immersive environments"),
    ("Game Mechanic Engineer", "at Nova Labs"),
    ("Lead Developer", "for published mobile games"),
];

const ACHIEVEMENTS: [(&str, &str, &str); 8] = [
    (
        "💼",
        "Game Mechanic Engineer",
        "at Nova Labs, overseeing game mechanics implementation and feature development",
    ),
    (
        "💻",
        "3+ years professional experience",
        "in game development with Unity and Unreal Engine",
    ),
    (
        "🎮",
        "Lead Developer",
        "on multiple published mobile games on Google Play Store",
    ),
    (
        "🏆",
        "Level Designer",
        "creating 70+ levels for Temple of Masks puzzle game",
    ),
    (
        "🎓",
        "B.Sc. in Computer Science",
        "from Pundra University with CGPA 3.67/4.0",
    ),
    (
        "🥇",
        "ICPC Asia Dhaka Regional",
        "participant and NCPC competitor",
    ),
    (
        "📦",
        "GitHub Arctic Code Vault Contributor",
        "with 171 repositories and 152 stars",
    ),
    (
        "🔧",
        "Proficient",
        "in C++, C#, Blueprint, Blender, and Git/GitHub",
    ),
];

pub fn view(app: &Portfolio) -> Element<Message> {
    let content = column![
        navbar(app),
        hero(app),
        capabilities(),
        projects_band(app, ProjectKind::Personal, true),
        projects_band(app, ProjectKind::Professional, false),
        about(app),
        journey(),
        footer(app),
    ]
    .width(Length::Fill);

    container(scrollable(content).id(home_scroll_id()))
        .style(style::band(false))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn navbar(app: &Portfolio) -> Element<Message> {
    let brand = text("FAHIM KAMAL").size(14).color(style::TEXT_PRIMARY);

    let nav_link = |label: &'static str, url: String| {
        button(text(label).size(13))
            .style(style::link_button(false))
            .on_press(Message::OpenLink(url))
    };

    container(
        row![
            brand,
            iced::widget::Space::with_width(Length::Fill),
            nav_link("GITHUB", app.config.social.github.to_string()),
            nav_link("LINKEDIN", app.config.social.linkedin.to_string()),
            nav_link("RESUME", app.config.resume.to_string()),
        ]
        .spacing(24)
        .align_y(Alignment::Center)
        .padding(20),
    )
    .style(style::band(true))
    .width(Length::Fill)
    .into()
}

fn hero(app: &Portfolio) -> Element<Message> {
    let poster = asset_image(
        app,
        REEL_POSTER,
        None,
        Length::Fill,
        Length::Fixed(400.0),
        ContentFit::Cover,
    );

    let shade = container(iced::widget::Space::new(Length::Fill, Length::Fill))
        .style(|_theme| container::Style {
            background: Some(Background::Color(Color {
                a: 0.45,
                ..Color::BLACK
            })),
            ..container::Style::default()
        })
        .width(Length::Fill)
        .height(Length::Fixed(400.0));

    let titles = container(
        column![
            text("Fahim").size(72).color(style::ACCENT),
            text("Kamal").size(56).color(style::ACCENT_LIGHT),
            text("GAME DEVELOPER & LEVEL DESIGNER")
                .size(16)
                .color(style::TEXT_SECONDARY),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(400.0))
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    // Reel transport controls live with the hero but stay independent of
    // every other widget on the page.
    let controls = row![
        button(text(app.reel.play_glyph()).size(14))
            .style(style::surface_button)
            .on_press(Message::ToggleReelPlay),
        button(text(app.reel.mute_glyph()).size(14))
            .style(style::surface_button)
            .on_press(Message::ToggleReelMute),
        button(text("Watch the reel").size(13))
            .style(style::link_button(false))
            .on_press(Message::OpenLink(REEL.to_string())),
    ]
    .spacing(10)
    .padding(12);

    column![stack![poster, shade, titles], controls]
        .width(Length::Fill)
        .align_x(Alignment::End)
        .into()
}

fn capabilities() -> Element<'static, Message> {
    let mut cells = Row::new().spacing(40);
    for (icon, title, blurb) in CAPABILITIES {
        cells = cells.push(
            column![
                text(icon).size(30),
                text(title).size(17).color(style::TEXT_PRIMARY),
                text(blurb).size(13).color(style::TEXT_MUTED),
            ]
            .spacing(10)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        );
    }

    container(cells.padding(40))
        .style(style::band(true))
        .width(Length::Fill)
        .into()
}

fn projects_band(app: &Portfolio, kind: ProjectKind, alt: bool) -> Element<Message> {
    let projects = app.catalog.get_by_kind(kind);

    let cards: Vec<Element<Message>> = projects
        .into_iter()
        .map(|project| project_card(app, project))
        .collect();

    let grid = Wrap::with_elements(cards)
        .spacing(28.0)
        .line_spacing(28.0);

    container(
        column![section_heading(kind.heading()), grid]
            .spacing(32)
            .align_x(Alignment::Center)
            .padding(48)
            .width(Length::Fill),
    )
    .style(style::band(alt))
    .width(Length::Fill)
    .into()
}

fn project_card<'a>(app: &'a Portfolio, project: &'a Project) -> Element<'a, Message> {
    let cover = asset_image(
        app,
        &project.image,
        Some(&app.covers),
        Length::Fixed(CARD_WIDTH),
        Length::Fixed(190.0),
        ContentFit::Cover,
    );

    let mut card = column![
        text(project.genre.to_uppercase())
            .size(11)
            .color(style::TEXT_MUTED),
        button(cover)
            .style(style::link_button(false))
            .padding(0)
            .on_press(Message::OpenProject(project.id.clone())),
        text(&project.title).size(17).color(style::TEXT_PRIMARY),
        text(&project.role).size(13).color(style::ACCENT),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::Fixed(CARD_WIDTH));

    if let Some(links) = &project.links {
        let mut link_row = Row::new().spacing(16);
        if let Some(url) = &links.play_store {
            link_row = link_row.push(
                button(text("Play Store").size(12))
                    .style(style::link_button(false))
                    .on_press(Message::OpenLink(url.clone())),
            );
        }
        if let Some(url) = &links.github {
            link_row = link_row.push(
                button(text("GitHub").size(12))
                    .style(style::link_button(false))
                    .on_press(Message::OpenLink(url.clone())),
            );
        }
        card = card.push(link_row);
    }

    card.into()
}

fn about(app: &Portfolio) -> Element<Message> {
    let mut roles = Column::new().spacing(6);
    for (title, place) in ROLES {
        roles = roles.push(
            row![
                text("—").color(style::TEXT_MUTED),
                text(title).size(14).color(style::TEXT_PRIMARY),
                text(place).size(14).color(style::TEXT_MUTED),
            ]
            .spacing(8),
        );
    }

    let socials = row![
        button(text("GitHub").size(13))
            .style(style::outline_button)
            .on_press(Message::OpenLink(app.config.social.github.to_string())),
        button(text("LinkedIn").size(13))
            .style(style::outline_button)
            .on_press(Message::OpenLink(app.config.social.linkedin.to_string())),
        button(text("YouTube").size(13))
            .style(style::outline_button)
            .on_press(Message::OpenLink(app.config.social.youtube.to_string())),
        button(text("Email").size(13))
            .style(style::outline_button)
            .on_press(Message::OpenLink(app.config.social.email.to_string())),
    ]
    .spacing(12);

    container(
        column![
            text("Greetings!").size(24).color(style::TEXT_PRIMARY),
            text(
                "My name is Fahim, a passionate Unreal Engine Developer & 3D Level \
                 Designer based in Kuala Lumpur, Malaysia."
            )
            .size(16)
            .color(style::ACCENT),
            text(
                "Since beginning my journey into game creation in 2022, I've had the \
                 privilege of experiencing a path filled with creativity, collaboration, \
                 and growth. Each project I've worked on has not only sharpened my \
                 technical and design skills but also strengthened my sense of purpose \
                 in this industry."
            )
            .size(14)
            .color(style::TEXT_SECONDARY),
            text("Now, I've reached an exciting milestone in my journey as a game developer — working as a,")
                .size(14)
                .color(style::TEXT_SECONDARY),
            roles,
            socials,
        ]
        .spacing(16)
        .padding(48)
        .max_width(900),
    )
    .style(style::band(true))
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn journey() -> Element<'static, Message> {
    let mut items = Column::new().spacing(12);
    for (icon, bold, muted) in ACHIEVEMENTS {
        items = items.push(
            row![
                text(icon).size(16),
                text(bold).size(14).color(style::TEXT_PRIMARY),
                text(muted).size(14).color(style::TEXT_MUTED),
            ]
            .spacing(10),
        );
    }

    container(
        column![section_heading("A glimpse into my journey so far"), items]
            .spacing(28)
            .align_x(Alignment::Center)
            .padding(48)
            .max_width(820),
    )
    .style(style::band(false))
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn footer(app: &Portfolio) -> Element<Message> {
    let thanks = column![
        text("Thank you for stopping by!")
            .size(22)
            .color(style::TEXT_PRIMARY),
        bullet_line("If you want to come in contact, I'm available by email or message on LinkedIn."),
        bullet_line(
            "Open for business inquiries regarding Game Development, Level Design, and Game Production."
        ),
    ]
    .spacing(10)
    .width(Length::Fill);

    let contact_link = |label: &'static str, url: String| {
        button(text(label).size(14))
            .style(style::link_button(false))
            .on_press(Message::OpenLink(url))
    };

    let links = column![
        contact_link("📄 Resume", app.config.resume.to_string()),
        contact_link("✉️ fahimkamal63@gmail.com", app.config.social.email.to_string()),
        contact_link("💼 LinkedIn", app.config.social.linkedin.to_string()),
        contact_link("🐙 GitHub", app.config.social.github.to_string()),
    ]
    .spacing(6);

    let bar = row![
        text("Fahim Kamal Portfolio").size(13).color(style::TEXT_MUTED),
        iced::widget::Space::with_width(Length::Fill),
        text(&app.status).size(12).color(style::TEXT_MUTED),
    ]
    .padding(16);

    container(
        column![
            row![thanks, links].spacing(48).padding(48),
            iced::widget::horizontal_rule(1),
            bar,
        ],
    )
    .style(style::band(true))
    .width(Length::Fill)
    .into()
}
