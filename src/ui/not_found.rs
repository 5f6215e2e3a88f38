use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::ui::style;
use crate::Message;

/// Fallback screen for project ids the catalog does not know
pub fn view(requested: &str) -> Element<Message> {
    container(
        column![
            text("Project not found").size(26).color(style::TEXT_PRIMARY),
            text(format!("Nothing in the portfolio matches '{}'.", requested))
                .size(14)
                .color(style::TEXT_MUTED),
            button(text("← Back to Home").size(14))
                .style(style::accent_button)
                .on_press(Message::GoHome),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .style(style::band(false))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
