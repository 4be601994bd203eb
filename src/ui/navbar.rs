// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with the brand name and screen links.

use crate::app::Screen;
use crate::ui::design_tokens::{border, palette, shadow, spacing, typography};
use iced::widget::{button, container, text, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
}

/// Renders the navbar, highlighting the active screen.
pub fn view(current: Screen) -> Element<'static, Message> {
    let brand = text("Dig Deep Fitness")
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::BRAND_600),
        });

    let mut links = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(brand);

    for screen in Screen::ALL {
        let is_active = screen == current;
        let link = button(text(screen.label()).size(typography::BODY_LG))
            .on_press(Message::Navigate(screen))
            .padding([spacing::XXS, spacing::XS])
            .style(move |theme: &Theme, status: button::Status| {
                nav_link_style(theme, status, is_active)
            });
        links = links.push(link);
    }

    Container::new(links)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(navbar_container_style)
        .into()
}

fn navbar_container_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        shadow: shadow::SM,
        ..Default::default()
    }
}

fn nav_link_style(theme: &Theme, status: button::Status, is_active: bool) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;
    let color = if is_active || matches!(status, button::Status::Hovered) {
        palette::BRAND_500
    } else {
        base_text
    };

    button::Style {
        background: None,
        text_color: color,
        border: if is_active {
            iced::Border {
                color: palette::BRAND_500,
                width: border::WIDTH_MD,
                radius: 0.0.into(),
            }
        } else {
            iced::Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
