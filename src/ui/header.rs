/// Header and footer chrome
///
/// Cosmetic page furniture: the app header with nav labels, the gallery
/// title with its filter tablist, and the footer. Header and footer take
/// part in the staged entrance reveal driven by the startup timers.
use crate::state::catalog::CATEGORIES;
use crate::state::focus::PageFocus;
use crate::ui;
use crate::Message;
use iced::widget::{button, column, container, horizontal_space, row, text, Space};
use iced::{Alignment, Element, Length};

/// App header: title plus navigation labels. Hidden until the entrance
/// timer reveals it; the reserved height keeps the layout from jumping.
pub fn header(revealed: bool) -> Element<'static, Message> {
    if !revealed {
        return Space::with_height(Length::Fixed(56.0)).into();
    }

    container(
        row![
            text("Fotogram").size(28),
            horizontal_space(),
            text("Impressum").size(14).style(text::secondary),
            text("Kontakt").size(14).style(text::secondary),
        ]
        .spacing(24)
        .align_y(Alignment::Center),
    )
    .padding([12.0, 24.0])
    .into()
}

/// Gallery title and the category filter tablist
pub fn gallery_header<'a>(current_filter: &str, focus: Option<PageFocus>) -> Element<'a, Message> {
    let filters = row(CATEGORIES
        .iter()
        .enumerate()
        .map(|(position, (key, label))| {
            filter_button(
                label,
                position,
                *key == current_filter,
                focus == Some(PageFocus::Filter(position)),
            )
        }))
    .spacing(8.0);

    column![
        text("Deine Oldtimer Bildergalerie").size(24),
        filters,
    ]
    .spacing(16)
    .into()
}

/// One filter control. Selected state maps to the primary style (the
/// aria-selected analog); logical focus adds the focus ring.
fn filter_button(
    label: &'static str,
    position: usize,
    selected: bool,
    focused: bool,
) -> Element<'static, Message> {
    button(text(label).size(14))
        .on_press(Message::FilterSelected(position))
        .padding([6.0, 14.0])
        .style(move |theme, status| {
            let mut style = if selected {
                button::primary(theme, status)
            } else {
                button::secondary(theme, status)
            };
            if focused {
                style.border = ui::focus_ring(theme);
            }
            style
        })
        .into()
}

/// Footer, revealed after the header as the second entrance stage
pub fn footer(revealed: bool) -> Element<'static, Message> {
    if !revealed {
        return Space::with_height(Length::Fixed(32.0)).into();
    }

    container(
        text("© Fotogram — Deine Oldtimer Bildergalerie")
            .size(12)
            .style(text::secondary),
    )
    .padding([8.0, 24.0])
    .into()
}
