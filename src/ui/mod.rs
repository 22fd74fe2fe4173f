/// View layer
///
/// Pure functions from state to widgets:
/// - Header chrome, filter tablist and footer (header.rs)
/// - The photo grid (grid.rs)
/// - The detail modal overlay (detail.rs)
use crate::state::modal::Announcement;
use crate::Message;
use iced::widget::{column, container, text};
use iced::{Border, Element, Theme};

pub mod detail;
pub mod grid;
pub mod header;

/// Border drawn around the logically focused control
pub(crate) fn focus_ring(theme: &Theme) -> Border {
    Border {
        color: theme.palette().primary,
        width: 2.0,
        radius: 6.0.into(),
    }
}

/// Live-region analog: the transient announcements the modal emits while
/// navigating. Each line disappears when its expiry timer fires.
pub fn status_line(announcements: &[Announcement]) -> Element<'_, Message> {
    let lines = column(
        announcements
            .iter()
            .map(|a| text(a.text.as_str()).size(12).style(text::secondary).into()),
    )
    .spacing(2);

    container(lines).padding([4.0, 24.0]).into()
}
