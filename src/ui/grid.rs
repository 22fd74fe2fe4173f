/// Photo grid
///
/// Projects the filtered view into activatable grid items. The grid is
/// rebuilt wholesale on every view call; catalogs are bounded at tens of
/// items, so diffing would buy nothing. Every item is bound to its
/// position in the *filtered view*, which is the index convention the
/// modal controller expects.
use crate::assets::AssetStore;
use crate::state::catalog::PhotoRecord;
use crate::state::focus::PageFocus;
use crate::ui;
use crate::Message;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, text};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

/// Width of a grid cell
const ITEM_WIDTH: f32 = 300.0;

/// Height of the thumbnail area inside a cell
const ITEM_IMAGE_HEIGHT: f32 = 225.0;

pub fn photo_grid<'a>(
    photos: &'a [PhotoRecord],
    assets: &AssetStore,
    focus: Option<PageFocus>,
) -> Element<'a, Message> {
    if photos.is_empty() {
        return container(
            text("Keine Fotos in dieser Kategorie")
                .size(16)
                .style(text::secondary),
        )
        .padding(32.0)
        .into();
    }

    let items: Vec<Element<'a, Message>> = photos
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            grid_item(
                photo,
                assets.thumbnail(&photo.thumbnail),
                index,
                focus == Some(PageFocus::Photo(index)),
            )
        })
        .collect();

    Wrap::with_elements(items)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// One grid item: thumbnail figure with caption, year and description.
/// Pointer press and keyboard activation both arrive as
/// [`Message::PhotoActivated`] with the filtered-view index.
fn grid_item<'a>(
    photo: &'a PhotoRecord,
    handle: Handle,
    index: usize,
    focused: bool,
) -> Element<'a, Message> {
    let figure = column![
        image(handle)
            .width(Length::Fixed(ITEM_WIDTH))
            .height(Length::Fixed(ITEM_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover),
        text(photo.caption.as_str()).size(18),
        text(photo.year.as_str()).size(14).style(text::secondary),
        text(photo.description.as_str()).size(13),
    ]
    .spacing(6)
    .width(Length::Fixed(ITEM_WIDTH));

    button(figure)
        .on_press(Message::PhotoActivated(index))
        .padding(8.0)
        .style(move |theme, status| {
            let mut style = button::secondary(theme, status);
            if focused {
                style.border = ui::focus_ring(theme);
            }
            style
        })
        .into()
}
