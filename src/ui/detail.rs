/// Detail modal overlay
///
/// Renders the modal controller's detail pane on top of the page using the
/// stack/opaque overlay pattern. While the close transition runs the
/// dialog stays in layout but every control is inert, mirroring the
/// hidden-for-assistive-technology state.
use crate::assets::AssetStore;
use crate::state::focus::ModalControl;
use crate::state::modal::{ModalController, SpecRow};
use crate::ui;
use crate::Message;
use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text,
};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

pub fn modal_overlay<'a>(
    base: Element<'a, Message>,
    modal: &'a ModalController,
    assets: &AssetStore,
    photo_count: usize,
) -> Element<'a, Message> {
    let Some(detail) = modal.detail() else {
        // Nothing to show behind the overlay surface; degrade to the page.
        return base;
    };
    let interactive = modal.is_open();
    let focused = modal.focused_control();

    let header = row![
        text(detail.title.as_str()).size(20),
        horizontal_space(),
        control_button(
            "×",
            interactive.then_some(Message::CloseModal),
            focused == Some(ModalControl::Close),
        ),
    ]
    .spacing(12.0)
    .align_y(Alignment::Center);

    let body = row![
        image(assets.fullsize(&detail.image))
            .width(Length::FillPortion(3))
            .height(Length::Fixed(400.0))
            .content_fit(ContentFit::Contain),
        column![
            text(detail.caption.as_str()).size(18),
            text(detail.alt.as_str()).size(13).style(text::secondary),
            spec_panel(&detail.specs),
        ]
        .spacing(12)
        .width(Length::FillPortion(2)),
    ]
    .spacing(20.0);

    let can_previous = interactive && modal.active_index() > 0;
    let can_next = interactive && modal.active_index() + 1 < photo_count;
    let footer = row![
        control_button(
            "‹",
            can_previous.then_some(Message::PreviousPhoto),
            focused == Some(ModalControl::Previous),
        ),
        text(detail.counter.as_str()).size(14),
        control_button(
            "›",
            can_next.then_some(Message::NextPhoto),
            focused == Some(ModalControl::Next),
        ),
    ]
    .spacing(16.0)
    .align_y(Alignment::Center);

    let dialog = container(column![header, body, footer].spacing(16))
        .width(Length::Fixed(920.0))
        .padding(20.0)
        .style(container::rounded_box);

    let backdrop = mouse_area(center(opaque(dialog)));
    let backdrop = if interactive {
        // Pressing the backdrop outside the dialog closes, like clicking
        // the dimmed page area.
        backdrop.on_press(Message::CloseModal)
    } else {
        backdrop
    };

    stack![base, opaque(backdrop)].into()
}

/// One modal control; `None` renders it disabled and out of the focusable
/// set, matching a disabled button leaving the tab order
fn control_button(
    label: &str,
    message: Option<Message>,
    focused: bool,
) -> Element<'_, Message> {
    button(text(label).size(18))
        .on_press_maybe(message)
        .padding([4.0, 12.0])
        .style(move |theme, status| {
            let mut style = button::secondary(theme, status);
            if focused {
                style.border = ui::focus_ring(theme);
            }
            style
        })
        .into()
}

/// Technical-specifications panel: one card per known, non-empty key
fn spec_panel(specs: &[SpecRow]) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = specs.iter().map(spec_card).collect();
    Wrap::with_elements(cards).spacing(8.0).line_spacing(8.0).into()
}

fn spec_card(spec: &SpecRow) -> Element<'_, Message> {
    container(
        column![
            text(spec.label).size(11).style(text::secondary),
            text(spec.value.as_str()).size(14),
        ]
        .spacing(2),
    )
    .padding(8.0)
    .style(container::bordered_box)
    .into()
}
