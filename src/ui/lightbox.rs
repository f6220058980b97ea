/// Modal viewer overlay
///
/// The whole overlay is a backdrop mouse area: presses that reach it close the
/// lightbox. The image sits in its own mouse area that captures presses first,
/// so pressing the image never reaches the backdrop.
use iced::widget::{button, column, container, horizontal_space, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Length};

use crate::state::lightbox::LightboxEvent;
use crate::ui::page::{artwork, Variant};
use crate::ui::style;
use crate::{Message, Portfolio};

fn control<'a>(label: &'a str, event: LightboxEvent) -> iced::widget::Button<'a, Message> {
    button(text(label).size(22))
        .on_press(Message::Lightbox(event))
        .padding([6, 16])
        .style(style::overlay_control)
}

pub fn view(app: &Portfolio, index: usize) -> Element<'_, Message> {
    let item = app.gallery.get(index);

    let figure = container(
        mouse_area(artwork(app, index, Variant::Lightbox, 1.0))
            .on_press(Message::Lightbox(LightboxEvent::ImagePressed)),
    )
    .center(Length::Fill);

    let caption = row![
        text(&item.title).size(18),
        horizontal_space(),
        text(&item.year).size(18),
    ]
    .width(Length::Fill);

    let body = column![figure, caption]
        .spacing(12)
        .width(Length::Fill)
        .height(Length::Fill);

    let content = column![
        row![horizontal_space(), control("×", LightboxEvent::Dismiss)],
        row![
            control("←", LightboxEvent::Prev),
            body,
            control("→", LightboxEvent::Next),
        ]
        .spacing(24)
        .align_y(Alignment::Center)
        .height(Length::Fill),
    ]
    .spacing(12);

    let backdrop = mouse_area(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(32)
            .style(style::backdrop),
    )
    .on_press(Message::Lightbox(LightboxEvent::BackdropPressed));

    // Nothing underneath receives input while the viewer is up
    opaque(backdrop)
}
