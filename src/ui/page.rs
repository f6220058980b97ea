/// The single scrolling page: nav, hero, gallery, about, contact, footer
use iced::widget::{
    button, canvas, column, container, horizontal_space, image, mouse_area, row, text, Column,
    Row, Space, Stack,
};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::data::{displayed_source, DisplaySource};
use crate::state::lightbox::LightboxEvent;
use crate::state::reveal::Section;
use crate::ui::placeholder::PlaceholderCard;
use crate::ui::reveal::{fade, reveal, Reveal};
use crate::ui::style;
use crate::{Anchor, Message, Portfolio};

const HERO_HEIGHT: f32 = 520.0;
const CARD_WIDTH: f32 = 260.0;
const THUMBNAIL_HEIGHT: f32 = 320.0;

/// Where an artwork is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Hero,
    Thumbnail,
    Lightbox,
}

/// Render one artwork: the decoded image, its placeholder, or a loading note
///
/// `opacity` applies to all three, so a carousel cross-fade never leaves a
/// placeholder or loading slide stuck on screen.
pub fn artwork<'a>(
    app: &'a Portfolio,
    index: usize,
    variant: Variant,
    opacity: f32,
) -> Element<'a, Message> {
    let item = app.gallery.get(index);

    let (width, height) = match variant {
        Variant::Hero => (Length::Fill, Length::Fixed(HERO_HEIGHT)),
        Variant::Thumbnail => (Length::Fill, Length::Fixed(THUMBNAIL_HEIGHT)),
        Variant::Lightbox => (Length::Shrink, Length::Shrink),
    };

    match displayed_source(item, app.artworks.load_failed(index)) {
        DisplaySource::Fallback(placeholder) => {
            let (width, height) = match variant {
                // A canvas has no natural size
                Variant::Lightbox => (Length::Fixed(480.0), Length::Fixed(640.0)),
                _ => (width, height),
            };
            let card = canvas(PlaceholderCard::new(placeholder))
                .width(width)
                .height(height);
            fade(card, opacity, style::PAPER)
        }
        DisplaySource::Primary(_) => match app.artworks.artwork(index) {
            Some(artwork) => {
                let (handle, fit) = match variant {
                    Variant::Thumbnail => (artwork.thumbnail.clone(), ContentFit::Cover),
                    _ => (artwork.full.clone(), ContentFit::Contain),
                };
                image(handle)
                    .width(width)
                    .height(height)
                    .content_fit(fit)
                    .opacity(opacity)
                    .into()
            }
            None => {
                let note = text(format!("Loading {}…", item.alt_text()))
                    .size(14)
                    .color(style::GRAPHITE);
                let note = container(note)
                    .width(width)
                    .height(height)
                    .center_x(width)
                    .center_y(height);
                fade(note, opacity, style::PAPER)
            }
        },
    }
}

/// Wrap a block in its reveal, wired to the app's reveal state
fn block<'a>(
    app: &Portfolio,
    section: Section,
    content: impl Into<Element<'a, Message>>,
) -> Reveal<'a, Message> {
    reveal(content, app.reveals.presentation(section, app.now))
        .threshold(app.reveals.threshold())
        .veil(style::PAPER)
        .on_enter(Message::Revealed(section))
}

/// Wire a section to an anchor so navigation can scroll to it
fn anchored<'a>(block: Reveal<'a, Message>, anchor: Anchor) -> Reveal<'a, Message> {
    block.on_offset(move |y| Message::AnchorMoved(anchor, y))
}

fn heading(content: &str) -> iced::widget::Text<'_> {
    text(content).size(36)
}

fn nav(app: &Portfolio) -> Element<'_, Message> {
    let link = |label: &'static str, anchor: Anchor| {
        button(text(label).size(16))
            .on_press(Message::ScrollTo(anchor))
            .style(style::link)
    };

    row![
        text(&app.config.site.name).size(22),
        horizontal_space(),
        link("Gallery", Anchor::Gallery),
        link("Studio", Anchor::About),
        link("Contact", Anchor::Contact),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

fn hero_copy<'a>() -> Column<'a, Message> {
    column![
        text("Black + white notes").size(14).color(style::GRAPHITE),
        text("Pages from my sketchbook.").size(48),
        text(
            "A personal stack of drawings, snapshots, and half-finished ideas. \
             These are phone photos of ink and graphite studies, kept raw and honest."
        )
        .size(18),
        row![
            button(text("View the gallery"))
                .on_press(Message::ScrollTo(Anchor::Gallery))
                .padding([10, 18])
                .style(style::cta),
            button(text("Say hi"))
                .on_press(Message::ScrollTo(Anchor::Contact))
                .padding([10, 18])
                .style(style::ghost),
        ]
        .spacing(12),
        row![
            text("Format").size(14).color(style::GRAPHITE),
            text("JPG / PNG").size(14),
        ]
        .spacing(12),
    ]
    .spacing(20)
}

/// Hero carousel: cross-fading slides, label overlay, and manual controls
fn spotlight(app: &Portfolio) -> Element<'_, Message> {
    let active = app.carousel.active_index();
    let progress = app.carousel.transition_progress(app.now);

    let mut slides = Vec::with_capacity(2);
    if let Some(previous) = app.carousel.previous_index(app.now) {
        slides.push(artwork(app, previous, Variant::Hero, 1.0 - progress));
    }
    slides.push(artwork(app, active, Variant::Hero, progress));

    let slides = mouse_area(
        Stack::with_children(slides)
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT)),
    )
    .on_press(Message::CarouselNext);

    // Stays in sync with the active index
    let item = app.gallery.get(active);
    let label = container(
        row![text(&item.title).size(16), horizontal_space(), text(&item.year).size(16)]
            .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .width(Length::Fill)
    .style(style::label);

    let dots = Row::with_children((0..app.gallery.len()).map(|index| {
        button(Space::new(Length::Fixed(10.0), Length::Fixed(10.0)))
            .on_press(Message::CarouselGoTo(index))
            .padding(0)
            .style(style::dot(index == active))
            .into()
    }))
    .spacing(8)
    .align_y(Alignment::Center);

    let controls = row![
        button(text("←")).on_press(Message::CarouselPrev).style(style::link),
        horizontal_space(),
        dots,
        horizontal_space(),
        button(text("→")).on_press(Message::CarouselNext).style(style::link),
    ]
    .align_y(Alignment::Center);

    column![slides, label, controls].spacing(8).into()
}

fn hero(app: &Portfolio) -> Element<'_, Message> {
    let copy = block(
        app,
        Section::HeroCopy,
        container(hero_copy()).width(Length::FillPortion(1)),
    );

    let mut grid = row![copy].spacing(48).align_y(Alignment::Center);

    if app.carousel_mounted() {
        grid = grid.push(block(
            app,
            Section::HeroSpotlight,
            container(spotlight(app)).width(Length::FillPortion(1)),
        ));
    }

    grid.into()
}

fn gallery(app: &Portfolio) -> Element<'_, Message> {
    let head = anchored(
        block(
            app,
            Section::GalleryHead,
            column![
                heading("Recent Pages"),
                text("Here are some of my favorites.").size(18),
            ]
            .spacing(8),
        ),
        Anchor::Gallery,
    );

    let cards: Vec<Element<Message>> = app
        .gallery
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let caption = row![
                text(&item.title).size(15),
                horizontal_space(),
                text(&item.year).size(15).color(style::GRAPHITE),
            ]
            .spacing(8);

            let thumbnail = artwork(app, index, Variant::Thumbnail, 1.0);
            let figure = container(column![thumbnail, caption].spacing(10))
                .padding(10)
                .width(Length::Fixed(CARD_WIDTH))
                .style(style::card);

            button(figure)
                .on_press(Message::Lightbox(LightboxEvent::Select(index)))
                .padding(0)
                .style(style::link)
                .into()
        })
        .collect();

    let grid = block(
        app,
        Section::GalleryGrid,
        Wrap::with_elements(cards).spacing(24.0).line_spacing(24.0),
    );

    column![head, grid].spacing(32).into()
}

fn about(app: &Portfolio) -> Element<'_, Message> {
    let copy = anchored(
        block(
            app,
            Section::About,
            column![
                heading("About the Sketches"),
                text(
                    "Whenever I see a frame from a show that stands out to me I want to draw it. \
                     That is my inspiration for all of this."
                )
                .size(18),
            ]
            .spacing(12),
        ),
        Anchor::About,
    );

    let card = block(
        app,
        Section::AboutCard,
        container(
            column![
                text("Tools I grab most").size(22),
                text("Mechanical pencil, cheap ink pens, and my trusty sketchbook.").size(16),
            ]
            .spacing(8),
        )
        .padding(24)
        .style(style::card),
    );

    column![copy, card].spacing(24).into()
}

fn contact(app: &Portfolio) -> Element<'_, Message> {
    let email = &app.config.site.contact_email;

    let mut content = column![
        heading("Want to chat?"),
        text("Feel free to reach out with ideas, feedback, or just a quick hello.").size(18),
        button(text(email))
            .on_press(Message::ContactPressed)
            .padding([10, 18])
            .style(style::cta),
    ]
    .spacing(16);

    if app.contact_uri.is_some() {
        let note = text("Opening your mail client. The address is also on the clipboard.")
            .size(14)
            .color(style::GRAPHITE);
        content = content.push(note);
    }

    anchored(block(app, Section::Contact, content), Anchor::Contact).into()
}

fn footer(app: &Portfolio) -> Element<'_, Message> {
    block(
        app,
        Section::Footer,
        row![
            text(format!("© 2026 {}", app.config.site.name)).size(14),
            horizontal_space(),
            text("Handmade and a little messy").size(14).color(style::GRAPHITE),
        ],
    )
    .into()
}

/// The full page, top to bottom
pub fn view(app: &Portfolio) -> Element<'_, Message> {
    column![
        nav(app),
        hero(app),
        gallery(app),
        about(app),
        contact(app),
        footer(app),
    ]
    .spacing(96)
    .padding(40)
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::catalog;
    use crate::ui::reveal::is_reveal;

    fn portfolio() -> Portfolio {
        let config = AppConfig::default();
        let gallery = catalog::builtin(&config.site.art_dir).unwrap();
        let (portfolio, _task) = Portfolio::new(config, gallery);
        portfolio
    }

    #[test]
    fn test_non_image_slides_fade_with_the_carousel() {
        let mut app = portfolio();
        app.artworks.mark_failed(0);

        // Placeholder and loading note both follow the cross-fade
        assert!(is_reveal(&artwork(&app, 0, Variant::Hero, 0.4)));
        assert!(is_reveal(&artwork(&app, 1, Variant::Hero, 0.4)));

        // At rest they are drawn as-is
        assert!(!is_reveal(&artwork(&app, 0, Variant::Hero, 1.0)));
        assert!(!is_reveal(&artwork(&app, 1, Variant::Thumbnail, 1.0)));
    }
}
