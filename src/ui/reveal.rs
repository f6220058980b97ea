/// Reveal wrapper widget
///
/// Wraps a block of the page, measures how much of it intersects the scroll
/// viewport, and publishes a message the first time it crosses the threshold.
/// It can also report its laid-out vertical offset so the page can scroll to it.
/// The fade itself is driven by the `Presentation` handed in from app state.
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{tree, Operation, Tree, Widget};
use iced::advanced::{overlay, Clipboard, Shell};
use iced::{event, mouse, Color, Element, Event, Length, Rectangle, Renderer, Size, Theme, Vector};

use crate::state::reveal::{visible_fraction, Presentation};

pub struct Reveal<'a, Message> {
    content: Element<'a, Message>,
    presentation: Presentation,
    threshold: f32,
    veil: Color,
    on_enter: Option<Message>,
    on_offset: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

/// Per-instance bookkeeping kept in the widget tree
#[derive(Debug, Default)]
struct State {
    entered: bool,
    last_offset: Option<f32>,
}

impl<'a, Message> Reveal<'a, Message> {
    pub fn new(content: impl Into<Element<'a, Message>>, presentation: Presentation) -> Self {
        Self {
            content: content.into(),
            presentation,
            threshold: 0.2,
            veil: Color::WHITE,
            on_enter: None,
            on_offset: None,
        }
    }

    /// Minimum visible fraction before `on_enter` fires
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Color drawn over the content while it is fading in
    pub fn veil(mut self, color: Color) -> Self {
        self.veil = color;
        self
    }

    pub fn on_enter(mut self, message: Message) -> Self {
        self.on_enter = Some(message);
        self
    }

    pub fn on_offset(mut self, f: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_offset = Some(Box::new(f));
        self
    }
}

impl<'a, Message: Clone> Widget<Message, Theme, Renderer> for Reveal<'a, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let bounds = layout.bounds();

        {
            let state = tree.state.downcast_mut::<State>();

            if !state.entered && visible_fraction(bounds, *viewport) >= self.threshold {
                state.entered = true;
                if let Some(message) = &self.on_enter {
                    shell.publish(message.clone());
                }
            }

            if let Some(on_offset) = &self.on_offset {
                if state.last_offset != Some(bounds.y) {
                    state.last_offset = Some(bounds.y);
                    shell.publish(on_offset(bounds.y));
                }
            }
        }

        self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        )
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content
            .as_widget()
            .mouse_interaction(&tree.children[0], layout, cursor, viewport, renderer)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Presentation { opacity, offset } = self.presentation;

        // Still hidden
        if opacity <= 0.0 {
            return;
        }

        let bounds = layout.bounds();

        renderer.with_translation(Vector::new(0.0, offset), |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });

        if opacity < 1.0 {
            let shifted = Rectangle {
                y: bounds.y + offset,
                ..bounds
            };

            // New layer so the veil lands on top of images and text
            renderer.with_layer(shifted, |renderer| {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: shifted,
                        ..renderer::Quad::default()
                    },
                    Color {
                        a: 1.0 - opacity,
                        ..self.veil
                    },
                );
            });
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content
            .as_widget_mut()
            .overlay(&mut tree.children[0], layout, renderer, translation)
    }
}

impl<'a, Message: Clone + 'a> From<Reveal<'a, Message>> for Element<'a, Message> {
    fn from(reveal: Reveal<'a, Message>) -> Self {
        Element::new(reveal)
    }
}

/// Wrap content in a reveal
pub fn reveal<'a, Message>(
    content: impl Into<Element<'a, Message>>,
    presentation: Presentation,
) -> Reveal<'a, Message> {
    Reveal::new(content, presentation)
}

/// Fade content under a veil without tracking the viewport
///
/// For widgets that cannot take an opacity of their own, like canvases.
pub fn fade<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    opacity: f32,
    veil: Color,
) -> Element<'a, Message> {
    let content = content.into();
    if opacity >= 1.0 {
        return content;
    }

    Reveal::new(content, Presentation { opacity, offset: 0.0 })
        .veil(veil)
        .into()
}

#[cfg(test)]
pub(crate) fn is_reveal<Message>(element: &Element<'_, Message>) -> bool {
    element.as_widget().tag() == tree::Tag::of::<State>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::clipboard;
    use iced::widget::{column, Space};
    use iced::{window, Font, Pixels};
    use iced_runtime::user_interface::{Cache, UserInterface};
    use std::time::Instant;

    const SHOWN: Presentation = Presentation {
        opacity: 1.0,
        offset: 0.0,
    };

    const WINDOW: Size = Size::new(400.0, 800.0);

    fn renderer() -> Renderer {
        Renderer::Secondary(iced_tiny_skia::Renderer::new(Font::default(), Pixels(16.0)))
    }

    /// A 100px block starting at y = 760, so 40% of it is on screen
    fn peeking(threshold: f32) -> Element<'static, u8> {
        column![
            Space::with_height(Length::Fixed(760.0)),
            reveal(Space::new(Length::Fixed(100.0), Length::Fixed(100.0)), SHOWN)
                .threshold(threshold)
                .on_enter(1)
                .on_offset(|y| if y == 760.0 { 2 } else { 3 }),
        ]
        .into()
    }

    /// Publish what each of `frames` redraws produces on one widget tree
    fn redraws(content: Element<'static, u8>, frames: usize) -> Vec<Vec<u8>> {
        let mut renderer = renderer();
        let mut ui = UserInterface::build(content, WINDOW, Cache::new(), &mut renderer);
        let redraw = [Event::Window(window::Event::RedrawRequested(Instant::now()))];

        (0..frames)
            .map(|_| {
                let mut messages = Vec::new();
                let _ = ui.update(
                    &redraw,
                    mouse::Cursor::Unavailable,
                    &mut renderer,
                    &mut clipboard::Null,
                    &mut messages,
                );
                messages
            })
            .collect()
    }

    #[test]
    fn test_enters_once_past_threshold() {
        let frames = redraws(peeking(0.3), 2);

        assert!(frames[0].contains(&1));
        assert!(frames[0].contains(&2));
        assert!(frames[1].is_empty());
    }

    #[test]
    fn test_stays_hidden_below_threshold() {
        let frames = redraws(peeking(0.5), 1);

        assert!(!frames[0].contains(&1));
        // The offset is still reported for anchors
        assert!(frames[0].contains(&2));
    }

    #[test]
    fn test_fade_only_wraps_partial_opacity() {
        let half: Element<'_, u8> = fade(Space::with_width(10.0), 0.5, Color::WHITE);
        assert!(is_reveal(&half));

        let full: Element<'_, u8> = fade(Space::with_width(10.0), 1.0, Color::WHITE);
        assert!(!is_reveal(&full));
    }
}
