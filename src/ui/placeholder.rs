/// Fallback artwork card
/// Draws an item's placeholder when its primary image failed to load
use iced::alignment;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Pixels, Point, Rectangle, Size};

use crate::state::data::Placeholder;
use crate::Message;

fn rgb(channels: [u8; 3]) -> Color {
    Color::from_rgb8(channels[0], channels[1], channels[2])
}

/// Canvas program for a single placeholder card
#[derive(Debug, Clone)]
pub struct PlaceholderCard {
    pub placeholder: Placeholder,
}

impl PlaceholderCard {
    pub fn new(placeholder: &Placeholder) -> Self {
        Self {
            placeholder: placeholder.clone(),
        }
    }

    /// Uniform scale that fits the card into `bounds`
    fn scale(&self, bounds: Size) -> f32 {
        let (width, height) = self.placeholder.size;
        (bounds.width / width).min(bounds.height / height)
    }
}

impl canvas::Program<Message> for PlaceholderCard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let scale = self.scale(bounds.size());
        if scale <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let p = &self.placeholder;
        let card = Size::new(p.size.0 * scale, p.size.1 * scale);

        // Center the card inside the available space
        let origin = Point::new(
            (bounds.width - card.width) / 2.0,
            (bounds.height - card.height) / 2.0,
        );

        frame.fill_rectangle(origin, card, rgb(p.paper));

        let inset = p.inset * scale;
        let border = Path::rectangle(
            Point::new(origin.x + inset, origin.y + inset),
            Size::new(card.width - 2.0 * inset, card.height - 2.0 * inset),
        );
        frame.stroke(
            &border,
            Stroke::default()
                .with_color(rgb(p.ink))
                .with_width((p.stroke_width * scale).max(1.0)),
        );

        frame.fill_text(canvas::Text {
            content: p.label.clone(),
            position: Point::new(origin.x + card.width / 2.0, origin.y + card.height / 2.0),
            color: rgb(p.ink),
            size: Pixels((p.font_size * scale).max(10.0)),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_fits_portrait_card() {
        let card = PlaceholderCard::new(&Placeholder::for_title("Goku"));

        assert_eq!(card.scale(Size::new(900.0, 1200.0)), 1.0);
        // Height is the limiting side
        assert_eq!(card.scale(Size::new(900.0, 600.0)), 0.5);
        // Width is the limiting side
        assert_eq!(card.scale(Size::new(300.0, 1200.0)), 1.0 / 3.0);
    }
}
