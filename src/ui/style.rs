/// Black + white sketchbook palette and shared widget styles
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Page background, #f4f1eb
pub const PAPER: Color = Color {
    r: 0xf4 as f32 / 255.0,
    g: 0xf1 as f32 / 255.0,
    b: 0xeb as f32 / 255.0,
    a: 1.0,
};
/// Text and rules, #1b1b1d
pub const INK: Color = Color {
    r: 0x1b as f32 / 255.0,
    g: 0x1b as f32 / 255.0,
    b: 0x1d as f32 / 255.0,
    a: 1.0,
};
/// Secondary text
pub const GRAPHITE: Color = Color {
    r: 0.38,
    g: 0.37,
    b: 0.36,
    a: 1.0,
};

pub fn paper(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAPER)),
        text_color: Some(INK),
        ..container::Style::default()
    }
}

/// Thin ink frame used by cards
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: Some(INK),
        border: Border {
            color: INK,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Dimmed layer behind the lightbox image
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.05, 0.05, 0.06, 0.92))),
        text_color: Some(PAPER),
        ..container::Style::default()
    }
}

/// Label strip over the hero carousel
pub fn label(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PAPER)),
        text_color: Some(INK),
        border: Border {
            color: INK,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Filled call-to-action
pub fn cta(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => GRAPHITE,
        _ => INK,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: PAPER,
        border: Border {
            color: INK,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Outlined secondary action
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => GRAPHITE,
        _ => INK,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: INK,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Borderless text link (nav links, gallery cards)
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => GRAPHITE,
        _ => INK,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Round-ish controls floating over dark backgrounds
pub fn overlay_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 1.0,
        _ => 0.75,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..PAPER })),
        text_color: INK,
        border: Border {
            color: INK,
            width: 1.0,
            radius: 20.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Carousel pagination dot
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: Some(Background::Color(if active { INK } else { PAPER })),
        text_color: INK,
        border: Border {
            color: INK,
            width: 1.0,
            radius: 5.0.into(),
        },
        shadow: Shadow::default(),
    }
}
