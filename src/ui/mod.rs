/// UI module
///
/// One submodule per view, plus the reveal-on-scroll tracker and the
/// shared chrome (header/footer), brand palette, and widget helpers.

pub mod about;
pub mod admin;
pub mod category;
pub mod contact;
pub mod home;
pub mod mockup;
pub mod resources;
pub mod reveal;

use std::collections::HashMap;

use iced::widget::{button, column, container, horizontal_space, image, row, text, Space};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Theme};

use crate::media;
use crate::state::data::View;
use reveal::RevealTracker;

// Brand palette (tailwind-ish zinc scale plus the brand red)
pub const BRAND_RED: Color = Color { r: 0.863, g: 0.149, b: 0.149, a: 1.0 };
pub const BRAND_DARK: Color = Color { r: 0.094, g: 0.094, b: 0.106, a: 1.0 };
pub const ZINC_800: Color = Color { r: 0.153, g: 0.153, b: 0.165, a: 1.0 };
pub const ZINC_700: Color = Color { r: 0.247, g: 0.247, b: 0.275, a: 1.0 };
pub const GRAY_300: Color = Color { r: 0.82, g: 0.82, b: 0.85, a: 1.0 };
pub const GRAY_500: Color = Color { r: 0.44, g: 0.44, b: 0.48, a: 1.0 };
pub const WHITE: Color = Color::WHITE;

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

/// Dark card background used for grouped content
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ZINC_800)),
        text_color: Some(WHITE),
        border: rounded(12.0),
        ..container::Style::default()
    }
}

/// Near-black panel, used for the admin shell and form panels
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BRAND_DARK)),
        text_color: Some(WHITE),
        border: rounded(12.0),
        ..container::Style::default()
    }
}

/// Brand-red call-to-action band
pub fn cta_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BRAND_RED)),
        text_color: Some(WHITE),
        ..container::Style::default()
    }
}

fn banner_error_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            r: 0.4,
            g: 0.08,
            b: 0.08,
            a: 1.0,
        })),
        text_color: Some(Color {
            r: 0.99,
            g: 0.79,
            b: 0.79,
            a: 1.0,
        }),
        border: Border {
            color: BRAND_RED,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

fn banner_success_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            r: 0.07,
            g: 0.3,
            b: 0.15,
            a: 1.0,
        })),
        text_color: Some(Color {
            r: 0.73,
            g: 0.95,
            b: 0.8,
            a: 1.0,
        }),
        border: Border {
            color: Color {
                r: 0.13,
                g: 0.55,
                b: 0.27,
                a: 1.0,
            },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

fn header_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BRAND_DARK)),
        text_color: Some(WHITE),
        ..container::Style::default()
    }
}

/// Inline error message, shown at the component that issued the call
pub fn error_banner<'a, M: 'a>(message: &str) -> Element<'a, M> {
    container(text(message.to_string()).size(14))
        .style(banner_error_style)
        .padding(12)
        .width(Length::Fill)
        .into()
}

/// Inline success confirmation
pub fn success_banner<'a, M: 'a>(message: &str) -> Element<'a, M> {
    container(text(format!("✅ {message}")).size(14))
        .style(banner_success_style)
        .padding(12)
        .width(Length::Fill)
        .into()
}

/// One-line busy indicator for in-flight AI calls
pub fn busy_line<'a, M: 'a>(label: &str) -> Element<'a, M> {
    text(format!("⏳ {label}")).size(14).color(GRAY_300).into()
}

/// Wrap a marketing section so it renders as blank space of the same
/// height until the reveal tracker has seen it scroll into view.
pub fn reveal_block<'a, M: 'a>(
    tracker: &RevealTracker,
    id: &str,
    height: f32,
    content: Element<'a, M>,
) -> Element<'a, M> {
    if tracker.is_revealed(id) {
        content
    } else {
        Space::new(Length::Fill, Length::Fixed(height)).into()
    }
}

/// Decode a data URI into a displayable image handle.
pub fn handle_from_url(url: &str) -> Option<image::Handle> {
    media::decode_data_uri(url).map(image::Handle::from_bytes)
}

/// Decode every data-URI url in an iterator into handles, keyed by url.
pub fn decode_handles<'a>(
    urls: impl Iterator<Item = &'a str>,
) -> HashMap<String, image::Handle> {
    urls.filter_map(|url| Some((url.to_string(), handle_from_url(url)?)))
        .collect()
}

/// Render a gallery image from either the local (data URI) handle map or
/// the remote fetch cache, with a placeholder while loading or on failure.
pub fn gallery_image<'a, M: 'a>(
    local: &HashMap<String, image::Handle>,
    remote: &HashMap<String, Option<image::Handle>>,
    url: &str,
    height: f32,
) -> Element<'a, M> {
    let handle = local
        .get(url)
        .cloned()
        .or_else(|| remote.get(url).cloned().flatten());

    match handle {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("…").size(24).color(GRAY_500))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(height))
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(ZINC_700)),
                border: rounded(8.0),
                ..container::Style::default()
            })
            .into(),
    }
}

/// Lay out children in equal-width rows of `per_row`.
pub fn grid<'a, M: 'a>(
    children: Vec<Element<'a, M>>,
    per_row: usize,
    spacing: u16,
) -> Element<'a, M> {
    let mut rows = column![].spacing(spacing).width(Length::Fill);
    let mut current: Vec<Element<'a, M>> = Vec::new();

    for child in children {
        current.push(
            container(child)
                .width(Length::FillPortion(1))
                .into(),
        );
        if current.len() == per_row {
            rows = rows.push(
                iced::widget::Row::with_children(std::mem::take(&mut current)).spacing(spacing),
            );
        }
    }
    if !current.is_empty() {
        rows = rows.push(iced::widget::Row::with_children(current).spacing(spacing));
    }

    rows.into()
}

fn nav_link(label: &str, target: View, current: View) -> Element<'static, View> {
    let color = if target == current { BRAND_RED } else { GRAY_300 };
    button(text(label.to_string()).size(14).color(color))
        .style(button::text)
        .on_press(target)
        .into()
}

/// Persistent top bar. Emits the view to navigate to.
pub fn header(current: View) -> Element<'static, View> {
    let brand = button(text("ANSONSPORTS").size(24).color(WHITE))
        .style(button::text)
        .on_press(View::Home);

    let nav = row![
        nav_link("Home", View::Home, current),
        nav_link("About Us", View::About, current),
        nav_link("AI Mockup Generator", View::Mockup, current),
        nav_link("Resources", View::Resources, current),
        button(text("Get a Quote").size(14))
            .style(button::primary)
            .padding(10)
            .on_press(View::Contact),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    container(
        row![brand, horizontal_space(), nav]
            .align_y(Alignment::Center)
            .width(Length::Fill),
    )
    .padding(16)
    .width(Length::Fill)
    .style(header_bar)
    .into()
}

/// Persistent footer with contact details and the (unauthenticated)
/// admin panel link.
pub fn footer() -> Element<'static, View> {
    let year = chrono::Utc::now().format("%Y");

    let blurb = column![
        text("ANSONSPORTS").size(18).color(WHITE),
        text(
            "Your trusted partner in premium, custom sports apparel manufacturing. \
             From local clubs to professional leagues, we equip every athlete for victory."
        )
        .size(13)
        .color(GRAY_300),
    ]
    .spacing(8)
    .max_width(360);

    let contact = column![
        text("Contact Us").size(18).color(WHITE),
        text("📍 Sialkot, Punjab, Pakistan").size(13).color(GRAY_300),
        text("📞 +92 123 4567890").size(13).color(GRAY_300),
        text("✉ sales@ansonssports.com").size(13).color(GRAY_300),
    ]
    .spacing(8);

    container(
        column![
            row![blurb, horizontal_space(), contact].width(Length::Fill),
            text(format!("© {year} ANSONSPORTS Manufacturing. All Rights Reserved."))
                .size(12)
                .color(GRAY_500),
            button(text("🛡 Admin Panel").size(12).color(GRAY_500))
                .style(button::text)
                .on_press(View::Admin),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .width(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            r: 0.07,
            g: 0.07,
            b: 0.08,
            a: 1.0,
        })),
        text_color: Some(GRAY_300),
        ..container::Style::default()
    })
    .into()
}
