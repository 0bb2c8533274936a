/// About view: company story, core values, and a call to action.
/// Emits the view to navigate to.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, stack, text};
use iced::{Alignment, Element, Length};

use crate::state::data::View;

use super::reveal::{RevealTarget, RevealTracker};
use super::{gallery_image, grid, reveal_block, BRAND_RED, GRAY_300, WHITE};

const FACTORY_URL: &str = "https://picsum.photos/seed/factory/1920/1080";
const STITCHING_URL: &str = "https://picsum.photos/seed/stitching/800/600";

const VALUES: [(&str, &str, &str); 4] = [
    ("🎯", "Uncompromising Quality", "We source the finest materials and employ meticulous quality control to ensure every garment is built to last."),
    ("⚡", "Constant Innovation", "From sublimation techniques to performance fabrics, we relentlessly pursue the next advancement in sportswear."),
    ("🤝", "True Partnership", "We work with you, not just for you. Your success is our success, and we build relationships to match."),
    ("🛡", "Absolute Integrity", "Honest pricing, transparent processes, and a commitment to delivering on our promises, every single time."),
];

pub fn image_urls() -> Vec<String> {
    vec![FACTORY_URL.to_string(), STITCHING_URL.to_string()]
}

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![
        RevealTarget::new("about-hero", 0.0, 380.0),
        RevealTarget::new("about-story", 400.0, 520.0),
        RevealTarget::new("about-values", 940.0, 640.0),
        RevealTarget::new("about-cta", 1600.0, 280.0),
    ]
}

pub fn view<'a>(
    tracker: &RevealTracker,
    remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, View> {
    let none = HashMap::new();

    let hero = stack![
        gallery_image(&none, remote, FACTORY_URL, 380.0),
        container(
            column![
                text("THE HEART OF THE GAME").size(52).color(WHITE),
                text(
                    "Discover the story, passion, and craftsmanship woven into every \
                     ANSONSPORTS garment."
                )
                .size(18)
                .color(GRAY_300),
            ]
            .spacing(14)
            .align_x(Alignment::Center)
        )
        .width(Length::Fill)
        .height(Length::Fixed(380.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(380.0)),
    ]
    .into();

    let story = container(
        iced::widget::row![
            column![
                text("FROM SIALKOT, WITH PASSION").size(32).color(WHITE),
                text(
                    "Founded in the heart of Pakistan's renowned sports manufacturing \
                     hub, Sialkot, ANSONSPORTS began with a simple mission: to provide \
                     athletes of all levels with apparel that doesn't just look \
                     professional, but performs at the highest level."
                )
                .size(15)
                .color(GRAY_300),
                text(
                    "Our founder, a second-generation artisan, combined decades of \
                     family expertise in textile and garment production with a modern \
                     vision for technology and customer service. Today, ANSONSPORTS \
                     stands as a blend of traditional craftsmanship and cutting-edge \
                     innovation, serving teams and brands worldwide."
                )
                .size(15)
                .color(GRAY_300),
            ]
            .spacing(16)
            .width(Length::FillPortion(1)),
            container(gallery_image(&none, remote, STITCHING_URL, 420.0))
                .width(Length::FillPortion(1)),
        ]
        .spacing(32),
    )
    .padding(40)
    .width(Length::Fill)
    .into();

    let value_cards = VALUES
        .iter()
        .map(|(icon, title, desc)| {
            container(
                column![
                    text(*icon).size(36).color(BRAND_RED),
                    text(*title).size(20).color(WHITE),
                    text(*desc).size(14).color(GRAY_300),
                ]
                .spacing(12)
                .align_x(Alignment::Center),
            )
            .padding(24)
            .style(super::card)
            .into()
        })
        .collect();

    let values = container(
        column![
            text("OUR CORE VALUES").size(32).color(WHITE),
            text("The principles that guide every cut, stitch, and decision.")
                .size(16)
                .color(GRAY_300),
            grid(value_cards, 4, 20),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .style(super::panel)
    .into();

    let cta = container(
        column![
            text("Ready to Build Your Legacy?").size(32).color(WHITE),
            text(
                "Let's partner to create custom sportswear that embodies your team's \
                 spirit and ambition."
            )
            .size(16)
            .color(WHITE),
            button(text("Start Your Project").size(16))
                .style(button::secondary)
                .padding(14)
                .on_press(View::Contact),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Length::Fill)
    .style(super::cta_band)
    .into();

    column![
        reveal_block(tracker, "about-hero", 380.0, hero),
        reveal_block(tracker, "about-story", 520.0, story),
        reveal_block(tracker, "about-values", 640.0, values),
        reveal_block(tracker, "about-cta", 280.0, cta),
    ]
    .into()
}
