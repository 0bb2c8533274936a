/// Home view: hero, specialization cards, manufacturing process, and the
/// portfolio grid read from the content store.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, stack, text};
use iced::{Alignment, Element, Length};

use crate::state::content::ContentStore;
use crate::state::data::{PortfolioCategory, PortfolioItem, View};

use super::reveal::{RevealTarget, RevealTracker};
use super::{gallery_image, grid, reveal_block, BRAND_RED, GRAY_300, GRAY_500, WHITE};

/// Page offset of the portfolio section, used by the hero's
/// "View Portfolio" jump.
pub const PORTFOLIO_TOP: f32 = 2150.0;

const HERO_URL: &str = "https://picsum.photos/seed/soccerbg/1920/1080";

const SPECIALIZATIONS: [(PortfolioCategory, &str); 4] = [
    (PortfolioCategory::TeamUniforms, "https://picsum.photos/seed/team/600/400"),
    (PortfolioCategory::Sublimation, "https://picsum.photos/seed/sublimation/600/400"),
    (PortfolioCategory::GymTraining, "https://picsum.photos/seed/gym/600/400"),
    (PortfolioCategory::MartialArts, "https://picsum.photos/seed/ma/600/400"),
];

const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    ("🧵", "Fabric Selection", "Moisture-wicking, stretch, and durable fabrics tailored to your sport."),
    ("💧", "Advanced Printing", "Vibrant, full-color sublimation and precision screen printing that never fades."),
    ("✂", "Precision Stitching", "Reinforced seams and expert construction for maximum durability in action."),
    ("✅", "Quality Assurance", "Rigorous inspection at every step guarantees a flawless final product."),
];

#[derive(Debug, Clone)]
pub enum Event {
    Navigate(View),
    JumpToPortfolio,
}

pub struct State {
    items: Vec<PortfolioItem>,
    local_handles: HashMap<String, image::Handle>,
}

impl State {
    pub fn load(store: &mut ContentStore) -> Self {
        let items = store.portfolio_items();
        let local_handles = super::decode_handles(items.iter().map(|i| i.image_url.as_str()));
        State {
            items,
            local_handles,
        }
    }

    /// Every remote URL this view wants fetched for display.
    pub fn image_urls(&self) -> Vec<String> {
        let mut urls = vec![HERO_URL.to_string()];
        urls.extend(SPECIALIZATIONS.iter().map(|(_, url)| url.to_string()));
        urls.extend(self.items.iter().map(|i| i.image_url.clone()));
        urls
    }
}

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![
        RevealTarget::new("home-hero", 0.0, 620.0),
        RevealTarget::new("home-specializations", 640.0, 760.0),
        RevealTarget::new("home-process", 1420.0, 700.0),
        RevealTarget::new("home-portfolio", PORTFOLIO_TOP, 900.0),
    ]
}

pub fn view<'a>(
    state: &'a State,
    tracker: &RevealTracker,
    remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, Event> {
    column![
        reveal_block(tracker, "home-hero", 620.0, hero(state, remote)),
        reveal_block(
            tracker,
            "home-specializations",
            760.0,
            specializations(state, remote)
        ),
        reveal_block(tracker, "home-process", 700.0, process()),
        reveal_block(tracker, "home-portfolio", 900.0, portfolio(state, remote)),
    ]
    .into()
}

fn hero<'a>(
    state: &'a State,
    remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, Event> {
    let headline = column![
        text("EQUIP EVERY ATHLETE").size(64).color(WHITE),
        text(
            "From youth leagues to pro teams, we deliver high-performance, fully \
             customized sportswear with unmatched quality and speed."
        )
        .size(18)
        .color(GRAY_300),
        iced::widget::row![
            button(text("Get a Quote").size(16))
                .style(button::primary)
                .padding(14)
                .on_press(Event::Navigate(View::Contact)),
            button(text("View Portfolio").size(16))
                .style(button::secondary)
                .padding(14)
                .on_press(Event::JumpToPortfolio),
        ]
        .spacing(16),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .max_width(760);

    stack![
        gallery_image(&state.local_handles, remote, HERO_URL, 620.0),
        container(headline)
            .width(Length::Fill)
            .height(Length::Fixed(620.0))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(620.0)),
    ]
    .into()
}

fn specializations<'a>(
    state: &'a State,
    remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, Event> {
    let cards = SPECIALIZATIONS
        .iter()
        .map(|(category, url)| {
            button(
                column![
                    gallery_image(&state.local_handles, remote, url, 220.0),
                    text(category.label()).size(20).color(WHITE),
                ]
                .spacing(10),
            )
            .style(button::text)
            .on_press(Event::Navigate(View::Category(*category)))
            .into()
        })
        .collect();

    container(
        column![
            text("OUR SPECIALIZATIONS").size(32).color(WHITE),
            text(
                "We manufacture performance gear for every discipline, built to your \
                 exact specifications."
            )
            .size(16)
            .color(GRAY_300),
            grid(cards, 4, 20),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .into()
}

fn process<'a>() -> Element<'a, Event> {
    let cards = PROCESS_STEPS
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

    container(
        column![
            text("BUILT FOR PERFORMANCE, FROM START TO FINISH").size(32).color(WHITE),
            text(
                "Our meticulous process ensures every piece of apparel meets the \
                 highest standards of durability and design."
            )
            .size(16)
            .color(GRAY_300),
            grid(cards, 4, 20),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .style(super::panel)
    .into()
}

fn portfolio<'a>(
    state: &'a State,
    remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, Event> {
    let cards = state
        .items
        .iter()
        .map(|item| {
            container(
                column![
                    gallery_image(&state.local_handles, remote, &item.image_url, 360.0),
                    text(item.category.label().to_uppercase())
                        .size(11)
                        .color(BRAND_RED),
                    text(item.title.clone()).size(20).color(WHITE),
                ]
                .spacing(8),
            )
            .padding(10)
            .style(super::card)
            .into()
        })
        .collect();

    container(
        column![
            text("OUR WORK IN ACTION").size(32).color(WHITE),
            text(
                "We've outfitted thousands of athletes. Here's a look at some of our \
                 favorite projects."
            )
            .size(16)
            .color(GRAY_500),
            grid(cards, 3, 20),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .into()
}
