/// Category gallery: every portfolio item in one category, with the
/// alternate product shot swapped in while a card is hovered.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, mouse_area, text};
use iced::{Alignment, Element, Length};

use crate::state::content::ContentStore;
use crate::state::data::{PortfolioCategory, PortfolioItem};

use super::reveal::{RevealTarget, RevealTracker};
use super::{gallery_image, grid, BRAND_RED, GRAY_300, GRAY_500, WHITE};

#[derive(Debug, Clone)]
pub enum Event {
    Hover(String),
    Unhover,
    BackHome,
}

#[derive(Debug)]
pub struct State {
    category: PortfolioCategory,
    items: Vec<PortfolioItem>,
    local_handles: HashMap<String, image::Handle>,
    hovered: Option<String>,
}

impl State {
    pub fn load(category: PortfolioCategory, store: &mut ContentStore) -> Self {
        let items = filter_items(category, store.portfolio_items());
        let local_handles = super::decode_handles(
            items
                .iter()
                .flat_map(|i| [i.image_url.as_str(), i.hover_image_url.as_str()]),
        );
        State {
            category,
            items,
            local_handles,
            hovered: None,
        }
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|i| [i.image_url.clone(), i.hover_image_url.clone()])
            .collect()
    }
}

pub fn update(state: &mut State, event: Event) {
    match event {
        Event::Hover(id) => state.hovered = Some(id),
        Event::Unhover => state.hovered = None,
        Event::BackHome => {}
    }
}

/// Keep only the items in `category`, preserving the store's descending
/// id order.
pub fn filter_items(
    category: PortfolioCategory,
    all: Vec<PortfolioItem>,
) -> Vec<PortfolioItem> {
    all.into_iter()
        .filter(|item| item.category == category)
        .collect()
}

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![
        RevealTarget::new("category-intro", 0.0, 180.0),
        RevealTarget::new("category-grid", 200.0, 900.0),
    ]
}

pub fn view<'a>(
    state: &'a State,
    tracker: &RevealTracker,
    remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, Event> {
    let intro = column![
        button(text("← Back to Home").size(14))
            .style(button::text)
            .on_press(Event::BackHome),
        text(state.category.label().to_uppercase()).size(40).color(WHITE),
        text(format!(
            "Our finest custom {} work, manufactured to order.",
            state.category.label().to_lowercase()
        ))
        .size(16)
        .color(GRAY_300),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let gallery: Element<'a, Event> = if state.items.is_empty() {
        container(
            column![
                text("No Products Found").size(24).color(WHITE),
                text("We haven't published portfolio pieces in this category yet.")
                    .size(14)
                    .color(GRAY_500),
                button(text("Browse All Work").size(14))
                    .style(button::secondary)
                    .padding(10)
                    .on_press(Event::BackHome),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(80)
        .center_x(Length::Fill)
        .into()
    } else {
        grid(
            state
                .items
                .iter()
                .map(|item| item_card(state, item, remote))
                .collect(),
            3,
            20,
        )
    };

    column![
        super::reveal_block(tracker, "category-intro", 180.0, intro.into()),
        super::reveal_block(tracker, "category-grid", 900.0, gallery),
    ]
    .spacing(24)
    .padding(40)
    .into()
}

fn item_card<'a>(
    state: &'a State,
    item: &'a PortfolioItem,
    remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, Event> {
    let hovered = state.hovered.as_deref() == Some(item.id.as_str());
    let url = if hovered {
        &item.hover_image_url
    } else {
        &item.image_url
    };

    let mut body = column![
        gallery_image(&state.local_handles, remote, url, 420.0),
        text(item.category.label().to_uppercase())
            .size(11)
            .color(BRAND_RED),
        text(item.title.clone()).size(20).color(WHITE),
    ]
    .spacing(8);

    if let Some(description) = &item.description {
        body = body.push(text(description.clone()).size(13).color(GRAY_300));
    }

    mouse_area(container(body).padding(10).style(super::card))
        .on_enter(Event::Hover(item.id.clone()))
        .on_exit(Event::Unhover)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::backing::MemoryBacking;

    #[test]
    fn test_filter_keeps_category_order_from_the_store() {
        let mut store = ContentStore::new(Box::new(MemoryBacking::default()));
        let items = filter_items(PortfolioCategory::Sublimation, store.portfolio_items());

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["6", "2"]);
        assert!(items
            .iter()
            .all(|i| i.category == PortfolioCategory::Sublimation));
    }

    #[test]
    fn test_category_with_no_items_yields_empty_gallery() {
        let mut store = ContentStore::new(Box::new(MemoryBacking::default()));
        let state = State::load(PortfolioCategory::Other, &mut store);
        assert!(state.items.is_empty());
        assert!(state.image_urls().is_empty());
    }

    #[test]
    fn test_hover_tracks_one_item_at_a_time() {
        let mut store = ContentStore::new(Box::new(MemoryBacking::default()));
        let mut state = State::load(PortfolioCategory::TeamUniforms, &mut store);

        update(&mut state, Event::Hover("5".to_string()));
        assert_eq!(state.hovered.as_deref(), Some("5"));

        update(&mut state, Event::Hover("1".to_string()));
        assert_eq!(state.hovered.as_deref(), Some("1"));

        update(&mut state, Event::Unhover);
        assert!(state.hovered.is_none());
    }
}
