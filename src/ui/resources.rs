/// Resources view: the public blog. Lists saved posts newest-first and
/// offers an AI "suggest a topic" teaser; the generated idea is display
/// only, actual drafting happens in the admin panel.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, text};
use iced::{Alignment, Element, Length, Task};

use crate::ai::{GenerationGateway, PostIdea};
use crate::state::content::ContentStore;
use crate::state::data::BlogPost;

use super::reveal::{RevealTarget, RevealTracker};
use super::{busy_line, error_banner, grid, BRAND_RED, GRAY_300, GRAY_500, WHITE};

/// Shown on post cards that carry no explicit summary.
const SUMMARY_LIMIT: usize = 150;

#[derive(Debug, Clone)]
pub enum Event {
    GenerateIdea,
    IdeaReady(Result<PostIdea, String>),
}

#[derive(Debug, Default)]
pub struct State {
    posts: Vec<BlogPost>,
    idea: Option<PostIdea>,
    loading: bool,
    error: Option<String>,
}

impl State {
    pub fn load(store: &ContentStore) -> Self {
        State {
            posts: store.posts(),
            ..State::default()
        }
    }
}

pub fn update(state: &mut State, event: Event, gateway: &GenerationGateway) -> Task<Event> {
    match event {
        Event::GenerateIdea => {
            state.loading = true;
            state.error = None;
            let gateway = gateway.clone();
            Task::perform(
                async move { gateway.draft_blog_idea().await.map_err(|e| e.to_string()) },
                Event::IdeaReady,
            )
        }
        Event::IdeaReady(result) => {
            state.loading = false;
            match result {
                Ok(idea) => state.idea = Some(idea),
                Err(message) => state.error = Some(message),
            }
            Task::none()
        }
    }
}

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![
        RevealTarget::new("resources-intro", 0.0, 220.0),
        RevealTarget::new("resources-posts", 240.0, 900.0),
    ]
}

pub fn view<'a>(
    state: &'a State,
    tracker: &RevealTracker,
    _remote: &HashMap<String, Option<image::Handle>>,
) -> Element<'a, Event> {
    let mut intro = column![
        text("RESOURCES & INSIGHTS").size(40).color(WHITE),
        text(
            "Guides, trends, and behind-the-scenes looks at custom sportswear \
             manufacturing."
        )
        .size(16)
        .color(GRAY_300),
        if state.loading {
            Element::from(busy_line("Thinking of a topic..."))
        } else {
            button(text("💡 Suggest a Topic").size(14))
                .style(button::secondary)
                .padding(10)
                .on_press(Event::GenerateIdea)
                .into()
        },
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    if let Some(message) = &state.error {
        intro = intro.push(error_banner(message));
    }
    if let Some(idea) = &state.idea {
        intro = intro.push(
            container(
                column![
                    text(format!("💡 {}", idea.title)).size(18).color(BRAND_RED),
                    text(idea.summary.clone()).size(14).color(GRAY_300),
                ]
                .spacing(6),
            )
            .padding(16)
            .max_width(640)
            .style(super::card),
        );
    }

    let posts: Element<'a, Event> = if state.posts.is_empty() {
        container(
            column![
                text("No Posts Yet").size(24).color(WHITE),
                text("Check back soon for articles, guides, and industry insights.")
                    .size(14)
                    .color(GRAY_500),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(60)
        .center_x(Length::Fill)
        .into()
    } else {
        grid(state.posts.iter().map(post_card).collect(), 3, 20)
    };

    column![
        super::reveal_block(tracker, "resources-intro", 220.0, intro.into()),
        super::reveal_block(
            tracker,
            "resources-posts",
            900.0,
            container(posts).padding(40).width(Length::Fill).into()
        ),
    ]
    .spacing(24)
    .padding(40)
    .into()
}

fn post_card(post: &BlogPost) -> Element<'_, Event> {
    let summary = post
        .summary
        .clone()
        .unwrap_or_else(|| plain_text_summary(&post.content));

    let date = post
        .created_at
        .split('T')
        .next()
        .unwrap_or(&post.created_at)
        .to_string();

    container(
        column![
            text(date).size(11).color(BRAND_RED),
            text(post.title.clone()).size(20).color(WHITE),
            text(summary).size(14).color(GRAY_300),
        ]
        .spacing(8),
    )
    .padding(20)
    .style(super::card)
    .into()
}

/// Strip the markdown a drafted post arrives in down to a plain-text
/// preview: headings and emphasis markers go, links keep their label, and
/// the result is cut to the card length.
pub fn plain_text_summary(markdown: &str) -> String {
    let mut plain = String::new();

    for line in markdown.lines() {
        let line = line.trim_start_matches('#').trim();
        if line.is_empty() {
            continue;
        }
        if !plain.is_empty() {
            plain.push(' ');
        }

        let mut rest = line;
        while let Some(open) = rest.find('[') {
            plain.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find("](").and_then(|close| {
                after[close..].find(')').map(|end| (close, close + end + 1))
            }) {
                Some((close, end)) => {
                    plain.push_str(&after[..close]);
                    rest = &after[end..];
                }
                None => {
                    plain.push('[');
                    rest = after;
                }
            }
        }
        plain.push_str(rest);
    }

    let plain: String = plain.chars().filter(|c| *c != '*' && *c != '_').collect();

    if plain.chars().count() > SUMMARY_LIMIT {
        let cut: String = plain.chars().take(SUMMARY_LIMIT).collect();
        format!("{}...", cut.trim_end())
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_strips_headings_and_emphasis() {
        let md = "# The Big Title\n\nSome **bold** and _subtle_ text.";
        assert_eq!(
            plain_text_summary(md),
            "The Big Title Some bold and subtle text."
        );
    }

    #[test]
    fn test_summary_keeps_link_labels_only() {
        let md = "Read [our guide](https://example.com/guide) today.";
        assert_eq!(plain_text_summary(md), "Read our guide today.");
    }

    #[test]
    fn test_summary_truncates_long_posts_with_ellipsis() {
        let md = "word ".repeat(100);
        let summary = plain_text_summary(&md);
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= SUMMARY_LIMIT + 3);
    }

    #[test]
    fn test_short_posts_are_not_truncated() {
        assert_eq!(plain_text_summary("Just a note."), "Just a note.");
    }
}
