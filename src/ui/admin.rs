/// Admin panel: blog drafting, image generation, the media library, and
/// the product uploader. Every AI flow is generate → review/edit → save;
/// nothing is persisted without an explicit save.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{
    button, column, container, image, pick_list, row, text, text_editor, text_input,
};
use iced::{Alignment, Element, Length, Task};
use rfd::FileDialog;

use crate::ai::{DraftPost, GenerationGateway, ProductDetails};
use crate::media;
use crate::state::content::ContentStore;
use crate::state::data::{timestamp_now, BlogPost, ManagedImage, PortfolioCategory, PortfolioItem};

use super::{busy_line, error_banner, handle_from_url, success_banner, GRAY_300, GRAY_500, WHITE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Blog,
    Image,
    Library,
    Products,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Blog, Tab::Image, Tab::Library, Tab::Products];

    fn label(self) -> &'static str {
        match self {
            Tab::Blog => "📝 Blog Creator",
            Tab::Image => "🎨 Image Generator",
            Tab::Library => "🖼 Media Library",
            Tab::Products => "📦 Product Uploader",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    TabPicked(Tab),

    TopicChanged(String),
    GenerateBlog,
    BlogDrafted(Result<DraftPost, String>),
    DraftTitleChanged(String),
    DraftEdited(text_editor::Action),
    SaveBlog,

    PromptChanged(String),
    GenerateImage,
    ImageGenerated(Result<String, String>),
    SaveImage,

    CopyUrl(String),
    CopyReset,

    PickProduct,
    Analyze,
    Analyzed(Result<(String, ProductDetails), String>),
    ProductTitleChanged(String),
    ProductCategoryPicked(PortfolioCategory),
    ProductDescriptionChanged(String),
    SaveProduct,

    ClearNotice,
}

pub struct State {
    tab: Tab,

    topic: String,
    draft_title: String,
    draft_body: Option<text_editor::Content>,
    blog_busy: bool,

    prompt: String,
    generated_uri: Option<String>,
    generated_handle: Option<image::Handle>,
    image_busy: bool,

    images: Vec<ManagedImage>,
    library_handles: HashMap<String, image::Handle>,
    copied: Option<String>,

    product_path: Option<PathBuf>,
    product_uri: Option<String>,
    product_handle: Option<image::Handle>,
    product_title: String,
    product_category: Option<PortfolioCategory>,
    product_description: String,
    product_busy: bool,

    error: Option<String>,
    notice: Option<String>,
}

impl State {
    pub fn load(store: &ContentStore) -> Self {
        let images = store.images();
        let library_handles = super::decode_handles(images.iter().map(|i| i.url.as_str()));

        State {
            tab: Tab::Blog,
            topic: String::new(),
            draft_title: String::new(),
            draft_body: None,
            blog_busy: false,
            prompt: String::new(),
            generated_uri: None,
            generated_handle: None,
            image_busy: false,
            images,
            library_handles,
            copied: None,
            product_path: None,
            product_uri: None,
            product_handle: None,
            product_title: String::new(),
            product_category: None,
            product_description: String::new(),
            product_busy: false,
            error: None,
            notice: None,
        }
    }

    fn refresh_library(&mut self, store: &ContentStore) {
        self.images = store.images();
        self.library_handles = super::decode_handles(self.images.iter().map(|i| i.url.as_str()));
    }

    fn notify(&mut self, message: &str) -> Task<Event> {
        self.notice = Some(message.to_string());
        self.error = None;
        Task::perform(tokio::time::sleep(Duration::from_secs(5)), |_| {
            Event::ClearNotice
        })
    }
}

pub fn update(
    state: &mut State,
    event: Event,
    store: &mut ContentStore,
    gateway: &GenerationGateway,
) -> Task<Event> {
    match event {
        Event::TabPicked(tab) => {
            state.tab = tab;
            state.error = None;
            Task::none()
        }

        Event::TopicChanged(topic) => {
            state.topic = topic;
            Task::none()
        }
        Event::GenerateBlog => {
            let topic = state.topic.trim().to_string();
            if topic.is_empty() {
                state.error = Some("Please enter a topic for the post.".to_string());
                return Task::none();
            }
            state.blog_busy = true;
            state.error = None;

            let gateway = gateway.clone();
            Task::perform(
                async move {
                    gateway
                        .draft_blog_post(&topic)
                        .await
                        .map_err(|e| e.to_string())
                },
                Event::BlogDrafted,
            )
        }
        Event::BlogDrafted(result) => {
            state.blog_busy = false;
            match result {
                Ok(draft) => {
                    state.draft_title = draft.title;
                    state.draft_body = Some(text_editor::Content::with_text(&draft.content));
                }
                Err(message) => state.error = Some(message),
            }
            Task::none()
        }
        Event::DraftTitleChanged(title) => {
            state.draft_title = title;
            Task::none()
        }
        Event::DraftEdited(action) => {
            if let Some(body) = &mut state.draft_body {
                body.perform(action);
            }
            Task::none()
        }
        Event::SaveBlog => {
            let Some(body) = &state.draft_body else {
                return Task::none();
            };
            if state.draft_title.trim().is_empty() {
                state.error = Some("The post needs a title.".to_string());
                return Task::none();
            }

            let post = BlogPost::new(state.draft_title.trim(), body.text());
            match store.save_post(post) {
                Ok(()) => {
                    println!("📝 Blog post published: {}", state.draft_title.trim());
                    state.topic.clear();
                    state.draft_title.clear();
                    state.draft_body = None;
                    state.notify("Post published to the resources page.")
                }
                Err(err) => {
                    state.error = Some(format!("Could not save the post: {err}"));
                    Task::none()
                }
            }
        }

        Event::PromptChanged(prompt) => {
            state.prompt = prompt;
            Task::none()
        }
        Event::GenerateImage => {
            let prompt = state.prompt.trim().to_string();
            if prompt.is_empty() {
                state.error = Some("Please describe the image to generate.".to_string());
                return Task::none();
            }
            state.image_busy = true;
            state.error = None;

            let gateway = gateway.clone();
            Task::perform(
                async move { gateway.generate_image(&prompt).await.map_err(|e| e.to_string()) },
                Event::ImageGenerated,
            )
        }
        Event::ImageGenerated(result) => {
            state.image_busy = false;
            match result {
                Ok(uri) => {
                    state.generated_handle = handle_from_url(&uri);
                    state.generated_uri = Some(uri);
                }
                Err(message) => state.error = Some(message),
            }
            Task::none()
        }
        Event::SaveImage => {
            let Some(uri) = state.generated_uri.clone() else {
                return Task::none();
            };
            match store.save_image(state.prompt.trim(), &uri) {
                Ok(_) => {
                    state.generated_uri = None;
                    state.generated_handle = None;
                    state.refresh_library(store);
                    state.notify("Image saved to the media library.")
                }
                Err(err) => {
                    state.error = Some(format!("Could not save the image: {err}"));
                    Task::none()
                }
            }
        }

        Event::CopyUrl(url) => {
            state.copied = Some(url.clone());
            Task::batch([
                iced::clipboard::write(url),
                Task::perform(tokio::time::sleep(Duration::from_secs(2)), |_| {
                    Event::CopyReset
                }),
            ])
        }
        Event::CopyReset => {
            state.copied = None;
            Task::none()
        }

        Event::PickProduct => {
            let picked = FileDialog::new()
                .set_title("Select Product Photo")
                .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                .pick_file();
            if let Some(path) = picked {
                state.product_path = Some(path);
                state.product_uri = None;
                state.product_handle = None;
                state.error = None;
            }
            Task::none()
        }
        Event::Analyze => {
            let Some(path) = state.product_path.clone() else {
                state.error = Some("Please select a product photo first.".to_string());
                return Task::none();
            };
            state.product_busy = true;
            state.error = None;

            let gateway = gateway.clone();
            Task::perform(
                async move {
                    let upload = media::encode_image_file(&path)
                        .await
                        .map_err(|e| e.to_string())?;
                    let details = gateway
                        .describe_product_image(&upload.base64, &upload.mime_type)
                        .await
                        .map_err(|e| e.to_string())?;
                    Ok((upload.data_uri(), details))
                },
                Event::Analyzed,
            )
        }
        Event::Analyzed(result) => {
            state.product_busy = false;
            match result {
                Ok((uri, details)) => {
                    state.product_handle = handle_from_url(&uri);
                    state.product_uri = Some(uri);
                    state.product_title = details.title;
                    state.product_category = PortfolioCategory::from_label(&details.category);
                    state.product_description = details.description;
                }
                Err(message) => state.error = Some(message),
            }
            Task::none()
        }
        Event::ProductTitleChanged(title) => {
            state.product_title = title;
            Task::none()
        }
        Event::ProductCategoryPicked(category) => {
            state.product_category = Some(category);
            Task::none()
        }
        Event::ProductDescriptionChanged(description) => {
            state.product_description = description;
            Task::none()
        }
        Event::SaveProduct => {
            let Some(uri) = state.product_uri.clone() else {
                state.error = Some("Analyze a product photo before saving.".to_string());
                return Task::none();
            };
            if state.product_title.trim().is_empty() {
                state.error = Some("The product needs a title.".to_string());
                return Task::none();
            }
            let Some(category) = state.product_category else {
                state.error = Some("Please pick a category for the product.".to_string());
                return Task::none();
            };

            let description = state.product_description.trim();
            let item = PortfolioItem {
                id: timestamp_now(),
                category,
                title: state.product_title.trim().to_string(),
                image_url: uri.clone(),
                hover_image_url: uri,
                description: (!description.is_empty()).then(|| description.to_string()),
            };

            match store.save_portfolio_item(item) {
                Ok(()) => {
                    println!("📦 Portfolio item published: {}", state.product_title.trim());
                    state.product_path = None;
                    state.product_uri = None;
                    state.product_handle = None;
                    state.product_title.clear();
                    state.product_category = None;
                    state.product_description.clear();
                    state.notify("Product added to the portfolio.")
                }
                Err(err) => {
                    state.error = Some(format!("Could not save the product: {err}"));
                    Task::none()
                }
            }
        }

        Event::ClearNotice => {
            state.notice = None;
            Task::none()
        }
    }
}

pub fn view(state: &State) -> Element<'_, Event> {
    let tabs = Tab::ALL.iter().fold(row![].spacing(8), |tabs, tab| {
        tabs.push(
            button(text(tab.label()).size(14))
                .style(if state.tab == *tab {
                    button::primary
                } else {
                    button::text
                })
                .padding(10)
                .on_press(Event::TabPicked(*tab)),
        )
    });

    let mut body = column![
        text("ADMIN PANEL").size(32).color(WHITE),
        tabs,
    ]
    .spacing(20);

    if let Some(message) = &state.error {
        body = body.push(error_banner(message));
    }
    if let Some(message) = &state.notice {
        body = body.push(success_banner(message));
    }

    body = body.push(match state.tab {
        Tab::Blog => blog_tab(state),
        Tab::Image => image_tab(state),
        Tab::Library => library_tab(state),
        Tab::Products => products_tab(state),
    });

    container(container(body).padding(32).style(super::panel))
        .padding(40)
        .width(Length::Fill)
        .into()
}

fn blog_tab(state: &State) -> Element<'_, Event> {
    let mut tab = column![
        text("Draft a post with AI, then review and publish it.")
            .size(14)
            .color(GRAY_300),
        row![
            text_input("Post topic, e.g. 'choosing fabrics for soccer kits'", &state.topic)
                .on_input(Event::TopicChanged)
                .padding(12),
            if state.blog_busy {
                Element::from(busy_line("Drafting..."))
            } else {
                button(text("✨ Generate Draft").size(14))
                    .style(button::primary)
                    .padding(12)
                    .on_press(Event::GenerateBlog)
                    .into()
            },
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(16);

    if let Some(body) = &state.draft_body {
        tab = tab
            .push(
                text_input("Post title", &state.draft_title)
                    .on_input(Event::DraftTitleChanged)
                    .padding(12),
            )
            .push(
                text_editor(body)
                    .on_action(Event::DraftEdited)
                    .height(Length::Fixed(320.0)),
            )
            .push(
                button(text("Publish Post").size(14))
                    .style(button::primary)
                    .padding(12)
                    .on_press(Event::SaveBlog),
            );
    }

    tab.into()
}

fn image_tab(state: &State) -> Element<'_, Event> {
    let mut tab = column![
        text("Generate marketing imagery and save the keepers to the library.")
            .size(14)
            .color(GRAY_300),
        row![
            text_input("Image prompt, e.g. 'a red and white hockey jersey on ice'", &state.prompt)
                .on_input(Event::PromptChanged)
                .padding(12),
            if state.image_busy {
                Element::from(busy_line("Generating..."))
            } else {
                button(text("🎨 Generate").size(14))
                    .style(button::primary)
                    .padding(12)
                    .on_press(Event::GenerateImage)
                    .into()
            },
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(16);

    if let Some(handle) = &state.generated_handle {
        tab = tab
            .push(
                image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(380.0)),
            )
            .push(
                button(text("💾 Save to Library").size(14))
                    .style(button::secondary)
                    .padding(12)
                    .on_press(Event::SaveImage),
            );
    }

    tab.into()
}

fn library_tab(state: &State) -> Element<'_, Event> {
    if state.images.is_empty() {
        return column![
            text("The library is empty.").size(18).color(WHITE),
            text("Generated images you save will appear here.")
                .size(14)
                .color(GRAY_500),
        ]
        .spacing(8)
        .into();
    }

    let cards = state
        .images
        .iter()
        .map(|managed| {
            let copied = state.copied.as_deref() == Some(managed.url.as_str());
            let preview: Element<'_, Event> = match state.library_handles.get(&managed.url) {
                Some(handle) => image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(200.0))
                    .into(),
                None => text("(remote image)").size(12).color(GRAY_500).into(),
            };

            container(
                column![
                    preview,
                    text(managed.prompt.clone()).size(13).color(GRAY_300),
                    button(
                        text(if copied { "✅ Copied!" } else { "📋 Copy URL" }).size(12)
                    )
                    .style(button::secondary)
                    .padding(8)
                    .on_press(Event::CopyUrl(managed.url.clone())),
                ]
                .spacing(8),
            )
            .padding(12)
            .style(super::card)
            .into()
        })
        .collect();

    super::grid(cards, 3, 16)
}

fn products_tab(state: &State) -> Element<'_, Event> {
    let picked_label = state
        .product_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "Select product photo...".to_string());

    let mut tab = column![
        text("Upload a product photo; AI fills in the portfolio details for review.")
            .size(14)
            .color(GRAY_300),
        row![
            button(text(format!("📎 {picked_label}")).size(14))
                .style(button::secondary)
                .padding(12)
                .on_press(Event::PickProduct),
            if state.product_busy {
                Element::from(busy_line("Analyzing photo..."))
            } else {
                button(text("🔍 Analyze with AI").size(14))
                    .style(button::primary)
                    .padding(12)
                    .on_press(Event::Analyze)
                    .into()
            },
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(16);

    if let Some(handle) = &state.product_handle {
        tab = tab.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(280.0)),
        );
    }

    if state.product_uri.is_some() {
        tab = tab
            .push(
                text_input("Product title", &state.product_title)
                    .on_input(Event::ProductTitleChanged)
                    .padding(12),
            )
            .push(
                pick_list(
                    PortfolioCategory::ALL,
                    state.product_category,
                    Event::ProductCategoryPicked,
                )
                .placeholder("Category...")
                .padding(12),
            )
            .push(
                text_input("Marketing description (optional)", &state.product_description)
                    .on_input(Event::ProductDescriptionChanged)
                    .padding(12),
            )
            .push(
                button(text("Publish to Portfolio").size(14))
                    .style(button::primary)
                    .padding(12)
                    .on_press(Event::SaveProduct),
            );
    }

    tab.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::backing::MemoryBacking;

    fn fixtures() -> (State, ContentStore, GenerationGateway) {
        let store = ContentStore::new(Box::new(MemoryBacking::default()));
        let state = State::load(&store);
        (state, store, GenerationGateway::from_env())
    }

    #[test]
    fn test_blog_generation_requires_a_topic() {
        let (mut state, mut store, gateway) = fixtures();

        let _ = update(&mut state, Event::GenerateBlog, &mut store, &gateway);
        assert!(state.error.is_some());
        assert!(!state.blog_busy);
    }

    #[tokio::test]
    async fn test_drafted_post_is_editable_then_published() {
        let (mut state, mut store, gateway) = fixtures();

        let _ = update(
            &mut state,
            Event::BlogDrafted(Ok(DraftPost {
                title: "Why Sublimation Lasts".to_string(),
                content: "# Intro\nColors bond with the fabric.".to_string(),
            })),
            &mut store,
            &gateway,
        );
        assert!(state.draft_body.is_some());

        let _ = update(
            &mut state,
            Event::DraftTitleChanged("Why Sublimation Never Fades".to_string()),
            &mut store,
            &gateway,
        );
        let _ = update(&mut state, Event::SaveBlog, &mut store, &gateway);

        let posts = store.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Why Sublimation Never Fades");
        assert!(state.draft_body.is_none());
        assert!(state.notice.is_some());
    }

    #[tokio::test]
    async fn test_generated_image_is_saved_and_library_refreshes() {
        let (mut state, mut store, gateway) = fixtures();

        let _ = update(
            &mut state,
            Event::PromptChanged("a red jersey".to_string()),
            &mut store,
            &gateway,
        );
        let _ = update(
            &mut state,
            Event::ImageGenerated(Ok("data:image/png;base64,QUJD".to_string())),
            &mut store,
            &gateway,
        );
        let _ = update(&mut state, Event::SaveImage, &mut store, &gateway);

        assert_eq!(store.images().len(), 1);
        assert_eq!(state.images.len(), 1);
        assert_eq!(state.images[0].prompt, "a red jersey");
        assert!(state.generated_uri.is_none());
    }

    #[test]
    fn test_product_save_requires_analysis_first() {
        let (mut state, mut store, gateway) = fixtures();

        let _ = update(&mut state, Event::SaveProduct, &mut store, &gateway);
        assert!(state.error.as_deref().unwrap().contains("Analyze"));
    }

    #[tokio::test]
    async fn test_analyzed_product_joins_the_portfolio() {
        let (mut state, mut store, gateway) = fixtures();

        let _ = update(
            &mut state,
            Event::Analyzed(Ok((
                "data:image/png;base64,QUJD".to_string(),
                ProductDetails {
                    title: "Falcons Away Kit".to_string(),
                    category: "Team Uniforms".to_string(),
                    description: "Bold stripes.".to_string(),
                },
            ))),
            &mut store,
            &gateway,
        );
        assert_eq!(state.product_category, Some(PortfolioCategory::TeamUniforms));

        let _ = update(&mut state, Event::SaveProduct, &mut store, &gateway);

        let items = store.portfolio_items();
        assert_eq!(items.len(), 7);
        let saved = items
            .iter()
            .find(|i| i.title == "Falcons Away Kit")
            .expect("saved product should be in the portfolio");
        assert_eq!(saved.image_url, saved.hover_image_url);
        assert_eq!(saved.description.as_deref(), Some("Bold stripes."));
    }

    #[test]
    fn test_unrecognized_category_label_is_left_unpicked() {
        let (mut state, mut store, gateway) = fixtures();

        let _ = update(
            &mut state,
            Event::Analyzed(Ok((
                "data:image/png;base64,QUJD".to_string(),
                ProductDetails {
                    title: "Mystery Gear".to_string(),
                    category: "Streetwear".to_string(),
                    description: String::new(),
                },
            ))),
            &mut store,
            &gateway,
        );

        assert!(state.product_category.is_none());

        let _ = update(&mut state, Event::SaveProduct, &mut store, &gateway);
        assert!(state.error.as_deref().unwrap().contains("category"));
    }
}
