/// ANSONSPORTS Studio
///
/// Marketing site and content studio for a custom sportswear
/// manufacturer: public pages backed by a persisted content store, an
/// AI mockup generator, and an admin panel for drafting and publishing
/// content.

mod ai;
mod media;
mod state;
mod ui;

use std::collections::HashMap;
use std::time::Duration;

use iced::widget::{column, image, scrollable};
use iced::{Element, Length, Task, Theme};

use ai::GenerationGateway;
use state::content::ContentStore;
use state::data::View;
use ui::reveal::RevealTracker;
use ui::{about, admin, category, contact, home, mockup, resources};

/// Viewport height assumed before the first scroll event arrives.
const INITIAL_VIEWPORT_HEIGHT: f32 = 800.0;

fn main() -> iced::Result {
    iced::application("ANSONSPORTS Studio", Studio::update, Studio::view)
        .theme(Studio::theme)
        .run_with(Studio::new)
}

/// Per-view state. Navigation rebuilds the active variant from scratch,
/// so every view re-reads the store on entry and in-progress form state
/// does not survive leaving the view.
enum Screen {
    Home(home::State),
    About,
    Mockup(mockup::State),
    Contact(contact::State),
    Resources(resources::State),
    Admin(admin::State),
    Category(category::State),
}

#[derive(Debug, Clone)]
enum Message {
    Navigate(View),
    RevealScan,
    Scrolled(scrollable::Viewport),
    RemoteImageLoaded(String, Result<Vec<u8>, String>),
    Home(home::Event),
    Contact(contact::Event),
    Mockup(mockup::Event),
    Resources(resources::Event),
    Admin(admin::Event),
    Category(category::Event),
}

struct Studio {
    view: View,
    screen: Screen,
    store: ContentStore,
    gateway: GenerationGateway,
    reveal: RevealTracker,
    /// Remote fetch cache: present-but-None means requested or failed,
    /// so a url is fetched at most once per run.
    remote_images: HashMap<String, Option<image::Handle>>,
    http: reqwest::Client,
    viewport_top: f32,
    viewport_height: f32,
}

impl Studio {
    fn new() -> (Self, Task<Message>) {
        let store = ContentStore::open_default().expect("Failed to open the content database");

        let mut studio = Studio {
            view: View::Home,
            screen: Screen::About,
            store,
            gateway: GenerationGateway::from_env(),
            reveal: RevealTracker::default(),
            remote_images: HashMap::new(),
            http: reqwest::Client::new(),
            viewport_top: 0.0,
            viewport_height: INITIAL_VIEWPORT_HEIGHT,
        };

        let boot = studio.navigate_to(View::Home);
        (studio, boot)
    }

    fn with_store(store: ContentStore) -> Self {
        Studio {
            view: View::Home,
            screen: Screen::About,
            store,
            gateway: GenerationGateway::from_env(),
            reveal: RevealTracker::default(),
            remote_images: HashMap::new(),
            http: reqwest::Client::new(),
            viewport_top: 0.0,
            viewport_height: INITIAL_VIEWPORT_HEIGHT,
        }
    }

    /// Replace the active view: build its state fresh from the store,
    /// swap in a new reveal tracker, scroll back to the top, and kick
    /// off image fetches plus a delayed first visibility scan.
    fn navigate_to(&mut self, view: View) -> Task<Message> {
        println!("🧭 Navigating to {view:?}");
        self.view = view;

        let mut urls = Vec::new();
        let targets;

        self.screen = match view {
            View::Home => {
                let screen = home::State::load(&mut self.store);
                urls = screen.image_urls();
                targets = home::reveal_targets();
                Screen::Home(screen)
            }
            View::About => {
                urls = about::image_urls();
                targets = about::reveal_targets();
                Screen::About
            }
            View::Mockup => {
                targets = mockup::reveal_targets();
                Screen::Mockup(mockup::State::new())
            }
            View::Contact => {
                targets = contact::reveal_targets();
                Screen::Contact(contact::State::new())
            }
            View::Resources => {
                targets = resources::reveal_targets();
                Screen::Resources(resources::State::load(&self.store))
            }
            View::Admin => {
                targets = admin_targets();
                Screen::Admin(admin::State::load(&self.store))
            }
            View::Category(cat) => {
                let screen = category::State::load(cat, &mut self.store);
                urls = screen.image_urls();
                targets = category::reveal_targets();
                Screen::Category(screen)
            }
        };

        self.reveal = RevealTracker::new(targets);
        self.viewport_top = 0.0;

        Task::batch(
            [
                scrollable::snap_to(page_scroll_id(), scrollable::RelativeOffset::START),
                Task::perform(tokio::time::sleep(Duration::from_millis(100)), |_| {
                    Message::RevealScan
                }),
            ]
            .into_iter()
            .chain(self.fetch_missing(urls)),
        )
    }

    /// Start a fetch for every remote url not already requested. Data
    /// URIs are decoded locally by the views and never fetched.
    fn fetch_missing(&mut self, urls: Vec<String>) -> Vec<Task<Message>> {
        let mut tasks = Vec::new();
        for url in urls {
            if url.starts_with("data:") || self.remote_images.contains_key(&url) {
                continue;
            }
            self.remote_images.insert(url.clone(), None);
            let client = self.http.clone();
            tasks.push(Task::perform(
                media::fetch_image(client, url.clone()),
                move |result| Message::RemoteImageLoaded(url.clone(), result),
            ));
        }
        tasks
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(view) => self.navigate_to(view),

            Message::RevealScan => {
                self.reveal.observe(self.viewport_top, self.viewport_height);
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.viewport_top = viewport.absolute_offset().y;
                self.viewport_height = viewport.bounds().height;
                self.reveal.observe(self.viewport_top, self.viewport_height);
                Task::none()
            }

            Message::RemoteImageLoaded(url, result) => {
                match result {
                    Ok(bytes) => {
                        self.remote_images
                            .insert(url, Some(image::Handle::from_bytes(bytes)));
                    }
                    Err(err) => eprintln!("⚠️  Failed to load {url}: {err}"),
                }
                Task::none()
            }

            Message::Home(home::Event::Navigate(view)) => self.navigate_to(view),
            Message::Home(home::Event::JumpToPortfolio) => scrollable::scroll_to(
                page_scroll_id(),
                scrollable::AbsoluteOffset {
                    x: 0.0,
                    y: home::PORTFOLIO_TOP,
                },
            ),

            Message::Contact(contact::Event::BackHome) => self.navigate_to(View::Home),
            Message::Contact(event) => {
                if let Screen::Contact(screen) = &mut self.screen {
                    contact::update(screen, event);
                }
                Task::none()
            }

            Message::Category(category::Event::BackHome) => self.navigate_to(View::Home),
            Message::Category(event) => {
                if let Screen::Category(screen) = &mut self.screen {
                    category::update(screen, event);
                }
                Task::none()
            }

            // Results arriving after the issuing screen was left are
            // dropped with it.
            Message::Mockup(event) => {
                if let Screen::Mockup(screen) = &mut self.screen {
                    mockup::update(screen, event, &self.gateway).map(Message::Mockup)
                } else {
                    Task::none()
                }
            }
            Message::Resources(event) => {
                if let Screen::Resources(screen) = &mut self.screen {
                    resources::update(screen, event, &self.gateway).map(Message::Resources)
                } else {
                    Task::none()
                }
            }
            Message::Admin(event) => {
                if let Screen::Admin(screen) = &mut self.screen {
                    admin::update(screen, event, &mut self.store, &self.gateway)
                        .map(Message::Admin)
                } else {
                    Task::none()
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match &self.screen {
            Screen::Home(state) => {
                home::view(state, &self.reveal, &self.remote_images).map(Message::Home)
            }
            Screen::About => about::view(&self.reveal, &self.remote_images).map(Message::Navigate),
            Screen::Mockup(state) => mockup::view(state, &self.reveal).map(Message::Mockup),
            Screen::Contact(state) => contact::view(state, &self.reveal).map(Message::Contact),
            Screen::Resources(state) => {
                resources::view(state, &self.reveal, &self.remote_images).map(Message::Resources)
            }
            Screen::Admin(state) => admin::view(state).map(Message::Admin),
            Screen::Category(state) => {
                category::view(state, &self.reveal, &self.remote_images).map(Message::Category)
            }
        };

        column![
            ui::header(self.view).map(Message::Navigate),
            scrollable(column![screen, ui::footer().map(Message::Navigate)])
                .id(page_scroll_id())
                .on_scroll(Message::Scrolled)
                .height(Length::Fill),
        ]
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// The admin panel sits above the fold and is never hidden behind a
/// reveal animation.
fn admin_targets() -> Vec<ui::reveal::RevealTarget> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::backing::MemoryBacking;
    use state::data::PortfolioCategory;

    fn studio() -> Studio {
        Studio::with_store(ContentStore::new(Box::new(MemoryBacking::default())))
    }

    #[tokio::test]
    async fn test_navigation_replaces_view_and_screen() {
        let mut app = studio();

        let _ = app.update(Message::Navigate(View::Category(
            PortfolioCategory::MartialArts,
        )));

        assert_eq!(app.view, View::Category(PortfolioCategory::MartialArts));
        assert!(matches!(app.screen, Screen::Category(_)));
        assert_eq!(
            app.reveal.pending_count(),
            category::reveal_targets().len()
        );
    }

    #[tokio::test]
    async fn test_navigation_resets_reveal_state() {
        let mut app = studio();
        let _ = app.update(Message::Navigate(View::About));

        // Top sections reveal on the delayed scan of the fresh viewport
        let _ = app.update(Message::RevealScan);
        assert!(app.reveal.is_revealed("about-hero"));
        assert!(!app.reveal.is_revealed("about-cta"));

        // Leaving and returning starts hidden again
        let _ = app.update(Message::Navigate(View::Home));
        let _ = app.update(Message::Navigate(View::About));
        assert!(!app.reveal.is_revealed("about-hero"));
    }

    #[test]
    fn test_remote_urls_are_fetched_once() {
        let mut app = studio();

        let first = app.fetch_missing(vec![
            "https://picsum.photos/seed/factory/1920/1080".to_string(),
            "data:image/png;base64,QUJD".to_string(),
        ]);
        assert_eq!(first.len(), 1);

        let second =
            app.fetch_missing(vec!["https://picsum.photos/seed/factory/1920/1080".to_string()]);
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn test_stray_screen_events_are_ignored_after_leaving() {
        let mut app = studio();
        let _ = app.update(Message::Navigate(View::Resources));
        let _ = app.update(Message::Navigate(View::Home));

        // A slow AI result landing after navigation must not panic or
        // resurrect the old screen.
        let _ = app.update(Message::Resources(resources::Event::IdeaReady(Err(
            "timed out".to_string(),
        ))));
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[tokio::test]
    async fn test_back_home_from_contact_wizard() {
        let mut app = studio();
        let _ = app.update(Message::Navigate(View::Contact));
        let _ = app.update(Message::Contact(contact::Event::BackHome));

        assert_eq!(app.view, View::Home);
        assert!(matches!(app.screen, Screen::Home(_)));
    }
}
