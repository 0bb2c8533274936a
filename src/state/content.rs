/// The persisted content store
///
/// Three append-only collections (blog posts, generated images, portfolio
/// items), each stored as one JSON array under one fixed key. Reads always
/// re-sort: posts and images descending by creation time, portfolio items
/// descending by id string comparison. Malformed or unreadable data
/// degrades to an empty collection and is logged, never surfaced as an
/// error. Saves are read-modify-write with the new record prepended; the
/// whole array is written back, so the last writer wins.

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backing::{KeyValueBacking, SqliteBacking, StoreError};
use super::data::{seed_portfolio_items, BlogPost, ManagedImage, PortfolioItem};

const POSTS_KEY: &str = "ansons_blog_posts";
const IMAGES_KEY: &str = "ansons_media_library";
const PORTFOLIO_KEY: &str = "ansons_portfolio_items";

pub struct ContentStore {
    backing: Box<dyn KeyValueBacking>,
}

impl ContentStore {
    pub fn new(backing: Box<dyn KeyValueBacking>) -> Self {
        ContentStore { backing }
    }

    /// Open the store over the default on-disk backing.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Box::new(SqliteBacking::open_default()?)))
    }

    // == BLOG POSTS ==

    /// All blog posts, most recent first.
    pub fn posts(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self.read_collection(POSTS_KEY);
        posts.sort_by(|a, b| parse_recency(&b.created_at).cmp(&parse_recency(&a.created_at)));
        posts
    }

    pub fn save_post(&mut self, post: BlogPost) -> Result<(), StoreError> {
        let mut posts = self.posts();
        posts.insert(0, post);
        self.write_collection(POSTS_KEY, &posts)
    }

    // == IMAGES ==

    /// All saved media-library images, most recent first.
    pub fn images(&self) -> Vec<ManagedImage> {
        let mut images: Vec<ManagedImage> = self.read_collection(IMAGES_KEY);
        images.sort_by(|a, b| parse_recency(&b.created_at).cmp(&parse_recency(&a.created_at)));
        images
    }

    /// Stamp and persist a newly generated image.
    pub fn save_image(&mut self, prompt: &str, url: &str) -> Result<ManagedImage, StoreError> {
        let image = ManagedImage::new(prompt, url);
        let mut images = self.images();
        images.insert(0, image.clone());
        self.write_collection(IMAGES_KEY, &images)?;
        Ok(image)
    }

    // == PORTFOLIO ITEMS ==

    /// All portfolio items, sorted descending by id string comparison.
    ///
    /// A missing key seeds the collection with the six fixed sample
    /// records before returning them; the check re-runs on every call but
    /// only a fresh backing ever takes the seeding path. A failed seed
    /// write is logged and the seeds are still returned.
    pub fn portfolio_items(&mut self) -> Vec<PortfolioItem> {
        let raw = match self.backing.get(PORTFOLIO_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                eprintln!("⚠️  Failed to read portfolio items: {err}");
                return Vec::new();
            }
        };

        let mut items: Vec<PortfolioItem> = match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    eprintln!("⚠️  Malformed portfolio data, ignoring: {err}");
                    return Vec::new();
                }
            },
            None => {
                let seeds = seed_portfolio_items();
                if let Err(err) = self.write_collection(PORTFOLIO_KEY, &seeds) {
                    eprintln!("⚠️  Failed to seed portfolio items: {err}");
                }
                seeds
            }
        };

        items.sort_by(|a, b| b.id.cmp(&a.id));
        items
    }

    pub fn save_portfolio_item(&mut self, item: PortfolioItem) -> Result<(), StoreError> {
        let mut items = self.portfolio_items();
        items.insert(0, item);
        self.write_collection(PORTFOLIO_KEY, &items)
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.backing.get(key) {
            Ok(raw) => raw,
            Err(err) => {
                eprintln!("⚠️  Failed to read {key}: {err}");
                return Vec::new();
            }
        };
        let Some(raw) = raw else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                eprintln!("⚠️  Malformed data under {key}, ignoring: {err}");
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.backing.set(key, &json)
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore").finish_non_exhaustive()
    }
}

/// Parse a stored creation timestamp, falling back to the epoch so a
/// record with a mangled timestamp sorts last instead of failing the read.
fn parse_recency(ts: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(ts)
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::backing::MemoryBacking;
    use crate::state::data::PortfolioCategory;

    fn memory_store() -> ContentStore {
        ContentStore::new(Box::new(MemoryBacking::default()))
    }

    fn post_at(id: &str, title: &str, created_at: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            created_at: created_at.to_string(),
            summary: None,
        }
    }

    #[test]
    fn test_first_portfolio_read_seeds_six_records() {
        let mut store = memory_store();

        let items = store.portfolio_items();
        assert_eq!(items.len(), 6);

        // Descending id order from the very first read
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["6", "5", "4", "3", "2", "1"]);

        // Team Uniforms present exactly twice, ids 1 and 5
        let mut team: Vec<&str> = items
            .iter()
            .filter(|i| i.category == PortfolioCategory::TeamUniforms)
            .map(|i| i.id.as_str())
            .collect();
        team.sort();
        assert_eq!(team, ["1", "5"]);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut store = memory_store();

        let first = store.portfolio_items();
        let second = store.portfolio_items();
        assert_eq!(first, second);

        assert_eq!(store.posts(), store.posts());
        assert_eq!(store.images(), store.images());
    }

    #[test]
    fn test_posts_sorted_descending_by_creation_time() {
        let mut store = memory_store();

        store
            .save_post(post_at("x", "T", "2024-01-01T10:00:00.000Z"))
            .unwrap();
        store
            .save_post(post_at("y", "U", "2024-06-01T10:00:00.000Z"))
            .unwrap();

        let posts = store.posts();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["y", "x"]);
    }

    #[test]
    fn test_sequential_saves_lose_nothing() {
        let mut store = memory_store();

        for n in [3, 1, 2] {
            store
                .save_post(post_at(
                    &format!("p{n}"),
                    "t",
                    &format!("2024-0{n}-01T00:00:00.000Z"),
                ))
                .unwrap();
        }

        let ids: Vec<String> = store.posts().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["p3", "p2", "p1"]);
    }

    #[test]
    fn test_saved_portfolio_items_join_the_seeds() {
        let mut store = memory_store();

        let mut item = seed_portfolio_items().remove(0);
        item.id = "9".to_string();
        item.title = "Custom Rashguard".to_string();
        store.save_portfolio_item(item).unwrap();

        let ids: Vec<String> = store.portfolio_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["9", "6", "5", "4", "3", "2", "1"]);
    }

    #[test]
    fn test_malformed_data_degrades_to_empty() {
        let mut backing = MemoryBacking::default();
        backing.set(POSTS_KEY, "not json at all").unwrap();
        backing.set(IMAGES_KEY, "{\"wrong\": \"shape\"}").unwrap();
        backing.set(PORTFOLIO_KEY, "[{\"id\": 42}]").unwrap();

        let mut store = ContentStore::new(Box::new(backing));
        assert!(store.posts().is_empty());
        assert!(store.images().is_empty());
        assert!(store.portfolio_items().is_empty());
    }

    #[test]
    fn test_saved_images_come_back_most_recent_first() {
        let mut store = memory_store();

        let first = store.save_image("a red jersey", "data:image/png;base64,AA==").unwrap();
        let second = store.save_image("a blue gi", "data:image/png;base64,BB==").unwrap();

        let images = store.images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, second.id);
        assert_eq!(images[1].id, first.id);
    }

    #[test]
    fn test_records_with_mangled_timestamps_sort_last() {
        let mut store = memory_store();

        store
            .save_post(post_at("good", "t", "2024-01-01T00:00:00.000Z"))
            .unwrap();
        store.save_post(post_at("bad", "t", "garbage")).unwrap();

        let ids: Vec<String> = store.posts().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["good", "bad"]);
    }
}
