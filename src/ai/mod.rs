/// AI generation module
///
/// This module handles all calls to the external generative service:
/// - Drafting blog posts and blog ideas
/// - Generating images from text prompts
/// - Generating mockups from an uploaded design
/// - Describing uploaded product photos

pub mod gateway;

pub use gateway::{DraftPost, GatewayError, GenerationGateway, PostIdea, ProductDetails};
