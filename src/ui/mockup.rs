/// AI mockup generator: describe an idea or upload a design, get a
/// generated apparel mockup back, optionally save it to disk.

use std::path::PathBuf;

use iced::widget::{button, column, container, image, row, text, text_editor};
use iced::{Alignment, Element, Length, Task};
use rfd::FileDialog;

use crate::ai::GenerationGateway;
use crate::media;

use super::reveal::{RevealTarget, RevealTracker};
use super::{busy_line, error_banner, handle_from_url, BRAND_RED, GRAY_300, GRAY_500, WHITE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idea,
    Upload,
}

#[derive(Debug, Clone)]
pub enum Event {
    ModePicked(Mode),
    IdeaPromptEdited(text_editor::Action),
    InstructionsEdited(text_editor::Action),
    PickFile,
    Generate,
    Generated(Result<String, String>),
    Download,
    Downloaded(Result<PathBuf, String>),
}

pub struct State {
    mode: Mode,
    idea_prompt: text_editor::Content,
    instructions: text_editor::Content,
    upload: Option<PathBuf>,
    result_uri: Option<String>,
    result_handle: Option<image::Handle>,
    generating: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl State {
    pub fn new() -> Self {
        State {
            mode: Mode::Idea,
            idea_prompt: text_editor::Content::new(),
            instructions: text_editor::Content::new(),
            upload: None,
            result_uri: None,
            result_handle: None,
            generating: false,
            error: None,
            notice: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::new()
    }
}

pub fn update(state: &mut State, event: Event, gateway: &GenerationGateway) -> Task<Event> {
    match event {
        Event::ModePicked(mode) => {
            state.mode = mode;
            state.error = None;
            Task::none()
        }
        Event::IdeaPromptEdited(action) => {
            state.idea_prompt.perform(action);
            Task::none()
        }
        Event::InstructionsEdited(action) => {
            state.instructions.perform(action);
            Task::none()
        }
        Event::PickFile => {
            let picked = FileDialog::new()
                .set_title("Select Your Design")
                .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                .pick_file();
            if let Some(path) = picked {
                state.upload = Some(path);
                state.error = None;
            }
            Task::none()
        }
        Event::Generate => start_generation(state, gateway),
        Event::Generated(result) => {
            state.generating = false;
            match result {
                Ok(uri) => {
                    state.result_handle = handle_from_url(&uri);
                    if state.result_handle.is_none() {
                        state.error = Some("The generated image could not be decoded.".to_string());
                    }
                    state.result_uri = Some(uri);
                }
                Err(message) => state.error = Some(message),
            }
            Task::none()
        }
        Event::Download => {
            let Some(uri) = state.result_uri.clone() else {
                return Task::none();
            };
            let picked = FileDialog::new()
                .set_title("Save Mockup")
                .set_file_name("ansonsports-mockup.png")
                .save_file();
            let Some(path) = picked else {
                return Task::none();
            };
            Task::perform(
                async move {
                    let bytes = media::decode_data_uri(&uri)
                        .ok_or_else(|| "mockup image is not a data URI".to_string())?;
                    tokio::fs::write(&path, bytes)
                        .await
                        .map_err(|err| err.to_string())?;
                    Ok(path)
                },
                Event::Downloaded,
            )
        }
        Event::Downloaded(result) => {
            match result {
                Ok(path) => {
                    println!("💾 Mockup saved to {}", path.display());
                    state.notice = Some(format!("Saved to {}", path.display()));
                }
                Err(message) => state.error = Some(format!("Could not save mockup: {message}")),
            }
            Task::none()
        }
    }
}

fn start_generation(state: &mut State, gateway: &GenerationGateway) -> Task<Event> {
    state.error = None;
    state.notice = None;

    match state.mode {
        Mode::Idea => {
            let prompt = state.idea_prompt.text().trim().to_string();
            if prompt.is_empty() {
                state.error = Some("Please describe the mockup you want first.".to_string());
                return Task::none();
            }
            state.generating = true;

            let gateway = gateway.clone();
            Task::perform(
                async move {
                    gateway
                        .generate_image(&format!(
                            "A professional product mockup of custom sportswear: {prompt}. \
                             Studio lighting, clean background, photorealistic."
                        ))
                        .await
                        .map_err(|e| e.to_string())
                },
                Event::Generated,
            )
        }
        Mode::Upload => {
            let Some(path) = state.upload.clone() else {
                state.error = Some("Please select a design file first.".to_string());
                return Task::none();
            };
            let instructions = state.instructions.text().trim().to_string();
            if instructions.is_empty() {
                state.error =
                    Some("Please describe how to place your design on the apparel.".to_string());
                return Task::none();
            }
            state.generating = true;

            let gateway = gateway.clone();
            Task::perform(
                async move {
                    let upload = media::encode_image_file(&path)
                        .await
                        .map_err(|e| e.to_string())?;
                    gateway
                        .generate_mockup_from_upload(
                            &upload.base64,
                            &upload.mime_type,
                            &instructions,
                        )
                        .await
                        .map_err(|e| e.to_string())
                },
                Event::Generated,
            )
        }
    }
}

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![
        RevealTarget::new("mockup-intro", 0.0, 160.0),
        RevealTarget::new("mockup-studio", 180.0, 720.0),
    ]
}

pub fn view<'a>(state: &'a State, tracker: &RevealTracker) -> Element<'a, Event> {
    let intro = column![
        text("AI MOCKUP GENERATOR").size(40).color(WHITE),
        text(
            "See your ideas before they're made. Describe a concept or upload your \
             design, and our AI will render a product mockup in seconds."
        )
        .size(16)
        .color(GRAY_300),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let studio = row![
        container(controls(state))
            .padding(24)
            .width(Length::FillPortion(2))
            .style(super::panel),
        container(result_pane(state))
            .padding(24)
            .width(Length::FillPortion(3))
            .style(super::card),
    ]
    .spacing(20)
    .width(Length::Fill);

    column![
        super::reveal_block(tracker, "mockup-intro", 160.0, intro.into()),
        super::reveal_block(tracker, "mockup-studio", 720.0, studio.into()),
    ]
    .spacing(24)
    .padding(40)
    .into()
}

fn controls(state: &State) -> Element<'_, Event> {
    let tab = |label: &str, mode: Mode| {
        button(text(label.to_string()).size(14))
            .style(if state.mode == mode {
                button::primary
            } else {
                button::text
            })
            .padding(10)
            .on_press(Event::ModePicked(mode))
    };

    let mut controls = column![
        row![
            tab("✨ From an Idea", Mode::Idea),
            tab("📤 From Your Design", Mode::Upload),
        ]
        .spacing(8),
    ]
    .spacing(16);

    if let Some(message) = &state.error {
        controls = controls.push(error_banner(message));
    }

    controls = match state.mode {
        Mode::Idea => controls.push(
            text_editor(&state.idea_prompt)
                .placeholder(
                    "e.g., A black and gold basketball jersey for a team called \
                     'The Monarchs', with a lion crest"
                )
                .on_action(Event::IdeaPromptEdited)
                .height(Length::Fixed(160.0)),
        ),
        Mode::Upload => {
            let label = state
                .upload
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "Select design file...".to_string());

            controls
                .push(
                    button(text(format!("📎 {label}")).size(14))
                        .style(button::secondary)
                        .padding(12)
                        .width(Length::Fill)
                        .on_press(Event::PickFile),
                )
                .push(
                    text_editor(&state.instructions)
                        .placeholder(
                            "e.g., Place this logo on the chest of a red soccer jersey"
                        )
                        .on_action(Event::InstructionsEdited)
                        .height(Length::Fixed(120.0)),
                )
        }
    };

    controls = controls.push(if state.generating {
        Element::from(busy_line("Generating your mockup..."))
    } else {
        button(text("Generate Mockup").size(15))
            .style(button::primary)
            .padding(12)
            .width(Length::Fill)
            .on_press(Event::Generate)
            .into()
    });

    controls.into()
}

fn result_pane(state: &State) -> Element<'_, Event> {
    if state.generating {
        return container(busy_line("Rendering..."))
            .width(Length::Fill)
            .height(Length::Fixed(560.0))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(560.0))
            .into();
    }

    match &state.result_handle {
        Some(handle) => {
            let mut pane = column![
                image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(480.0)),
                button(text("⬇ Download Mockup").size(14))
                    .style(button::secondary)
                    .padding(10)
                    .on_press(Event::Download),
            ]
            .spacing(12)
            .align_x(Alignment::Center);

            if let Some(notice) = &state.notice {
                pane = pane.push(super::success_banner(notice));
            }
            pane.into()
        }
        None => container(
            column![
                text("🎨").size(48).color(BRAND_RED),
                text("Your mockup will appear here").size(18).color(GRAY_500),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(560.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(560.0))
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> GenerationGateway {
        GenerationGateway::from_env()
    }

    #[test]
    fn test_generate_without_a_prompt_fails_inline() {
        let mut state = State::new();
        let _ = update(&mut state, Event::Generate, &gateway());

        assert!(!state.generating);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_upload_mode_requires_a_file_before_instructions() {
        let mut state = State::new();
        let _ = update(&mut state, Event::ModePicked(Mode::Upload), &gateway());
        let _ = update(&mut state, Event::Generate, &gateway());

        assert!(state.error.as_deref().unwrap().contains("design file"));
    }

    #[test]
    fn test_generation_failure_is_shown_and_clears_busy() {
        let mut state = State::new();
        state.generating = true;

        let _ = update(
            &mut state,
            Event::Generated(Err("AI request failed".to_string())),
            &gateway(),
        );

        assert!(!state.generating);
        assert_eq!(state.error.as_deref(), Some("AI request failed"));
        assert!(state.result_uri.is_none());
    }

    #[test]
    fn test_successful_generation_stores_the_data_uri() {
        let mut state = State::new();
        state.generating = true;

        // 1x1 PNG payload is unnecessary; any decodable data URI works for
        // state bookkeeping, and an undecodable one still records the uri.
        let _ = update(
            &mut state,
            Event::Generated(Ok("data:image/png;base64,QUJD".to_string())),
            &gateway(),
        );

        assert!(!state.generating);
        assert_eq!(
            state.result_uri.as_deref(),
            Some("data:image/png;base64,QUJD")
        );
    }
}
