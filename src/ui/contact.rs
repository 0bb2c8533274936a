/// Contact view: three-step quote request wizard.
///
/// Step 1 collects contact info, step 2 the order details, step 3 the
/// project description and an optional logo file. Input is validated per
/// step before advancing. There is no sales backend; submission logs the
/// request and shows the confirmation.

use iced::widget::{button, column, container, pick_list, row, text, text_editor, text_input};
use iced::{Alignment, Element, Length};
use rfd::FileDialog;

use super::reveal::{RevealTarget, RevealTracker};
use super::{error_banner, reveal_block, BRAND_RED, GRAY_300, GRAY_500, WHITE};

pub const SPORT_OPTIONS: [&str; 5] = [
    "Team Uniforms (Soccer, Basketball, etc.)",
    "Sublimation Gear (Cycling, etc.)",
    "Gym & Training Wear",
    "Martial Arts (Gi, Shorts, Rashguards)",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Info,
    Order,
    Finalize,
}

impl Step {
    fn number(self) -> usize {
        match self {
            Step::Info => 1,
            Step::Order => 2,
            Step::Finalize => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    CompanyChanged(String),
    SportPicked(&'static str),
    QuantityChanged(String),
    DetailsEdited(text_editor::Action),
    PickLogo,
    Next,
    Back,
    Submit,
    BackHome,
}

#[derive(Default)]
pub struct State {
    step: Option<Step>,
    name: String,
    email: String,
    phone: String,
    company: String,
    sport: Option<&'static str>,
    quantity: String,
    details: text_editor::Content,
    logo_file: Option<String>,
    error: Option<String>,
    submitted: bool,
}

impl State {
    pub fn new() -> Self {
        State {
            step: Some(Step::Info),
            ..State::default()
        }
    }

    pub fn step(&self) -> Step {
        self.step.unwrap_or(Step::Info)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn validate_current_step(&self) -> Result<(), String> {
        match self.step() {
            Step::Info => {
                if self.name.trim().is_empty() {
                    return Err("Please enter your full name.".to_string());
                }
                if !self.email.contains('@') {
                    return Err("Please enter a valid email address.".to_string());
                }
            }
            Step::Order => {
                if self.sport.is_none() {
                    return Err("Please select a sport or category.".to_string());
                }
                match self.quantity.trim().parse::<u32>() {
                    Ok(n) if n >= 10 => {}
                    _ => {
                        return Err(
                            "Please enter an estimated quantity of at least 10.".to_string()
                        )
                    }
                }
            }
            Step::Finalize => {
                if self.details.text().trim().is_empty() {
                    return Err("Please describe your project before submitting.".to_string());
                }
            }
        }
        Ok(())
    }
}

/// Handle a wizard event. Navigation back home is handled by the caller.
pub fn update(state: &mut State, event: Event) {
    match event {
        Event::NameChanged(value) => state.name = value,
        Event::EmailChanged(value) => state.email = value,
        Event::PhoneChanged(value) => state.phone = value,
        Event::CompanyChanged(value) => state.company = value,
        Event::SportPicked(value) => state.sport = Some(value),
        Event::QuantityChanged(value) => state.quantity = value,
        Event::DetailsEdited(action) => state.details.perform(action),
        Event::PickLogo => {
            let picked = FileDialog::new()
                .set_title("Upload Your Logo")
                .add_filter("Design files", &["ai", "eps", "pdf", "png", "jpg", "svg"])
                .pick_file();
            if let Some(path) = picked {
                state.logo_file = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string());
            }
        }
        Event::Next => match state.validate_current_step() {
            Ok(()) => {
                state.error = None;
                state.step = Some(match state.step() {
                    Step::Info => Step::Order,
                    Step::Order | Step::Finalize => Step::Finalize,
                });
            }
            Err(message) => state.error = Some(message),
        },
        Event::Back => {
            state.error = None;
            state.step = Some(match state.step() {
                Step::Info | Step::Order => Step::Info,
                Step::Finalize => Step::Order,
            });
        }
        Event::Submit => match state.validate_current_step() {
            Ok(()) => {
                println!(
                    "📨 Quote request submitted: {} <{}>, {} x {}",
                    state.name,
                    state.email,
                    state.quantity,
                    state.sport.unwrap_or("unspecified"),
                );
                state.error = None;
                state.submitted = true;
            }
            Err(message) => state.error = Some(message),
        },
        Event::BackHome => {}
    }
}

pub fn reveal_targets() -> Vec<RevealTarget> {
    vec![
        RevealTarget::new("contact-intro", 0.0, 160.0),
        RevealTarget::new("contact-form", 180.0, 620.0),
    ]
}

pub fn view<'a>(state: &'a State, tracker: &RevealTracker) -> Element<'a, Event> {
    if state.submitted {
        return thank_you();
    }

    let intro = column![
        text("GET A CUSTOM QUOTE").size(40).color(WHITE),
        text(
            "Provide your project details and get a free, no-obligation quote and \
             digital mockup from our team."
        )
        .size(16)
        .color(GRAY_300),
    ]
    .spacing(10)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let mut form = column![stepper(state.step())].spacing(20);

    if let Some(message) = &state.error {
        form = form.push(error_banner(message));
    }

    form = form.push(match state.step() {
        Step::Info => info_step(state),
        Step::Order => order_step(state),
        Step::Finalize => finalize_step(state),
    });

    let mut controls = row![].spacing(12).width(Length::Fill);
    if state.step() != Step::Info {
        controls = controls.push(
            button(text("← Back").size(14))
                .style(button::text)
                .on_press(Event::Back),
        );
    }
    controls = controls.push(iced::widget::horizontal_space());
    controls = controls.push(if state.step() == Step::Finalize {
        button(text("Submit Request ➤").size(15))
            .style(button::primary)
            .padding(12)
            .on_press(Event::Submit)
    } else {
        button(text("Next Step").size(15))
            .style(button::primary)
            .padding(12)
            .on_press(Event::Next)
    });
    form = form.push(controls);

    let panel = container(form)
        .padding(32)
        .max_width(760)
        .style(super::panel);

    column![
        reveal_block(tracker, "contact-intro", 160.0, intro.into()),
        reveal_block(
            tracker,
            "contact-form",
            620.0,
            container(panel)
                .width(Length::Fill)
                .center_x(Length::Fill)
                .into()
        ),
    ]
    .spacing(24)
    .padding(40)
    .into()
}

fn stepper<'a>(current: Step) -> Element<'a, Event> {
    let label = |step: Step, title: &str| {
        let active = current.number() >= step.number();
        column![
            text(format!("{}", step.number()))
                .size(20)
                .color(if active { BRAND_RED } else { GRAY_500 }),
            text(title.to_string())
                .size(12)
                .color(if active { WHITE } else { GRAY_500 }),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
    };

    row![
        label(Step::Info, "Your Info"),
        iced::widget::horizontal_space(),
        label(Step::Order, "Order Details"),
        iced::widget::horizontal_space(),
        label(Step::Finalize, "Finalize"),
    ]
    .width(Length::Fill)
    .into()
}

fn info_step(state: &State) -> Element<'_, Event> {
    column![
        row![
            text_input("Full Name", &state.name)
                .on_input(Event::NameChanged)
                .padding(12),
            text_input("Email Address", &state.email)
                .on_input(Event::EmailChanged)
                .padding(12),
        ]
        .spacing(12),
        row![
            text_input("Phone Number (Optional)", &state.phone)
                .on_input(Event::PhoneChanged)
                .padding(12),
            text_input("Club / Gym / Company Name", &state.company)
                .on_input(Event::CompanyChanged)
                .padding(12),
        ]
        .spacing(12),
    ]
    .spacing(12)
    .into()
}

fn order_step(state: &State) -> Element<'_, Event> {
    row![
        pick_list(SPORT_OPTIONS, state.sport, Event::SportPicked)
            .placeholder("Select Sport/Category...")
            .padding(12)
            .width(Length::FillPortion(3)),
        text_input("Estimated Quantity (min 10)", &state.quantity)
            .on_input(Event::QuantityChanged)
            .padding(12)
            .width(Length::FillPortion(2)),
    ]
    .spacing(12)
    .into()
}

fn finalize_step(state: &State) -> Element<'_, Event> {
    let logo_label = state
        .logo_file
        .clone()
        .unwrap_or_else(|| "Upload Your Logo (.ai, .eps, .pdf)".to_string());

    column![
        text_editor(&state.details)
            .placeholder(
                "Describe your project, including colors, styles, and any specific \
                 requirements..."
            )
            .on_action(Event::DetailsEdited)
            .height(Length::Fixed(140.0)),
        button(text(format!("📎 {logo_label}")).size(14))
            .style(button::secondary)
            .padding(12)
            .width(Length::Fill)
            .on_press(Event::PickLogo),
    ]
    .spacing(12)
    .into()
}

fn thank_you<'a>() -> Element<'a, Event> {
    container(
        column![
            text("✔").size(64).color(BRAND_RED),
            text("Thank You!").size(40).color(WHITE),
            text(
                "Your quote request has been received. Our team will review your \
                 requirements and get back to you with a detailed proposal and a \
                 free sample mockup within 24-48 hours."
            )
            .size(16)
            .color(GRAY_300),
            button(text("Back to Home").size(15))
                .style(button::primary)
                .padding(12)
                .on_press(Event::BackHome),
        ]
        .spacing(18)
        .align_x(Alignment::Center)
        .max_width(640),
    )
    .width(Length::Fill)
    .padding(80)
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_info(state: &mut State) {
        update(state, Event::NameChanged("Ada".to_string()));
        update(state, Event::EmailChanged("ada@club.example".to_string()));
    }

    #[test]
    fn test_next_is_blocked_until_info_is_valid() {
        let mut state = State::new();

        update(&mut state, Event::Next);
        assert_eq!(state.step(), Step::Info);
        assert!(state.error.is_some());

        update(&mut state, Event::EmailChanged("not-an-email".to_string()));
        update(&mut state, Event::NameChanged("Ada".to_string()));
        update(&mut state, Event::Next);
        assert_eq!(state.step(), Step::Info);

        update(&mut state, Event::EmailChanged("ada@club.example".to_string()));
        update(&mut state, Event::Next);
        assert_eq!(state.step(), Step::Order);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_order_step_requires_sport_and_quantity() {
        let mut state = State::new();
        filled_info(&mut state);
        update(&mut state, Event::Next);

        update(&mut state, Event::QuantityChanged("5".to_string()));
        update(&mut state, Event::Next);
        assert_eq!(state.step(), Step::Order);

        update(&mut state, Event::SportPicked(SPORT_OPTIONS[0]));
        update(&mut state, Event::QuantityChanged("25".to_string()));
        update(&mut state, Event::Next);
        assert_eq!(state.step(), Step::Finalize);
    }

    #[test]
    fn test_back_walks_the_steps_and_clears_errors() {
        let mut state = State::new();
        filled_info(&mut state);
        update(&mut state, Event::Next);
        update(&mut state, Event::Next);
        assert!(state.error.is_some());

        update(&mut state, Event::Back);
        assert_eq!(state.step(), Step::Info);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_submit_requires_project_details() {
        let mut state = State::new();
        filled_info(&mut state);
        update(&mut state, Event::Next);
        update(&mut state, Event::SportPicked(SPORT_OPTIONS[3]));
        update(&mut state, Event::QuantityChanged("40".to_string()));
        update(&mut state, Event::Next);

        update(&mut state, Event::Submit);
        assert!(!state.is_submitted());
        assert!(state.error.is_some());

        update(
            &mut state,
            Event::DetailsEdited(text_editor::Action::Edit(text_editor::Edit::Paste(
                std::sync::Arc::new("Red and black rashguards with our lion logo.".to_string()),
            ))),
        );
        update(&mut state, Event::Submit);
        assert!(state.is_submitted());
    }
}
