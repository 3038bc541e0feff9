//! Interactive widget loop.
//!
//! The parent/child split mirrors the core contract: the loop owns a
//! [`WeatherApp`] (canonical state) and a [`SearchInput`] (the form's own
//! state), renders immutable snapshots, and feeds user intent back as
//! discrete operations. Controls that would be disabled in the form simply
//! do not appear in the menu.

use anyhow::Context;
use inquire::{InquireError, Select, Text};
use skysearch_core::{Config, SearchEvent, SearchInput, WeatherApp};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    EnterCity,
    Search,
    Clear,
    ClearWeatherData,
    DismissMessage,
    Quit,
}

impl std::fmt::Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MenuItem::EnterCity => "Enter city",
            MenuItem::Search => "Search",
            MenuItem::Clear => "Clear",
            MenuItem::ClearWeatherData => "Clear Weather Data",
            MenuItem::DismissMessage => "Dismiss message",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

fn menu_items(app: &WeatherApp, input: &SearchInput) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::EnterCity];
    if input.controls_enabled() {
        items.push(MenuItem::Search);
        items.push(MenuItem::Clear);
    }
    if app.has_valid_result() {
        items.push(MenuItem::ClearWeatherData);
    }
    if app.banner().is_set() {
        items.push(MenuItem::DismissMessage);
    }
    items.push(MenuItem::Quit);
    items
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut app = WeatherApp::from_config(&config);
    let mut input = SearchInput::new();

    loop {
        render::frame(&app);
        println!();

        let choice = match Select::new("Action:", menu_items(&app, &input)).prompt() {
            Ok(choice) => choice,
            // Esc / Ctrl-C leave the widget.
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read menu selection"),
        };

        match choice {
            MenuItem::EnterCity => {
                let text = Text::new("City:")
                    .with_initial_value(input.input_city())
                    .prompt();
                match text {
                    Ok(text) => input.set_input(text),
                    Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {}
                    Err(e) => return Err(e).context("Failed to read city input"),
                }
            }
            MenuItem::Search => match input.search_city() {
                SearchEvent::SearchRequested(city) => app.search_city(&city).await,
            },
            MenuItem::Clear => input.clear_city(),
            MenuItem::ClearWeatherData => app.reset_data(),
            MenuItem::DismissMessage => app.clear_message(),
            MenuItem::Quit => break,
        }

        println!();
    }

    Ok(())
}
