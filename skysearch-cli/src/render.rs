//! Themed terminal rendering for the widget.
//!
//! The whole frame, not just the result block, carries the theme derived
//! from the current weather group. That mirrors the widget's page-wide
//! background: the theme is computed in core and applied here, at the
//! outermost layer, in one place.

use crossterm::style::{Color, Stylize};
use skysearch_core::{BannerMessage, MessageKind, WeatherApp, WeatherGroup, display};

/// Background color for each weather group.
fn theme_color(group: WeatherGroup) -> Color {
    match group {
        WeatherGroup::Na => Color::DarkGrey,
        WeatherGroup::Thunderstorm => Color::DarkMagenta,
        WeatherGroup::Drizzle => Color::DarkCyan,
        WeatherGroup::Rain => Color::DarkBlue,
        WeatherGroup::Snow => Color::White,
        WeatherGroup::Atmosphere => Color::Grey,
        WeatherGroup::Clear => Color::DarkYellow,
        WeatherGroup::Clouds => Color::Blue,
    }
}

/// Print one full frame of the widget: themed header, banner, result block.
pub fn frame(app: &WeatherApp) {
    let theme = app.theme_class();
    let bar = format!("  {theme:<40}");
    println!("{}", bar.with(Color::Black).on(theme_color(app.weather().group)));

    if app.banner().is_set() {
        println!("{}", banner_line(app.banner()));
    }

    body(app);
}

fn banner_line(banner: &BannerMessage) -> String {
    let styled = match banner.kind {
        MessageKind::Error => banner.text.as_str().with(Color::Red),
        MessageKind::Info => banner.text.as_str().with(Color::Cyan),
    };
    styled.to_string()
}

fn body(app: &WeatherApp) {
    let weather = app.weather();
    let rendered = display::render(display::DisplayProps {
        group: weather.group,
        description: &weather.weather_description,
        temp: weather.current_temperature,
    });

    if let Some(heading) = &rendered.placeholder_heading {
        println!();
        println!("{}", heading.as_str().bold());
        println!("Enter a city to look up current conditions.");
        return;
    }

    println!();
    if let Some(icon) = &rendered.icon_path {
        println!("[{icon}]");
    }
    if let Some(temp) = &rendered.temperature {
        println!("{}", temp.as_str().bold());
    }
    if let Some(description) = &rendered.description {
        println!("{description}");
    }

    println!();
    println!("{}", "Weather Summary".bold());
    println!("City: {}", weather.city);
    println!("Summary: {}", weather.weather_summary);
    println!("Details: {}", weather.weather_description);

    println!();
    println!("{}", "Temperatures".bold());
    println!("Current: {}° C", weather.current_temperature);
    println!("High (Today): {}° C", weather.high_temperature);
    println!("Low (Today): {}° C", weather.low_temperature);
}
