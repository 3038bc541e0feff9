use crate::model::WeatherGroup;

/// How the temperature reading is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TempDisplayMode {
    /// `"27º C"`
    #[default]
    Full,
    /// `"27º"`
    Degrees,
}

/// Inputs of the result display: an immutable snapshot of the parent state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayProps<'a> {
    pub group: WeatherGroup,
    pub description: &'a str,
    pub temp: f64,
}

/// Rendered output of the result display.
///
/// With the `na` sentinel only the placeholder heading is present; with a
/// real group the icon, description and temperature are present instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub placeholder_heading: Option<String>,
    pub icon_path: Option<String>,
    pub description: Option<String>,
    pub temperature: Option<String>,
}

/// Format a temperature reading.
///
/// The numeric value passes through untransformed: `25.3` renders as
/// `"25.3º C"` and `27.0` as `"27º C"`.
pub fn format_temperature(temp: f64, mode: TempDisplayMode) -> String {
    match mode {
        TempDisplayMode::Full => format!("{temp}º C"),
        TempDisplayMode::Degrees => format!("{temp}º"),
    }
}

/// Pure render function of the result display. No state, no network.
pub fn render(props: DisplayProps<'_>) -> Rendered {
    render_with_mode(props, TempDisplayMode::Full)
}

pub fn render_with_mode(props: DisplayProps<'_>, mode: TempDisplayMode) -> Rendered {
    if props.group == WeatherGroup::Na {
        return Rendered {
            placeholder_heading: Some("Weather Search".to_string()),
            ..Rendered::default()
        };
    }

    Rendered {
        placeholder_heading: None,
        icon_path: Some(format!("images/{}", props.group.icon_asset())),
        description: Some(props.description.to_string()),
        temperature: Some(format_temperature(props.temp, mode)),
    }
}
