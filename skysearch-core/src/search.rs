/// Event emitted by the search form toward its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The user asked to search for the carried city string.
    SearchRequested(String),
}

/// State of the search form: one text field and two buttons.
///
/// Owns only its own input; clearing it never touches the parent's weather
/// result, and resetting the result never touches the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    input_city: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_city(&self) -> &str {
        &self.input_city
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_city = text.into();
    }

    /// Both buttons are enabled exactly when the input is non-empty.
    ///
    /// Deliberately trim-free: a whitespace-only input counts as non-empty,
    /// matching the widget's observable behavior.
    pub fn controls_enabled(&self) -> bool {
        !self.input_city.is_empty()
    }

    /// Emit a search request carrying the current input, untrimmed.
    ///
    /// The input is not cleared, so repeated searches of the same text work
    /// without retyping.
    pub fn search_city(&self) -> SearchEvent {
        SearchEvent::SearchRequested(self.input_city.clone())
    }

    /// Clear the text field. Emits nothing and has no effect on the parent.
    pub fn clear_city(&mut self) {
        self.input_city.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_start_disabled() {
        let input = SearchInput::new();
        assert_eq!(input.input_city(), "");
        assert!(!input.controls_enabled());
    }

    #[test]
    fn controls_enable_when_a_city_is_entered() {
        let mut input = SearchInput::new();
        input.set_input("San Francisco");
        assert!(input.controls_enabled());
    }

    #[test]
    fn whitespace_only_input_counts_as_non_empty() {
        let mut input = SearchInput::new();
        input.set_input("   ");
        assert!(input.controls_enabled());
    }

    #[test]
    fn search_emits_the_current_input_without_clearing_it() {
        let mut input = SearchInput::new();
        input.set_input("Denver");

        let event = input.search_city();
        assert_eq!(event, SearchEvent::SearchRequested("Denver".into()));

        // The field keeps its value so the same search can be repeated.
        assert_eq!(input.input_city(), "Denver");
    }

    #[test]
    fn search_does_not_trim() {
        let mut input = SearchInput::new();
        input.set_input("  Denver ");

        let event = input.search_city();
        assert_eq!(event, SearchEvent::SearchRequested("  Denver ".into()));
    }

    #[test]
    fn clear_city_empties_the_field() {
        let mut input = SearchInput::new();
        input.set_input("San Francisco");

        input.clear_city();
        assert_eq!(input.input_city(), "");
        assert!(!input.controls_enabled());
    }
}
