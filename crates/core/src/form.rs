//! Search form state machine: per-field text, lock flags, resolved entity
//! ids, and the gating policy that decides when an airport lookup may fire.
//!
//! The UI layer owns the debounce *timer*; every decision the timer consults
//! lives here.

use crate::types::AirportSuggestion;

/// Trailing debounce window for suggestion lookups, in milliseconds.
pub const DEBOUNCE_MS: u64 = 300;

/// Lookups never fire for queries shorter than this.
pub const MIN_QUERY_LEN: usize = 2;

/// The two airport inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Origin,
    Destination,
}

/// Cabin class sent to the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CabinClass {
    #[default]
    Economy,
    Business,
    First,
}

impl CabinClass {
    /// The `cabinClass` request parameter value.
    pub fn as_param(self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    /// Parse a select-option value; unknown input falls back to economy.
    pub fn parse(value: &str) -> Self {
        match value {
            "business" => CabinClass::Business,
            "first" => CabinClass::First,
            _ => CabinClass::Economy,
        }
    }
}

/// One airport input: free text, the resolved entity id (empty until a
/// suggestion is selected), the selection lock, and the current dropdown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirportField {
    pub text: String,
    pub entity_id: String,
    pub locked: bool,
    pub suggestions: Vec<AirportSuggestion>,
}

impl AirportField {
    /// True once a suggestion has been selected and the text left untouched.
    pub fn resolved(&self) -> bool {
        self.locked && !self.entity_id.is_empty()
    }
}

/// Snapshot of the form taken at submission time. Entity ids may be empty:
/// submitting unresolved free text passes empty parameters upstream verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub origin_sky_id: String,
    pub destination_sky_id: String,
    pub origin_entity_id: String,
    pub destination_entity_id: String,
    pub date: String,
    pub adults: u8,
    pub cabin_class: CabinClass,
}

/// The whole form. Owned by the form component for its lifetime; never
/// persisted, never shared process-wide.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    pub origin: AirportField,
    pub destination: AirportField,
    pub date: String,
    pub adults: u8,
    pub cabin_class: CabinClass,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            origin: AirportField::default(),
            destination: AirportField::default(),
            date: String::new(),
            adults: 1,
            cabin_class: CabinClass::Economy,
        }
    }
}

impl SearchForm {
    pub fn field(&self, kind: FieldKind) -> &AirportField {
        match kind {
            FieldKind::Origin => &self.origin,
            FieldKind::Destination => &self.destination,
        }
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut AirportField {
        match kind {
            FieldKind::Origin => &mut self.origin,
            FieldKind::Destination => &mut self.destination,
        }
    }

    /// Apply a keystroke: the field returns to unresolved. Any previously
    /// recorded entity id is stale the moment the text diverges from the
    /// selected suggestion.
    pub fn edit(&mut self, kind: FieldKind, text: &str) {
        let field = self.field_mut(kind);
        field.text = text.to_string();
        field.entity_id.clear();
        field.locked = false;
    }

    /// Gate decision for the debounce timer: the query to run, or `None` when
    /// the field is locked or the text is too short to look up.
    pub fn pending_query(&self, kind: FieldKind) -> Option<String> {
        let field = self.field(kind);
        if field.locked || field.text.chars().count() < MIN_QUERY_LEN {
            return None;
        }
        Some(field.text.clone())
    }

    /// Accept a suggestion: lock the field, show the sky id as its text,
    /// record the entity id, and drop the dropdown immediately.
    pub fn select(&mut self, kind: FieldKind, suggestion: &AirportSuggestion) {
        let field = self.field_mut(kind);
        field.text = suggestion.sky_id.clone();
        field.entity_id = suggestion.entity_id.clone();
        field.locked = true;
        field.suggestions.clear();
    }

    pub fn set_suggestions(&mut self, kind: FieldKind, suggestions: Vec<AirportSuggestion>) {
        self.field_mut(kind).suggestions = suggestions;
    }

    pub fn clear_suggestions(&mut self, kind: FieldKind) {
        self.field_mut(kind).suggestions.clear();
    }

    /// Blur handler for both inputs. Either field losing focus clears the
    /// destination dropdown; the origin dropdown is only replaced by a newer
    /// lookup or a selection.
    pub fn blur(&mut self, _kind: FieldKind) {
        self.destination.suggestions.clear();
    }

    pub fn set_adults(&mut self, value: &str) {
        if let Some(adults) = value.parse::<u8>().ok().filter(|a| (1..=4).contains(a)) {
            self.adults = adults;
        }
    }

    pub fn set_cabin_class(&mut self, value: &str) {
        self.cabin_class = CabinClass::parse(value);
    }

    /// Snapshot for submission. No resolution check: empty entity ids go out
    /// as-is and upstream tolerance decides the outcome.
    pub fn to_params(&self) -> SearchParams {
        SearchParams {
            origin_sky_id: self.origin.text.clone(),
            destination_sky_id: self.destination.text.clone(),
            origin_entity_id: self.origin.entity_id.clone(),
            destination_entity_id: self.destination.entity_id.clone(),
            date: self.date.clone(),
            adults: self.adults,
            cabin_class: self.cabin_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> AirportSuggestion {
        AirportSuggestion {
            entity_id: "27544008".into(),
            sky_id: "LOND".into(),
            suggestion_title: "London (Any)".into(),
        }
    }

    #[test]
    fn short_text_never_queries() {
        let mut form = SearchForm::default();
        form.edit(FieldKind::Origin, "");
        assert_eq!(form.pending_query(FieldKind::Origin), None);
        form.edit(FieldKind::Origin, "L");
        assert_eq!(form.pending_query(FieldKind::Origin), None);
        form.edit(FieldKind::Origin, "Lo");
        assert_eq!(form.pending_query(FieldKind::Origin), Some("Lo".into()));
    }

    #[test]
    fn locked_field_never_queries() {
        let mut form = SearchForm::default();
        form.edit(FieldKind::Origin, "Lon");
        form.select(FieldKind::Origin, &london());
        assert_eq!(form.pending_query(FieldKind::Origin), None);
    }

    #[test]
    fn selection_locks_and_resolves() {
        let mut form = SearchForm::default();
        form.edit(FieldKind::Origin, "Lon");
        form.set_suggestions(FieldKind::Origin, vec![london()]);
        form.select(FieldKind::Origin, &london());

        let origin = form.field(FieldKind::Origin);
        assert_eq!(origin.text, "LOND");
        assert_eq!(origin.entity_id, "27544008");
        assert!(origin.locked);
        assert!(origin.resolved());
        assert!(origin.suggestions.is_empty());
    }

    #[test]
    fn editing_a_locked_field_unlocks_and_clears_entity_id() {
        let mut form = SearchForm::default();
        form.select(FieldKind::Destination, &london());
        form.edit(FieldKind::Destination, "LONDO");

        let destination = form.field(FieldKind::Destination);
        assert!(!destination.locked);
        assert!(destination.entity_id.is_empty());
        assert!(!destination.resolved());
        // Editing re-enables lookups.
        assert_eq!(
            form.pending_query(FieldKind::Destination),
            Some("LONDO".into())
        );
    }

    #[test]
    fn blur_clears_destination_suggestions_from_either_field() {
        let mut form = SearchForm::default();
        form.set_suggestions(FieldKind::Origin, vec![london()]);
        form.set_suggestions(FieldKind::Destination, vec![london()]);

        form.blur(FieldKind::Origin);
        assert!(form.field(FieldKind::Destination).suggestions.is_empty());
        // The origin list is untouched, even by its own blur.
        form.blur(FieldKind::Destination);
        assert_eq!(form.field(FieldKind::Origin).suggestions.len(), 1);
    }

    #[test]
    fn adults_accepts_one_through_four_only() {
        let mut form = SearchForm::default();
        assert_eq!(form.adults, 1);
        form.set_adults("3");
        assert_eq!(form.adults, 3);
        form.set_adults("9");
        assert_eq!(form.adults, 3);
        form.set_adults("nope");
        assert_eq!(form.adults, 3);
    }

    #[test]
    fn cabin_class_parses_with_economy_fallback() {
        assert_eq!(CabinClass::parse("business"), CabinClass::Business);
        assert_eq!(CabinClass::parse("first"), CabinClass::First);
        assert_eq!(CabinClass::parse("economy"), CabinClass::Economy);
        assert_eq!(CabinClass::parse("premium"), CabinClass::Economy);
    }

    #[test]
    fn params_snapshot_the_current_fields() {
        let mut form = SearchForm::default();
        form.edit(FieldKind::Origin, "Lon");
        form.select(FieldKind::Origin, &london());
        form.edit(FieldKind::Destination, "New York");
        form.date = "2025-06-01".into();
        form.set_adults("2");
        form.set_cabin_class("business");

        let params = form.to_params();
        assert_eq!(params.origin_sky_id, "LOND");
        assert_eq!(params.origin_entity_id, "27544008");
        // Unresolved destination submits its free text and an empty id.
        assert_eq!(params.destination_sky_id, "New York");
        assert_eq!(params.destination_entity_id, "");
        assert_eq!(params.date, "2025-06-01");
        assert_eq!(params.adults, 2);
        assert_eq!(params.cabin_class, CabinClass::Business);
    }
}
