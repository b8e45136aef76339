//! Declarative filtering over in-memory row collections.
//!
//! Each row type enumerates its filterable fields statically as
//! `FilterField` entries with a typed accessor function, so an unsupported
//! field is a missing entry rather than a silently ignored string lookup.
//! Filtering is a pure function of the rows, the field list and the current
//! `FilterState`; it preserves input order and allocates a fresh collection,
//! leaving the canonical rows untouched.

use std::collections::HashMap;

/// Widget family a field is filtered with, which also fixes its predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring match.
    Text,
    /// Exact match after coercing both sides to strings.
    Select,
    /// Row collection must contain every selected value.
    MultiSelect,
}

/// A row field's value as seen by the filter engine.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Many(Vec<String>),
    /// The nested reference backing this field is absent. A missing value
    /// never excludes a row.
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Maps an optional source straight to `Missing` when absent.
    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => FieldValue::Text(v.to_string()),
            None => FieldValue::Missing,
        }
    }
}

/// Current input for one field.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Text(String),
    Many(Vec<String>),
}

impl FilterValue {
    fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Many(vs) => vs.is_empty(),
        }
    }
}

/// One filterable field of a row type: display label, widget kind, and the
/// accessor resolving the row's value.
pub struct FilterField<R> {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
    pub accessor: fn(&R) -> FieldValue,
}

/// Field name → current value. Owned by the active view and reset on
/// navigation; values set for names no field declares are ignored.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    values: HashMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.values
            .insert(field.to_string(), FilterValue::Text(value.into()));
    }

    /// Select inputs carry a single value; coercion to string happens here
    /// so numeric options compare like the text ones.
    pub fn set_selection(&mut self, field: &str, value: impl ToString) {
        self.values
            .insert(field.to_string(), FilterValue::Text(value.to_string()));
    }

    pub fn set_many(&mut self, field: &str, values: Vec<String>) {
        self.values
            .insert(field.to_string(), FilterValue::Many(values));
    }

    pub fn clear_field(&mut self, field: &str) {
        self.values.remove(field);
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// True when no field holds a non-empty value.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(FilterValue::is_empty)
    }

    fn get(&self, field: &str) -> Option<&FilterValue> {
        self.values.get(field)
    }
}

/// Computes the visible subset: a row survives iff every field with a
/// non-empty value passes its predicate. An empty state is the identity.
pub fn apply_filters<R: Clone>(
    rows: &[R],
    fields: &[FilterField<R>],
    state: &FilterState,
) -> Vec<R> {
    if state.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| fields.iter().all(|field| field_passes(field, row, state)))
        .cloned()
        .collect()
}

fn field_passes<R>(field: &FilterField<R>, row: &R, state: &FilterState) -> bool {
    let Some(value) = state.get(field.name) else {
        return true;
    };
    if value.is_empty() {
        return true;
    }

    let resolved = (field.accessor)(row);
    if resolved == FieldValue::Missing {
        return true;
    }

    match (field.kind, value) {
        (FilterKind::Text, FilterValue::Text(query)) => {
            let query = query.to_lowercase();
            stringify(&resolved).to_lowercase().contains(&query)
        }
        (FilterKind::Select, FilterValue::Text(query)) => stringify(&resolved) == *query,
        (FilterKind::MultiSelect, FilterValue::Many(selection)) => match &resolved {
            FieldValue::Many(items) => selection.iter().all(|v| items.contains(v)),
            // A scalar field cannot satisfy a containment check; treat the
            // filter as inapplicable rather than excluding the row.
            _ => true,
        },
        // Mismatched input for the declared kind: inapplicable, row passes.
        _ => true,
    }
}

fn stringify(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Many(vs) => vs.join(","),
        FieldValue::Missing => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        code: String,
        location: Option<String>,
        tags: Vec<String>,
    }

    fn row_code(row: &Row) -> FieldValue {
        FieldValue::text(&row.code)
    }

    fn row_location(row: &Row) -> FieldValue {
        FieldValue::opt_text(row.location.as_deref())
    }

    fn row_tags(row: &Row) -> FieldValue {
        FieldValue::Many(row.tags.clone())
    }

    const FIELDS: &[FilterField<Row>] = &[
        FilterField {
            name: "code",
            label: "Code",
            kind: FilterKind::Text,
            accessor: row_code,
        },
        FilterField {
            name: "location",
            label: "Location",
            kind: FilterKind::Select,
            accessor: row_location,
        },
        FilterField {
            name: "tags",
            label: "Tags",
            kind: FilterKind::MultiSelect,
            accessor: row_tags,
        },
    ];

    fn rows() -> Vec<Row> {
        vec![
            Row {
                code: "LK-01".into(),
                location: Some("Central".into()),
                tags: vec!["a".into(), "b".into()],
            },
            Row {
                code: "LK-02".into(),
                location: Some("North".into()),
                tags: vec!["b".into()],
            },
            Row {
                code: "BX-09".into(),
                location: None,
                tags: vec![],
            },
        ]
    }

    #[test]
    fn empty_state_is_identity() {
        let rows = rows();
        let state = FilterState::new();
        assert_eq!(apply_filters(&rows, FIELDS, &state), rows);
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_text("code", "lk");
        let visible = apply_filters(&rows, FIELDS, &state);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.code.starts_with("LK")));
    }

    #[test]
    fn select_filter_matches_exactly() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_selection("location", "Central");
        let visible = apply_filters(&rows, FIELDS, &state);
        // LK-01 matches; BX-09 has no location and passes too.
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].code, "LK-01");
        assert_eq!(visible[1].code, "BX-09");
    }

    #[test]
    fn multiselect_requires_all_selected_values() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_many("tags", vec!["a".into(), "b".into()]);
        let visible = apply_filters(&rows, FIELDS, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "LK-01");
    }

    #[test]
    fn empty_multiselect_selection_passes() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_many("tags", vec![]);
        assert_eq!(apply_filters(&rows, FIELDS, &state), rows);
    }

    #[test]
    fn missing_values_never_exclude() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_selection("location", "Nowhere");
        let visible = apply_filters(&rows, FIELDS, &state);
        // Only the row lacking a location survives.
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "BX-09");
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_text("no_such_field", "zzz");
        assert_eq!(apply_filters(&rows, FIELDS, &state), rows);
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_text("code", "lk");
        let once = apply_filters(&rows, FIELDS, &state);
        let twice = apply_filters(&once, FIELDS, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn combined_filters_intersect() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_text("code", "lk");
        state.set_many("tags", vec!["b".into()]);
        let visible = apply_filters(&rows, FIELDS, &state);
        assert_eq!(visible.len(), 2);
        state.set_selection("location", "North");
        let visible = apply_filters(&rows, FIELDS, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].code, "LK-02");
    }

    #[test]
    fn reset_restores_identity() {
        let rows = rows();
        let mut state = FilterState::new();
        state.set_text("code", "bx");
        assert_eq!(apply_filters(&rows, FIELDS, &state).len(), 1);
        state.reset();
        assert_eq!(apply_filters(&rows, FIELDS, &state), rows);
    }
}
