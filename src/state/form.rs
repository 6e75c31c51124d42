//! Input form state machine.
//!
//! The form collects an element count, one value per element, and a target.
//! Element fields are visible only while the count field holds a valid count;
//! text typed into them survives the count passing through invalid values.

use crate::model::InputError;
use crate::parser::{parse_count, parse_number, parse_values};

/// Which form field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Count,
    Element(usize),
    Target,
}

/// Validated form contents ready for a search session.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    /// Values in the order they were typed.
    pub values: Vec<f64>,
    pub target: f64,
}

/// Editable input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    count: String,
    elements: Vec<String>,
    visible: usize,
    target: String,
    focus: FormField,
    max_elements: usize,
    count_error: Option<InputError>,
    values_error: Option<InputError>,
}

impl FormState {
    /// Empty form accepting up to `max_elements` values.
    pub fn new(max_elements: usize) -> Self {
        Self {
            count: String::new(),
            elements: Vec::new(),
            visible: 0,
            target: String::new(),
            focus: FormField::Count,
            max_elements,
            count_error: None,
            values_error: None,
        }
    }

    pub fn count_text(&self) -> &str {
        &self.count
    }

    /// Element fields currently shown, one per counted element.
    pub fn element_texts(&self) -> &[String] {
        &self.elements[..self.visible]
    }

    pub fn target_text(&self) -> &str {
        &self.target
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    /// Error under the count field, if the last edit left it invalid.
    pub fn count_error(&self) -> Option<&InputError> {
        self.count_error.as_ref()
    }

    /// Error from the last failed submit of the value fields.
    pub fn values_error(&self) -> Option<&InputError> {
        self.values_error.as_ref()
    }

    /// Append a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            FormField::Count => {
                self.count.push(c);
                self.on_count_edited();
            }
            FormField::Element(i) => {
                if let Some(field) = self.elements[..self.visible].get_mut(i) {
                    field.push(c);
                }
            }
            FormField::Target => self.target.push(c),
        }
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Count => {
                self.count.pop();
                self.on_count_edited();
            }
            FormField::Element(i) => {
                if let Some(field) = self.elements[..self.visible].get_mut(i) {
                    field.pop();
                }
            }
            FormField::Target => {
                self.target.pop();
            }
        }
    }

    /// Move focus to the next field, wrapping to the count field.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Count if self.visible == 0 => FormField::Target,
            FormField::Count => FormField::Element(0),
            FormField::Element(i) if i + 1 < self.visible => FormField::Element(i + 1),
            FormField::Element(_) => FormField::Target,
            FormField::Target => FormField::Count,
        };
    }

    /// Move focus to the previous field, wrapping to the target field.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormField::Count => FormField::Target,
            FormField::Element(0) => FormField::Count,
            FormField::Element(i) => FormField::Element(i - 1),
            FormField::Target => match self.visible {
                0 => FormField::Count,
                n => FormField::Element(n - 1),
            },
        };
    }

    /// Validate every field.
    ///
    /// On failure the error is stored for display and also returned; the
    /// form keeps its contents so the user can correct them.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidCount`] if the count is invalid, otherwise
    /// [`InputError::NotANumber`] for the first bad value or the target.
    pub fn submit(&mut self) -> Result<FormInput, InputError> {
        if let Err(err) = parse_count(&self.count, self.max_elements) {
            self.count_error = Some(err.clone());
            return Err(err);
        }

        let result = parse_values(self.element_texts()).and_then(|values| {
            let target = parse_number(&self.target, None)?;
            Ok(FormInput { values, target })
        });

        self.values_error = result.as_ref().err().cloned();
        result
    }

    /// Show or hide element fields after the count text changed.
    fn on_count_edited(&mut self) {
        match parse_count(&self.count, self.max_elements) {
            Ok(count) => {
                self.count_error = None;
                if self.elements.len() < count {
                    self.elements.resize(count, String::new());
                }
                self.visible = count;
            }
            Err(err) => {
                self.count_error = Some(err);
                self.visible = 0;
            }
        }
        self.values_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut FormState, text: &str) {
        text.chars().for_each(|c| form.insert_char(c));
    }

    fn filled_form(count: &str, values: &[&str], target: &str) -> FormState {
        let mut form = FormState::new(20);
        type_text(&mut form, count);
        for value in values {
            form.focus_next();
            type_text(&mut form, value);
        }
        form.focus_next();
        type_text(&mut form, target);
        form
    }

    #[test]
    fn new_form_focuses_count_without_errors() {
        let form = FormState::new(20);
        assert_eq!(form.focus(), FormField::Count);
        assert!(form.count_error().is_none());
        assert!(form.element_texts().is_empty());
    }

    #[test]
    fn valid_count_creates_element_fields() {
        let mut form = FormState::new(20);
        type_text(&mut form, "3");
        assert_eq!(form.element_texts().len(), 3);
        assert!(form.count_error().is_none());
    }

    #[test]
    fn count_above_max_shows_error_and_clears_fields() {
        let mut form = FormState::new(20);
        type_text(&mut form, "2");
        assert_eq!(form.element_texts().len(), 2);

        type_text(&mut form, "5");

        assert!(form.element_texts().is_empty());
        assert_eq!(
            form.count_error(),
            Some(&InputError::InvalidCount { max: 20 })
        );
    }

    #[test]
    fn backspace_on_count_recomputes_fields() {
        let mut form = FormState::new(20);
        type_text(&mut form, "12");
        form.backspace();
        assert_eq!(form.count_text(), "1");
        assert_eq!(form.element_texts().len(), 1);
    }

    #[test]
    fn retyping_count_keeps_earlier_values() {
        let mut form = filled_form("3", &["9", "8", "7"], "");
        while form.focus() != FormField::Count {
            form.focus_prev();
        }
        form.backspace();
        type_text(&mut form, "2");

        assert_eq!(form.element_texts(), &["9".to_string(), "8".to_string()]);
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = FormState::new(20);
        type_text(&mut form, "2");

        let mut seen = vec![form.focus()];
        for _ in 0..4 {
            form.focus_next();
            seen.push(form.focus());
        }

        assert_eq!(
            seen,
            vec![
                FormField::Count,
                FormField::Element(0),
                FormField::Element(1),
                FormField::Target,
                FormField::Count,
            ]
        );
    }

    #[test]
    fn focus_prev_from_count_wraps_to_target() {
        let mut form = FormState::new(20);
        form.focus_prev();
        assert_eq!(form.focus(), FormField::Target);
        form.focus_prev();
        assert_eq!(form.focus(), FormField::Count);
    }

    #[test]
    fn submit_returns_values_in_typed_order() {
        let mut form = filled_form("3", &["5", "1", "3"], "3");

        let input = form.submit().unwrap();

        assert_eq!(input.values, vec![5.0, 1.0, 3.0]);
        assert_eq!(input.target, 3.0);
    }

    #[test]
    fn submit_without_count_reports_invalid_count() {
        let mut form = FormState::new(20);
        assert_eq!(form.submit(), Err(InputError::InvalidCount { max: 20 }));
        assert!(form.count_error().is_some());
    }

    #[test]
    fn submit_with_bad_value_keeps_contents_and_error() {
        let mut form = filled_form("2", &["1", "two"], "1");

        let err = form.submit().unwrap_err();

        assert_eq!(err, InputError::NotANumber { field: Some(1) });
        assert_eq!(form.values_error(), Some(&err));
        assert_eq!(form.element_texts()[1], "two");
    }

    #[test]
    fn submit_with_bad_target_reports_target_field() {
        let mut form = filled_form("1", &["1"], "");
        assert_eq!(form.submit(), Err(InputError::NotANumber { field: None }));
    }

    #[test]
    fn successful_submit_clears_previous_values_error() {
        let mut form = filled_form("1", &["1"], "");
        let _ = form.submit();
        type_text(&mut form, "4");

        assert!(form.submit().is_ok());
        assert!(form.values_error().is_none());
    }
}
