//! # Input Form
//!
//! Terminal stand-in for the name form: two text fields, then a collapsible
//! options panel with the gender radio group, tag checkboxes and the
//! "save my choice" checkbox.

use crate::session::{Gender, UserData, UserOptions, DEFAULT_TAGS, TAG_CHOICES};
use thiserror::Error;

/// A focusable control on the input screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    /// Header line of the options panel.
    Options,
    Gender,
    Tag(usize),
    Save,
    Submit,
}

impl FormField {
    pub fn is_text(self) -> bool {
        matches!(self, FormField::FirstName | FormField::LastName)
    }

    fn in_options_panel(self) -> bool {
        matches!(self, FormField::Gender | FormField::Tag(_) | FormField::Save)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your first name.")]
    MissingFirstName,
    #[error("Please enter your last name.")]
    MissingLastName,
}

#[derive(Debug, Clone)]
pub struct InputForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    /// Checked state per entry of [`TAG_CHOICES`].
    pub tags: [bool; TAG_CHOICES.len()],
    pub save: bool,
    pub options_open: bool,
    pub focus: FormField,
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InputForm {
    pub fn new() -> Self {
        let mut tags = [false; TAG_CHOICES.len()];
        for (checked, (value, _)) in tags.iter_mut().zip(TAG_CHOICES.iter()) {
            *checked = DEFAULT_TAGS.contains(value);
        }

        Self {
            first_name: String::new(),
            last_name: String::new(),
            gender: Gender::default(),
            tags,
            save: false,
            options_open: false,
            focus: FormField::FirstName,
        }
    }

    /// Focus order; options controls only appear while the panel is open.
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::FirstName, FormField::LastName, FormField::Options];
        if self.options_open {
            fields.push(FormField::Gender);
            fields.extend((0..TAG_CHOICES.len()).map(FormField::Tag));
            fields.push(FormField::Save);
        }
        fields.push(FormField::Submit);
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = if pos == 0 {
            fields[fields.len() - 1]
        } else {
            fields[pos - 1]
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::FirstName => self.first_name.push(c),
            FormField::LastName => self.last_name.push(c),
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            FormField::FirstName => {
                self.first_name.pop();
            }
            FormField::LastName => {
                self.last_name.pop();
            }
            _ => {}
        }
    }

    pub fn toggle_options(&mut self) {
        self.options_open = !self.options_open;
        if !self.options_open && self.focus.in_options_panel() {
            self.focus = FormField::Options;
        }
    }

    /// Space on the focused control: flip a checkbox, advance the radio
    /// group, or open/close the options panel.
    pub fn toggle_focused(&mut self) {
        match self.focus {
            FormField::Options => self.toggle_options(),
            FormField::Gender => self.cycle_gender(true),
            FormField::Tag(i) => {
                if let Some(checked) = self.tags.get_mut(i) {
                    *checked = !*checked;
                }
            }
            FormField::Save => self.save = !self.save,
            FormField::FirstName | FormField::LastName | FormField::Submit => {}
        }
    }

    pub fn cycle_gender(&mut self, forward: bool) {
        let all = Gender::ALL;
        let pos = all.iter().position(|g| *g == self.gender).unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        self.gender = all[next];
    }

    /// Checked tag values in display order. May be empty.
    pub fn selected_tags(&self) -> Vec<String> {
        TAG_CHOICES
            .iter()
            .zip(self.tags.iter())
            .filter(|(_, checked)| **checked)
            .map(|((value, _), _)| (*value).to_string())
            .collect()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.first_name.trim().is_empty() {
            return Err(FormError::MissingFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(FormError::MissingLastName);
        }
        Ok(())
    }

    /// Snapshot of the form as session data.
    pub fn collect(&self) -> UserData {
        UserData {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            options: UserOptions {
                gender: self.gender,
                tags: self.selected_tags(),
                save: self.save,
            },
        }
    }

    /// Reset every field and collapse the options panel.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = InputForm::new();
        assert_eq!(form.gender, Gender::Neutral);
        assert_eq!(form.selected_tags(), vec!["밝음", "지혜"]);
        assert!(!form.save);
        assert!(!form.options_open);
    }

    #[test]
    fn test_focus_skips_collapsed_options() {
        let mut form = InputForm::new();
        form.focus_next();
        assert_eq!(form.focus, FormField::LastName);
        form.focus_next();
        assert_eq!(form.focus, FormField::Options);
        form.focus_next();
        assert_eq!(form.focus, FormField::Submit);
        form.focus_next();
        assert_eq!(form.focus, FormField::FirstName);
    }

    #[test]
    fn test_focus_prev_wraps() {
        let mut form = InputForm::new();
        form.focus_prev();
        assert_eq!(form.focus, FormField::Submit);
    }

    #[test]
    fn test_collapsing_options_moves_focus_out() {
        let mut form = InputForm::new();
        form.toggle_options();
        form.focus = FormField::Tag(2);
        form.toggle_options();
        assert_eq!(form.focus, FormField::Options);
    }

    #[test]
    fn test_unchecking_all_tags_gives_empty_list() {
        let mut form = InputForm::new();
        form.tags = [false; TAG_CHOICES.len()];
        assert!(form.selected_tags().is_empty());
        assert!(form.collect().options.tags.is_empty());
    }

    #[test]
    fn test_validate_requires_both_names() {
        let mut form = InputForm::new();
        form.first_name = "  ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingFirstName));
        form.first_name = "Wilson".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingLastName));
        form.last_name = "Smith".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_collect_trims_names() {
        let mut form = InputForm::new();
        form.first_name = " Wilson ".to_string();
        form.last_name = "Smith  ".to_string();
        let data = form.collect();
        assert_eq!(data.first_name, "Wilson");
        assert_eq!(data.last_name, "Smith");
    }

    #[test]
    fn test_cycle_gender() {
        let mut form = InputForm::new();
        form.cycle_gender(true);
        assert_eq!(form.gender, Gender::Male);
        form.cycle_gender(false);
        assert_eq!(form.gender, Gender::Neutral);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = InputForm::new();
        form.first_name = "Wilson".to_string();
        form.save = true;
        form.options_open = true;
        form.focus = FormField::Save;
        form.clear();
        assert!(form.first_name.is_empty());
        assert!(!form.save);
        assert!(!form.options_open);
        assert_eq!(form.focus, FormField::FirstName);
    }
}
