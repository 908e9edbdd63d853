//! Business registration form: data, field navigation, and validation

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Maximum length of the description field, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 750;

/// All editable fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BusinessName,
    Category,
    Description,
    EstablishedDate,
    Phone,
    Address,
    City,
    OperatingHours,
    ServiceArea,
    Website,
    Instagram,
    Facebook,
    Linkedin,
    ZipPath,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::BusinessName,
        Field::Category,
        Field::Description,
        Field::EstablishedDate,
        Field::Phone,
        Field::Address,
        Field::City,
        Field::OperatingHours,
        Field::ServiceArea,
        Field::Website,
        Field::Instagram,
        Field::Facebook,
        Field::Linkedin,
        Field::ZipPath,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::BusinessName => "Business Name *",
            Field::Category => "Category",
            Field::Description => "Description",
            Field::EstablishedDate => "Established Since",
            Field::Phone => "Phone *",
            Field::Address => "Address",
            Field::City => "City",
            Field::OperatingHours => "Operating Hours",
            Field::ServiceArea => "Service Area",
            Field::Website => "Website",
            Field::Instagram => "Instagram",
            Field::Facebook => "Facebook",
            Field::Linkedin => "LinkedIn",
            Field::ZipPath => "Photo ZIP (path, Enter to attach)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::BusinessName => "e.g. Kopi Santai Abis",
            Field::Category => "Cafe / Workshop / Course",
            Field::Description => "Tell us why your business stands out...",
            Field::EstablishedDate => "YYYY-MM-DD",
            Field::Phone => "08xxxxxxxxxx",
            Field::Address => "Jl. Anggrek No. 12",
            Field::City => "Bandung",
            Field::OperatingHours => "Mon-Fri: 08:00 - 17:00",
            Field::ServiceArea => "Jabodetabek",
            Field::Website => "https://yourbusiness.com",
            Field::Instagram => "@yourbusiness",
            Field::Facebook => "facebook.com/yourbusiness",
            Field::Linkedin => "linkedin.com/company/yourbusiness",
            Field::ZipPath => "/path/to/photos.zip",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Description)
    }
}

/// The record sent to the intake endpoint. Serializes to the exact camelCase
/// keys the Apps Script collaborator reads.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub business_name: String,
    pub category: String,
    pub description: String,
    pub established_date: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub instagram: String,
    pub facebook: String,
    pub linkedin: String,
    pub website: String,
    pub operating_hours: String,
    pub service_area: String,
    /// Archive content as a `data:application/zip;base64,...` URI
    pub zip_file: String,
    pub zip_file_name: String,
}

impl FormData {
    /// Build the natural-language prompt for the description rewrite.
    ///
    /// Output language stays Indonesian because the intake sheet and the
    /// Google Business Profile it feeds are Indonesian.
    pub fn enhancement_prompt(&self) -> String {
        let extra = if self.description.is_empty() {
            "Tolong buatkan dari awal"
        } else {
            &self.description
        };
        format!(
            "Tuliskan deskripsi bisnis yang menarik, ceria, profesional, dan SEO-friendly \
             untuk Google Business Profile.\n\
             Nama Bisnis: {}\n\
             Kategori: {}\n\
             Informasi tambahan: {}\n\
             Bahasa: Indonesia\n\
             Maksimal: {} karakter.",
            self.business_name, self.category, extra, MAX_DESCRIPTION_CHARS
        )
    }
}

/// Truncate a string to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Phone must be 10-15 digits, optionally prefixed with `+`, after stripping
/// whitespace.
fn is_valid_phone(raw: &str) -> bool {
    let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// A candidate archive is accepted only with a `.zip` extension.
pub fn is_zip_candidate(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Form state: data, per-field errors, and focus position
#[derive(Debug, Clone, Default)]
pub struct BusinessForm {
    pub data: FormData,
    pub errors: HashMap<Field, String>,
    /// The path the user is typing for the ZIP attachment
    pub zip_path_input: String,
    /// Index into `Field::ALL`, or `Field::ALL.len()` for the buttons row
    pub active_field_index: usize,
    /// Which button is selected on the buttons row (0=Enhance, 1=Submit)
    pub selected_button: usize,
}

impl BusinessForm {
    /// Fields plus the trailing buttons row
    pub fn slot_count(&self) -> usize {
        Field::ALL.len() + 1
    }

    pub fn active_field(&self) -> Option<Field> {
        Field::ALL.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Field::ALL.len()
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.slot_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.slot_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    pub fn prev_button(&mut self) {
        self.next_button(); // two buttons, so next and prev coincide
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::BusinessName => &self.data.business_name,
            Field::Category => &self.data.category,
            Field::Description => &self.data.description,
            Field::EstablishedDate => &self.data.established_date,
            Field::Phone => &self.data.phone,
            Field::Address => &self.data.address,
            Field::City => &self.data.city,
            Field::OperatingHours => &self.data.operating_hours,
            Field::ServiceArea => &self.data.service_area,
            Field::Website => &self.data.website,
            Field::Instagram => &self.data.instagram,
            Field::Facebook => &self.data.facebook,
            Field::Linkedin => &self.data.linkedin,
            Field::ZipPath => &self.zip_path_input,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::BusinessName => &mut self.data.business_name,
            Field::Category => &mut self.data.category,
            Field::Description => &mut self.data.description,
            Field::EstablishedDate => &mut self.data.established_date,
            Field::Phone => &mut self.data.phone,
            Field::Address => &mut self.data.address,
            Field::City => &mut self.data.city,
            Field::OperatingHours => &mut self.data.operating_hours,
            Field::ServiceArea => &mut self.data.service_area,
            Field::Website => &mut self.data.website,
            Field::Instagram => &mut self.data.instagram,
            Field::Facebook => &mut self.data.facebook,
            Field::Linkedin => &mut self.data.linkedin,
            Field::ZipPath => &mut self.zip_path_input,
        }
    }

    /// Handle character input on the active field. Editing a field clears its
    /// error immediately, without re-validating.
    pub fn input_char(&mut self, c: char, shift: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        self.value_mut(field).push(ch);
        self.errors.remove(&field);
    }

    /// Handle backspace on the active field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        self.value_mut(field).pop();
        self.errors.remove(&field);
    }

    /// Insert a newline into the description (the only multiline field)
    pub fn input_newline(&mut self) {
        if self.active_field() == Some(Field::Description) {
            self.data.description.push('\n');
            self.errors.remove(&Field::Description);
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn set_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn description_chars(&self) -> usize {
        self.data.description.chars().count()
    }

    /// Recompute all validation errors from the current data. Replaces the
    /// error map wholesale. Returns true iff the form is submittable.
    pub fn validate(&mut self) -> bool {
        let mut errors = HashMap::new();

        if self.data.business_name.is_empty() {
            errors.insert(Field::BusinessName, "Business name is required".to_string());
        }
        if self.description_chars() > MAX_DESCRIPTION_CHARS {
            errors.insert(
                Field::Description,
                format!("Description exceeds {MAX_DESCRIPTION_CHARS} characters"),
            );
        }
        if self.data.phone.is_empty() {
            errors.insert(Field::Phone, "Phone number is required".to_string());
        } else if !is_valid_phone(&self.data.phone) {
            errors.insert(Field::Phone, "Invalid phone format".to_string());
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Store an accepted, already-encoded archive and clear any ZIP error
    pub fn attach_archive(&mut self, file_name: String, data_uri: String) {
        self.data.zip_file_name = file_name;
        self.data.zip_file = data_uri;
        self.errors.remove(&Field::ZipPath);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> BusinessForm {
        let mut form = BusinessForm::default();
        form.data.business_name = "Kopi Santai Abis".to_string();
        form.data.phone = "0812345678901".to_string();
        form
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn valid_form_passes() {
            let mut form = valid_form();
            assert!(form.validate());
            assert!(form.errors.is_empty());
        }

        #[test]
        fn empty_business_name_fails() {
            let mut form = valid_form();
            form.data.business_name.clear();
            assert!(!form.validate());
            assert!(form.error(Field::BusinessName).is_some());
        }

        #[test]
        fn empty_phone_fails() {
            let mut form = valid_form();
            form.data.phone.clear();
            assert!(!form.validate());
            assert_eq!(form.error(Field::Phone), Some("Phone number is required"));
        }

        #[test]
        fn phone_13_digits_passes() {
            let mut form = valid_form();
            form.data.phone = "0812345678901".to_string();
            assert!(form.validate());
        }

        #[test]
        fn phone_too_short_fails() {
            let mut form = valid_form();
            form.data.phone = "12345".to_string();
            assert!(!form.validate());
            assert_eq!(form.error(Field::Phone), Some("Invalid phone format"));
        }

        #[test]
        fn phone_with_plus_prefix_passes() {
            let mut form = valid_form();
            form.data.phone = "+6281234567890".to_string();
            assert!(form.validate());
        }

        #[test]
        fn phone_with_letters_fails() {
            let mut form = valid_form();
            form.data.phone = "abc1234567890".to_string();
            assert!(!form.validate());
        }

        #[test]
        fn phone_whitespace_is_stripped_before_matching() {
            let mut form = valid_form();
            form.data.phone = "+62 812 3456 7890".to_string();
            assert!(form.validate());
        }

        #[test]
        fn description_at_limit_passes() {
            let mut form = valid_form();
            form.data.description = "a".repeat(MAX_DESCRIPTION_CHARS);
            assert!(form.validate());
        }

        #[test]
        fn description_over_limit_fails() {
            let mut form = valid_form();
            form.data.description = "a".repeat(MAX_DESCRIPTION_CHARS + 1);
            assert!(!form.validate());
            assert!(form.error(Field::Description).is_some());
        }

        #[test]
        fn validate_replaces_previous_errors() {
            let mut form = BusinessForm::default();
            assert!(!form.validate());
            assert!(form.error(Field::BusinessName).is_some());

            form.data.business_name = "Bengkel Maju".to_string();
            form.data.phone = "0812345678901".to_string();
            assert!(form.validate());
            assert!(form.errors.is_empty());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn editing_a_field_clears_only_its_error() {
            let mut form = BusinessForm::default();
            form.validate();
            assert!(form.error(Field::BusinessName).is_some());
            assert!(form.error(Field::Phone).is_some());

            form.active_field_index = 0; // business name
            form.input_char('K', false);

            assert!(form.error(Field::BusinessName).is_none());
            assert!(form.error(Field::Phone).is_some());
        }

        #[test]
        fn backspace_clears_field_error_too() {
            let mut form = valid_form();
            form.data.phone = "12345".to_string();
            form.validate();
            assert!(form.error(Field::Phone).is_some());

            form.active_field_index = Field::ALL
                .iter()
                .position(|f| *f == Field::Phone)
                .unwrap();
            form.backspace();
            assert!(form.error(Field::Phone).is_none());
            assert_eq!(form.data.phone, "1234");
        }

        #[test]
        fn shift_uppercases_input() {
            let mut form = BusinessForm::default();
            form.input_char('k', true);
            assert_eq!(form.data.business_name, "K");
        }

        #[test]
        fn newline_only_applies_to_description() {
            let mut form = BusinessForm::default();
            form.active_field_index = Field::ALL
                .iter()
                .position(|f| *f == Field::Description)
                .unwrap();
            form.input_newline();
            assert_eq!(form.data.description, "\n");

            form.active_field_index = 0;
            form.input_newline();
            assert_eq!(form.data.business_name, "");
        }

        #[test]
        fn input_on_buttons_row_is_noop() {
            let mut form = BusinessForm::default();
            form.active_field_index = Field::ALL.len();
            form.input_char('x', false);
            form.backspace();
            assert_eq!(form.data.business_name, "");
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn next_field_wraps_past_buttons_row() {
            let mut form = BusinessForm::default();
            for _ in 0..form.slot_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn prev_field_wraps_to_buttons_row() {
            let mut form = BusinessForm::default();
            form.prev_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn button_selection_toggles() {
            let mut form = BusinessForm::default();
            assert_eq!(form.selected_button, 0);
            form.next_button();
            assert_eq!(form.selected_button, 1);
            form.prev_button();
            assert_eq!(form.selected_button, 0);
        }
    }

    mod archive {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn zip_extension_is_accepted() {
            assert!(is_zip_candidate("photos.zip"));
            assert!(is_zip_candidate("/tmp/My Photos.ZIP"));
        }

        #[test]
        fn other_extensions_are_rejected() {
            assert!(!is_zip_candidate("photos.rar"));
            assert!(!is_zip_candidate("photos"));
            assert!(!is_zip_candidate("zip"));
        }

        #[test]
        fn attach_populates_content_and_name_and_clears_error() {
            let mut form = BusinessForm::default();
            form.set_error(Field::ZipPath, "Only .zip archives are accepted");
            form.attach_archive(
                "photos.zip".to_string(),
                "data:application/zip;base64,UEsDBA==".to_string(),
            );
            assert_eq!(form.data.zip_file_name, "photos.zip");
            assert!(form.data.zip_file.starts_with("data:application/zip;base64,"));
            assert!(form.error(Field::ZipPath).is_none());
        }

        #[test]
        fn rejection_leaves_prior_archive_untouched() {
            let mut form = BusinessForm::default();
            form.attach_archive(
                "photos.zip".to_string(),
                "data:application/zip;base64,UEsDBA==".to_string(),
            );

            // A rejected pick only records the error
            form.set_error(Field::ZipPath, "Only .zip archives are accepted");
            assert_eq!(form.data.zip_file_name, "photos.zip");
            assert!(!form.data.zip_file.is_empty());
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn serializes_with_camel_case_keys() {
            let mut form = valid_form();
            form.data.operating_hours = "Mon-Fri: 08:00 - 17:00".to_string();
            form.attach_archive(
                "photos.zip".to_string(),
                "data:application/zip;base64,UEsDBA==".to_string(),
            );

            let value = serde_json::to_value(&form.data).unwrap();
            let obj = value.as_object().unwrap();
            for key in [
                "businessName",
                "category",
                "description",
                "establishedDate",
                "address",
                "city",
                "phone",
                "instagram",
                "facebook",
                "linkedin",
                "website",
                "operatingHours",
                "serviceArea",
                "zipFile",
                "zipFileName",
            ] {
                assert!(obj.contains_key(key), "missing key {key}");
            }
            assert_eq!(obj["businessName"], "Kopi Santai Abis");
            assert_eq!(obj["zipFileName"], "photos.zip");
        }
    }

    mod prompt {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn embeds_name_category_and_description() {
            let mut form = valid_form();
            form.data.category = "Kafe".to_string();
            form.data.description = "Kopi enak".to_string();
            let prompt = form.data.enhancement_prompt();
            assert!(prompt.contains("Kopi Santai Abis"));
            assert!(prompt.contains("Kafe"));
            assert!(prompt.contains("Kopi enak"));
        }

        #[test]
        fn empty_description_asks_for_a_fresh_one() {
            let form = valid_form();
            let prompt = form.data.enhancement_prompt();
            assert!(prompt.contains("Tolong buatkan dari awal"));
        }
    }

    mod truncation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn truncates_to_exact_char_count() {
            let long = "x".repeat(900);
            assert_eq!(truncate_chars(&long, 750).chars().count(), 750);
        }

        #[test]
        fn shorter_text_is_unchanged() {
            assert_eq!(truncate_chars("short", 750), "short");
        }

        #[test]
        fn respects_multibyte_boundaries() {
            let text = "é".repeat(800);
            let truncated = truncate_chars(&text, 750);
            assert_eq!(truncated.chars().count(), 750);
        }
    }
}
