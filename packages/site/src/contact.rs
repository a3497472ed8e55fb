//! # Contact form state
//!
//! The form holds four text fields. Submitting validates them into a
//! [`ContactMessage`], which the UI logs. Nothing is sent anywhere.

use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Website,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Website,
        ContactField::Message,
    ];

    /// The `name` attribute of the input.
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Website => "website",
            ContactField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "Email",
            ContactField::Website => "Your website (Optional)",
            ContactField::Message => "How can I help?",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, ContactField::Website)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("please fill in your {0}")]
    Missing(ContactField),
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub website: String,
    pub message: String,
}

/// A submission that passed the required-field check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub website: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Website => &self.website,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Website => &mut self.website,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Mirrors the browser's `required` check: a required field only has to be
    /// non-empty. Values are passed through as typed.
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| field.required() && self.get(*field).is_empty())
        {
            return Err(ContactError::Missing(field));
        }

        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            website: (!self.website.is_empty()).then(|| self.website.clone()),
            message: self.message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            website: String::new(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn test_set_updates_single_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "a@b.co");
        assert_eq!(form.email, "a@b.co");
        assert!(form.name.is_empty());
        assert!(form.website.is_empty());
        assert!(form.message.is_empty());
        assert_eq!(form.get(ContactField::Email), "a@b.co");
    }

    #[test]
    fn test_validate_drops_empty_website() {
        let message = filled().validate().unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.website, None);
        assert_eq!(message.message, "Let's build something");
    }

    #[test]
    fn test_validate_keeps_website() {
        let mut form = filled();
        form.set(ContactField::Website, "https://ada.dev");
        assert_eq!(
            form.validate().unwrap().website.as_deref(),
            Some("https://ada.dev")
        );
    }

    #[test]
    fn test_missing_required_fields() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled();
            form.set(field, "");
            assert_eq!(form.validate(), Err(ContactError::Missing(field)), "{field}");
        }
        assert_eq!(
            ContactError::Missing(ContactField::Message).to_string(),
            "please fill in your message"
        );
    }

    #[test]
    fn test_browser_accepted_input_passes_as_typed() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "ada@localhost".to_string(),
            website: String::new(),
            message: "hi".to_string(),
        };
        let message = form.validate().unwrap();
        assert_eq!(message.name, "   ");
        assert_eq!(message.email, "ada@localhost");
        assert_eq!(message.message, "hi");
    }

    #[test]
    fn test_website_is_optional() {
        assert!(!ContactField::Website.required());
        assert!(ContactField::ALL
            .iter()
            .filter(|f| **f != ContactField::Website)
            .all(ContactField::required));
        let mut form = filled();
        form.set(ContactField::Website, "");
        assert!(form.validate().is_ok());
    }
}
