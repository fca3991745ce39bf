use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Contact form inputs.
pub enum FormField {
    /// Submitter's name (required).
    Name,
    /// Submitter's email (optional).
    Email,
    /// What the submitter wants built (required).
    Objectives,
}

impl FormField {
    /// Input `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Objectives => "objectives",
        }
    }

    /// Field from an input `name` attribute.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "objectives" => Some(Self::Objectives),
            _ => None,
        }
    }

    /// Input placeholder text.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Identity",
            Self::Email => "Email Address",
            Self::Objectives => "Brief Objectives",
        }
    }

    /// `true` for fields that must be non-empty on submit.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Email)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
/// Reasons a contact submission cannot produce a deep link.
pub enum ContactError {
    /// A required field is empty.
    #[error("missing required field '{0}'")]
    MissingRequiredField(FormField),

    /// The profile has no phone digits to message.
    #[error("profile has no messaging phone number")]
    MissingContactTarget,

    /// The configured messaging base cannot be joined with the phone digits.
    #[error("invalid messaging base URL: {0}")]
    InvalidBase(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Contact form values, edited one field at a time.
pub struct ContactForm {
    /// Submitter's name.
    pub name: String,
    /// Submitter's email.
    pub email: String,
    /// Project objectives.
    pub objectives: String,
}

impl ContactForm {
    /// Replace one field's value.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Objectives => self.objectives = value,
        }
    }

    /// Current value of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Objectives => &self.objectives,
        }
    }

    /// Check required fields; the first empty one is reported.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [FormField::Name, FormField::Objectives] {
            if self.get(field).is_empty() {
                return Err(ContactError::MissingRequiredField(field));
            }
        }
        Ok(())
    }
}
