//! Sign-in and sign-up form validation
//!
//! Checks field shapes only. Whether the credentials are correct is decided
//! by the identity provider, not here.

use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{HorizonError, HorizonResult};

/// Which form is being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    SignIn,
    SignUp,
}

impl FormKind {
    /// Map the route name used by the auth pages ("sign-in" / "sign-up")
    ///
    /// Anything other than "sign-in" is treated as sign-up, so unknown
    /// routes get the stricter rules.
    pub fn from_route(route: &str) -> Self {
        if route == "sign-in" {
            Self::SignIn
        } else {
            Self::SignUp
        }
    }
}

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Values submitted from the auth form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub date_of_birth: Option<String>,
    pub ssn: Option<String>,
}

impl AuthForm {
    /// Every failing field, in form order
    pub fn validate(&self, kind: FormKind) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !is_email(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "Please enter a valid email address",
            });
        }
        if self.password.chars().count() < 8 {
            errors.push(FieldError {
                field: "password",
                message: "Password must be at least 8 characters long",
            });
        }

        if kind == FormKind::SignIn {
            return errors;
        }

        let rules: [(&'static str, &Option<String>, fn(&str) -> Option<&'static str>); 8] = [
            ("firstName", &self.first_name, |v| {
                (len(v) < 2).then_some("First name must be at least 2 characters")
            }),
            ("lastName", &self.last_name, |v| {
                (len(v) < 2).then_some("Last name must be at least 2 characters")
            }),
            ("address1", &self.address1, |v| {
                if len(v) < 5 {
                    Some("Address must be at least 5 characters")
                } else if len(v) > 50 {
                    Some("Address can not be more than 50 characters")
                } else {
                    None
                }
            }),
            ("city", &self.city, |v| {
                if len(v) < 5 {
                    Some("City must be at least 5 characters")
                } else if len(v) > 50 {
                    Some("City can not be more than 50 characters")
                } else {
                    None
                }
            }),
            ("state", &self.state, |v| {
                (len(v) != 2).then_some("State must be 2 characters")
            }),
            ("postalCode", &self.postal_code, |v| {
                (!POSTAL_CODE.is_match(v))
                    .then_some("Please enter a valid postal code (e.g., 12345 or 12345-6789)")
            }),
            ("dateOfBirth", &self.date_of_birth, |v| {
                (!DATE_OF_BIRTH.is_match(v)).then_some("Please enter date in MM/DD/YYYY format")
            }),
            ("ssn", &self.ssn, |v| {
                (!SSN.is_match(v)).then_some("SSN must be exactly 4 digits")
            }),
        ];

        for (field, value, check) in rules {
            let message = match value {
                Some(v) => check(v),
                None => Some("Required"),
            };
            if let Some(message) = message {
                errors.push(FieldError { field, message });
            }
        }

        errors
    }

    /// Validate and fold all failures into one error
    pub fn ensure_valid(&self, kind: FormKind) -> HorizonResult<()> {
        let errors = self.validate(kind);
        if errors.is_empty() {
            return Ok(());
        }
        let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(HorizonError::Validation(joined.join("; ")))
    }
}

fn len(value: &str) -> usize {
    value.chars().count()
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_%+-]+(\.[A-Za-z0-9_%+-]+)*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("postal code pattern compiles"));
static DATE_OF_BIRTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("date pattern compiles"));
static SSN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("ssn pattern compiles"));

fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}
