//! Input [`Form`]s of the dashboard and their validation.

pub mod accommodation;
pub mod dialog;
pub mod feedback;
pub mod host;
pub mod reservation;
pub mod tenant;

use std::{fmt, ops::RangeInclusive, str::FromStr};

use common::DateOf;
use derive_more::{Display, Error as StdError};

use crate::domain::{
    person::{Address, Email, Name, Surname},
    Resource,
};

pub use self::dialog::Dialog;

/// Raw user input creating or editing a [`Resource`].
pub trait Form: Clone + Default + fmt::Debug {
    /// [`Resource`] this [`Form`] is filled for.
    type Resource: Resource;

    /// Validates this [`Form`], producing a [`Resource::Draft`] ready to be
    /// submitted.
    ///
    /// # Errors
    ///
    /// With all the failed [`Errors`] at once, if any field is invalid.
    fn validate(&self) -> Result<<Self::Resource as Resource>::Draft, Errors>;

    /// Pre-fills a new [`Form`] with the values of an existing
    /// [`Resource`].
    fn prefill(resource: &Self::Resource) -> Self;
}

/// Validation failure of a single [`Form`] field.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[display("{field}: {message}")]
pub struct FieldError {
    /// Name of the failed field.
    pub field: &'static str,

    /// Human-readable description of the failure.
    pub message: &'static str,
}

/// All the [`FieldError`]s of a [`Form`].
#[derive(Clone, Debug, Default, Eq, PartialEq, StdError)]
pub struct Errors(#[error(not(source))] Vec<FieldError>);

impl Errors {
    /// Indicates whether there are no [`FieldError`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message of the first [`FieldError`] of the provided
    /// `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// Appends the provided [`FieldError`].
    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Iterates over all the [`FieldError`]s.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, e) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// Collector of [`Errors`] while validating a [`Form`].
#[derive(Debug, Default)]
pub(crate) struct Validator(Errors);

impl Validator {
    /// Records a failure of the provided `field`.
    pub(crate) fn fail(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    /// Validates a trimmed text input of `len` characters.
    pub(crate) fn text(
        &mut self,
        field: &'static str,
        raw: &str,
        len: RangeInclusive<usize>,
        (too_short, too_long): (&'static str, &'static str),
    ) -> Option<String> {
        let text = raw.trim();
        let count = text.chars().count();
        if count < *len.start() {
            self.fail(field, too_short);
            None
        } else if count > *len.end() {
            self.fail(field, too_long);
            None
        } else {
            Some(text.to_owned())
        }
    }

    /// Parses a numeric input, reporting the `invalid` message on failure.
    pub(crate) fn number<N: FromStr>(
        &mut self,
        field: &'static str,
        raw: &str,
        invalid: &'static str,
    ) -> Option<N> {
        let parsed = raw.trim().parse().ok();
        if parsed.is_none() {
            self.fail(field, invalid);
        }
        parsed
    }

    /// Parses a date input, reporting the `required` message if it's blank.
    pub(crate) fn date<Of: ?Sized>(
        &mut self,
        field: &'static str,
        raw: &str,
        (required, invalid): (&'static str, &'static str),
    ) -> Option<DateOf<Of>> {
        if raw.trim().is_empty() {
            self.fail(field, required);
            return None;
        }
        let date = DateOf::parse(raw).ok();
        if date.is_none() {
            self.fail(field, invalid);
        }
        date
    }

    /// Checks the provided `condition`, recording a failure of the provided
    /// `field` if it doesn't hold.
    pub(crate) fn ensure(
        &mut self,
        condition: bool,
        field: &'static str,
        message: &'static str,
    ) {
        if !condition {
            self.fail(field, message);
        }
    }

    /// Finishes the validation, building the value out of the validated
    /// fields if none of them failed.
    pub(crate) fn finish<T>(
        self,
        build: impl FnOnce() -> Option<T>,
    ) -> Result<T, Errors> {
        if !self.0.is_empty() {
            return Err(self.0);
        }
        build().ok_or(self.0)
    }
}

/// Validates the `[name, surname, email, address]` inputs of a person.
pub(crate) fn person(
    v: &mut Validator,
    [name, surname, email, address]: [&str; 4],
) -> Option<(Name, Surname, Email, Address)> {
    let name = v
        .text(
            "name",
            name,
            1..=Name::MAX_LEN,
            ("Name is required", "Name is too long"),
        )
        .and_then(Name::new);
    let surname = v
        .text(
            "surname",
            surname,
            1..=Surname::MAX_LEN,
            ("Surname is required", "Surname is too long"),
        )
        .and_then(Surname::new);
    let email = v
        .text(
            "email",
            email,
            0..=Email::MAX_LEN,
            ("Invalid email format", "Email is too long"),
        )
        .and_then(|email| {
            let email = Email::new(email);
            v.ensure(email.is_some(), "email", "Invalid email format");
            email
        });
    let address = v
        .text(
            "address",
            address,
            1..=Address::MAX_LEN,
            ("Address is required", "Address is too long"),
        )
        .and_then(Address::new);

    Some((name?, surname?, email?, address?))
}
