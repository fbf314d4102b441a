//! Personal data shared by [`Host`]s and [`Tenant`]s.
//!
//! [`Host`]: super::Host
//! [`Tenant`]: super::Tenant

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// First name of a person.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Maximum length of a [`Name`] in characters.
    pub const MAX_LEN: usize = 20;

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name
            && !name.is_empty()
            && name.chars().count() <= Self::MAX_LEN
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Surname of a person.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Surname(String);

impl Surname {
    /// Maximum length of a [`Surname`] in characters.
    pub const MAX_LEN: usize = 20;

    /// Creates a new [`Surname`] if the given `surname` is valid.
    #[must_use]
    pub fn new(surname: impl Into<String>) -> Option<Self> {
        let surname = surname.into();
        Self::check(&surname).then_some(Self(surname))
    }

    /// Checks whether the given `surname` is a valid [`Surname`].
    fn check(surname: impl AsRef<str>) -> bool {
        let surname = surname.as_ref();
        surname.trim() == surname
            && !surname.is_empty()
            && surname.chars().count() <= Self::MAX_LEN
    }
}

impl FromStr for Surname {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Surname`")
    }
}

/// Email address of a person.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Email(String);

impl Email {
    /// Maximum length of an [`Email`] in characters.
    pub const MAX_LEN: usize = 255;

    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(
                "^([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                     \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                  |\\x22([^\\x0d\\x22\\x5c\\x80-\\xff]\
                  |\\x5c[\\x00-\\x7f])*\\x22)\
                  (\\x2e([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                           \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                        |\\x22([^\\x0d\\x22\\x5c\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x22))*\\x40\
                  ([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                     \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                  |\\x5b([^\\x0d\\x5b-\\x5d\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x5d)\
                  (\\x2e([^\\x00-\\x20\\x22\\x28\\x29\\x2c\\x2e\\x3a-\
                           \\x3c\\x3e\\x40\\x5b-\\x5d\\x7f-\\xff]+\
                        |\\x5b([^\\x0d\\x5b-\\x5d\\x80-\\xff]\
                        |\\x5c[\\x00-\\x7f])*\\x5d))*$",
            )
            .expect("valid regex")
        });

        let address = address.as_ref();
        address.chars().count() <= Self::MAX_LEN && REGEX.is_match(address)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Postal address of a person.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Address(String);

impl Address {
    /// Maximum length of an [`Address`] in characters.
    pub const MAX_LEN: usize = 50;

    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address
            && !address.is_empty()
            && address.chars().count() <= Self::MAX_LEN
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

#[cfg(test)]
mod spec {
    use super::{Address, Email, Name};

    #[test]
    fn name_bounds() {
        assert!(Name::new("Mario").is_some());
        assert!(Name::new("a".repeat(20)).is_some());
        assert!(Name::new("è".repeat(20)).is_some());

        assert!(Name::new("").is_none());
        assert!(Name::new(" Mario").is_none());
        assert!(Name::new("a".repeat(21)).is_none());
    }

    #[test]
    fn email_format() {
        assert!(Email::new("mario.rossi@example.com").is_some());
        assert!(Email::new("a@b").is_some());

        assert!(Email::new("").is_none());
        assert!(Email::new("mario.rossi").is_none());
        assert!(Email::new("mario@@example.com").is_none());
        assert!(Email::new(format!("{}@example.com", "a".repeat(250)))
            .is_none());
    }

    #[test]
    fn address_bounds() {
        assert!(Address::new("Via Roma 1").is_some());
        assert!(Address::new("x").is_some());
        assert!(Address::new("").is_none());
        assert!(Address::new("x".repeat(51)).is_none());
    }
}
