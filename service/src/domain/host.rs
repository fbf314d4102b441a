//! [`Host`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

pub use super::person::{Address, Email, Name, Surname};
use super::Resource;

/// Person offering [`Accommodation`]s.
///
/// [`Accommodation`]: super::Accommodation
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Host {
    /// ID of this [`Host`].
    #[serde(rename = "idHost")]
    pub id: Id,

    /// [`Name`] of this [`Host`].
    #[serde(rename = "hostName")]
    pub name: Name,

    /// [`Surname`] of this [`Host`].
    pub surname: Surname,

    /// [`Email`] of this [`Host`].
    pub email: Email,

    /// [`Address`] of this [`Host`].
    #[serde(rename = "hostAddress")]
    pub address: Address,

    /// Indicator whether this [`Host`] is a superhost.
    #[serde(alias = "isSuperhost", default)]
    pub superhost: bool,
}

impl Host {
    /// Returns the full name of this [`Host`].
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl Resource for Host {
    type Id = Id;
    type Draft = Draft;

    const NAME: &'static str = "Host";
    const PLURAL: &'static str = "hosts";

    fn id(&self) -> Id {
        self.id
    }
}

/// ID of a [`Host`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u64);

impl Id {
    /// Creates a new [`Id`] if the given `id` is a positive number.
    #[must_use]
    pub fn new(id: u64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }
}

/// [`Host`] without an [`Id`] assigned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// [`Name`] of the [`Host`].
    #[serde(rename = "hostName")]
    pub name: Name,

    /// [`Surname`] of the [`Host`].
    pub surname: Surname,

    /// [`Email`] of the [`Host`].
    pub email: Email,

    /// [`Address`] of the [`Host`].
    #[serde(rename = "hostAddress")]
    pub address: Address,

    /// Indicator whether the [`Host`] is a superhost.
    pub superhost: bool,
}

impl super::Draft for Draft {
    type Resource = Host;
}
