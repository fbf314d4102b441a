//! [`Accommodation`] definitions.

use common::{unit, DateOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{host, Resource};

/// Lodging offered by a [`Host`] for a period of time.
///
/// [`Host`]: super::Host
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Accommodation {
    /// ID of this [`Accommodation`].
    #[serde(rename = "idAccomodation")]
    pub id: Id,

    /// [`Name`] of this [`Accommodation`].
    #[serde(rename = "accomodationName")]
    pub name: Name,

    /// [`Address`] of this [`Accommodation`].
    #[serde(rename = "accomodationAddress")]
    pub address: Address,

    /// Number of [`Rooms`] in this [`Accommodation`].
    #[serde(rename = "nrooms")]
    pub rooms: Rooms,

    /// Number of [`BedPlaces`] in this [`Accommodation`].
    #[serde(rename = "nbedPlaces")]
    pub bed_places: BedPlaces,

    /// [`Floor`] this [`Accommodation`] is located on.
    pub floor: Floor,

    /// [`Price`] of this [`Accommodation`].
    pub price: Price,

    /// [`StartDate`] of this [`Accommodation`] availability.
    #[serde(rename = "startDate")]
    pub start_date: StartDate,

    /// [`EndDate`] of this [`Accommodation`] availability.
    #[serde(rename = "endDate")]
    pub end_date: EndDate,

    /// ID of the [`Host`] owning this [`Accommodation`].
    ///
    /// Some API responses omit it.
    ///
    /// [`Host`]: super::Host
    #[serde(rename = "hostId", default)]
    pub host_id: Option<host::Id>,
}

impl Resource for Accommodation {
    type Id = Id;
    type Draft = Draft;

    const NAME: &'static str = "Accommodation";
    const PLURAL: &'static str = "accommodations";

    fn id(&self) -> Id {
        self.id
    }
}

/// ID of an [`Accommodation`].
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

/// Name of an [`Accommodation`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Maximum length of a [`Name`] in characters.
    pub const MAX_LEN: usize = 30;

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

/// Address of an [`Accommodation`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Address(String);

impl Address {
    /// Minimum length of an [`Address`] in characters.
    pub const MIN_LEN: usize = 6;

    /// Maximum length of an [`Address`] in characters.
    pub const MAX_LEN: usize = 100;

    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        let len = address.chars().count();
        address.trim() == address
            && (Self::MIN_LEN..=Self::MAX_LEN).contains(&len)
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// Number of rooms in an [`Accommodation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Rooms(u32);

impl Rooms {
    /// Creates new [`Rooms`] if there is at least one.
    #[must_use]
    pub fn new(count: u32) -> Option<Self> {
        (count >= 1).then_some(Self(count))
    }
}

/// Number of bed places in an [`Accommodation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct BedPlaces(u32);

impl BedPlaces {
    /// Creates new [`BedPlaces`] if there is at least one.
    #[must_use]
    pub fn new(count: u32) -> Option<Self> {
        (count >= 1).then_some(Self(count))
    }
}

/// Floor an [`Accommodation`] is located on.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Floor(u32);

/// Nightly price of an [`Accommodation`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Price(Money);

impl Price {
    /// Minimum [`Price`] amount.
    pub const MIN: Decimal = Decimal::TEN;

    /// Maximum [`Price`] amount.
    pub const MAX: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

    /// Creates a new [`Price`] if the given `amount` is within bounds.
    #[must_use]
    pub fn new(amount: impl Into<Money>) -> Option<Self> {
        let amount = amount.into();
        (Self::MIN..=Self::MAX)
            .contains(&amount.amount())
            .then_some(Self(amount))
    }

    /// Returns the [`Money`] amount of this [`Price`].
    #[must_use]
    pub const fn money(&self) -> Money {
        self.0
    }
}

/// First day an [`Accommodation`] is available.
pub type StartDate = DateOf<(Accommodation, unit::Start)>;

/// Last day an [`Accommodation`] is available.
pub type EndDate = DateOf<(Accommodation, unit::End)>;

/// [`Accommodation`] without an [`Id`] assigned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// [`Name`] of the [`Accommodation`].
    #[serde(rename = "accomodationName")]
    pub name: Name,

    /// [`Address`] of the [`Accommodation`].
    #[serde(rename = "accomodationAddress")]
    pub address: Address,

    /// Number of [`Rooms`] in the [`Accommodation`].
    #[serde(rename = "nrooms")]
    pub rooms: Rooms,

    /// Number of [`BedPlaces`] in the [`Accommodation`].
    #[serde(rename = "nbedPlaces")]
    pub bed_places: BedPlaces,

    /// [`Floor`] the [`Accommodation`] is located on.
    pub floor: Floor,

    /// [`Price`] of the [`Accommodation`].
    pub price: Price,

    /// [`StartDate`] of the [`Accommodation`] availability.
    #[serde(rename = "startDate")]
    pub start_date: StartDate,

    /// [`EndDate`] of the [`Accommodation`] availability.
    #[serde(rename = "endDate")]
    pub end_date: EndDate,

    /// ID of the [`Host`] owning the [`Accommodation`].
    ///
    /// [`Host`]: super::Host
    #[serde(rename = "hostId")]
    pub host_id: host::Id,
}

impl super::Draft for Draft {
    type Resource = Accommodation;
}
