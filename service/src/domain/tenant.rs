//! [`Tenant`] definitions.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

pub use super::person::{Address, Email, Name, Surname};
use super::Resource;

/// Person booking [`Accommodation`]s.
///
/// [`Accommodation`]: super::Accommodation
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tenant {
    /// ID of this [`Tenant`].
    #[serde(rename = "idTenant")]
    pub id: Id,

    /// [`Name`] of this [`Tenant`].
    #[serde(rename = "tenantName")]
    pub name: Name,

    /// [`Surname`] of this [`Tenant`].
    pub surname: Surname,

    /// [`Email`] of this [`Tenant`].
    pub email: Email,

    /// [`Address`] of this [`Tenant`].
    #[serde(rename = "tenantAddress")]
    pub address: Address,
}

impl Tenant {
    /// Returns the full name of this [`Tenant`].
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl Resource for Tenant {
    type Id = Id;
    type Draft = Draft;

    const NAME: &'static str = "Tenant";
    const PLURAL: &'static str = "tenants";

    fn id(&self) -> Id {
        self.id
    }
}

/// ID of a [`Tenant`].
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

/// [`Tenant`] without an [`Id`] assigned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// [`Name`] of the [`Tenant`].
    #[serde(rename = "tenantName")]
    pub name: Name,

    /// [`Surname`] of the [`Tenant`].
    pub surname: Surname,

    /// [`Email`] of the [`Tenant`].
    pub email: Email,

    /// [`Address`] of the [`Tenant`].
    #[serde(rename = "tenantAddress")]
    pub address: Address,
}

impl super::Draft for Draft {
    type Resource = Tenant;
}
