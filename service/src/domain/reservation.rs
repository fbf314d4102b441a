//! [`Reservation`] definitions.

use common::{unit, DateOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::{accommodation, tenant, Resource};

/// Booking of an [`Accommodation`] by a [`Tenant`].
///
/// [`Accommodation`]: super::Accommodation
/// [`Tenant`]: super::Tenant
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Reservation {
    /// ID of this [`Reservation`].
    #[serde(rename = "idReservation")]
    pub id: Id,

    /// [`StartDate`] of this [`Reservation`].
    #[serde(rename = "reservationStartDate")]
    pub start_date: StartDate,

    /// [`EndDate`] of this [`Reservation`].
    #[serde(rename = "reservationEndDate")]
    pub end_date: EndDate,

    /// ID of the [`Tenant`] this [`Reservation`] is made by.
    ///
    /// [`Tenant`]: super::Tenant
    #[serde(rename = "idTenant")]
    pub tenant_id: tenant::Id,

    /// ID of the [`Accommodation`] this [`Reservation`] is made for.
    ///
    /// [`Accommodation`]: super::Accommodation
    #[serde(rename = "idAccomodation")]
    pub accommodation_id: accommodation::Id,
}

impl Resource for Reservation {
    type Id = Id;
    type Draft = Draft;

    const NAME: &'static str = "Reservation";
    const PLURAL: &'static str = "reservations";

    fn id(&self) -> Id {
        self.id
    }
}

/// ID of a [`Reservation`].
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

/// First day of a [`Reservation`].
pub type StartDate = DateOf<(Reservation, unit::Start)>;

/// Last day of a [`Reservation`].
pub type EndDate = DateOf<(Reservation, unit::End)>;

/// [`Reservation`] without an [`Id`] assigned.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// [`StartDate`] of the [`Reservation`].
    #[serde(rename = "reservationStartDate")]
    pub start_date: StartDate,

    /// [`EndDate`] of the [`Reservation`].
    #[serde(rename = "reservationEndDate")]
    pub end_date: EndDate,

    /// ID of the [`Tenant`] making the [`Reservation`].
    ///
    /// [`Tenant`]: super::Tenant
    #[serde(rename = "idTenant")]
    pub tenant_id: tenant::Id,

    /// ID of the reserved [`Accommodation`].
    ///
    /// [`Accommodation`]: super::Accommodation
    #[serde(rename = "idAccomodation")]
    pub accommodation_id: accommodation::Id,
}

impl super::Draft for Draft {
    type Resource = Reservation;
}
