//! [`Reservation`] [`Form`].

use crate::domain::{
    accommodation,
    reservation::{Draft, EndDate, StartDate},
    tenant, Reservation,
};

use super::{Errors, Form, Validator};

/// Raw input of a [`Reservation`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReservationForm {
    /// Start date input.
    pub start_date: String,

    /// End date input.
    pub end_date: String,

    /// Tenant ID input, usually filled by a picker.
    pub tenant_id: String,

    /// Accommodation ID input, usually filled by a picker.
    pub accommodation_id: String,
}

impl Form for ReservationForm {
    type Resource = Reservation;

    fn validate(&self) -> Result<Draft, Errors> {
        let mut v = Validator::default();

        let start_date: Option<StartDate> = v.date(
            "start_date",
            &self.start_date,
            ("Start date is required", "Start date is invalid"),
        );
        let end_date: Option<EndDate> = v.date(
            "end_date",
            &self.end_date,
            ("End date is required", "End date is invalid"),
        );
        if let (Some(start), Some(end)) = (start_date, end_date) {
            v.ensure(
                end > start,
                "end_date",
                "End date must be after start date",
            );
        }

        let tenant_id = v
            .number::<u64>(
                "tenant_id",
                &self.tenant_id,
                "Please select a Tenant",
            )
            .and_then(|id| {
                let id = tenant::Id::new(id);
                v.ensure(id.is_some(), "tenant_id", "Tenant is required");
                id
            });
        let accommodation_id = v
            .number::<u64>(
                "accommodation_id",
                &self.accommodation_id,
                "Please select an Accommodation",
            )
            .and_then(|id| {
                let id = accommodation::Id::new(id);
                v.ensure(
                    id.is_some(),
                    "accommodation_id",
                    "Accommodation is required",
                );
                id
            });

        v.finish(|| {
            Some(Draft {
                start_date: start_date?,
                end_date: end_date?,
                tenant_id: tenant_id?,
                accommodation_id: accommodation_id?,
            })
        })
    }

    fn prefill(reservation: &Reservation) -> Self {
        Self {
            start_date: reservation.start_date.to_string(),
            end_date: reservation.end_date.to_string(),
            tenant_id: reservation.tenant_id.to_string(),
            accommodation_id: reservation.accommodation_id.to_string(),
        }
    }
}
