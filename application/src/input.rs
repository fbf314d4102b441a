//! Filling [`Form`]s out of `FIELD=VALUE` arguments.

use service::form::{
    accommodation::AccommodationForm, feedback::FeedbackForm, host::HostForm,
    reservation::ReservationForm, tenant::TenantForm, Form,
};
use tracerr::Traced;

crate::define_error! {
    enum InputError {
        #[code = "UNKNOWN_FIELD"]
        #[message = "Unknown form field"]
        UnknownField,

        #[code = "INVALID_FLAG"]
        #[message = "Flag must be either `true` or `false`"]
        InvalidFlag,
    }
}

/// [`Form`] which can be filled field by field.
pub trait Fill: Form {
    /// Sets the field of the provided `name` to the provided `value`.
    ///
    /// # Errors
    ///
    /// If there is no such field, or the `value` doesn't fit it.
    fn set(&mut self, name: &str, value: String)
        -> Result<(), Traced<InputError>>;

    /// Sets all the provided `fields` one by one.
    ///
    /// # Errors
    ///
    /// On the first field failing to [`Fill::set()`].
    fn fill(
        &mut self,
        fields: Vec<(String, String)>,
    ) -> Result<(), Traced<InputError>> {
        for (name, value) in fields {
            self.set(&name.replace('-', "_"), value)
                .map_err(tracerr::wrap!())?;
        }
        Ok(())
    }
}

/// Returns the [`InputError::UnknownField`] error.
fn unknown() -> Result<(), Traced<InputError>> {
    Err(tracerr::new!(InputError::UnknownField))
}

impl Fill for AccommodationForm {
    fn set(
        &mut self,
        name: &str,
        value: String,
    ) -> Result<(), Traced<InputError>> {
        let field = match name {
            "name" => &mut self.name,
            "address" => &mut self.address,
            "rooms" => &mut self.rooms,
            "bed_places" | "beds" => &mut self.bed_places,
            "floor" => &mut self.floor,
            "price" => &mut self.price,
            "start_date" | "from" => &mut self.start_date,
            "end_date" | "to" => &mut self.end_date,
            "host_id" | "host" => &mut self.host_id,
            _ => return unknown(),
        };
        *field = value;
        Ok(())
    }
}

impl Fill for HostForm {
    fn set(
        &mut self,
        name: &str,
        value: String,
    ) -> Result<(), Traced<InputError>> {
        let field = match name {
            "name" => &mut self.name,
            "surname" => &mut self.surname,
            "email" => &mut self.email,
            "address" => &mut self.address,
            "superhost" => {
                self.superhost = match value.trim() {
                    "true" | "yes" => true,
                    "false" | "no" => false,
                    _ => return Err(tracerr::new!(InputError::InvalidFlag)),
                };
                return Ok(());
            }
            _ => return unknown(),
        };
        *field = value;
        Ok(())
    }
}

impl Fill for TenantForm {
    fn set(
        &mut self,
        name: &str,
        value: String,
    ) -> Result<(), Traced<InputError>> {
        let field = match name {
            "name" => &mut self.name,
            "surname" => &mut self.surname,
            "email" => &mut self.email,
            "address" => &mut self.address,
            _ => return unknown(),
        };
        *field = value;
        Ok(())
    }
}

impl Fill for ReservationForm {
    fn set(
        &mut self,
        name: &str,
        value: String,
    ) -> Result<(), Traced<InputError>> {
        let field = match name {
            "start_date" | "start" => &mut self.start_date,
            "end_date" | "end" => &mut self.end_date,
            "tenant_id" | "tenant" => &mut self.tenant_id,
            "accommodation_id" | "accommodation" => &mut self.accommodation_id,
            _ => return unknown(),
        };
        *field = value;
        Ok(())
    }
}

impl Fill for FeedbackForm {
    fn set(
        &mut self,
        name: &str,
        value: String,
    ) -> Result<(), Traced<InputError>> {
        let field = match name {
            "title" => &mut self.title,
            "text" => &mut self.text,
            "points" | "rating" => &mut self.points,
            "reservation_id" | "reservation" => &mut self.reservation_id,
            _ => return unknown(),
        };
        *field = value;
        Ok(())
    }
}
