//! [`Tenant`] [`Form`].

use crate::domain::{tenant::Draft, Tenant};

use super::{person, Errors, Form, Validator};

/// Raw input of a [`Tenant`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TenantForm {
    /// Name input.
    pub name: String,

    /// Surname input.
    pub surname: String,

    /// Email input.
    pub email: String,

    /// Address input.
    pub address: String,
}

impl Form for TenantForm {
    type Resource = Tenant;

    fn validate(&self) -> Result<Draft, Errors> {
        let mut v = Validator::default();
        let person = person(
            &mut v,
            [&self.name, &self.surname, &self.email, &self.address],
        );
        v.finish(|| {
            let (name, surname, email, address) = person?;
            Some(Draft {
                name,
                surname,
                email,
                address,
            })
        })
    }

    fn prefill(tenant: &Tenant) -> Self {
        Self {
            name: tenant.name.to_string(),
            surname: tenant.surname.to_string(),
            email: tenant.email.to_string(),
            address: tenant.address.to_string(),
        }
    }
}
