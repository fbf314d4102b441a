//! [`Host`] [`Form`].

use crate::domain::{host::Draft, Host};

use super::{person, Errors, Form, Validator};

/// Raw input of a [`Host`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HostForm {
    /// Name input.
    pub name: String,

    /// Surname input.
    pub surname: String,

    /// Email input.
    pub email: String,

    /// Address input.
    pub address: String,

    /// Superhost checkbox, unchecked by default.
    pub superhost: bool,
}

impl Form for HostForm {
    type Resource = Host;

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
                superhost: self.superhost,
            })
        })
    }

    fn prefill(host: &Host) -> Self {
        Self {
            name: host.name.to_string(),
            surname: host.surname.to_string(),
            email: host.email.to_string(),
            address: host.address.to_string(),
            superhost: host.superhost,
        }
    }
}
