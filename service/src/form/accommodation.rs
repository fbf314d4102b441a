//! [`Accommodation`] [`Form`].

use rust_decimal::Decimal;

use crate::domain::{
    accommodation::{
        Address, BedPlaces, Draft, EndDate, Floor, Name, Price, Rooms,
        StartDate,
    },
    host, Accommodation,
};

use super::{Errors, Form, Validator};

/// Raw input of an [`Accommodation`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccommodationForm {
    /// Name input.
    pub name: String,

    /// Address input.
    pub address: String,

    /// Number of rooms input.
    pub rooms: String,

    /// Number of bed places input.
    pub bed_places: String,

    /// Floor input.
    pub floor: String,

    /// Price input.
    pub price: String,

    /// Availability start date input.
    pub start_date: String,

    /// Availability end date input.
    pub end_date: String,

    /// Owning host ID input.
    pub host_id: String,
}

impl Form for AccommodationForm {
    type Resource = Accommodation;

    fn validate(&self) -> Result<Draft, Errors> {
        let mut v = Validator::default();

        let name = v
            .text(
                "name",
                &self.name,
                1..=Name::MAX_LEN,
                ("Name is required", "Name is too long"),
            )
            .and_then(Name::new);
        let address = v
            .text(
                "address",
                &self.address,
                Address::MIN_LEN..=Address::MAX_LEN,
                ("Address is required", "Address is too long"),
            )
            .and_then(Address::new);

        let rooms = count(
            &mut v,
            "rooms",
            &self.rooms,
            "There must be at least one room",
        )
        .and_then(Rooms::new);
        let bed_places = count(
            &mut v,
            "bed_places",
            &self.bed_places,
            "There must be at least one bed place",
        )
        .and_then(BedPlaces::new);

        let floor = v
            .number::<i64>("floor", &self.floor, "Floor must be a number")
            .and_then(|f| {
                let floor = u32::try_from(f).ok().map(Floor::from);
                v.ensure(floor.is_some(), "floor", "Floor must be 0 or higher");
                floor
            });

        let price = v
            .number::<Decimal>(
                "price",
                &self.price,
                "This field must be a number",
            )
            .and_then(|amount| {
                v.ensure(
                    amount >= Price::MIN,
                    "price",
                    "Price must be at least 10",
                );
                v.ensure(
                    amount <= Price::MAX,
                    "price",
                    "Price must be at most 50000",
                );
                Price::new(amount)
            });

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

        let host_id = v
            .number::<u64>("host_id", &self.host_id, "Host ID is required")
            .and_then(|id| {
                let id = host::Id::new(id);
                v.ensure(id.is_some(), "host_id", "Host ID must be at least 1");
                id
            });

        v.finish(|| {
            Some(Draft {
                name: name?,
                address: address?,
                rooms: rooms?,
                bed_places: bed_places?,
                floor: floor?,
                price: price?,
                start_date: start_date?,
                end_date: end_date?,
                host_id: host_id?,
            })
        })
    }

    fn prefill(acc: &Accommodation) -> Self {
        Self {
            name: acc.name.to_string(),
            address: acc.address.to_string(),
            rooms: acc.rooms.to_string(),
            bed_places: acc.bed_places.to_string(),
            floor: acc.floor.to_string(),
            price: acc.price.money().amount().normalize().to_string(),
            start_date: acc.start_date.to_string(),
            end_date: acc.end_date.to_string(),
            host_id: acc.host_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

/// Validates a count input, which must be a positive number.
fn count(
    v: &mut Validator,
    field: &'static str,
    raw: &str,
    message: &'static str,
) -> Option<u32> {
    let n = v.number::<u32>(field, raw, message)?;
    v.ensure(n >= 1, field, message);
    (n >= 1).then_some(n)
}

#[cfg(test)]
mod spec {
    use crate::{domain::Resource as _, form::Form as _};

    use super::AccommodationForm;

    fn valid() -> AccommodationForm {
        AccommodationForm {
            name: "Sea View".into(),
            address: "Via Roma 1, Napoli".into(),
            rooms: "2".into(),
            bed_places: "4".into(),
            floor: "0".into(),
            price: "120.50".into(),
            start_date: "2025-01-10".into(),
            end_date: "2025-02-10".into(),
            host_id: "7".into(),
        }
    }

    #[test]
    fn accepts_valid_input() {
        let draft = valid().validate().unwrap();

        assert_eq!(draft.name.as_ref(), "Sea View");
        assert_eq!(u32::from(draft.rooms), 2);
        assert_eq!(draft.price.to_string(), "€120.5");
        assert_eq!(draft.host_id.to_string(), "7");
    }

    #[test]
    fn trims_text_inputs() {
        let form = AccommodationForm {
            name: "  Sea View ".into(),
            ..valid()
        };
        assert_eq!(form.validate().unwrap().name.as_ref(), "Sea View");
    }

    #[test]
    fn reports_all_failures_at_once() {
        let errors = AccommodationForm::default().validate().unwrap_err();

        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("address"), Some("Address is required"));
        assert_eq!(
            errors.get("rooms"),
            Some("There must be at least one room"),
        );
        assert_eq!(
            errors.get("bed_places"),
            Some("There must be at least one bed place"),
        );
        assert_eq!(errors.get("floor"), Some("Floor must be a number"));
        assert_eq!(errors.get("price"), Some("This field must be a number"));
        assert_eq!(errors.get("start_date"), Some("Start date is required"));
        assert_eq!(errors.get("end_date"), Some("End date is required"));
        assert_eq!(errors.get("host_id"), Some("Host ID is required"));
    }

    #[test]
    fn checks_bounds() {
        let form = AccommodationForm {
            name: "x".repeat(31),
            address: "Via 1".into(),
            rooms: "0".into(),
            floor: "-1".into(),
            price: "9.99".into(),
            host_id: "0".into(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();

        assert_eq!(errors.get("name"), Some("Name is too long"));
        assert_eq!(errors.get("address"), Some("Address is required"));
        assert_eq!(
            errors.get("rooms"),
            Some("There must be at least one room"),
        );
        assert_eq!(errors.get("floor"), Some("Floor must be 0 or higher"));
        assert_eq!(errors.get("price"), Some("Price must be at least 10"));
        assert_eq!(errors.get("host_id"), Some("Host ID must be at least 1"));
        assert_eq!(errors.get("bed_places"), None);

        let form = AccommodationForm {
            price: "50000.01".into(),
            ..valid()
        };
        assert_eq!(
            form.validate().unwrap_err().get("price"),
            Some("Price must be at most 50000"),
        );
    }

    #[test]
    fn requires_end_after_start() {
        for end in ["2025-01-10", "2025-01-09"] {
            let form = AccommodationForm {
                end_date: end.into(),
                ..valid()
            };
            let errors = form.validate().unwrap_err();

            assert_eq!(
                errors.get("end_date"),
                Some("End date must be after start date"),
            );
            assert_eq!(errors.iter().count(), 1);
        }
    }

    #[test]
    fn prefills_from_existing() {
        let draft = valid().validate().unwrap();
        let acc = crate::domain::Accommodation {
            id: 3_u64.into(),
            name: draft.name.clone(),
            address: draft.address.clone(),
            rooms: draft.rooms,
            bed_places: draft.bed_places,
            floor: draft.floor,
            price: draft.price,
            start_date: draft.start_date,
            end_date: draft.end_date,
            host_id: Some(draft.host_id),
        };

        let form = AccommodationForm::prefill(&acc);
        assert_eq!(form.price, "120.5");
        assert_eq!(form.validate().unwrap(), draft);
        assert_eq!(acc.id().to_string(), "3");
    }
}
