use common::Date;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    domain::{
        accommodation::{self, Address, BedPlaces, Floor, Name, Price, Rooms},
        host::{self, Email},
        reservation, Accommodation, Host, Reservation,
    },
    form::{
        accommodation::AccommodationForm, reservation::ReservationForm,
        Dialog, Form,
    },
    infra::backend::fake::Fake,
    notify::{self, Channel, Level, Notification},
    Service,
};

use super::{Command, Create, Edit, Load, Remove};

fn accommodation(id: u64, name: &str) -> Accommodation {
    Accommodation {
        id: id.into(),
        name: Name::new(name).unwrap(),
        address: Address::new("Via Roma 1, Napoli").unwrap(),
        rooms: Rooms::new(2).unwrap(),
        bed_places: BedPlaces::new(4).unwrap(),
        floor: Floor::from(1_u32),
        price: Price::new(100_u32).unwrap(),
        start_date: Date::parse("2025-01-10").unwrap().coerce(),
        end_date: Date::parse("2025-02-10").unwrap().coerce(),
        host_id: Some(1_u64.into()),
    }
}

fn host(id: u64, name: &str) -> Host {
    Host {
        id: id.into(),
        name: host::Name::new(name).unwrap(),
        surname: host::Surname::new("Rossi").unwrap(),
        email: Email::new("host@example.com").unwrap(),
        address: host::Address::new("Via Po 3").unwrap(),
        superhost: false,
    }
}

fn names(items: &[Accommodation]) -> Vec<String> {
    items.iter().map(|a| a.name.to_string()).collect()
}

fn acc_form(name: &str) -> AccommodationForm {
    AccommodationForm {
        name: name.into(),
        address: "Corso Italia 12, Milano".into(),
        rooms: "1".into(),
        bed_places: "2".into(),
        floor: "3".into(),
        price: "80".into(),
        start_date: "2025-03-01".into(),
        end_date: "2025-03-31".into(),
        host_id: "1".into(),
    }
}

fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut all = Vec::new();
    while let Ok(n) = rx.try_recv() {
        all.push(n);
    }
    all
}

async fn accommodations(
    records: Vec<Accommodation>,
) -> (
    Service<Fake<Accommodation>, Channel>,
    UnboundedReceiver<Notification>,
) {
    let next = u64::try_from(records.len()).unwrap() + 1;
    let (notifier, rx) = Channel::new();
    let service = Service::new(Fake::new(records, next), notifier);
    assert_eq!(
        service.execute(Load::<Accommodation>::new()).await.unwrap(),
        service.backend().records().len(),
    );
    (service, rx)
}

mod load {
    use super::*;

    #[tokio::test]
    async fn replaces_store_contents() {
        let (service, _rx) =
            accommodations(vec![accommodation(1, "A"), accommodation(2, "B")])
                .await;

        assert_eq!(names(&service.store::<Accommodation>().list().await), [
            "A", "B"
        ]);
    }

    #[tokio::test]
    async fn reports_failure() {
        let (service, mut rx) =
            accommodations(vec![accommodation(1, "A")]).await;
        service.backend().fail(true);

        let err = service
            .execute(Load::<Accommodation>::new())
            .await
            .unwrap_err();

        assert_eq!(err.as_ref().to_string(), "Boom");
        let notifications = drain(&mut rx);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, Level::Error);
        assert_eq!(notifications[0].title, "Failed to load accommodations");
        assert_eq!(notifications[0].description.as_deref(), Some("Boom"));

        assert_eq!(service.store::<Accommodation>().len().await, 1);
    }
}

mod create {
    use super::*;

    #[tokio::test]
    async fn prepends_created_record() {
        let (service, mut rx) =
            accommodations(vec![accommodation(1, "A")]).await;

        let created = service.execute(Create(acc_form("New"))).await.unwrap();

        assert_eq!(created.id, accommodation::Id::from(2_u64));
        assert_eq!(names(&service.store::<Accommodation>().list().await), [
            "New", "A"
        ]);
        let notifications = drain(&mut rx);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, Level::Success);
    }

    #[tokio::test]
    async fn does_not_duplicate_echoed_record() {
        let (service, _rx) = accommodations(vec![]).await;
        service
            .store::<Accommodation>()
            .set(vec![accommodation(1, "Stale")])
            .await;

        let created = service.execute(Create(acc_form("Fresh"))).await.unwrap();

        assert_eq!(created.id, accommodation::Id::from(1_u64));
        assert_eq!(names(&service.store::<Accommodation>().list().await), [
            "Fresh"
        ]);
    }

    #[tokio::test]
    async fn rejects_invalid_form_before_backend() {
        let (service, mut rx) = accommodations(vec![]).await;
        let calls = service.backend().calls();

        let err = service
            .execute(Create(AccommodationForm::default()))
            .await
            .unwrap_err();

        let errors = err.as_ref().invalid().unwrap();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(service.backend().calls(), calls);
        assert!(drain(&mut rx).is_empty());
        assert!(service.store::<Accommodation>().is_empty().await);
    }

    #[tokio::test]
    async fn rejects_reservation_ending_before_start() {
        let (notifier, _rx) = Channel::new();
        let service =
            Service::new(Fake::<Reservation>::new(vec![], 1), notifier);

        let form = ReservationForm {
            start_date: "2025-01-10".into(),
            end_date: "2025-01-05".into(),
            tenant_id: "1".into(),
            accommodation_id: "1".into(),
        };
        let err = service.execute(Create(form)).await.unwrap_err();

        assert_eq!(
            err.as_ref().invalid().unwrap().get("end_date"),
            Some("End date must be after start date"),
        );
        assert_eq!(service.backend().calls(), 0);
    }

    #[tokio::test]
    async fn reloads_reservations_after_creation() {
        let existing = Reservation {
            id: 1_u64.into(),
            start_date: Date::parse("2025-01-01").unwrap().coerce(),
            end_date: Date::parse("2025-01-03").unwrap().coerce(),
            tenant_id: 1_u64.into(),
            accommodation_id: 1_u64.into(),
        };
        let service = Service::new(
            Fake::<Reservation>::new(vec![existing], 2),
            notify::Log,
        );

        let form = ReservationForm {
            start_date: "2025-02-10".into(),
            end_date: "2025-02-12".into(),
            tenant_id: "2".into(),
            accommodation_id: "1".into(),
        };
        let created = service.execute(Create(form)).await.unwrap();

        let ids = service
            .store::<Reservation>()
            .list()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, [reservation::Id::from(1_u64), created.id]);
    }

    #[tokio::test]
    async fn reports_backend_failure() {
        let (service, mut rx) = accommodations(vec![]).await;
        service.backend().fail(true);

        let err = service.execute(Create(acc_form("New"))).await.unwrap_err();

        assert!(err.as_ref().invalid().is_none());
        let notifications = drain(&mut rx);
        assert_eq!(notifications[0].level, Level::Error);
        assert_eq!(notifications[0].title, "Failed to create Accommodation");
        assert!(service.store::<Accommodation>().is_empty().await);
    }
}

mod edit {
    use super::*;

    #[tokio::test]
    async fn replaces_edited_record_in_place() {
        let (service, _rx) = accommodations(vec![
            accommodation(1, "A"),
            accommodation(2, "B"),
            accommodation(3, "C"),
        ])
        .await;

        let form = AccommodationForm {
            name: "B2".into(),
            ..AccommodationForm::prefill(&accommodation(2, "B"))
        };
        let edited = service
            .execute(Edit {
                id: 2_u64.into(),
                form,
            })
            .await
            .unwrap();

        assert_eq!(edited.name.as_ref(), "B2");
        assert_eq!(names(&service.store::<Accommodation>().list().await), [
            "A", "B2", "C"
        ]);
    }
}

mod remove {
    use super::*;

    #[tokio::test]
    async fn restores_accommodation_on_failure() {
        let (service, mut rx) = accommodations(vec![
            accommodation(1, "A"),
            accommodation(2, "B"),
            accommodation(3, "C"),
        ])
        .await;
        service.backend().fail(true);

        let res = service.execute(Remove::<Accommodation>(2_u64.into())).await;

        assert!(res.is_err());
        assert_eq!(names(&service.store::<Accommodation>().list().await), [
            "A", "B", "C"
        ]);
        let notifications = drain(&mut rx);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, Level::Error);
    }

    #[tokio::test]
    async fn removes_accommodation_on_success() {
        let (service, mut rx) =
            accommodations(vec![accommodation(1, "A"), accommodation(2, "B")])
                .await;

        service
            .execute(Remove::<Accommodation>(1_u64.into()))
            .await
            .unwrap();

        assert_eq!(names(&service.store::<Accommodation>().list().await), [
            "B"
        ]);
        assert_eq!(service.backend().records().len(), 1);
        assert_eq!(drain(&mut rx)[0].level, Level::Success);
    }

    #[tokio::test]
    async fn missing_accommodation_leaves_list_unchanged() {
        let (service, _rx) =
            accommodations(vec![accommodation(1, "A"), accommodation(2, "B")])
                .await;

        let err = service
            .execute(Remove::<Accommodation>(42_u64.into()))
            .await
            .unwrap_err();

        assert!(err.as_ref().is_not_found());
        assert_eq!(names(&service.store::<Accommodation>().list().await), [
            "A", "B"
        ]);
    }

    #[tokio::test]
    async fn keeps_host_until_backend_confirms() {
        let (notifier, mut rx) = Channel::new();
        let service = Service::new(
            Fake::new(vec![host(1, "Mario"), host(2, "Anna")], 3),
            notifier,
        );
        _ = service.execute(Load::<Host>::new()).await.unwrap();
        service.backend().fail(true);

        assert!(service.execute(Remove::<Host>(1_u64.into())).await.is_err());
        assert_eq!(service.store::<Host>().len().await, 2);
        assert_eq!(drain(&mut rx)[0].title, "Failed to delete Host #1");

        service.backend().fail(false);
        service.execute(Remove::<Host>(1_u64.into())).await.unwrap();
        let hosts = service.store::<Host>().list().await;
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].id, host::Id::from(2_u64));
    }
}

mod dialog {
    use super::*;

    #[tokio::test]
    async fn resets_form_after_creation() {
        let (service, _rx) = accommodations(vec![]).await;
        let mut dialog = Dialog::<AccommodationForm>::create();
        *dialog.form_mut() = acc_form("New");

        _ = dialog.submit(&service).await.unwrap();

        assert_eq!(dialog.form(), &AccommodationForm::default());
        assert!(dialog.errors().is_empty());
    }

    #[tokio::test]
    async fn keeps_input_on_invalid_submission() {
        let (service, _rx) = accommodations(vec![]).await;
        let mut dialog = Dialog::<AccommodationForm>::create();
        *dialog.form_mut() = AccommodationForm {
            price: "5".into(),
            ..acc_form("New")
        };

        assert!(dialog.submit(&service).await.is_err());

        assert_eq!(dialog.form().name, "New");
        assert_eq!(
            dialog.errors().get("price"),
            Some("Price must be at least 10"),
        );
    }

    #[tokio::test]
    async fn edits_existing_record() {
        let (service, _rx) =
            accommodations(vec![accommodation(1, "A")]).await;
        let mut dialog =
            Dialog::<AccommodationForm>::edit(&accommodation(1, "A"));
        dialog.form_mut().name = "A2".into();

        let edited = dialog.submit(&service).await.unwrap();

        assert_eq!(edited.id, accommodation::Id::from(1_u64));
        assert_eq!(dialog.form().name, "A2");
        assert_eq!(service.store::<Accommodation>().len().await, 1);
    }
}
