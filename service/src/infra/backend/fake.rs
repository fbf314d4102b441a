//! In-memory [`Backend`] for tests.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
    Mutex,
};

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::StatusCode;
use tracerr::Traced;

use crate::{
    domain::{
        accommodation, feedback, host, reservation, tenant, Accommodation,
        Feedback, Host, Reservation, Resource, Tenant,
    },
    infra::{backend, rest, Backend},
};

/// [`Resource`] which can be stored in a [`Fake`] backend.
pub(crate) trait Seed: Resource {
    /// Builds a new [`Resource::Id`] out of the provided number.
    fn id_of(n: u64) -> Self::Id;

    /// Builds a new [`Resource`] out of its [`Resource::Draft`].
    fn seed(id: Self::Id, draft: Self::Draft) -> Self;
}

/// In-memory [`Backend`] of a single `R`esource kind.
#[derive(Debug)]
pub(crate) struct Fake<R> {
    /// Records of this [`Fake`] backend.
    records: Mutex<Vec<R>>,

    /// Next ID to assign.
    next_id: AtomicU64,

    /// Number of performed operations.
    calls: AtomicUsize,

    /// Indicator whether every operation fails.
    failing: AtomicBool,
}

impl<R: Seed> Fake<R> {
    /// Creates a new [`Fake`] backend holding the provided `records`.
    pub(crate) fn new(records: Vec<R>, next_id: u64) -> Self {
        Self {
            records: Mutex::new(records),
            next_id: AtomicU64::new(next_id),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Makes every following operation fail (or succeed).
    pub(crate) fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns the number of operations performed so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of the records.
    pub(crate) fn records(&self) -> Vec<R> {
        self.records.lock().unwrap().clone()
    }

    /// Registers an operation call, failing if requested.
    fn call(&self) -> Result<(), Traced<backend::Error>> {
        _ = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(error(StatusCode::INTERNAL_SERVER_ERROR, "Boom"));
        }
        Ok(())
    }
}

/// Creates a new [`backend::Error`] with the provided response parts.
fn error(status: StatusCode, message: &str) -> Traced<backend::Error> {
    tracerr::new!(backend::Error::from(rest::Error::Status {
        status,
        message: message.into(),
    }))
}

impl<R: Seed> Backend<Select<By<Vec<R>, ()>>> for Fake<R> {
    type Ok = Vec<R>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<R>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        Ok(self.records())
    }
}

impl<R: Seed> Backend<Insert<R::Draft>> for Fake<R> {
    type Ok = R;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<R::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let id = R::id_of(self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = R::seed(id, draft);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

impl<R: Seed> Backend<Update<(R::Id, R::Draft)>> for Fake<R> {
    type Ok = R;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update((id, draft)): Update<(R::Id, R::Draft)>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let mut records = self.records.lock().unwrap();
        let existing = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| error(StatusCode::NOT_FOUND, "Not found"))?;
        *existing = R::seed(id, draft);
        Ok(existing.clone())
    }
}

impl<R: Seed> Backend<Delete<By<R, R::Id>>> for Fake<R> {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<R, R::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.call()?;
        let id = by.into_inner();
        let mut records = self.records.lock().unwrap();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| error(StatusCode::NOT_FOUND, "Not found"))?;
        drop(records.remove(index));
        Ok(())
    }
}

impl Seed for Accommodation {
    fn id_of(n: u64) -> accommodation::Id {
        n.into()
    }

    fn seed(id: accommodation::Id, d: accommodation::Draft) -> Self {
        Self {
            id,
            name: d.name,
            address: d.address,
            rooms: d.rooms,
            bed_places: d.bed_places,
            floor: d.floor,
            price: d.price,
            start_date: d.start_date,
            end_date: d.end_date,
            host_id: Some(d.host_id),
        }
    }
}

impl Seed for Host {
    fn id_of(n: u64) -> host::Id {
        n.into()
    }

    fn seed(id: host::Id, d: host::Draft) -> Self {
        Self {
            id,
            name: d.name,
            surname: d.surname,
            email: d.email,
            address: d.address,
            superhost: d.superhost,
        }
    }
}

impl Seed for Tenant {
    fn id_of(n: u64) -> tenant::Id {
        n.into()
    }

    fn seed(id: tenant::Id, d: tenant::Draft) -> Self {
        Self {
            id,
            name: d.name,
            surname: d.surname,
            email: d.email,
            address: d.address,
        }
    }
}

impl Seed for Reservation {
    fn id_of(n: u64) -> reservation::Id {
        n.into()
    }

    fn seed(id: reservation::Id, d: reservation::Draft) -> Self {
        Self {
            id,
            start_date: d.start_date,
            end_date: d.end_date,
            tenant_id: d.tenant_id,
            accommodation_id: d.accommodation_id,
        }
    }
}

impl Seed for Feedback {
    fn id_of(n: u64) -> feedback::Id {
        n.into()
    }

    fn seed(id: feedback::Id, d: feedback::Draft) -> Self {
        Self {
            id,
            title: d.title,
            text: d.text,
            points: d.points,
            reservation_id: d.reservation_id,
        }
    }
}
