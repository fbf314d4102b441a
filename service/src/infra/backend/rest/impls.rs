//! [`Backend`] implementations of the [`Rest`] client.

use std::fmt;

use common::operations::{By, Delete, Insert, Select, Update};
use serde::{de::DeserializeOwned, Serialize};
use tracerr::Traced;

use crate::{
    domain::{
        Accommodation, Draft, Feedback, Host, Reservation, Resource, Tenant,
    },
    infra::{backend, Backend},
    read,
};

use super::{Endpoint, Rest};

impl Endpoint for Accommodation {
    const PATH: &'static str = "accomodations";
}

impl Endpoint for Host {
    const PATH: &'static str = "hosts";
}

impl Endpoint for Tenant {
    const PATH: &'static str = "tenants";
}

impl Endpoint for Reservation {
    const PATH: &'static str = "reservations";
}

impl Endpoint for Feedback {
    const PATH: &'static str = "feedback";
}

impl<R> Backend<Select<By<Vec<R>, ()>>> for Rest
where
    R: Endpoint + DeserializeOwned,
{
    type Ok = Vec<R>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<R>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.fetch(self.client.get(self.url(R::PATH)))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl<D> Backend<Insert<D>> for Rest
where
    D: Draft + Serialize,
    D::Resource: Endpoint + DeserializeOwned,
{
    type Ok = D::Resource;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<D>,
    ) -> Result<Self::Ok, Self::Err> {
        let url = self.url(<D::Resource as Endpoint>::PATH);
        self.fetch(self.client.post(url).json(&draft))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl<I, D> Backend<Update<(I, D)>> for Rest
where
    D: Draft + Serialize,
    D::Resource: Resource<Id = I> + Endpoint + DeserializeOwned,
    I: fmt::Display,
{
    type Ok = D::Resource;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update((id, draft)): Update<(I, D)>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = <D::Resource as Endpoint>::PATH;
        let url = self.url(&format!("{path}/{id}"));
        self.fetch(self.client.put(url).json(&draft))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl<R> Backend<Delete<By<R, R::Id>>> for Rest
where
    R: Resource + Endpoint,
{
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<R, R::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let url = self.url(&format!("{}/{}", R::PATH, by.into_inner()));
        drop(
            self.send(self.client.delete(url))
                .await
                .map_err(tracerr::map_from_and_wrap!())?,
        );
        Ok(())
    }
}

impl Backend<Select<By<read::accommodation::Best, ()>>> for Rest {
    type Ok = read::accommodation::Best;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<read::accommodation::Best, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.fetch(self.client.get(self.url("bestAccomodations")))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Backend<Select<By<read::host::Best, ()>>> for Rest {
    type Ok = read::host::Best;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<read::host::Best, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.fetch(self.client.get(self.url("hosts/best")))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Backend<Select<By<Vec<Host>, read::host::Superhosts>>> for Rest {
    type Ok = Vec<Host>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Host>, read::host::Superhosts>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.fetch(self.client.get(self.url("hosts/superhosts")))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Backend<Select<By<Vec<Host>, read::host::TopFive>>> for Rest {
    type Ok = Vec<Host>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Host>, read::host::TopFive>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.fetch(self.client.get(self.url("hosts/topfivehosts")))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Backend<Select<By<Vec<Tenant>, read::tenant::TopFive>>> for Rest {
    type Ok = Vec<Tenant>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Tenant>, read::tenant::TopFive>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.fetch(self.client.get(self.url("tenants/topfivetenants")))
            .await
            .map_err(tracerr::map_from_and_wrap!())
    }
}

impl Backend<Select<By<Option<Reservation>, read::reservation::LastOf>>>
    for Rest
{
    type Ok = Option<Reservation>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Reservation>, read::reservation::LastOf>>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::reservation::LastOf(tenant) = by.into_inner();
        let url = self.url(&format!("tenants/{tenant}/last-reservation"));

        match self.fetch(self.client.get(url)).await {
            Ok(reservation) => Ok(reservation),
            Err(e) if e.as_ref().is_not_found() => Ok(None),
            Err(e) => Err(e).map_err(tracerr::map_from_and_wrap!()),
        }
    }
}

