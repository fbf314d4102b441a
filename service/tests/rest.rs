//! [`Rest`] backend against a fake REST API served by [`axum`].

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use service::{
    command::{Create, Edit, Load, LoadAll, Remove},
    domain::{accommodation, tenant, Accommodation, Feedback, Host},
    form::accommodation::AccommodationForm,
    infra::backend::rest::{Config, Rest},
    notify::{self, Level},
    query, Command as _, Service,
};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Api {
    accommodations: Arc<Mutex<Vec<Value>>>,
}

fn accommodation(id: u64, name: &str) -> Value {
    json!({
        "idAccomodation": id,
        "accomodationName": name,
        "accomodationAddress": "Via Roma 1, Napoli",
        "nrooms": 2,
        "nbedPlaces": 4,
        "floor": 1,
        "price": 120.5,
        "startDate": "2025-01-10T00:00:00",
        "endDate": "2025-02-10",
        "hostId": 7,
    })
}

async fn list(State(api): State<Api>) -> Json<Value> {
    Json(Value::Array(api.accommodations.lock().unwrap().clone()))
}

async fn create(
    State(api): State<Api>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut items = api.accommodations.lock().unwrap();
    body["idAccomodation"] = json!(100 + items.len());
    items.push(body.clone());
    Json(body)
}

async fn update(
    State(api): State<Api>,
    Path(id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut items = api.accommodations.lock().unwrap();
    let item = items
        .iter_mut()
        .find(|a| a["idAccomodation"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    body["idAccomodation"] = json!(id);
    *item = body.clone();
    Ok(Json(body))
}

async fn delete(
    State(api): State<Api>,
    Path(id): Path<u64>,
) -> (StatusCode, &'static str) {
    let mut items = api.accommodations.lock().unwrap();
    let before = items.len();
    items.retain(|a| a["idAccomodation"] != json!(id));
    if items.len() == before {
        (StatusCode::NOT_FOUND, "Accommodation not found")
    } else {
        (StatusCode::NO_CONTENT, "")
    }
}

async fn serve(api: Api) -> SocketAddr {
    let app = Router::new()
        .route("/api/v1/accomodations", get(list).post(create))
        .route("/api/v1/accomodations/:id", put(update).delete(delete))
        .route("/api/v1/hosts", get(|| async { Json(json!([])) }))
        .route("/api/v1/tenants", get(|| async { Json(json!([])) }))
        .route("/api/v1/reservations", get(|| async { Json(json!([])) }))
        .route(
            "/api/v1/feedback",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/v1/hosts/best",
            get(|| async {
                Json(json!({
                    "idHost": 7,
                    "hostName": "Mario",
                    "surname": "Rossi",
                    "email": "mario@example.com",
                    "hostAddress": "Via Roma 1",
                    "isSuperhost": true,
                    "nfeedback": 12,
                    "avgFeedback": 4.5,
                }))
            }),
        )
        .route(
            "/api/v1/tenants/:id/last-reservation",
            get(|| async { StatusCode::NOT_FOUND }),
        )
        .with_state(api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    }));
    addr
}

async fn service(
    api: Api,
) -> (
    Service<Rest, notify::Channel>,
    tokio::sync::mpsc::UnboundedReceiver<notify::Notification>,
) {
    let addr = serve(api).await;
    let rest = Rest::new(&Config {
        base_url: format!("http://{addr}/api/v1/"),
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    let (notifier, rx) = notify::Channel::new();
    (Service::new(rest, notifier), rx)
}

fn form(name: &str) -> AccommodationForm {
    AccommodationForm {
        name: name.into(),
        address: "Corso Italia 12, Milano".into(),
        rooms: "1".into(),
        bed_places: "2".into(),
        floor: "3".into(),
        price: "80".into(),
        start_date: "2025-05-01".into(),
        end_date: "2025-06-01".into(),
        host_id: "7".into(),
    }
}

#[tokio::test]
async fn loads_accommodations() {
    let api = Api::default();
    api.accommodations
        .lock()
        .unwrap()
        .extend([accommodation(1, "Sea View"), accommodation(2, "Loft")]);
    let (service, _rx) = service(api).await;

    let count = service.execute(Load::<Accommodation>::new()).await.unwrap();

    assert_eq!(count, 2);
    let loaded = service.store::<Accommodation>().list().await;
    assert_eq!(loaded[1].name.as_ref(), "Loft");
    assert_eq!(loaded[0].start_date.to_string(), "2025-01-10");
    assert_eq!(loaded[0].price.to_string(), "€120.5");
}

#[tokio::test]
async fn creates_edits_and_deletes() {
    let api = Api::default();
    api.accommodations
        .lock()
        .unwrap()
        .push(accommodation(1, "Sea View"));
    let (service, mut rx) = service(api.clone()).await;
    _ = service.execute(Load::<Accommodation>::new()).await.unwrap();

    let created = service.execute(Create(form("City Loft"))).await.unwrap();
    assert_eq!(created.id, accommodation::Id::from(101_u64));
    assert_eq!(created.host_id, Some(7_u64.into()));
    let names = service
        .store::<Accommodation>()
        .list()
        .await
        .into_iter()
        .map(|a| a.name.to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, ["City Loft", "Sea View"]);
    assert_eq!(rx.recv().await.unwrap().title, "Accommodation created");

    let edited = service
        .execute(Edit {
            id: created.id,
            form: form("Big Loft"),
        })
        .await
        .unwrap();
    assert_eq!(edited.name.as_ref(), "Big Loft");
    assert_eq!(
        api.accommodations.lock().unwrap()[1]["accomodationName"],
        json!("Big Loft"),
    );
    assert_eq!(rx.recv().await.unwrap().level, Level::Success);

    service
        .execute(Remove::<Accommodation>(created.id))
        .await
        .unwrap();
    assert_eq!(service.store::<Accommodation>().len().await, 1);
    assert_eq!(api.accommodations.lock().unwrap().len(), 1);
    assert_eq!(rx.recv().await.unwrap().title, "Accommodation deleted");
}

#[tokio::test]
async fn restores_record_when_deletion_fails() {
    let (service, mut rx) = service(Api::default()).await;
    let stale: Accommodation =
        serde_json::from_value(accommodation(5, "Ghost")).unwrap();
    service.store::<Accommodation>().set(vec![stale]).await;

    let err = service
        .execute(Remove::<Accommodation>(5_u64.into()))
        .await
        .unwrap_err();

    assert!(err.as_ref().to_string().contains("Accommodation not found"));
    assert_eq!(service.store::<Accommodation>().len().await, 1);
    let notification = rx.recv().await.unwrap();
    assert_eq!(notification.level, Level::Error);
    assert_eq!(notification.title, "Failed to delete Accommodation #5");
    assert_eq!(
        notification.description.as_deref(),
        Some("Accommodation not found"),
    );
}

#[tokio::test]
async fn load_all_reports_each_failure() {
    let (service, mut rx) = service(Api::default()).await;

    let err = service.execute(LoadAll).await.unwrap_err();

    assert_eq!(err.as_ref().to_string(), "HTTP error: 500");
    assert!(service.store::<Host>().is_empty().await);
    assert!(service.store::<Feedback>().is_empty().await);
    let notification = rx.recv().await.unwrap();
    assert_eq!(notification.title, "Failed to load feedback");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn queries_statistics() {
    let (service, _rx) = service(Api::default()).await;

    let best = service
        .execute(query::host::Best::new())
        .await
        .unwrap();
    assert_eq!(best.host.full_name(), "Mario Rossi");
    assert!(best.host.superhost);
    assert_eq!(best.feedback, 12);

    let last = service
        .execute(query::reservation::LastOf::by(
            service::read::reservation::LastOf(tenant::Id::from(3_u64)),
        ))
        .await
        .unwrap();
    assert!(last.is_none());
}
