// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod inventory;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use stay_reserve::{AuditLog, BookingLedger, RoomCatalog, SimulatedPaymentProcessor};
use stay_reserve_api::{
    ApiError, AuditTrailResponse, AuthenticatedActor, CreateBookingRequest, CreateBookingResponse,
    DashboardSummaryResponse, GetBookingResponse, GetRoomResponse, ListBookingsResponse,
    ListRoomsResponse, ProcessPaymentRequest, ProcessPaymentResponse, QuoteStayRequest,
    QuoteStayResponse, Role, SearchRoomsRequest, SearchRoomsResponse, SetRoomAvailabilityRequest,
    SetRoomAvailabilityResponse, UpdateBookingStatusRequest, UpdateBookingStatusResponse,
    UpdatePaymentStatusRequest, UpdatePaymentStatusResponse, authenticate_stub,
};
use stay_reserve_audit::Cause;
use stay_reserve_domain::Room;

/// Stay Reserve Server - HTTP server for the Stay Hotel Reservation System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a room inventory CSV. If not provided, uses the built-in
    /// seed inventory.
    #[arg(short, long)]
    inventory: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// The engine state owned by the process entry point.
///
/// The catalog, ledger, and audit log live behind one mutex so mutations
/// serialize and reads see a consistent snapshot.
struct HotelState {
    /// The room catalog.
    catalog: RoomCatalog,
    /// The booking ledger.
    ledger: BookingLedger,
    /// The audit trail.
    audit_log: AuditLog,
    /// The injected payment capability.
    payment: SimulatedPaymentProcessor,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The engine state.
    hotel: Arc<Mutex<HotelState>>,
}

/// Staff identification for read-only staff endpoints.
#[derive(Debug, Deserialize)]
struct StaffQuery {
    /// The actor ID performing this query.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// API request for a staff booking status transition.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateStatusApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The target status.
    new_status: String,
}

/// API request for a staff payment status transition.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdatePaymentApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The target status.
    new_status: String,
}

/// API request to toggle room availability.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SetAvailabilityApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The new availability flag.
    available: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "staff" => Ok(Role::Staff),
        "guest" => Ok(Role::Guest),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: '{role_str}'. Must be 'staff' or 'guest'"),
        }),
    }
}

/// Authenticates a caller from request-supplied identification.
fn authenticate(actor_id: &str, actor_role: &str) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = parse_role(actor_role)?;
    authenticate_stub(actor_id.to_owned(), role).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

/// Handler for GET `/rooms`.
async fn handle_list_rooms(AxumState(app_state): AxumState<AppState>) -> Json<ListRoomsResponse> {
    let hotel = app_state.hotel.lock().await;
    Json(stay_reserve_api::list_rooms(&hotel.catalog))
}

/// Handler for GET `/rooms/featured`.
async fn handle_list_featured_rooms(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListRoomsResponse> {
    let hotel = app_state.hotel.lock().await;
    Json(stay_reserve_api::list_featured_rooms(&hotel.catalog))
}

/// Handler for GET `/rooms/{id}`.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<GetRoomResponse>, HttpError> {
    let hotel = app_state.hotel.lock().await;
    let response: GetRoomResponse = stay_reserve_api::get_room(&hotel.catalog, &room_id)?;
    Ok(Json(response))
}

/// Handler for POST `/rooms/search`.
async fn handle_search_rooms(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SearchRoomsRequest>,
) -> Result<Json<SearchRoomsResponse>, HttpError> {
    let hotel = app_state.hotel.lock().await;
    let response: SearchRoomsResponse =
        stay_reserve_api::search_rooms(&hotel.catalog, &hotel.ledger, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/stay/quote`.
async fn handle_quote_stay(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<QuoteStayRequest>,
) -> Result<Json<QuoteStayResponse>, HttpError> {
    let hotel = app_state.hotel.lock().await;
    let response: QuoteStayResponse = stay_reserve_api::quote_stay(&hotel.catalog, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/bookings`.
///
/// The public booking form: the guest is authenticated by their email
/// address for audit attribution.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, HttpError> {
    info!(room_id = %req.room_id, email = %req.email, "Handling create_booking request");

    // Guests carry no credentials; an empty email is caught by draft validation
    let actor: AuthenticatedActor = AuthenticatedActor::new(req.email.clone(), Role::Guest);
    let cause: Cause = Cause::new(
        String::from("booking-form"),
        String::from("Guest booking form submission"),
    );

    let mut hotel = app_state.hotel.lock().await;
    let hotel: &mut HotelState = &mut hotel;
    let response: CreateBookingResponse = stay_reserve_api::create_booking(
        &hotel.catalog,
        &mut hotel.ledger,
        &mut hotel.audit_log,
        &req,
        &actor,
        &cause,
    )?;

    info!(reference = %response.booking.reference, "Successfully created booking");
    Ok(Json(response))
}

/// Handler for POST `/bookings/{id}/payment`.
async fn handle_process_payment(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<ProcessPaymentResponse>, HttpError> {
    info!(booking_id, "Handling process_payment request");

    let cause: Cause = Cause::new(
        String::from("payment-form"),
        String::from("Guest payment submission"),
    );

    let mut hotel = app_state.hotel.lock().await;
    let hotel: &mut HotelState = &mut hotel;
    let actor: AuthenticatedActor =
        AuthenticatedActor::new(format!("booking-{booking_id}"), Role::Guest);
    let response: ProcessPaymentResponse = stay_reserve_api::process_payment(
        &mut hotel.ledger,
        &mut hotel.audit_log,
        &hotel.payment,
        &ProcessPaymentRequest { booking_id },
        &actor,
        &cause,
    )?;

    Ok(Json(response))
}

/// Handler for GET `/bookings`.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;
    let hotel = app_state.hotel.lock().await;
    let response: ListBookingsResponse = stay_reserve_api::list_bookings(&hotel.ledger, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/bookings/{id}`.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<GetBookingResponse>, HttpError> {
    let hotel = app_state.hotel.lock().await;
    let response: GetBookingResponse = stay_reserve_api::get_booking(&hotel.ledger, booking_id)?;
    Ok(Json(response))
}

/// Handler for GET `/guests/{email}/bookings`.
async fn handle_guest_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(email): Path<String>,
) -> Json<ListBookingsResponse> {
    let hotel = app_state.hotel.lock().await;
    Json(stay_reserve_api::list_guest_bookings(&hotel.ledger, &email))
}

/// Handler for POST `/bookings/{id}/status`.
async fn handle_update_booking_status(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<UpdateStatusApiRequest>,
) -> Result<Json<UpdateBookingStatusResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        booking_id,
        new_status = %req.new_status,
        "Handling update_booking_status request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause: Cause = Cause::new(req.cause_id.clone(), req.cause_description.clone());

    let mut hotel = app_state.hotel.lock().await;
    let hotel: &mut HotelState = &mut hotel;
    let response: UpdateBookingStatusResponse = stay_reserve_api::update_booking_status(
        &mut hotel.ledger,
        &mut hotel.audit_log,
        &UpdateBookingStatusRequest {
            booking_id,
            new_status: req.new_status,
        },
        &actor,
        &cause,
    )?;

    Ok(Json(response))
}

/// Handler for POST `/bookings/{id}/payment-status`.
async fn handle_update_payment_status(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<UpdatePaymentApiRequest>,
) -> Result<Json<UpdatePaymentStatusResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        booking_id,
        new_status = %req.new_status,
        "Handling update_payment_status request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause: Cause = Cause::new(req.cause_id.clone(), req.cause_description.clone());

    let mut hotel = app_state.hotel.lock().await;
    let hotel: &mut HotelState = &mut hotel;
    let response: UpdatePaymentStatusResponse = stay_reserve_api::update_payment_status(
        &mut hotel.ledger,
        &mut hotel.audit_log,
        &UpdatePaymentStatusRequest {
            booking_id,
            new_status: req.new_status,
        },
        &actor,
        &cause,
    )?;

    Ok(Json(response))
}

/// Handler for POST `/rooms/{id}/availability`.
async fn handle_set_room_availability(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<String>,
    Json(req): Json<SetAvailabilityApiRequest>,
) -> Result<Json<SetRoomAvailabilityResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        room_id = %room_id,
        available = req.available,
        "Handling set_room_availability request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause: Cause = Cause::new(req.cause_id.clone(), req.cause_description.clone());

    let mut hotel = app_state.hotel.lock().await;
    let hotel: &mut HotelState = &mut hotel;
    let response: SetRoomAvailabilityResponse = stay_reserve_api::set_room_availability(
        &mut hotel.catalog,
        &mut hotel.audit_log,
        &SetRoomAvailabilityRequest {
            room_id,
            available: req.available,
        },
        &actor,
        &cause,
    )?;

    Ok(Json(response))
}

/// Handler for GET `/dashboard`.
async fn handle_dashboard_summary(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<DashboardSummaryResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;
    let hotel = app_state.hotel.lock().await;
    let response: DashboardSummaryResponse =
        stay_reserve_api::dashboard_summary(&hotel.catalog, &hotel.ledger, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/audit`.
async fn handle_audit_trail(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<AuditTrailResponse>, HttpError> {
    let actor: AuthenticatedActor = authenticate(&query.actor_id, &query.actor_role)?;
    let hotel = app_state.hotel.lock().await;
    let response: AuditTrailResponse = stay_reserve_api::audit_trail(&hotel.audit_log, &actor)?;
    Ok(Json(response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/rooms", get(handle_list_rooms))
        .route("/rooms/featured", get(handle_list_featured_rooms))
        .route("/rooms/search", post(handle_search_rooms))
        .route("/rooms/{id}", get(handle_get_room))
        .route("/rooms/{id}/availability", post(handle_set_room_availability))
        .route("/stay/quote", post(handle_quote_stay))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_bookings))
        .route("/bookings/{id}", get(handle_get_booking))
        .route("/bookings/{id}/payment", post(handle_process_payment))
        .route("/bookings/{id}/status", post(handle_update_booking_status))
        .route(
            "/bookings/{id}/payment-status",
            post(handle_update_payment_status),
        )
        .route("/guests/{email}/bookings", get(handle_guest_bookings))
        .route("/dashboard", get(handle_dashboard_summary))
        .route("/audit", get(handle_audit_trail))
        .with_state(app_state)
}

/// Loads the room inventory from a CSV file or the built-in seed.
fn load_inventory(path: Option<&str>) -> Result<Vec<Room>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            info!("Loading inventory from: {}", path);
            let file = std::fs::File::open(path)?;
            Ok(stay_reserve_api::read_inventory_csv(file)?)
        }
        None => {
            info!("Using built-in seed inventory");
            Ok(inventory::seed_rooms())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Stay Reserve Server");

    let rooms: Vec<Room> = load_inventory(args.inventory.as_deref())?;
    let catalog: RoomCatalog = RoomCatalog::new(rooms)?;
    info!(rooms = catalog.rooms().len(), "Catalog loaded");

    let app_state: AppState = AppState {
        hotel: Arc::new(Mutex::new(HotelState {
            catalog,
            ledger: BookingLedger::new(),
            audit_log: AuditLog::new(),
            payment: SimulatedPaymentProcessor::new(),
        })),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with the seed inventory.
    fn create_test_app_state() -> AppState {
        let catalog: RoomCatalog =
            RoomCatalog::new(inventory::seed_rooms()).expect("seed inventory must be valid");
        AppState {
            hotel: Arc::new(Mutex::new(HotelState {
                catalog,
                ledger: BookingLedger::new(),
                audit_log: AuditLog::new(),
                payment: SimulatedPaymentProcessor::new(),
            })),
        }
    }

    /// Helper to create a test booking request body.
    fn create_test_booking_request(room_id: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            room_id: room_id.to_string(),
            first_name: String::from("John"),
            last_name: String::from("Smith"),
            email: String::from("john.smith@example.com"),
            phone: String::from("555-123-4567"),
            check_in: String::from("2025-04-10"),
            check_out: String::from("2025-04-15"),
            adults: 2,
            children: 0,
            special_requests: None,
        }
    }

    async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn get_uri(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_rooms_returns_seed_inventory() {
        let app: Router = build_router(create_test_app_state());

        let response = get_uri(app, "/rooms").await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: ListRoomsResponse = body_json(response).await;
        assert_eq!(body.rooms.len(), 5);
        assert_eq!(body.rooms[0].name, "Deluxe King Room");
    }

    #[tokio::test]
    async fn test_get_unknown_room_is_404() {
        let app: Router = build_router(create_test_app_state());

        let response = get_uri(app, "/rooms/99").await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quote_stay_round_trip() {
        let app: Router = build_router(create_test_app_state());
        let request: QuoteStayRequest = QuoteStayRequest {
            room_id: String::from("1"),
            check_in: String::from("2025-04-10"),
            check_out: String::from("2025-04-15"),
        };

        let response = post_json(app, "/stay/quote", &request).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: QuoteStayResponse = body_json(response).await;
        assert_eq!(body.nights, 5);
        assert_eq!(body.total_price_cents, 99_500);
    }

    #[tokio::test]
    async fn test_create_booking_and_settle_payment() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = post_json(
            app.clone(),
            "/bookings",
            &create_test_booking_request("1"),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let created: CreateBookingResponse = body_json(response).await;
        assert_eq!(created.booking.status, "pending");
        assert_eq!(created.booking.reference.len(), 8);

        let payment_uri: String = format!("/bookings/{}/payment", created.booking.id);
        let payment_response = post_json(app, &payment_uri, &serde_json::json!({})).await;
        assert_eq!(payment_response.status(), HttpStatusCode::OK);
        let settled: ProcessPaymentResponse = body_json(payment_response).await;
        assert!(settled.approved);
        assert_eq!(settled.booking.status, "confirmed");
        assert_eq!(settled.booking.payment_status, "paid");
    }

    #[tokio::test]
    async fn test_create_booking_with_bad_dates_is_400() {
        let app: Router = build_router(create_test_app_state());
        let mut request: CreateBookingRequest = create_test_booking_request("1");
        request.check_in = String::from("2025-04-15");
        request.check_out = String::from("2025-04-10");

        let response = post_json(app, "/bookings", &request).await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_booking_for_unknown_room_is_404() {
        let app: Router = build_router(create_test_app_state());

        let response = post_json(app, "/bookings", &create_test_booking_request("99")).await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_guest_cannot_list_bookings() {
        let app: Router = build_router(create_test_app_state());

        let response = get_uri(
            app,
            "/bookings?actor_id=guest-1&actor_role=guest",
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_staff_status_transition_flow() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let created: CreateBookingResponse = body_json(
            post_json(app.clone(), "/bookings", &create_test_booking_request("1")).await,
        )
        .await;

        let transition_req: UpdateStatusApiRequest = UpdateStatusApiRequest {
            actor_id: String::from("staff-107"),
            actor_role: String::from("staff"),
            cause_id: String::from("front-desk"),
            cause_description: String::from("Phone confirmation"),
            new_status: String::from("confirmed"),
        };
        let uri: String = format!("/bookings/{}/status", created.booking.id);
        let response = post_json(app.clone(), &uri, &transition_req).await;
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: UpdateBookingStatusResponse = body_json(response).await;
        assert_eq!(body.booking.status, "confirmed");

        // pending -> completed is rejected after cancellation
        let cancel_req: UpdateStatusApiRequest = UpdateStatusApiRequest {
            new_status: String::from("cancelled"),
            ..transition_req.clone()
        };
        let response = post_json(app.clone(), &uri, &cancel_req).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let complete_req: UpdateStatusApiRequest = UpdateStatusApiRequest {
            new_status: String::from("completed"),
            ..transition_req
        };
        let response = post_json(app, &uri, &complete_req).await;
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_search_excludes_conflicting_dates() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        post_json(app.clone(), "/bookings", &create_test_booking_request("1")).await;

        let search_req: SearchRoomsRequest = SearchRoomsRequest {
            check_in: Some(String::from("2025-04-11")),
            check_out: Some(String::from("2025-04-13")),
            ..SearchRoomsRequest::default()
        };
        let response = post_json(app, "/rooms/search", &search_req).await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: SearchRoomsResponse = body_json(response).await;
        assert!(!body.rooms.iter().any(|r| r.id == "1"));
        assert_eq!(body.rooms.len(), 4);
    }

    #[tokio::test]
    async fn test_dashboard_and_audit_for_staff() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        post_json(app.clone(), "/bookings", &create_test_booking_request("3")).await;

        let dashboard = get_uri(
            app.clone(),
            "/dashboard?actor_id=staff-107&actor_role=staff",
        )
        .await;
        assert_eq!(dashboard.status(), HttpStatusCode::OK);
        let summary: DashboardSummaryResponse = body_json(dashboard).await;
        assert_eq!(summary.total_bookings, 1);
        assert_eq!(summary.available_rooms, 5);

        let audit = get_uri(app, "/audit?actor_id=staff-107&actor_role=staff").await;
        assert_eq!(audit.status(), HttpStatusCode::OK);
        let trail: AuditTrailResponse = body_json(audit).await;
        assert_eq!(trail.events.len(), 1);
        assert_eq!(trail.events[0].action, "CreateBooking");
    }

    #[tokio::test]
    async fn test_room_availability_toggle_hides_room_from_dated_search() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let toggle_req: SetAvailabilityApiRequest = SetAvailabilityApiRequest {
            actor_id: String::from("staff-107"),
            actor_role: String::from("staff"),
            cause_id: String::from("maintenance"),
            cause_description: String::from("Plumbing repair"),
            available: false,
        };
        let response = post_json(app.clone(), "/rooms/2/availability", &toggle_req).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let search_req: SearchRoomsRequest = SearchRoomsRequest {
            check_in: Some(String::from("2025-05-01")),
            check_out: Some(String::from("2025-05-03")),
            ..SearchRoomsRequest::default()
        };
        let search: SearchRoomsResponse =
            body_json(post_json(app, "/rooms/search", &search_req).await).await;
        assert!(!search.rooms.iter().any(|r| r.id == "2"));
    }
}
