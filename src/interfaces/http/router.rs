//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingReportService, BookingService, OccupancyService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::queries::SqlOccupancyQueries;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{
    bookings, dashboard, guests, health, invoices, metrics as metrics_module, reports, rooms,
    AppState,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Rooms
        rooms::handlers::list_rooms,
        rooms::handlers::get_room,
        rooms::handlers::create_room,
        // Guests
        guests::handlers::list_guests,
        guests::handlers::create_guest,
        // Bookings
        bookings::handlers::list_bookings,
        bookings::handlers::get_booking,
        bookings::handlers::create_booking,
        bookings::handlers::add_line,
        bookings::handlers::reserve_booking,
        bookings::handlers::check_in_booking,
        bookings::handlers::check_out_booking,
        bookings::handlers::cancel_booking,
        // Invoices
        invoices::handlers::list_invoices,
        invoices::handlers::register_invoice,
        // Dashboard
        dashboard::handlers::occupancy_grid,
        dashboard::handlers::rooms_details,
        dashboard::handlers::month_days,
        dashboard::handlers::range_days,
        // Reports
        reports::handlers::room_booking_report,
        reports::handlers::room_booking_report_rows,
    ),
    components(schemas(
        ApiResponse<String>,
        rooms::dto::CreateRoomRequest,
        rooms::dto::RoomResponse,
        guests::dto::CreateGuestRequest,
        guests::dto::GuestResponse,
        bookings::dto::CreateBookingRequest,
        bookings::dto::BookingLineRequest,
        bookings::dto::BookingResponse,
        bookings::dto::BookingLineResponse,
        invoices::dto::RegisterInvoiceRequest,
        invoices::dto::InvoiceResponse,
        dashboard::dto::RoomDayResponse,
        dashboard::dto::CustomerStayResponse,
        dashboard::dto::RoomOccupancyResponse,
        reports::dto::BookingReportRequest,
        reports::dto::BookingReportRowsRequest,
        reports::dto::ReportRowResponse,
        reports::dto::ReportFormatParam,
        health::handlers::HealthResponse,
        health::handlers::ComponentHealth,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Rooms", description = "Room registry"),
        (name = "Guests", description = "Guest registry"),
        (name = "Bookings", description = "Booking lifecycle and lines"),
        (name = "Invoices", description = "Invoice registry for payment status"),
        (name = "Dashboard", description = "Occupancy calendar reads"),
        (name = "Reports", description = "Booking report exports"),
    )
)]
struct ApiDoc;

/// Build the full API router.
///
/// Resource modules share one `AppState`; health and metrics carry their
/// own narrow states.
pub fn create_api_router(
    db: DatabaseConnection,
    repos: Arc<dyn RepositoryProvider>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let occupancy_queries = Arc::new(SqlOccupancyQueries::new(db.clone()));

    let state = AppState {
        repos: repos.clone(),
        bookings: Arc::new(BookingService::new(repos.clone())),
        occupancy: Arc::new(OccupancyService::new(occupancy_queries)),
        reports: Arc::new(BookingReportService::new(repos)),
    };

    let api_routes = Router::new()
        .route(
            "/api/v1/rooms",
            get(rooms::handlers::list_rooms).post(rooms::handlers::create_room),
        )
        .route("/api/v1/rooms/{id}", get(rooms::handlers::get_room))
        .route(
            "/api/v1/guests",
            get(guests::handlers::list_guests).post(guests::handlers::create_guest),
        )
        .route(
            "/api/v1/bookings",
            get(bookings::handlers::list_bookings).post(bookings::handlers::create_booking),
        )
        .route("/api/v1/bookings/{id}", get(bookings::handlers::get_booking))
        .route("/api/v1/bookings/{id}/lines", post(bookings::handlers::add_line))
        .route(
            "/api/v1/bookings/{id}/reserve",
            post(bookings::handlers::reserve_booking),
        )
        .route(
            "/api/v1/bookings/{id}/check-in",
            post(bookings::handlers::check_in_booking),
        )
        .route(
            "/api/v1/bookings/{id}/check-out",
            post(bookings::handlers::check_out_booking),
        )
        .route(
            "/api/v1/bookings/{id}/cancel",
            post(bookings::handlers::cancel_booking),
        )
        .route(
            "/api/v1/invoices",
            get(invoices::handlers::list_invoices).post(invoices::handlers::register_invoice),
        )
        .route(
            "/api/v1/dashboard/occupancy",
            get(dashboard::handlers::occupancy_grid),
        )
        .route(
            "/api/v1/dashboard/rooms-details",
            get(dashboard::handlers::rooms_details),
        )
        .route(
            "/api/v1/dashboard/month-days",
            get(dashboard::handlers::month_days),
        )
        .route(
            "/api/v1/dashboard/range-days",
            get(dashboard::handlers::range_days),
        )
        .route(
            "/api/v1/reports/room-bookings",
            post(reports::handlers::room_booking_report),
        )
        .route(
            "/api/v1/reports/room-bookings/rows",
            post(reports::handlers::room_booking_report_rows),
        )
        .with_state(state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_module::prometheus_metrics))
        .with_state(metrics_module::MetricsState {
            handle: prometheus_handle,
        });

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(middleware::from_fn(metrics_module::http_metrics_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
