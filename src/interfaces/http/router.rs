//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    BillingService, DashboardService, LedgerService, NotificationService, PropertyService,
    TenantService,
};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::metrics::http_metrics_middleware;
use crate::interfaces::http::modules::{
    auth, billing, dashboard, health, houses, metrics, receipts, rooms, tenants,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::register,
        auth::verify_email,
        auth::resend_verification,
        auth::get_current_user,
        auth::change_password,
        // Houses
        houses::list_houses,
        houses::create_house,
        houses::get_house,
        houses::update_house,
        houses::toggle_house_status,
        houses::delete_house,
        // Rooms
        rooms::list_rooms,
        rooms::create_room,
        rooms::get_room_detail,
        rooms::update_room,
        rooms::delete_room,
        // Tenants
        tenants::assign_tenant,
        tenants::get_tenant,
        tenants::update_tenant,
        tenants::send_verification,
        tenants::remove_tenant,
        // Billing
        billing::list_billing_records,
        billing::create_billing_record,
        billing::get_billing_record,
        billing::update_billing_record,
        billing::delete_billing_record,
        billing::preview_charges,
        billing::send_bill_email,
        billing::send_pending_bills_email,
        // Receipts
        receipts::list_receipts,
        receipts::record_payment,
        receipts::update_payment,
        receipts::delete_payment,
        receipts::get_ledger_position,
        // Dashboard
        dashboard::get_dashboard,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<billing::BillingRecordResponse>,
            PaginationParams,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterRequest,
            auth::RegisterResponse,
            auth::ResendVerificationRequest,
            auth::UserInfo,
            auth::ChangePasswordRequest,
            // Houses
            houses::HouseResponse,
            houses::HouseOverviewResponse,
            houses::CreateHouseRequest,
            houses::UpdateHouseRequest,
            houses::ToggleHouseResponse,
            // Rooms
            rooms::RoomResponse,
            rooms::RoomDetailResponse,
            rooms::CreateRoomRequest,
            rooms::UpdateRoomRequest,
            // Tenants
            tenants::TenantResponse,
            tenants::TenantWithRoomResponse,
            tenants::AssignTenantRequest,
            tenants::UpdateTenantRequest,
            tenants::VerificationOutcomeResponse,
            // Billing
            billing::BillingRecordResponse,
            billing::CreateBillingRecordRequest,
            billing::CreateBillingRecordResponse,
            billing::UpdateBillingRecordRequest,
            billing::PreviewChargesRequest,
            billing::PreviewChargesResponse,
            billing::SendBillEmailRequest,
            billing::EmailResultResponse,
            // Receipts
            receipts::PaymentReceiptResponse,
            receipts::LedgerPositionResponse,
            receipts::ReceiptWithLedgerResponse,
            receipts::RecordPaymentRequest,
            receipts::UpdatePaymentRequest,
            // Dashboard
            dashboard::DashboardResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Account registration with email verification, login (JWT), password change"),
        (name = "Houses", description = "House CRUD with occupancy counts"),
        (name = "Rooms", description = "Room management inside houses"),
        (name = "Tenants", description = "Tenant assignment, pricing and email verification"),
        (name = "Billing", description = "Monthly billing records: meter readings, computed charges, bill emails"),
        (name = "Receipts", description = "Payment receipts and the per-tenant ledger position"),
        (name = "Dashboard", description = "Landlord-wide occupancy and income aggregates"),
    ),
    info(
        title = "Texnouz Ijara API",
        version = "1.0.0",
        description = "REST API for property-rental management: houses, rooms, tenants, billing and payments",
        license(name = "MIT"),
        contact(name = "Texnouz", email = "support@texnouz.com")
    )
)]
pub struct ApiDoc;

/// Everything the router needs, bundled to keep the signature sane.
pub struct RouterContext {
    pub repos: Arc<dyn RepositoryProvider>,
    pub db: DatabaseConnection,
    pub jwt_config: JwtConfig,
    pub notifications: Arc<NotificationService>,
    pub property: Arc<PropertyService>,
    pub tenants: Arc<TenantService>,
    pub billing: Arc<BillingService>,
    pub ledger: Arc<LedgerService>,
    pub dashboard: Arc<DashboardService>,
    pub prometheus_handle: PrometheusHandle,
}

/// Create the API router with all routes
pub fn create_api_router(ctx: RouterContext, app_cfg: &AppConfig) -> Router {
    let middleware_state = AuthState {
        jwt_config: ctx.jwt_config.clone(),
    };

    let auth_state = auth::AuthHandlerState {
        repos: ctx.repos.clone(),
        jwt_config: ctx.jwt_config.clone(),
        notifications: ctx.notifications.clone(),
    };

    let house_state = houses::HouseHandlerState {
        property: ctx.property.clone(),
    };

    let room_state = rooms::RoomHandlerState {
        property: ctx.property.clone(),
        tenants: ctx.tenants.clone(),
        billing: ctx.billing.clone(),
    };

    let tenant_state = tenants::TenantHandlerState {
        tenants: ctx.tenants.clone(),
        notifications: ctx.notifications.clone(),
    };

    let billing_state = billing::BillingHandlerState {
        billing: ctx.billing.clone(),
        notifications: ctx.notifications.clone(),
    };

    let receipt_state = receipts::ReceiptHandlerState {
        ledger: ctx.ledger.clone(),
    };

    let dashboard_state = dashboard::DashboardHandlerState {
        dashboard: ctx.dashboard.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Brute-force protection on credential endpoints (per client IP)
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(app_cfg.rate_limit.auth_period_seconds.max(1))
            .burst_size(app_cfg.rate_limit.auth_burst.max(1))
            .finish()
            .expect("valid governor configuration"),
    );

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/verify-email", get(auth::verify_email))
        .route("/resend-verification", post(auth::resend_verification))
        .layer(GovernorLayer::new(governor_conf))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .route("/change-password", put(auth::change_password))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // House routes (protected)
    let house_routes = Router::new()
        .route("/", get(houses::list_houses).post(houses::create_house))
        .route(
            "/{house_id}",
            get(houses::get_house)
                .put(houses::update_house)
                .delete(houses::delete_house),
        )
        .route("/{house_id}/toggle-status", post(houses::toggle_house_status))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(house_state);

    // Rooms nested under houses (protected)
    let house_room_routes = Router::new()
        .route(
            "/{house_id}/rooms",
            get(rooms::list_rooms).post(rooms::create_room),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(room_state.clone());

    // Standalone room routes (protected)
    let room_routes = Router::new()
        .route(
            "/{room_id}",
            get(rooms::get_room_detail)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(room_state);

    // Tenant assignment under rooms (protected)
    let room_tenant_routes = Router::new()
        .route("/{room_id}/tenant", post(tenants::assign_tenant))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(tenant_state.clone());

    // Billing under rooms (protected)
    let room_billing_routes = Router::new()
        .route(
            "/{room_id}/billing-records",
            get(billing::list_billing_records).post(billing::create_billing_record),
        )
        .route(
            "/{room_id}/billing-records/preview",
            post(billing::preview_charges),
        )
        .route(
            "/{room_id}/send-pending-email",
            post(billing::send_pending_bills_email),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(billing_state.clone());

    // Tenant routes (protected)
    let tenant_routes = Router::new()
        .route(
            "/{tenant_id}",
            get(tenants::get_tenant)
                .put(tenants::update_tenant)
                .delete(tenants::remove_tenant),
        )
        .route("/{tenant_id}/send-verification", post(tenants::send_verification))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(tenant_state);

    // Receipts and ledger under tenants (protected)
    let tenant_receipt_routes = Router::new()
        .route(
            "/{tenant_id}/receipts",
            get(receipts::list_receipts).post(receipts::record_payment),
        )
        .route("/{tenant_id}/ledger", get(receipts::get_ledger_position))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(receipt_state.clone());

    // Standalone billing record routes (protected)
    let billing_routes = Router::new()
        .route(
            "/{record_id}",
            get(billing::get_billing_record)
                .put(billing::update_billing_record)
                .delete(billing::delete_billing_record),
        )
        .route("/{record_id}/send-email", post(billing::send_bill_email))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(billing_state);

    // Standalone receipt routes (protected)
    let receipt_routes = Router::new()
        .route(
            "/{receipt_id}",
            put(receipts::update_payment).delete(receipts::delete_payment),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(receipt_state);

    // Dashboard (protected)
    let dashboard_routes = Router::new()
        .route("/", get(dashboard::get_dashboard))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(dashboard_state);

    let health_state = health::HealthState {
        db: ctx.db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = metrics::MetricsState {
        handle: ctx.prometheus_handle,
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health + metrics (no auth)
        .route("/health", get(health::health_check).with_state(health_state))
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Houses
        .nest("/api/v1/houses", house_routes)
        .nest("/api/v1/houses", house_room_routes)
        // Rooms
        .nest("/api/v1/rooms", room_routes)
        .nest("/api/v1/rooms", room_tenant_routes)
        .nest("/api/v1/rooms", room_billing_routes)
        // Tenants
        .nest("/api/v1/tenants", tenant_routes)
        .nest("/api/v1/tenants", tenant_receipt_routes)
        // Billing records
        .nest("/api/v1/billing-records", billing_routes)
        // Receipts
        .nest("/api/v1/receipts", receipt_routes)
        // Dashboard
        .nest("/api/v1/dashboard", dashboard_routes)
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
