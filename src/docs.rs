//! OpenAPI document served by Swagger UI and Scalar.
//!
//! The `*Response` structs below only describe response envelopes for the
//! document; handlers return the generic `DataResponse`/`Paginated` types.

#![allow(dead_code)]

use rekap_auth::{Principal, TokenPair};
use rekap_models::{
    AccessTokenResponse, AuthResponse, BranchStats, DailySummary, LoginRequest,
    RangeSummaryRow, RefreshTokenRequest, RegisterRequest, Transaction, User,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::modules::summary::service::RangeSummaryResponse;
use crate::router::PingResponse;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(ToSchema)]
pub struct TransactionResponse {
    pub data: Transaction,
}

#[derive(ToSchema)]
pub struct TransactionListResponse {
    pub data: Vec<Transaction>,
}

#[derive(ToSchema)]
pub struct PaginatedTransactions {
    pub data: Vec<Transaction>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

#[derive(ToSchema)]
pub struct DailySummaryResponse {
    pub data: DailySummary,
}

#[derive(ToSchema)]
pub struct BranchListResponse {
    pub data: Vec<BranchStats>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::ping,
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::users::controller::get_me,
        crate::modules::transactions::controller::get_transactions,
        crate::modules::transactions::controller::get_transaction_by_trx_no,
        crate::modules::transactions::controller::get_transactions_by_branch,
        crate::modules::summary::controller::get_daily_summary,
        crate::modules::summary::controller::get_range_summary,
        crate::modules::branches::controller::get_branches,
    ),
    components(
        schemas(
            User,
            Principal,
            TokenPair,
            RegisterRequest,
            LoginRequest,
            RefreshTokenRequest,
            AuthResponse,
            AccessTokenResponse,
            Transaction,
            TransactionResponse,
            TransactionListResponse,
            PaginatedTransactions,
            DailySummary,
            DailySummaryResponse,
            RangeSummaryRow,
            RangeSummaryResponse,
            BranchStats,
            BranchListResponse,
            PingResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Authentication", description = "Registration, login and token refresh"),
        (name = "Users", description = "The authenticated account"),
        (name = "Transactions", description = "Point-of-sale transaction records"),
        (name = "Summary", description = "Revenue and volume aggregates"),
        (name = "Branches", description = "Per-branch statistics")
    ),
    info(
        title = "Rekap API",
        version = "0.1.0",
        description = "Authenticated reporting API over laundry point-of-sale transactions.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

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
                        .build(),
                ),
            )
        }
    }
}
