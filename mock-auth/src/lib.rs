//! Mock of the auth service login endpoint, for pointing the load test at
//! something local. Accepts one configured credential pair and hands back
//! a throwaway token; everything else gets a 401.

use axum::{debug_handler, extract::State, http::StatusCode, routing::post, Json, Router};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use metrics::counter;
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// The credential pair the mock accepts.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// The pair the load test submits.
    pub fn demo() -> Self {
        Self {
            email: "me9@me.com".to_string(),
            password: "secret".to_string(),
        }
    }
}

#[derive(Clone)]
struct AppState {
    credentials: Credentials,
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub message: &'static str,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

pub async fn run(addr: SocketAddr, credentials: Credentials) {
    run_limited(addr, credentials, None).await
}

/// Same as [`run`], but logins above `max_tps` get a 500 so overload
/// behavior can be exercised.
pub async fn run_limited(
    addr: SocketAddr,
    credentials: Credentials,
    max_tps: Option<NonZeroU32>,
) {
    let state = AppState {
        credentials,
        limiter: max_tps.map(|tps| Arc::new(RateLimiter::direct(Quota::per_second(tps)))),
    };

    let app = Router::new()
        .route("/auth/login", post(login))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[debug_handler]
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<ErrorResponse>)> {
    counter!("mock-auth.logins").increment(1);
    TPS_MEASURE.fetch_add(1, Ordering::Relaxed);

    if let Some(limiter) = &state.limiter {
        if limiter.check().is_err() {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "rate limit exceeded",
                }),
            ));
        }
    }

    if payload.email != state.credentials.email || payload.password != state.credentials.password {
        debug!("rejected login for {}", payload.email);
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "invalid credentials",
            }),
        ));
    }

    Ok(Json(TokenResponse {
        message: "success",
        token: fresh_token(),
    }))
}

/// Stand-in for the real service's signed JWT.
fn fresh_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/** TPS Printer **/

static TPS_MEASURE: AtomicU64 = AtomicU64::new(0);

pub async fn tps_measure_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let logins = TPS_MEASURE.fetch_min(0, Ordering::Relaxed);
        println!("{logins} TPS");
    }
}
