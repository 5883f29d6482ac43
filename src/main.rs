use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    http::{Response, StatusCode},
    routing::get,
    Router,
};
use booster::BoosterStats;
use cards::{Card, Rarity};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

mod booster;
mod cards;

#[derive(Debug, PartialEq)]
pub enum GenError {
    InvalidConfiguration(String),
    SelectionExhausted(Rarity),
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::InvalidConfiguration(message) => write!(f, "{message}"),
            GenError::SelectionExhausted(rarity) => write!(
                f,
                "Failed to select a {rarity:?} card after {} attempts.",
                booster::MAX_ATTEMPTS
            ),
        }
    }
}

impl std::error::Error for GenError {}

pub type Res<T> = Result<T, GenError>;

pub struct AppState {
    pool: Arc<Vec<Card>>,
    stats: BoosterStats,
}

#[derive(serde::Serialize)]
struct Resp {
    message: String,
    success: bool,
}

impl Resp {
    fn axum<S: ToString>(message: S, status: StatusCode) -> Response<String> {
        match serde_json::ser::to_string(&Self {
            message: message.to_string(),
            success: status == StatusCode::OK,
        }) {
            Ok(body) => {
                let mut resp = Response::new(body);
                *resp.status_mut() = status;
                resp
            }
            Err(e) => {
                let mut resp = Response::new(format!("Failed to JSON encode response: {e}"));
                *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                resp
            }
        }
    }

    fn e500<S: ToString>(message: S) -> Response<String> {
        Self::axum(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn e422<S: ToString>(message: S) -> Response<String> {
        Self::axum(message, StatusCode::UNPROCESSABLE_ENTITY)
    }
}

async fn boosters_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<booster::handlers::BoosterQuery>,
) -> Response<String> {
    booster::handlers::handle_booster_request(state, query).await
}

async fn load_card_pool(data: &Path) -> Result<Vec<Card>, String> {
    let cards = cards::set::load_cards(data).await?;
    tracing::debug!("Succesfully loaded card pool of {} cards.", cards.len());
    Ok(cards)
}

#[tokio::main]
async fn main() {
    const USAGE: &str = "Usage: boostergen <static path> <data path> <port>";

    let content = std::env::args().nth(1).expect(USAGE);
    let data = std::env::args().nth(2).expect(USAGE);
    let port = std::env::args()
        .nth(3)
        .map(|s| u16::from_str_radix(&s, 10).expect(&format!("Invalid port number: {s}")))
        .expect(USAGE);

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let pool = match load_card_pool(&PathBuf::from(data)).await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to load card pool: {e}"),
    };

    let state = AppState {
        pool: Arc::new(pool),
        stats: BoosterStats::default(),
    };

    let app = Router::new()
        .fallback_service(ServeDir::new(content).append_index_html_on_directories(true))
        .route("/api/boosters", get(boosters_handler))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect(&format!("Failed to open port {port}"));

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Closed due to error: {e}");
    }
}
