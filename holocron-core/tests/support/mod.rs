//! Shared fixtures for core integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use holocron_model::MovieRecord;

pub fn movie(title: &str, episode: i32, release_date: &str) -> MovieRecord {
    MovieRecord::new(title, episode, release_date, format!("{title} opening crawl"))
        .expect("valid test movie")
}

/// The three-film catalog used by the documented scenario.
pub fn scenario_films() -> Vec<MovieRecord> {
    vec![
        movie("A New Hope", 4, "1977-05-25"),
        movie("Attack of the Clones", 2, "2002-05-16"),
        movie("The Phantom Menace", 1, "1999-05-19"),
    ]
}

/// The six films in the order the public endpoint lists them.
pub fn saga_films() -> Vec<MovieRecord> {
    vec![
        movie("A New Hope", 4, "1977-05-25"),
        movie("The Empire Strikes Back", 5, "1980-05-17"),
        movie("Return of the Jedi", 6, "1983-05-25"),
        movie("The Phantom Menace", 1, "1999-05-19"),
        movie("Attack of the Clones", 2, "2002-05-16"),
        movie("Revenge of the Sith", 3, "2005-05-19"),
    ]
}

pub fn films_body(films: &[MovieRecord]) -> String {
    serde_json::json!({
        "count": films.len(),
        "next": null,
        "previous": null,
        "results": films,
    })
    .to_string()
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: Arc<str>,
    hits: Arc<AtomicUsize>,
}

/// Local HTTP server standing in for the film endpoint.
pub struct FilmServer {
    pub films_url: String,
    hits: Arc<AtomicUsize>,
    _task: tokio::task::JoinHandle<()>,
}

impl FilmServer {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = ServerState {
            status,
            body: Arc::from(body.into()),
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/api/films/", get(films_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr: SocketAddr = listener.local_addr().expect("listener addr");

        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test server");
        });

        Self {
            films_url: format!("http://{addr}/api/films/?format=json"),
            hits,
            _task: task,
        }
    }

    pub async fn serving(films: &[MovieRecord]) -> Self {
        Self::start(StatusCode::OK, films_body(films)).await
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn films_handler(State(state): State<ServerState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.to_string(),
    )
}
