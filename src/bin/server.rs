// railplan: integrated fleet scheduling and maintenance planning for rail vehicles
// Copyright (C) 2026 The railplan Authors
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Thin HTTP façade in front of [`railplan::plan`]: `POST
//! /run_optimizer` builds a synthetic instance from the request body and solves
//! it; `GET /api/status` is a liveness probe.
//!
//! The builder is not reentrancy-safe: a `tokio::sync::Mutex` serializes
//! solves across concurrent requests, logging at `warn` when a request has to
//! wait behind another one.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::warn;
use serde::Serialize;
use serde_json::json;
use tokio::sync::Mutex;

use railplan::config::PlanRequest;
use railplan::{fixtures, PlanError};

#[derive(Clone)]
struct AppState {
    /// Guards the single-threaded, synchronous solve: only one solve runs
    /// at a time per process.
    solve_lock: Arc<Mutex<()>>,
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init_timed();

    let state = AppState { solve_lock: Arc::new(Mutex::new(())) };
    let app = Router::new()
        .route("/run_optimizer", post(run_optimizer))
        .route("/api/status", get(status))
        .with_state(state);

    let addr = "0.0.0.0:8080";
    log::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn run_optimizer(State(state): State<AppState>, body: Option<Json<PlanRequest>>) -> impl IntoResponse {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let cfg = request.into_config();

    let instance = match fixtures::generate(&cfg) {
        Ok(instance) => instance,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorBody { error: e.to_string() })).into_response();
        }
    };

    let guard = state.solve_lock.try_lock();
    let _permit = match guard {
        Ok(permit) => permit,
        Err(_) => {
            warn!("solve requested while another solve is in progress; waiting");
            state.solve_lock.lock().await
        }
    };

    match railplan::plan(&instance, cfg.time_limit()) {
        Ok(result) => Json(result).into_response(),
        Err(PlanError::Infeasible) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { error: "instance is infeasible".to_string() }))
                .into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: e.to_string() })).into_response(),
    }
}

async fn status() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
