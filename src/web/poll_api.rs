use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::reply::{self, Reply, Response};

use crate::error::HttpError;
use crate::polls::{self, CreatePollSettings, Id, PollView};
use crate::store::PollStore;
use super::models::{ListQuery, ReactionRequest, VoteRequest};

pub fn list_polls(query: ListQuery, store: Arc<PollStore>, origin: String) -> Response {
    let now = Utc::now();
    match store.list_all() {
        Ok(polls) => {
            let listed = polls::public_polls(polls, query.sort, now);
            let views: Vec<PollView> = listed.iter()
                .map(|poll| PollView::evaluate(poll, &origin, now))
                .collect();
            reply::json(&views).into_response()
        },
        Err(err) => error_response(err.into()),
    }
}

pub fn get_poll(id: Uuid, store: Arc<PollStore>, origin: String) -> Response {
    let now = Utc::now();
    match store.get_by_id(&Id::from(id)) {
        Ok(Some(poll)) => reply::json(&PollView::evaluate(&poll, &origin, now)).into_response(),
        Ok(None) => reply::with_status("No poll found", StatusCode::NOT_FOUND).into_response(),
        Err(err) => error_response(err.into()),
    }
}

pub fn new_poll(settings: CreatePollSettings, store: Arc<PollStore>, origin: String) -> Response {
    let now = Utc::now();
    match store.create(settings, now) {
        Ok(poll) => {
            let body = reply::json(&PollView::evaluate(&poll, &origin, now));
            reply::with_status(body, StatusCode::CREATED).into_response()
        },
        Err(err) => error_response(err.into()),
    }
}

pub fn cast_vote(id: Uuid, request: VoteRequest, store: Arc<PollStore>, origin: String) -> Response {
    let now = Utc::now();
    match polls::vote(&store, &Id::from(id), &request.option_id, now) {
        Ok(Some(poll)) => reply::json(&PollView::evaluate(&poll, &origin, now)).into_response(),
        Ok(None) => reply::with_status("No poll found", StatusCode::NOT_FOUND).into_response(),
        Err(err) => error_response(err.into()),
    }
}

pub fn add_reaction(id: Uuid, request: ReactionRequest, store: Arc<PollStore>, origin: String) -> Response {
    let now = Utc::now();
    match polls::react(&store, &Id::from(id), request.kind) {
        Ok(Some(poll)) => reply::json(&PollView::evaluate(&poll, &origin, now)).into_response(),
        Ok(None) => reply::with_status("No poll found", StatusCode::NOT_FOUND).into_response(),
        Err(err) => error_response(err.into()),
    }
}

fn error_response(err: HttpError) -> Response {
    if err.code.is_server_error() {
        log::error!("{err}");
    }
    reply::with_status(err.to_string(), err.code).into_response()
}
