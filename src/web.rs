mod models;
mod poll_api;

use std::env;
use std::sync::Arc;

use uuid::Uuid;
use warp::Filter;

use crate::store::PollStore;

pub async fn setup(store: Arc<PollStore>) {
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(3000);
    let origin = env::var("PUBLIC_ORIGIN")
        .unwrap_or_else(|_| format!("http://localhost:{port}"));

    let with_store = warp::any().map(move || Arc::clone(&store));
    let with_origin = warp::any().map(move || origin.clone());

    // Define the routes
    let list_polls = warp::get()
        .and(warp::path!("api" / "polls"))
        .and(warp::query::<models::ListQuery>())
        .and(with_store.clone())
        .and(with_origin.clone())
        .map(poll_api::list_polls);

    let get_poll = warp::get()
        .and(warp::path!("api" / "poll" / Uuid))
        .and(with_store.clone())
        .and(with_origin.clone())
        .map(poll_api::get_poll);

    let new_poll = warp::post()
        .and(warp::path!("api" / "poll"))
        .and(warp::body::json())
        .and(with_store.clone())
        .and(with_origin.clone())
        .map(poll_api::new_poll);

    let cast_vote = warp::post()
        .and(warp::path!("api" / "poll" / Uuid / "vote"))
        .and(warp::body::json())
        .and(with_store.clone())
        .and(with_origin.clone())
        .map(poll_api::cast_vote);

    let add_reaction = warp::post()
        .and(warp::path!("api" / "poll" / Uuid / "reaction"))
        .and(warp::body::json())
        .and(with_store.clone())
        .and(with_origin.clone())
        .map(poll_api::add_reaction);

    // Start the server
    let routes = list_polls
        .or(get_poll)
        .or(new_poll)
        .or(cast_vote)
        .or(add_reaction);

    log::info!("listening on port {port}");
    warp::serve(routes).run(([0, 0, 0, 0], port)).await;
}
