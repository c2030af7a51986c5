use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, info, instrument};

use super::{
    catalog::{self, DEFAULT_USER_ID},
    dto::{parse_id, User},
};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api/user", get(get_user))
}

/// GET /api/user?id=<n>
///
/// Unknown, unparsable and sentinel ids all get the default user back
/// straight away; purchases are only looked up for real catalog users.
#[instrument(skip(state, query))]
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<User> {
    let id = query
        .iter()
        .find(|(k, _)| k == "id")
        .and_then(|(_, v)| parse_id(v));

    let entry = match id
        .and_then(catalog::find)
        .filter(|e| e.id != DEFAULT_USER_ID)
    {
        Some(e) => e,
        None => {
            debug!(?id, "no catalog match; serving default user");
            return Json(User::from(catalog::default_entry()));
        }
    };

    let mut user = User::from(entry);
    let enrichment = state.purchases.get_purchases(user.id).await;
    let degraded = enrichment.is_fallback();
    user.set_purchase_list(enrichment.into_purchases());

    info!(
        user_id = user.id,
        purchases = user.purchase_list.len(),
        degraded,
        "user served"
    );
    Json(user)
}
