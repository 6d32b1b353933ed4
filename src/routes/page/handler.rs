use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    AppState,
    models::VariantRecord,
    utils::{RsidError, messages, validate_rsid},
    view::render_index,
};

use super::model::SearchForm;

pub async fn index(State(state): State<AppState>) -> Response {
    render(&state, None, None, None)
}

#[axum::debug_handler]
pub async fn submit(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    let rsid = form.rsid.trim();

    match validate_rsid(rsid) {
        Err(RsidError::Empty) => render(&state, None, None, Some(messages::EMPTY_RSID)),
        Err(RsidError::InvalidFormat) => render(
            &state,
            Some(rsid),
            None,
            Some(messages::INVALID_FORMAT_FORM),
        ),
        Ok(rsid) => {
            tracing::debug!("Form lookup for {}", rsid);
            match state.lookup(rsid).await {
                Ok(record) => render(&state, Some(rsid), Some(record.as_ref()), None),
                Err(e) => render(&state, Some(rsid), None, Some(e.to_string().as_str())),
            }
        }
    }
}

fn render(
    state: &AppState,
    rsid: Option<&str>,
    info: Option<&VariantRecord>,
    error: Option<&str>,
) -> Response {
    match render_index(&state.templates, rsid, info, error) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<p>Something went wrong. Please try again later.</p>"),
            )
                .into_response()
        }
    }
}
