//! Auth middleware.
//!
//! Resolves the request's API token to its owning user. Browsers send the
//! token as the `catalog_token` cookie, other clients as a bearer header.
//! Cookie-authenticated writes must come from the same origin.

use std::sync::Arc;

use catalog_app::auth::AuthServiceError;
use salvo::{
    http::{
        uri::Uri,
        header::{AUTHORIZATION, HOST, ORIGIN},
    },
    prelude::*,
};
use tracing::{debug, error, warn};

use crate::{extensions::*, state::State};

pub(crate) const TOKEN_COOKIE: &str = "catalog_token";

const SEC_FETCH_SITE: &str = "sec-fetch-site";

/// Where the request's token was found.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Bearer(String),
    Cookie(String),
}

impl Token {
    fn as_str(&self) -> &str {
        match self {
            Self::Bearer(token) | Self::Cookie(token) => token,
        }
    }
}

#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing API token"));
        ctrl.skip_rest();

        return;
    };

    if matches!(token, Token::Cookie(_)) && !req.method().is_safe() && !is_same_origin(req) {
        warn!(method = %req.method(), "cross-origin write with cookie token");

        res.render(StatusError::forbidden().brief("Cross-origin request"));
        ctrl.skip_rest();

        return;
    }

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let user = match state.app.auth.authenticate_bearer(token.as_str()).await {
        Ok(user) => user,
        Err(AuthServiceError::NotFound) => {
            debug!("unknown api token");

            res.render(StatusError::unauthorized().brief("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate api token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_user_uuid(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_token(req: &Request) -> Option<Token> {
    bearer_token(req).map(Token::Bearer).or_else(|| {
        req.cookie(TOKEN_COOKIE)
            .map(|cookie| cookie.value().trim().to_string())
            .filter(|token| !token.is_empty())
            .map(Token::Cookie)
    })
}

/// `Sec-Fetch-Site` when the browser sends it, otherwise `Origin` against the
/// request's own host. Requests carrying neither are refused.
fn is_same_origin(req: &Request) -> bool {
    if let Some(site) = req.headers().get(SEC_FETCH_SITE) {
        return matches!(site.to_str(), Ok("same-origin" | "none"));
    }

    let Some(origin) = req
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Uri>().ok())
    else {
        return false;
    };

    let host = req
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| req.uri().authority().map(|authority| authority.as_str()));

    match (origin.authority(), host) {
        (Some(origin), Some(host)) => origin.as_str().eq_ignore_ascii_case(host),
        _ => false,
    }
}

fn bearer_token(req: &Request) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
