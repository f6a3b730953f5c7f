use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use breed_wiki::error::AppError;
use breed_wiki::matching::CandidateIndex;
use breed_wiki::report::MatchReport;
use breed_wiki::sources::{extract_links, is_article_href, WikiLink};
use serde::Deserialize;
use serde_json::json;

/// Link as submitted by a caller; `href` may be site-relative or absolute.
#[derive(Debug, Deserialize)]
pub(crate) struct SubmittedLink {
    pub(crate) text: String,
    pub(crate) href: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResolveRequest {
    pub(crate) breeds: Vec<String>,
    #[serde(default)]
    pub(crate) links: Option<Vec<SubmittedLink>>,
    /// Raw HTML of the breed list page, used when `links` is absent.
    #[serde(default)]
    pub(crate) html: Option<String>,
}

pub(crate) fn api_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/breeds/resolve", post(resolve_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn resolve_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let ResolveRequest {
        breeds,
        links,
        html,
    } = payload;

    let links = match (links, html) {
        (Some(links), _) => absolutize(links, &state.wiki_base_url),
        (None, Some(html)) => extract_links(&html, &state.wiki_base_url),
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "either `links` or `html` must be provided".to_string(),
            ))
        }
    };

    let index = CandidateIndex::build(links.iter().map(|link| (&link.text, &link.url)));
    Ok(Json(MatchReport::build(&breeds, &index)))
}

/// Applies the same article filter as page extraction, so callers can post
/// unfiltered link dumps.
fn absolutize(links: Vec<SubmittedLink>, base_url: &str) -> Vec<WikiLink> {
    let base = base_url.trim_end_matches('/');
    links
        .into_iter()
        .filter_map(|link| {
            let url = if is_article_href(&link.href) {
                format!("{base}{}", link.href)
            } else {
                let relative = link.href.strip_prefix(base)?;
                if !is_article_href(relative) {
                    return None;
                }
                link.href
            };
            Some(WikiLink::new(&link.text, url))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    const BASE: &str = "https://en.wikipedia.org";

    fn router(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            wiki_base_url: Arc::from(BASE),
        };
        api_router().layer(Extension(state))
    }

    async fn post_json(router: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::post("/api/v1/breeds/resolve")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn resolve_accepts_link_lists() {
        let (status, body) = post_json(
            router(true),
            json!({
                "breeds": ["Retrievers (Golden)", "Xoloitzcuintli"],
                "links": [
                    { "text": "Golden Retriever", "href": "/wiki/Golden_Retriever" },
                    { "text": "Category", "href": "/wiki/Category:Dog_breeds" },
                ],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["matches"][0]["wikipedia_url"],
            "https://en.wikipedia.org/wiki/Golden_Retriever"
        );
        assert_eq!(body["matches"][0]["kind"], "exact");
        assert_eq!(body["matches"][0]["article_title"], "Golden_Retriever");
        assert_eq!(body["matches"][1]["kind"], "none");
        assert_eq!(body["summary"]["total"], 2);
    }

    #[tokio::test]
    async fn resolve_extracts_links_from_html() {
        let (status, body) = post_json(
            router(true),
            json!({
                "breeds": ["English Cocker Spaniel"],
                "html": "<p><a href=\"/wiki/Cocker_Spaniel\">Cocker Spaniel</a></p>",
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matches"][0]["kind"], "fuzzy");
        assert_eq!(body["matches"][0]["matched_variation"], "cocker spaniel");
    }

    #[tokio::test]
    async fn resolve_requires_a_link_source() {
        let (status, body) = post_json(router(true), json!({ "breeds": ["Beagle"] })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap_or_default().contains("links"));
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = router(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn absolutize_keeps_absolute_article_urls_and_drops_others() {
        let links = absolutize(
            vec![
                SubmittedLink {
                    text: " Beagle ".to_string(),
                    href: "https://en.wikipedia.org/wiki/Beagle".to_string(),
                },
                SubmittedLink {
                    text: "Elsewhere".to_string(),
                    href: "https://example.org/wiki/Beagle".to_string(),
                },
                SubmittedLink {
                    text: "Puli\n  ".to_string(),
                    href: "/wiki/Puli".to_string(),
                },
            ],
            BASE,
        );

        assert_eq!(
            links,
            vec![
                WikiLink {
                    text: "Beagle".to_string(),
                    url: "https://en.wikipedia.org/wiki/Beagle".to_string(),
                },
                WikiLink {
                    text: "Puli".to_string(),
                    url: "https://en.wikipedia.org/wiki/Puli".to_string(),
                },
            ]
        );
    }
}
