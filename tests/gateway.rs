use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    Router,
};
use http_body_util::BodyExt;
use mfl_gateway::{error::UpstreamError, router, Config, MflClient, QueryParams, Target};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

const API_KEY: &str = "test-key";
const LEAGUE_ID: &str = "54321";

/// Requests seen by the fake upstream: path and decoded query pairs.
type Seen = Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>;

async fn fake_upstream(
    State(seen): State<Seen>,
    uri: Uri,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let path = uri.path().to_string();
    seen.lock().unwrap().push((path.clone(), pairs));

    if path.starts_with("/broken") {
        "<html>maintenance</html>".into_response()
    } else if path.starts_with("/slow") {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Json(json!({"late": true})).into_response()
    } else {
        Json(json!({"foo": "bar"})).into_response()
    }
}

async fn spawn_upstream() -> (SocketAddr, Seen) {
    let seen = Seen::default();
    let app = Router::new().fallback(fake_upstream).with_state(seen.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, seen)
}

fn config(league_host: String, nfl_host: String) -> Config {
    Config {
        api_key: API_KEY.to_string(),
        league_id: LEAGUE_ID.to_string(),
        year: 2024,
        league_host,
        nfl_host,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
    }
}

fn client_for(addr: SocketAddr) -> MflClient {
    MflClient::new(config(
        format!("http://{addr}/league/export"),
        format!("http://{addr}/nfl/export"),
    ))
    .unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Path and query of the most recent upstream call.
fn last_call(seen: &Seen) -> (String, HashMap<String, String>) {
    let calls = seen.lock().unwrap();
    let (path, pairs) = calls.last().expect("no upstream call recorded").clone();
    (path, pairs.into_iter().collect())
}

#[tokio::test]
async fn rosters_forwards_week_and_omits_missing_franchise() {
    let (addr, seen) = spawn_upstream().await;

    let (status, body) = get(router(client_for(addr)), "/rosters?week=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"foo": "bar"}));

    let (path, query) = last_call(&seen);
    assert_eq!(path, "/league/export");
    assert_eq!(query["APIKEY"], API_KEY);
    assert_eq!(query["JSON"], "1");
    assert_eq!(query["TYPE"], "rosters");
    assert_eq!(query["L"], LEAGUE_ID);
    assert_eq!(query["W"], "5");
    assert!(!query.contains_key("FRANCHISE"));
}

#[tokio::test]
async fn zero_is_a_present_value() {
    let (addr, seen) = spawn_upstream().await;

    get(router(client_for(addr)), "/schedule?week=0&franchise_id=0").await;

    let (_, query) = last_call(&seen);
    assert_eq!(query["W"], "0");
    assert_eq!(query["FRANCHISE"], "0");
}

#[tokio::test]
async fn account_routes_skip_league_id() {
    let (addr, seen) = spawn_upstream().await;

    let (status, body) = get(router(client_for(addr)), "/my_leagues?year=2023").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"foo": "bar"}));

    let (path, query) = last_call(&seen);
    assert_eq!(path, "/league/export");
    assert_eq!(query["APIKEY"], API_KEY);
    assert_eq!(query["TYPE"], "myLeagues");
    assert_eq!(query["YEAR"], "2023");
    assert_eq!(query["FRANCHISE_NAMES"], "0");
    assert!(!query.contains_key("L"));
}

#[tokio::test]
async fn nfl_routes_hit_nfl_host_without_credentials() {
    let (addr, seen) = spawn_upstream().await;

    let (status, body) = get(router(client_for(addr)), "/injuries?week=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"foo": "bar"}));

    let (path, query) = last_call(&seen);
    assert_eq!(path, "/nfl/export");
    assert_eq!(query["TYPE"], "injuries");
    assert_eq!(query["W"], "3");
    assert!(!query.contains_key("APIKEY"));
    assert!(!query.contains_key("L"));
}

#[tokio::test]
async fn nfl_schedule_accepts_all() {
    let (addr, seen) = spawn_upstream().await;

    get(router(client_for(addr)), "/nfl_schedule?week=ALL").await;

    let (_, query) = last_call(&seen);
    assert_eq!(query["TYPE"], "nflSchedule");
    assert_eq!(query["W"], "ALL");
}

#[tokio::test]
async fn points_allowed_is_league_scoped() {
    let (addr, seen) = spawn_upstream().await;

    get(router(client_for(addr)), "/points_allowed").await;

    let (path, query) = last_call(&seen);
    assert_eq!(path, "/league/export");
    assert_eq!(query["L"], LEAGUE_ID);
}

#[tokio::test]
async fn adp_treats_false_ppr_as_absent() {
    let (addr, seen) = spawn_upstream().await;

    get(router(client_for(addr)), "/adp?is_ppr=false").await;

    let (_, query) = last_call(&seen);
    assert_eq!(query["TYPE"], "adp");
    assert!(!query.contains_key("IS_PPR"));
    assert!(!query.contains_key("IS_MOCK"));
    assert!(!query.contains_key("L"));
    assert_eq!(query["PERIOD"], "ALL");
    assert_eq!(query["IS_KEEPER"], "NKR");
    assert_eq!(query["DETAILS"], "0");
}

#[tokio::test]
async fn adp_sends_true_flags_as_one() {
    let (addr, seen) = spawn_upstream().await;

    get(
        router(client_for(addr)),
        "/adp?is_ppr=true&is_mock=true&period=AUG15&fcount=12",
    )
    .await;

    let (_, query) = last_call(&seen);
    assert_eq!(query["IS_PPR"], "1");
    assert_eq!(query["IS_MOCK"], "1");
    assert_eq!(query["PERIOD"], "AUG15");
    assert_eq!(query["FCOUNT"], "12");
}

#[tokio::test]
async fn trade_bait_only_sends_draft_pick_flag_when_set() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    get(app.clone(), "/trade_bait").await;
    let (_, query) = last_call(&seen);
    assert!(!query.contains_key("INCLUDE_DRAFT_PICKS"));

    get(app, "/trade_bait?include_draft_picks=true").await;
    let (_, query) = last_call(&seen);
    assert_eq!(query["INCLUDE_DRAFT_PICKS"], "1");
}

#[tokio::test]
async fn transactions_require_a_type() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    let (status, _) = get(app.clone(), "/transactions?week=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(seen.lock().unwrap().is_empty());

    let (status, _) = get(app, "/transactions?transaction_type=*&count=5").await;
    assert_eq!(status, StatusCode::OK);

    let (_, query) = last_call(&seen);
    assert_eq!(query["TRANS_TYPE"], "*");
    assert_eq!(query["COUNT"], "5");
    assert!(!query.contains_key("W"));
}

#[tokio::test]
async fn unknown_enum_value_is_rejected_locally() {
    let (addr, seen) = spawn_upstream().await;

    let (status, _) = get(router(client_for(addr)), "/pool?pool_type=Hockey").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn weekly_results_accepts_year_to_date() {
    let (addr, seen) = spawn_upstream().await;

    get(router(client_for(addr)), "/weekly_results?week=YTD&missing_as_bye=true").await;

    let (_, query) = last_call(&seen);
    assert_eq!(query["W"], "YTD");
    assert_eq!(query["MISSING_AS_BYE"], "1");
}

#[tokio::test]
async fn message_board_defaults_count_and_reads_thread_from_path() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    get(app.clone(), "/message_board").await;
    let (_, query) = last_call(&seen);
    assert_eq!(query["COUNT"], "10");

    get(app, "/message_board_thread/4242").await;
    let (_, query) = last_call(&seen);
    assert_eq!(query["TYPE"], "messageBoardThread");
    assert_eq!(query["THREAD_ID"], "4242");
}

#[tokio::test]
async fn who_should_i_start_can_override_league() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    get(app.clone(), "/who_should_i_start?league_id=999&week=4").await;
    let (_, query) = last_call(&seen);
    assert_eq!(query["L"], "999");
    assert_eq!(query["WEEK"], "4");

    get(app, "/who_should_i_start").await;
    let (_, query) = last_call(&seen);
    assert_eq!(query["L"], LEAGUE_ID);
}

#[tokio::test]
async fn league_search_needs_exactly_one_criterion() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    let (status, body) = get(app.clone(), "/league_search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");

    let (status, _) = get(app.clone(), "/league_search?search_term=dynasty&league_id=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(seen.lock().unwrap().is_empty());

    let (status, _) = get(app, "/league_search?search_term=dynasty").await;
    assert_eq!(status, StatusCode::OK);

    let (_, query) = last_call(&seen);
    assert_eq!(query["TYPE"], "leagueSearch");
    assert_eq!(query["SEARCH"], "dynasty");
    assert!(!query.contains_key("ID"));
}

#[tokio::test]
async fn players_converts_since_to_unix_seconds() {
    let (addr, seen) = spawn_upstream().await;

    get(
        router(client_for(addr)),
        "/players?since=2024-09-01T00:00:00Z&details=true",
    )
    .await;

    let (_, query) = last_call(&seen);
    assert_eq!(query["SINCE"], "1725148800");
    assert_eq!(query["DETAILS"], "1");
    assert!(!query.contains_key("PLAYERS"));
}

#[tokio::test]
async fn non_json_body_is_a_bad_gateway() {
    let (addr, _) = spawn_upstream().await;
    let client = MflClient::new(config(
        format!("http://{addr}/broken/export"),
        format!("http://{addr}/broken/export"),
    ))
    .unwrap();

    let (status, body) = get(router(client), "/league").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "502 Bad Gateway");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let (addr, _) = spawn_upstream().await;
    let client = MflClient::with_timeout(
        config(
            format!("http://{addr}/slow/export"),
            format!("http://{addr}/slow/export"),
        ),
        Duration::from_millis(200),
    )
    .unwrap();

    let (status, _) = get(router(client), "/calendar").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn dispatch_reports_each_failure_kind() {
    let (addr, _) = spawn_upstream().await;

    let broken = MflClient::new(config(
        format!("http://{addr}/broken/export"),
        format!("http://{addr}/broken/export"),
    ))
    .unwrap();
    let err = broken
        .dispatch(Target::League, "league", QueryParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));

    let slow = MflClient::with_timeout(
        config(
            format!("http://{addr}/slow/export"),
            format!("http://{addr}/slow/export"),
        ),
        Duration::from_millis(200),
    )
    .unwrap();
    let err = slow.nfl("injuries", QueryParams::new()).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Timeout(_)));

    let closed = MflClient::new(config(
        "http://127.0.0.1:1/export".to_string(),
        "http://127.0.0.1:1/export".to_string(),
    ))
    .unwrap();
    let err = closed.unscoped("allRules", QueryParams::new()).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Unreachable(_)));
}

#[tokio::test]
async fn health_does_not_call_upstream() {
    let (addr, seen) = spawn_upstream().await;

    let (status, body) = get(router(client_for(addr)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["league_id"], LEAGUE_ID);
    assert_eq!(body["season"], 2024);
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn numeric_and_word_booleans_are_accepted() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    let (status, _) = get(app.clone(), "/live_scoring?details=1").await;
    assert_eq!(status, StatusCode::OK);
    let (_, query) = last_call(&seen);
    assert_eq!(query["DETAILS"], "1");

    let (status, _) = get(app.clone(), "/trade_bait?include_draft_picks=1").await;
    assert_eq!(status, StatusCode::OK);
    let (_, query) = last_call(&seen);
    assert_eq!(query["INCLUDE_DRAFT_PICKS"], "1");

    let (status, _) = get(app.clone(), "/my_leagues?names=yes").await;
    assert_eq!(status, StatusCode::OK);
    let (_, query) = last_call(&seen);
    assert_eq!(query["FRANCHISE_NAMES"], "1");

    let (status, _) = get(app.clone(), "/adp?is_ppr=1&is_mock=off").await;
    assert_eq!(status, StatusCode::OK);
    let (_, query) = last_call(&seen);
    assert_eq!(query["IS_PPR"], "1");
    assert!(!query.contains_key("IS_MOCK"));

    let (status, _) = get(app, "/league_standings?web=ON&all_fields=0").await;
    assert_eq!(status, StatusCode::OK);
    let (_, query) = last_call(&seen);
    assert_eq!(query["WEB"], "1");
    assert_eq!(query["ALL"], "0");
}

#[tokio::test]
async fn unrecognised_boolean_is_rejected() {
    let (addr, seen) = spawn_upstream().await;

    let (status, body) = get(router(client_for(addr)), "/live_scoring?details=maybe").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn players_treats_naive_since_as_utc() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    let (status, _) = get(app.clone(), "/players?since=2024-09-01T00:00:00").await;
    assert_eq!(status, StatusCode::OK);
    let (_, query) = last_call(&seen);
    assert_eq!(query["SINCE"], "1725148800");

    let (status, _) = get(app, "/players?since=2024-09-01").await;
    assert_eq!(status, StatusCode::OK);
    let (_, query) = last_call(&seen);
    assert_eq!(query["SINCE"], "1725148800");
}

#[tokio::test]
async fn extractor_rejections_use_json_error_body() {
    let (addr, seen) = spawn_upstream().await;
    let app = router(client_for(addr));

    let (status, body) = get(app.clone(), "/transactions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");
    assert!(body["message"].as_str().unwrap().contains("transaction_type"));

    let (status, body) = get(app, "/message_board_thread/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");

    assert!(seen.lock().unwrap().is_empty());
}
