//! Behavior-driven tests for partial failures during a run
//!
//! These tests verify HOW a run reacts when some days cannot be fetched or
//! decode badly: which failures are absorbed and which abort the run.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use ratewindow_core::{
    pipeline, render, AggregateError, AggregationMode, CurrencySelection, HttpClient, HttpError,
    HttpRequest, HttpResponse, PayloadError, PipelineError, PipelineOutput, RunConfig,
    StaticHttpClient,
};
use serde_json::json;
use time::{Date, Month};

const HOST: &str = "https://rates.example.test/exchange_rates?date=";
const DAYS: [&str; 3] = ["15.10.2026", "16.10.2026", "17.10.2026"];

fn today() -> Date {
    Date::from_calendar_date(2026, Month::October, 17).expect("valid test date")
}

fn url(day: &str) -> String {
    format!("{HOST}{day}")
}

fn body(date: &str) -> String {
    json!({
        "date": date,
        "exchangeRate": [
            {"currency": "USD", "saleRateNB": 41.3, "purchaseRateNB": 41.3, "saleRate": 41.6, "purchaseRate": 41.1},
            {"currency": "XAU", "saleRateNB": 1500.25, "purchaseRateNB": 1500.25}
        ]
    })
    .to_string()
}

fn config() -> RunConfig {
    RunConfig::new(3)
        .with_host(HOST)
        .with_selection(CurrencySelection::new(["USD", "XAU"]))
}

/// Scripted transport that also records the order of requested URLs.
struct RecordingClient {
    inner: StaticHttpClient,
    seen: Mutex<Vec<HttpRequest>>,
}

impl RecordingClient {
    fn new(inner: StaticHttpClient) -> Self {
        Self {
            inner,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().expect("lock").clone()
    }
}

impl HttpClient for RecordingClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.seen.lock().expect("lock").push(request.clone());
        self.inner.execute(request)
    }
}

fn middle_day_fails_with(failure: impl FnOnce(StaticHttpClient) -> StaticHttpClient) -> StaticHttpClient {
    let client = StaticHttpClient::new()
        .with_response(url(DAYS[0]), HttpResponse::ok_json(body(DAYS[0])))
        .with_response(url(DAYS[2]), HttpResponse::ok_json(body(DAYS[2])));
    failure(client)
}

// =============================================================================
// Absorbed failures
// =============================================================================

#[tokio::test]
async fn failed_day_is_omitted_from_records() {
    // Given: The middle day answers with a server error
    let client = middle_day_fails_with(|c| {
        c.with_response(url(DAYS[1]), HttpResponse::with_status(500, "oops"))
    });

    // When: Records are requested
    let output = pipeline::run_at(&config(), Arc::new(client), today())
        .await
        .expect("status failures are absorbed");

    // Then: Only the two successful days are present
    let PipelineOutput::Records(records) = output else {
        panic!("records were requested");
    };
    let dates: Vec<_> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec![DAYS[0], DAYS[2]]);
}

#[tokio::test]
async fn failed_day_keeps_an_empty_table_section() {
    // Given: The middle day cannot be reached at all
    let client = middle_day_fails_with(|c| {
        c.with_error(url(DAYS[1]), HttpError::connect("connection refused"))
    });

    // When: The table is requested
    let output = pipeline::run_at(&config().with_table(true), Arc::new(client), today())
        .await
        .expect("connection failures are absorbed");

    // Then: Three sections, the middle one without rows
    let PipelineOutput::Table(text) = output else {
        panic!("table was requested");
    };
    let section = |day: &str| {
        let usd = ratewindow_core::CurrencyRateEntry::reference("USD", 41.3, 41.3)
            .with_commercial(41.6, 41.1);
        let xau = ratewindow_core::CurrencyRateEntry::reference("XAU", 1500.25, 1500.25);
        render::row(day, &usd) + &render::row(day, &xau) + &render::footer()
    };
    let expected = render::header() + &section(DAYS[0]) + &render::footer() + &section(DAYS[2]);
    assert_eq!(text, expected);
}

#[tokio::test]
async fn every_day_failing_still_completes() {
    // Given: Nothing is published for the window (the fallback answers 404)
    let client = StaticHttpClient::new();

    let output = pipeline::run_at(&config(), Arc::new(client), today())
        .await
        .expect("a run with no data still completes");

    assert_eq!(output, PipelineOutput::Records(Vec::new()));
}

// =============================================================================
// Fatal failures
// =============================================================================

#[tokio::test]
async fn legacy_mode_aborts_on_the_first_missing_day() {
    let client = middle_day_fails_with(|c| {
        c.with_response(url(DAYS[1]), HttpResponse::with_status(404, ""))
    });
    let recorder = Arc::new(RecordingClient::new(client));

    let error = pipeline::run_at(
        &config().with_mode(AggregationMode::Legacy),
        recorder.clone(),
        today(),
    )
    .await
    .expect_err("legacy mode cannot skip a day");

    assert!(matches!(
        error,
        PipelineError::Aggregate(AggregateError::AbsentPayload { ref url }) if url.ends_with(DAYS[1])
    ));
    // And: The run stopped before fetching the last day
    assert_eq!(recorder.requests().len(), 2);
}

#[tokio::test]
async fn malformed_body_aborts_the_run() {
    // Given: The middle day answers 200 with an unexpected shape
    let client = middle_day_fails_with(|c| {
        c.with_response(url(DAYS[1]), HttpResponse::ok_json(r#"{"error": "no data"}"#))
    });

    let error = pipeline::run_at(&config(), Arc::new(client), today())
        .await
        .expect_err("schema failures are not absorbed");

    assert!(matches!(
        error,
        PipelineError::Payload(PayloadError::Malformed { ref url, .. }) if url.ends_with(DAYS[1])
    ));
}

// =============================================================================
// Request discipline
// =============================================================================

#[tokio::test]
async fn targets_are_fetched_one_at_a_time_in_order_with_configured_timeout() {
    let client = StaticHttpClient::new()
        .with_response(url(DAYS[0]), HttpResponse::ok_json(body(DAYS[0])))
        .with_response(url(DAYS[1]), HttpResponse::ok_json(body(DAYS[1])))
        .with_response(url(DAYS[2]), HttpResponse::ok_json(body(DAYS[2])));
    let recorder = Arc::new(RecordingClient::new(client));

    pipeline::run_at(&config().with_timeout_ms(Some(1_500)), recorder.clone(), today())
        .await
        .expect("all days succeed");

    let requests = recorder.requests();
    let urls: Vec<_> = requests.iter().map(|r| r.url.clone()).collect();
    assert_eq!(urls, DAYS.iter().map(|d| url(d)).collect::<Vec<_>>());
    assert!(requests.iter().all(|r| r.timeout_ms == Some(1_500)));
}
