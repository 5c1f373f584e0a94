#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use lopdf::dictionary;
use lopdf::{Document, Object};
use serde_json::{json, Value};
use tower::ServiceExt;

use cla_backend_rust::calendar::FixedCalendar;
use cla_backend_rust::config::Config;
use cla_backend_rust::services::document::PdfPageCounter;
use cla_backend_rust::state::AppState;

/// A Sunday.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn create_test_app() -> Router {
    let state = AppState::with_collaborators(
        Config::default(),
        Arc::new(FixedCalendar(reference_date())),
        Arc::new(PdfPageCounter),
    );
    cla_backend_rust::create_app(state)
}

pub fn plan_body(total_pages: i64) -> Value {
    json!({
        "profile": {
            "instincts": [],
            "focus_quality": "Normale",
            "emotional_enemy": "Nessuno",
            "chronotype": "Allodola",
            "review_mode": "Nessuno",
            "exercise_mode": "Equilibrato",
            "active_days": [
                "Monday", "Tuesday", "Wednesday", "Thursday",
                "Friday", "Saturday", "Sunday"
            ]
        },
        "speed": 2.0,
        "total_pages": total_pages,
        "days_total": 10,
        "daily_hours": 2,
        "start_hour_str": "09:00"
    })
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn post_plan(body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/generate_plan")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(create_test_app(), request).await
}

/// Minimal PDF with `count` blank A4 pages.
pub fn pdf_with_pages(count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..count)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}
