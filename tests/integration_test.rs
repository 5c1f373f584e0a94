use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

mod common;

#[tokio::test]
async fn test_root_status() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = common::send(common::create_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "Cla! Engine is Running 🚀"}));
}

#[tokio::test]
async fn test_health_live() {
    let request = Request::builder()
        .uri("/health/live")
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(common::create_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_info() {
    let request = Request::builder()
        .uri("/health/info")
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(common::create_test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "cla-engine");
}

#[tokio::test]
async fn test_404_not_found() {
    let request = Request::builder()
        .uri("/nonexistent/path")
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(common::create_test_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_feasible_plan() {
    let (status, body) = common::post_plan(&common::plan_body(100)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["coverage"], 100);
    assert_eq!(body["missing_pages"], 0);

    let plan = body["plan"].as_array().unwrap();
    assert_eq!(plan.len(), 10);
    assert_eq!(plan[0]["date"], "2026-10-18");
    assert_eq!(plan[9]["date"], "2026-10-27");
    assert!(plan.iter().all(|day| day["type"] == "study"));

    let first = &plan[0]["tasks"][0];
    assert_eq!(
        first,
        &json!({
            "time_start": "09:00",
            "time_end": "09:50",
            "pages_start": 0,
            "pages_end": 22,
            "exercises": 12,
            "input_strategy": "Leggi con attenzione.",
            "process_strategy": "Rielabora mentalmente.",
            "psycho_tip": "🔋 **Energy:** Cerca solo i concetti macro."
        })
    );

    // 22.5 pages per cycle, two cycles a day: the book ends on the third day.
    let last = &plan[2]["tasks"][0];
    assert_eq!(last["pages_start"], 90);
    assert_eq!(last["pages_end"], 100);
    assert_eq!(last["exercises"], 5);
    assert_eq!(plan[3]["tasks"], json!([]));
}

#[tokio::test]
async fn test_infeasible_plan_uses_overdrive() {
    let (status, body) = common::post_plan(&common::plan_body(1000)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "impossible");
    assert_eq!(body["missing_pages"], 460);
    assert_eq!(body["coverage"], 47);

    let ends: Vec<i64> = body["plan"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|day| day["tasks"].as_array().unwrap().iter())
        .map(|task| task["pages_end"].as_i64().unwrap())
        .collect();
    assert_eq!(ends.len(), 20);
    for (k, end) in ends.iter().enumerate() {
        assert_eq!(*end, (23.5 * (k + 1) as f64) as i64);
    }
}

#[tokio::test]
async fn test_spaced_repetition_adds_review_block() {
    let mut request = common::plan_body(100);
    request["profile"]["review_mode"] = json!("Spaced Repetition");
    let (_, body) = common::post_plan(&request).await;

    assert_eq!(body["status"], "success");
    for day in body["plan"].as_array().unwrap() {
        let tasks = day["tasks"].as_array().unwrap();
        assert_eq!(
            tasks[0],
            json!({"time": "09:00", "title": "Review", "desc": "Ripasso spaced repetition"})
        );
        assert!(tasks.len() <= 2);
    }
}

#[tokio::test]
async fn test_off_days_follow_active_weekdays() {
    let mut request = common::plan_body(100);
    request["profile"]["active_days"] = json!(["Monday", "Wednesday"]);
    let (_, body) = common::post_plan(&request).await;

    let plan = body["plan"].as_array().unwrap();
    // 2026-10-18 is a Sunday.
    assert_eq!(plan[0]["type"], "off");
    assert_eq!(plan[0]["tasks"], json!([]));
    assert_eq!(plan[1]["type"], "study");
    assert_eq!(plan[2]["type"], "off");
    assert_eq!(plan[3]["type"], "study");
}

#[tokio::test]
async fn test_progress_shifts_remaining_work() {
    let mut request = common::plan_body(100);
    request["current_page"] = json!(90);
    request["days_passed"] = json!(8);
    let (_, body) = common::post_plan(&request).await;

    assert_eq!(body["status"], "success");
    let plan = body["plan"].as_array().unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0]["date"], "2026-10-18");
    let cycle = &plan[0]["tasks"][0];
    assert_eq!(cycle["pages_start"], 90);
    assert_eq!(cycle["pages_end"], 100);
}

#[tokio::test]
async fn test_completed_plan() {
    let mut request = common::plan_body(100);
    request["current_page"] = json!(100);
    let (status, body) = common::post_plan(&request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "completed", "msg": "Hai finito!"}));
}

#[tokio::test]
async fn test_no_active_days_is_inline_error() {
    let mut request = common::plan_body(100);
    request["profile"]["active_days"] = json!([]);
    let (status, body) = common::post_plan(&request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "Nessun giorno attivo selezionato"}));
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let mut request = common::plan_body(100);
    request.as_object_mut().unwrap().remove("speed");
    let (status, body) = common::post_plan(&request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_transcriber_penalty_compounds_with_review() {
    let mut request = common::plan_body(1000);
    request["profile"]["instincts"] = json!(["Il Trascrittore"]);
    request["profile"]["review_mode"] = json!("Spaced Repetition");
    let (_, body) = common::post_plan(&request).await;

    // 18.9 pages/hour over (120 - 20) * 10 minutes.
    assert_eq!(body["status"], "impossible");
    assert_eq!(body["missing_pages"], 1000 - 315);
    let cycle = &body["plan"][0]["tasks"][1];
    assert_eq!(cycle["process_strategy"], "🛑 **Filtro:** Solo 3 parole chiave per paragrafo.");
}
