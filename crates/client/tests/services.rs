//! Integration tests: typed endpoint services against a mock backend.

use chrono::{TimeZone, Utc};
use gatescan_client::{ClientError, EventsApi, InvitesApi, ScanApi};
use gatescan_domain::{ScanMethod, ScanVerifyRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod support;

fn event_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "bannerImage": "https://cdn.gatescan.app/banners/1.png",
        "startDate": "2026-08-21",
        "endDate": "2026-08-22",
        "startTime": "18:00",
        "endTime": "23:00",
        "status": "published",
        "accessRole": "scanner",
        "timingStatus": "upcoming",
        "totalTicketsPurchased": "120",
        "totalBuyers": "95"
    })
}

#[tokio::test]
async fn events_listing_decodes_and_paginates() {
    let ctx = support::setup().await;
    ctx.seed_tokens("T1", Some("R1")).await;

    Mock::given(method("GET"))
        .and(path("/scan/events"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [event_json("ev-1", "Summer Fest"), event_json("ev-2", "Jazz Night")],
            "page": 2,
            "pageSize": 10,
            "total": 23
        })))
        .mount(&ctx.server)
        .await;

    let events = EventsApi::new(ctx.client.clone());
    let page = events.events(2, 10).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Summer Fest");
    assert_eq!(page.items[1].access_role, "scanner");
    assert!(page.has_more());
}

#[tokio::test]
async fn event_summary_decodes_ticket_breakdown() {
    let ctx = support::setup().await;
    ctx.seed_tokens("T1", Some("R1")).await;

    Mock::given(method("GET"))
        .and(path("/events/ev-1/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totals": {"sold": 120, "scanned": 46, "unscanned": 74},
            "byTicket": [
                {"ticketId": "t-1", "ticketName": "GA", "type": "general",
                 "sold": 100, "scanned": 40, "unscanned": 60},
                {"ticketId": "t-2", "ticketName": "VIP", "type": "vip",
                 "sold": 20, "scanned": 6, "unscanned": 14}
            ]
        })))
        .mount(&ctx.server)
        .await;

    let events = EventsApi::new(ctx.client.clone());
    let summary = events.event_summary("ev-1").await.unwrap();

    assert_eq!(summary.totals.scanned, 46);
    assert_eq!(summary.by_ticket.len(), 2);
    assert_eq!(summary.by_ticket[1].ticket_type, "vip");
}

#[tokio::test]
async fn event_summary_not_found_carries_backend_message() {
    let ctx = support::setup().await;
    ctx.seed_tokens("T1", Some("R1")).await;

    Mock::given(method("GET"))
        .and(path("/events/missing/summary"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Event not found"})),
        )
        .mount(&ctx.server)
        .await;

    let events = EventsApi::new(ctx.client.clone());
    let err = events.event_summary("missing").await.unwrap_err();

    match err {
        ClientError::Status { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Event not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn scan_verify_posts_camel_case_body() {
    let ctx = support::setup().await;
    ctx.seed_tokens("T1", Some("R1")).await;

    Mock::given(method("POST"))
        .and(path("/scan/verify"))
        .and(body_partial_json(json!({
            "eventId": "ev-1",
            "code": "QR-9000",
            "method": "qr"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "outcome": "admitted",
            "ticket": {"ticketId": "t-1", "ticketName": "GA",
                       "holder": "Pat Smith", "email": "pat@example.com"},
            "scan": {"gate": "north", "method": "qr", "deviceId": null,
                     "scannedAt": "2026-08-21T18:03:00Z"},
            "stats": {"scanned": 47, "total": 120}
        })))
        .mount(&ctx.server)
        .await;

    let scan = ScanApi::new(ctx.client.clone());
    let request = ScanVerifyRequest {
        event_id: "ev-1".to_string(),
        code: "QR-9000".to_string(),
        method: ScanMethod::Qr,
        timestamp: Utc.with_ymd_and_hms(2026, 8, 21, 18, 3, 0).unwrap(),
        signature: "sig-1".to_string(),
    };
    let response = scan.verify(&request).await.unwrap();

    assert_eq!(response.outcome, "admitted");
    assert_eq!(response.ticket.holder, "Pat Smith");
    assert!(response.scan.device_id.is_none());
    assert_eq!(response.stats.scanned, 47);
}

#[tokio::test]
async fn pending_invites_and_accept_round_trip() {
    let ctx = support::setup().await;
    ctx.seed_tokens("T1", Some("R1")).await;

    Mock::given(method("GET"))
        .and(path("/invites/me/pending-invites"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "inv-1",
                "emailMasked": "a***@b.com",
                "role": "scanner",
                "scopePreview": {"eventName": "Summer Fest"},
                "expiresAt": "2026-08-20T00:00:00Z",
                "eventImage": "https://cdn.gatescan.app/banners/1.png",
                "eventStartDate": "2026-08-21"
            }],
            "page": 1,
            "pageSize": 20,
            "total": 1
        })))
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/invites/inv-1/accept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userId": "u-1",
            "email": "a@b.com",
            "roleAttached": "scanner",
            "acceptedAt": "2026-08-07T12:00:00Z"
        })))
        .mount(&ctx.server)
        .await;

    let invites = InvitesApi::new(ctx.client.clone());

    let page = invites.pending_invites(1, 20).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].scope_preview.event_name, "Summer Fest");
    assert!(!page.has_more());

    let accepted = invites.accept_invite("inv-1").await.unwrap();
    assert_eq!(accepted.role_attached, "scanner");
    assert_eq!(accepted.accepted_at, Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap());
}

#[tokio::test]
async fn no_content_responses_decode_as_unit() {
    let ctx = support::setup().await;
    ctx.seed_tokens("T1", Some("R1")).await;

    Mock::given(method("POST"))
        .and(path("/scan/heartbeat"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&ctx.server)
        .await;

    let result: Result<(), _> = ctx.client.post_empty("/scan/heartbeat").await;
    assert!(result.is_ok());
}
