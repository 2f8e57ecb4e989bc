use super::*;

#[test]
fn roles_and_statuses_use_lowercase_wire_names() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&NewsStatus::Published).unwrap(), "\"published\"");

    assert_eq!(UserRole::parse("moderator"), Some(UserRole::Moderator));
    assert_eq!(UserRole::parse("superuser"), None);
    assert_eq!(NewsStatus::parse("archived"), Some(NewsStatus::Archived));
    assert_eq!(NewsStatus::parse(""), None);
}

#[test]
fn news_status_maps_to_labels_and_badges() {
    assert_eq!(NewsStatus::Draft.label(), "Черновик");
    assert_eq!(NewsStatus::Published.badge_class(), "badge badge--published");
    assert_eq!(NewsStatus::Archived.as_str(), "archived");
}

#[test]
fn update_payloads_omit_unset_fields() {
    assert_eq!(serde_json::to_string(&NewsUpdate::default()).unwrap(), "{}");

    let only_status = NewsUpdate { status: Some(NewsStatus::Draft), ..Default::default() };
    assert_eq!(serde_json::to_string(&only_status).unwrap(), "{\"status\":\"draft\"}");

    let approve = CommentUpdate { is_approved: Some(true) };
    assert_eq!(serde_json::to_string(&approve).unwrap(), "{\"is_approved\":true}");
}

#[test]
fn contact_kind_serializes_as_type() {
    let contact = ContactCreate {
        kind: "phone".to_owned(),
        label: "Приёмная".to_owned(),
        value: "+7 900 000-00-00".to_owned(),
        order: 1,
    };
    let json: serde_json::Value = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["type"], "phone");
    assert!(json.get("kind").is_none());
}

#[test]
fn login_response_parses_server_shape() {
    let raw = r#"{
        "access_token": "tok-123",
        "token_type": "bearer",
        "user": {
            "id": "u-1",
            "email": "admin@school.com",
            "full_name": "School Administrator",
            "role": "admin",
            "is_active": true,
            "created_at": "2025-09-01T10:00:00",
            "updated_at": "2025-09-01T10:00:00"
        }
    }"#;

    let resp: LoginResponse = serde_json::from_str(raw).expect("login response");
    assert_eq!(resp.access_token, "tok-123");
    assert_eq!(resp.user.role, UserRole::Admin);
    assert!(resp.user.is_active);
}

#[test]
fn site_stats_ignores_unknown_fields() {
    let raw = r#"{
        "total_visits": 0,
        "daily_visits": 0,
        "total_users": 3,
        "total_news": 12,
        "total_comments": 40,
        "pending_comments": 5,
        "date": "2025-09-01T10:00:00"
    }"#;

    let stats: SiteStats = serde_json::from_str(raw).expect("stats");
    assert_eq!(stats.total_news, 12);
    assert_eq!(stats.pending_comments, 5);
}
