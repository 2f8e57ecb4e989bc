use crate::net::types::NewsStatus;

use super::comments::CommentQuery;
use super::gallery::GalleryQuery;
use super::news::NewsQuery;
use super::schedule::ScheduleQuery;
use super::school_info::SchoolInfoQuery;

#[test]
fn empty_queries_produce_no_pairs() {
    assert!(NewsQuery::default().query_pairs().is_empty());
    assert!(SchoolInfoQuery::default().query_pairs().is_empty());
    assert!(GalleryQuery::default().query_pairs().is_empty());
    assert!(ScheduleQuery::default().query_pairs().is_empty());
    assert!(CommentQuery::default().query_pairs().is_empty());
}

#[test]
fn news_query_pairs_keep_wire_names_and_order() {
    let query = NewsQuery {
        status: Some(NewsStatus::Published),
        limit: Some(25),
        skip: Some(50),
    };
    assert_eq!(
        query.query_pairs(),
        vec![
            ("status", "published".to_owned()),
            ("limit", "25".to_owned()),
            ("skip", "50".to_owned()),
        ]
    );
}

#[test]
fn school_info_query_passes_section_through() {
    let query = SchoolInfoQuery { section: Some("history".to_owned()) };
    assert_eq!(query.query_pairs(), vec![("section", "history".to_owned())]);
}

#[test]
fn gallery_query_includes_only_set_fields() {
    let query = GalleryQuery {
        category: Some("sports".to_owned()),
        limit: None,
        skip: Some(10),
    };
    assert_eq!(
        query.query_pairs(),
        vec![("category", "sports".to_owned()), ("skip", "10".to_owned())]
    );
}

#[test]
fn comment_query_encodes_moderation_flag() {
    let query = CommentQuery {
        news_id: Some("n-1".to_owned()),
        approved_only: Some(false),
        limit: None,
        skip: None,
    };
    assert_eq!(
        query.query_pairs(),
        vec![("news_id", "n-1".to_owned()), ("approved_only", "false".to_owned())]
    );
}
