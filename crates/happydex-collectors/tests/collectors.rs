//! HTTP collectors against a local mock server.

use happydex_collectors::{CollectorClient, CollectorError, Endpoints};
use happydex_core::Source;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CollectorClient {
    CollectorClient::new(5, "happydex-test/0.1")
        .expect("failed to build test client")
        .with_endpoints(Endpoints {
            reddit_base_url: server.uri(),
            mastodon_instances: vec![server.uri(), server.uri()],
        })
}

fn reddit_listing() -> serde_json::Value {
    json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"data": {
                    "id": "a1",
                    "title": "Neighbors rebuilt the playground together",
                    "selftext": "",
                    "score": 120,
                    "num_comments": 14,
                    "permalink": "/r/happy/comments/a1"
                }},
                {"data": {
                    "id": "a2",
                    "title": "ok",
                    "selftext": "",
                    "score": 1,
                    "num_comments": 0,
                    "permalink": "/r/happy/comments/a2"
                }},
                {"data": {
                    "id": "a3",
                    "title": "",
                    "selftext": "",
                    "permalink": "/r/happy/comments/a3"
                }}
            ]
        }
    })
}

fn mastodon_timeline() -> serde_json::Value {
    json!([
        {
            "id": "1001",
            "content": "<p>What a <strong>beautiful</strong> sunrise</p>",
            "url": "https://example.social/@a/1001",
            "favourites_count": 9,
            "reblogs_count": 2
        },
        {
            "id": "1002",
            "content": "<p>:)</p>",
            "url": null,
            "favourites_count": 0,
            "reblogs_count": 0
        }
    ])
}

// ---------------------------------------------------------------------------
// Reddit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subreddit_listing_is_parsed_and_filtered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/happy/new.json"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reddit_listing()))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client_for(&server).subreddit("happy", 5).await.expect("listing");

    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.id, "a1");
    assert_eq!(post.source, Source::Reddit);
    assert_eq!(post.text, "Neighbors rebuilt the playground together.");
    assert_eq!(post.url.as_deref(), Some("https://reddit.com/r/happy/comments/a1"));
    assert_eq!(post.metadata["subreddit"], "happy");
    assert_eq!(post.metadata["original_score"], 120);
}

#[tokio::test]
async fn subreddit_forbidden_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/happy/new.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server).subreddit("happy", 5).await.unwrap_err();
    assert!(
        matches!(err, CollectorError::UnexpectedStatus { status: 403, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn reddit_falls_back_when_every_subreddit_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/r/[^/]+/new\.json$"))
        .respond_with(ResponseTemplate::new(403))
        .expect(3)
        .mount(&server)
        .await;

    let posts = client_for(&server).fetch(Source::Reddit).await.expect("fallback");

    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|p| p.id.starts_with("reddit_fb_")));
}

#[tokio::test]
async fn reddit_samples_live_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/r/[^/]+/new\.json$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reddit_listing()))
        .mount(&server)
        .await;

    let posts = client_for(&server).fetch(Source::Reddit).await.expect("posts");

    // One usable post per subreddit, three subreddits.
    assert_eq!(posts.len(), 3);
    assert!(posts.iter().all(|p| p.id == "a1"));
}

// ---------------------------------------------------------------------------
// Mastodon
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeline_strips_html_and_skips_short_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/timelines/public"))
        .and(query_param("limit", "10"))
        .and(query_param("local", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mastodon_timeline()))
        .mount(&server)
        .await;

    let posts = client_for(&server)
        .timeline(&server.uri(), 10)
        .await
        .expect("timeline");

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].text, "What a beautiful sunrise");
    assert_eq!(posts[0].source, Source::Mastodon);
    assert_eq!(posts[0].metadata["favourites_count"], 9);
    assert!(posts[0].metadata["instance"]
        .as_str()
        .is_some_and(|i| i.starts_with("127.0.0.1")));
}

#[tokio::test]
async fn mastodon_fetch_samples_at_most_two() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/timelines/public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mastodon_timeline()))
        .expect(2)
        .mount(&server)
        .await;

    let posts = client_for(&server).fetch(Source::Mastodon).await.expect("posts");
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn mastodon_fetch_fails_when_every_instance_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/timelines/public"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(Source::Mastodon).await.unwrap_err();
    assert!(
        matches!(err, CollectorError::UnexpectedStatus { status: 503, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn malformed_timeline_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/timelines/public"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .timeline(&server.uri(), 10)
        .await
        .unwrap_err();
    assert!(matches!(err, CollectorError::Http(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Pooled sources
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pooled_sources_need_no_network() {
    let client = CollectorClient::new(0, "happydex-test/0.1").expect("client");
    for (source, expected) in [
        (Source::GoogleTrends, 3),
        (Source::Youtube, 3),
        (Source::News, 2),
        (Source::Twitter, 2),
        (Source::Forums, 2),
    ] {
        let posts = client.fetch(source).await.expect("pooled source");
        assert_eq!(posts.len(), expected, "{source}");
        assert!(posts.iter().all(|p| p.source == source));
    }
}
