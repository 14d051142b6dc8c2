use postboard_common::{render_posts, FetchError, PostsClient, StaticPage};
use serde_json::json;
use std::{
    io,
    net::TcpListener,
    sync::{Arc, Mutex},
};
use tracing::instrument::WithSubscriber;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Collects everything the fmt subscriber writes
#[derive(Clone, Default)]
struct Logs(Arc<Mutex<Vec<u8>>>);

impl Logs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Logs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn subscriber(logs: &Logs) -> impl tracing::Subscriber + Send + Sync {
    let logs = logs.clone();
    tracing_subscriber::fmt()
        .with_writer(move || logs.clone())
        .with_ansi(false)
        .finish()
}

async fn serve(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn client(server: &MockServer) -> PostsClient {
    PostsClient::new(format!("{}/posts", server.uri()))
}

#[tokio::test]
async fn renders_fetched_posts_in_order() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!([
        {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
        {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"},
        {"userId": 2, "id": 11, "title": "et ea vero", "body": "delectus reiciendis"},
    ])))
    .await;

    let posts = client(&server).fetch_posts().await;
    assert_eq!(posts.len(), 3);

    let page = StaticPage::new("Posts");
    render_posts(&page, &posts).unwrap();
    let cards = page.cards();
    assert_eq!(
        cards
            .iter()
            .map(|c| (c.title.as_str(), c.body.as_str(), c.user_id))
            .collect::<Vec<_>>(),
        vec![
            ("sunt aut facere", "quia et suscipit", 1.0),
            ("qui est esse", "est rerum tempore", 1.0),
            ("et ea vero", "delectus reiciendis", 2.0),
        ]
    );
}

#[tokio::test]
async fn ids_beyond_32_bits_still_render() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!([
        {"userId": 1, "id": 3_000_000_000u64, "title": "wide id", "body": "a"},
        {"userId": 4_294_967_296u64, "id": 2, "title": "wide author", "body": "b"},
    ])))
    .await;

    let posts = client(&server).try_fetch_posts().await.unwrap();
    let page = StaticPage::new("Posts");
    render_posts(&page, &posts).unwrap();

    let cards = page.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "wide id");
    assert_eq!(cards[1].author_label(), "User ID: 4294967296");
}

#[tokio::test]
async fn empty_array_gives_no_cards() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let posts = client(&server).fetch_posts().await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn not_found_is_logged_and_empty() {
    let server = serve(ResponseTemplate::new(404)).await;
    let logs = Logs::default();

    let posts = client(&server)
        .fetch_posts()
        .with_subscriber(subscriber(&logs))
        .await;
    assert!(posts.is_empty());

    let page = StaticPage::new("Posts");
    render_posts(&page, &posts).unwrap();
    assert!(page.cards().is_empty());

    let logs = logs.contents();
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("Error fetching posts: Network error: 404"));
}

#[tokio::test]
async fn server_error_is_rejected_even_with_a_valid_body() {
    let server = serve(ResponseTemplate::new(500).set_body_json(json!([
        {"userId": 1, "id": 1, "title": "t", "body": "b"},
    ])))
    .await;

    match client(&server).try_fetch_posts().await {
        Err(FetchError::Status(500)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_is_empty() {
    let server = serve(
        ResponseTemplate::new(200).set_body_raw("[{\"userId\": 1,", "application/json"),
    )
    .await;
    let logs = Logs::default();

    let posts = client(&server)
        .fetch_posts()
        .with_subscriber(subscriber(&logs))
        .await;
    assert!(posts.is_empty());
    assert!(logs.contents().contains("Invalid JSON"));
}

#[tokio::test]
async fn wrong_shape_is_a_json_error() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({"posts": []}))).await;

    match client(&server).try_fetch_posts().await {
        Err(FetchError::Json(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_is_empty() {
    // Nothing listens on a port once its listener is gone
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/posts", listener.local_addr().unwrap());
    drop(listener);

    let client = PostsClient::new(endpoint);
    match client.try_fetch_posts().await {
        Err(FetchError::Network(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(client.fetch_posts().await.is_empty());
}

#[tokio::test]
async fn invalid_url_is_empty() {
    let client = PostsClient::new("not a url");
    assert!(matches!(
        client.try_fetch_posts().await,
        Err(FetchError::Network(_))
    ));
    assert!(client.fetch_posts().await.is_empty());
}
