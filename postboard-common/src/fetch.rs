use postboard_api::{
    posts::{Post, PostList},
    Endpoint,
};
use reqwest::Client;
use std::fmt;
use tracing::{debug, error};

#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or its body could not be read
    Network(reqwest::Error),
    /// The server answered outside of the 2xx range
    Status(u16),
    /// The body is not a list of posts
    Json(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::FetchError::*;

        match self {
            Network(e) => write!(f, "Request failed: {}", e),
            Status(code) => write!(f, "Network error: {}", code),
            Json(e) => write!(f, "Invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(e) => Some(e),
            FetchError::Status(_) => None,
            FetchError::Json(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Reads the post list from a remote endpoint
#[derive(Clone, Debug)]
pub struct PostsClient {
    client: Client,
    endpoint: String,
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new(Post::endpoint())
    }
}

impl PostsClient {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        PostsClient {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a single GET and decodes the body.
    ///
    /// Any status outside of 200-299 is an error, even if the body would decode.
    pub async fn try_fetch_posts(&self) -> Result<PostList> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let posts = serde_json::from_str::<PostList>(&body)?;
        debug!("Fetched {} posts from {}", posts.len(), &self.endpoint);
        Ok(posts)
    }

    /// Fetches the posts, or logs why it couldn't and returns an empty list.
    ///
    /// Callers can't tell a failure apart from an endpoint that has no posts.
    pub async fn fetch_posts(&self) -> PostList {
        self.try_fetch_posts().await.unwrap_or_else(|e| {
            error!("Error fetching posts: {}", e);
            PostList::new()
        })
    }
}

/// Fetches from the default endpoint
pub async fn fetch_posts() -> PostList {
    PostsClient::default().fetch_posts().await
}
