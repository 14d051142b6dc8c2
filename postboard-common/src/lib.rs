extern crate askama_escape;
extern crate postboard_api;
extern crate reqwest;
extern crate serde_json;

pub mod fetch;
pub mod page;
pub mod render;

pub use fetch::{fetch_posts, FetchError, PostsClient};
pub use page::StaticPage;
pub use postboard_api::posts::{Post, PostList};
pub use render::{render_posts, Card, Container, Page, CONTAINER_ID};
