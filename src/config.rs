use postboard_api::{posts::Post, Endpoint};
use std::env::var;

pub struct Config {
    pub endpoint: String,
    pub page_title: String,
    pub output: Option<String>,
}

lazy_static! {
    pub static ref CONFIG: Config = Config {
        endpoint: var("POSTS_ENDPOINT").unwrap_or_else(|_| Post::endpoint().to_owned()),
        page_title: var("PAGE_TITLE").unwrap_or_else(|_| "Posts".to_owned()),
        output: var("POSTS_OUTPUT").ok().filter(|s| !s.is_empty()),
    };
}
