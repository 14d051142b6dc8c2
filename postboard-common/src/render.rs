use askama_escape::{escape, Html};
use postboard_api::posts::Post;

/// Id of the element that holds the post cards
pub const CONTAINER_ID: &str = "posts-container";

/// The part of a post that ends up on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: String,
    pub user_id: f64,
}

impl Card {
    pub const CLASS: &'static str = "bg-white rounded shadow p-4 flex flex-col justify-between";
    pub const TITLE_CLASS: &'static str = "text-xl font-semibold mb-2";
    pub const BODY_CLASS: &'static str = "text-gray-700 mb-4";
    pub const AUTHOR_CLASS: &'static str = "text-sm text-gray-500";

    /// `User ID: 3`, with integral ids printed without a fraction
    pub fn author_label(&self) -> String {
        format!("User ID: {}", self.user_id)
    }

    /// Markup of the card, with title and body escaped
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="{class}">
    <h2 class="{title_class}">{title}</h2>
    <p class="{body_class}">{body}</p>
    <span class="{author_class}">{author}</span>
</div>"#,
            class = Self::CLASS,
            title_class = Self::TITLE_CLASS,
            title = escape(&self.title, Html),
            body_class = Self::BODY_CLASS,
            body = escape(&self.body, Html),
            author_class = Self::AUTHOR_CLASS,
            author = self.author_label(),
        )
    }
}

impl<'a> From<&'a Post> for Card {
    fn from(post: &'a Post) -> Self {
        Card {
            title: post.title.clone(),
            body: post.body.clone(),
            user_id: post.user_id,
        }
    }
}

/// A document the cards can be rendered into
pub trait Page {
    type Container: Container;

    /// Looks up an element by id
    fn container(&self, id: &str) -> Option<Self::Container>;
}

/// An element cards get appended to
pub trait Container {
    type Error;

    /// Removes everything the element currently contains
    fn clear(&self) -> Result<(), Self::Error>;

    fn append_card(&self, card: &Card) -> Result<(), Self::Error>;
}

/// Replaces the content of the posts container with one card per post.
///
/// Does nothing if the page has no such container. Errors only come from the
/// page itself failing to build elements.
pub fn render_posts<P: Page>(
    page: &P,
    posts: &[Post],
) -> Result<(), <P::Container as Container>::Error> {
    let container = match page.container(CONTAINER_ID) {
        Some(container) => container,
        None => return Ok(()),
    };

    container.clear()?;
    for post in posts {
        container.append_card(&Card::from(post))?;
    }
    Ok(())
}
