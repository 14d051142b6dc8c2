use crate::Endpoint;

/// A post as served by the remote API.
///
/// Ids are plain JSON numbers, so they keep the range of a double.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: f64,
    #[serde(rename = "userId")]
    pub user_id: f64,
    pub title: String,
    pub body: String,
}

/// Posts in the order the API returned them
pub type PostList = Vec<Post>;

api!("https://jsonplaceholder.typicode.com/posts" => Post);
