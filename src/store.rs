use std::sync::RwLock;

use crate::structs::post::Post;

/// Storage operations the handlers rely on. A file or database backed store
/// can replace [`InMemoryPostStore`] without touching the route handlers.
pub trait PostRepository {
    fn list(&self) -> Vec<Post>;
    fn append(&self, title: String, content: String) -> Post;
    fn find_by_id(&self, id: i64) -> Option<Post>;
    fn update_by_id(&self, id: i64, title: Option<String>, content: Option<String>)
        -> Option<Post>;
    fn remove_by_id(&self, id: i64) -> bool;
}

/// Process-lifetime post collection. The lock is held for the whole
/// read-modify-write sequence of each operation, so id assignment and the
/// append it feeds cannot interleave across requests.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl PostRepository for InMemoryPostStore {
    fn list(&self) -> Vec<Post> {
        self.posts.read().expect("posts lock poisoned").clone()
    }

    fn append(&self, title: String, content: String) -> Post {
        let mut posts = self.posts.write().expect("posts lock poisoned");

        // Next id comes from the last element, not the max of all ids.
        let id = match posts.last() {
            Some(last) => last.id + 1,
            None => 1,
        };

        let post = Post { id, title, content };
        posts.push(post.clone());
        post
    }

    fn find_by_id(&self, id: i64) -> Option<Post> {
        self.posts
            .read()
            .expect("posts lock poisoned")
            .iter()
            .find(|post| post.id == id)
            .cloned()
    }

    fn update_by_id(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Option<Post> {
        let mut posts = self.posts.write().expect("posts lock poisoned");
        let post = posts.iter_mut().find(|post| post.id == id)?;

        if let Some(title) = title {
            post.title = title;
        }
        if let Some(content) = content {
            post.content = content;
        }

        Some(post.clone())
    }

    fn remove_by_id(&self, id: i64) -> bool {
        let mut posts = self.posts.write().expect("posts lock poisoned");

        match posts.iter().position(|post| post.id == id) {
            Some(index) => {
                posts.remove(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortField {
    Title,
    Content,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Stable, case-insensitive sort on the requested field. Equal keys keep
/// their original relative order in both directions.
pub fn sort_posts(mut posts: Vec<Post>, field: SortField, direction: SortDirection) -> Vec<Post> {
    let key = |post: &Post| match field {
        SortField::Title => post.title.to_lowercase(),
        SortField::Content => post.content.to_lowercase(),
    };

    posts.sort_by(|a, b| match direction {
        SortDirection::Asc => key(a).cmp(&key(b)),
        SortDirection::Desc => key(b).cmp(&key(a)),
    });

    posts
}

/// The fixed posts present at process start.
pub fn seed_posts() -> Vec<Post> {
    [
        (1, "First post", "This is the first post."),
        (2, "Second post", "This is the second post."),
        (3, "a post about dogs", "This is the first post about a dog."),
        (4, "Flask", "This is a post about flask"),
        (5, "Test", "this post is about testing"),
        (6, "nothing really", "this post is just for fun"),
    ]
    .into_iter()
    .map(|(id, title, content)| Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
    })
    .collect()
}
