pub mod create_post;
pub mod delete_post;
pub mod query_posts;
pub mod update_post;

pub use create_post::{CreatePostUseCase, PostInput};
pub use delete_post::DeletePostUseCase;
pub use query_posts::{GetPostUseCase, ListPostsUseCase, SearchPostsUseCase};
pub use update_post::UpdatePostUseCase;
