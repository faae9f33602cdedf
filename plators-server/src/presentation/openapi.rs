use utoipa::OpenApi;

use crate::domain::post::Category;
use crate::presentation::handlers::posts::{DeletedDto, ListPostsQuery, PostBodyDto, PostDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::posts::list_posts,
        crate::presentation::handlers::posts::get_post,
        crate::presentation::handlers::posts::create_post,
        crate::presentation::handlers::posts::update_post,
        crate::presentation::handlers::posts::delete_post
    ),
    components(
        schemas(
            Category,
            PostBodyDto,
            ListPostsQuery,
            PostDto,
            DeletedDto
        )
    ),
    tags(
        (name = "posts", description = "Post collection endpoints")
    )
)]
pub(crate) struct ApiDoc;
