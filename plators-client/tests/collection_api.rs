use tokio::net::TcpListener;

use plators_client::{
    AdminFilter, AdminScreen, Category, CategoryFilter, ClientError, ListQuery, ListingView,
    NoticeLevel, PostPayload, PostsClient, PublicScreen,
};
use plators_server::{AppState, InMemoryPostRepository, Settings, demo_posts, serve};

/// Поднимает заглушку коллекции на эфемерном порту и возвращает URL коллекции.
async fn spawn_collection(repo: InMemoryPostRepository) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        let settings = Settings::default();
        serve(listener, &settings, AppState::new(repo))
            .await
            .expect("stub collection must serve");
    });

    format!("http://{addr}/api/posts")
}

fn payload(title: &str, category: Category, published: bool) -> PostPayload {
    PostPayload {
        title: title.to_string(),
        excerpt: "excerpt".to_string(),
        content: "content".to_string(),
        category,
        image_url: None,
        video_url: None,
        published,
    }
}

#[tokio::test]
async fn http_crud_flow() {
    let url = spawn_collection(InMemoryPostRepository::new()).await;
    let client = PostsClient::new(url).expect("client builds");

    let created = client
        .create_post(&payload("draft", Category::Video, false))
        .await
        .expect("create_post must succeed");
    assert_eq!(created.title, "draft");
    assert!(created.created_at.is_some());

    let feed = client
        .list_posts(ListQuery::published())
        .await
        .expect("list_posts must succeed");
    assert!(feed.is_empty());

    let all = client
        .list_posts(ListQuery::manageable())
        .await
        .expect("list_posts must succeed");
    assert_eq!(all.len(), 1);

    let updated = client
        .update_post(created.id, &payload("live", Category::Video, true))
        .await
        .expect("update_post must succeed");
    assert_eq!(updated.id, created.id);
    assert!(updated.published);

    let fetched = client
        .get_post(created.id)
        .await
        .expect("get_post must succeed");
    assert_eq!(fetched.title, "live");

    client
        .delete_post(created.id)
        .await
        .expect("delete_post must succeed");

    let after_delete = client.get_post(created.id).await;
    assert!(matches!(after_delete, Err(ClientError::NotFound)));
}

#[tokio::test]
async fn server_side_category_filter_is_applied() {
    let url = spawn_collection(InMemoryPostRepository::with_posts(demo_posts())).await;
    let client = PostsClient::new(url).expect("client builds");

    let photos = client
        .list_posts(ListQuery {
            published: true,
            category: Some(Category::Photo),
        })
        .await
        .expect("list_posts must succeed");
    assert_eq!(photos.len(), 2);
    assert!(photos.iter().all(|post| post.category == Category::Photo));
}

#[tokio::test]
async fn rejected_payload_maps_to_invalid_request() {
    let url = spawn_collection(InMemoryPostRepository::new()).await;
    let client = PostsClient::new(url).expect("client builds");

    let err = client
        .create_post(&payload("", Category::Text, false))
        .await
        .expect_err("empty title must be rejected");
    assert!(matches!(err, ClientError::InvalidRequest(_)));

    let err = client
        .update_post(404, &payload("x", Category::Text, false))
        .await
        .expect_err("missing post");
    assert!(matches!(err, ClientError::NotFound));
}

#[tokio::test]
async fn unreachable_collection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);

    let client = PostsClient::new(format!("http://{addr}/api/posts")).expect("client builds");
    let err = client
        .list_posts(ListQuery::published())
        .await
        .expect_err("nothing listens on the port");
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn admin_publishes_post_into_public_feed() {
    let url = spawn_collection(InMemoryPostRepository::with_posts(demo_posts())).await;

    let mut feed = PublicScreen::new(PostsClient::new(url.clone()).expect("client builds"));
    feed.mount().await;
    assert_eq!(feed.state().posts().len(), 6);

    let mut admin = AdminScreen::new(PostsClient::new(url).expect("client builds"));
    admin.mount().await;
    assert_eq!(admin.state().counts().all, 6);

    admin.state_mut().open_create();
    {
        let draft = admin.state_mut().editing_mut();
        draft.title = "Новый клип".to_string();
        draft.category = Category::Video;
        draft.video_url = "https://video.example/clip".to_string();
    }
    assert!(admin.save().await);
    assert!(!admin.state().is_dialog_open());
    assert_eq!(admin.state().counts().draft, 1);

    let created_id = admin
        .state()
        .filtered(AdminFilter::Draft)
        .first()
        .map(|post| post.id)
        .expect("draft must be listed");

    feed.mount().await;
    assert_eq!(feed.state().posts().len(), 6);

    assert!(admin.state_mut().open_edit(created_id));
    admin.state_mut().editing_mut().published = true;
    assert!(admin.save().await);

    feed.mount().await;
    feed.state_mut()
        .set_filter(CategoryFilter::Only(Category::Video));
    let ListingView::Cards(cards) = feed.state().view() else {
        panic!("feed must show cards");
    };
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].title, "Новый клип");

    assert!(admin.delete(created_id, |post| post.is_some()).await);
    assert_eq!(admin.state().counts().all, 6);

    let notices = admin.state_mut().drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].title, "Статья удалена");
}
