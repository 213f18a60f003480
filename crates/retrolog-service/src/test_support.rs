//! Shared fixture for service tests.

use std::sync::Arc;

use retrolog_auth::jwt::JwtEncoder;
use retrolog_auth::password::{PasswordHasher, PasswordValidator};
use retrolog_core::config::AuthConfig;
use retrolog_database::repositories::{CommentRepository, PostRepository, UserRepository};
use retrolog_database::testing::TestDatabase;
use retrolog_entity::user::User;

use crate::{AccountService, CommentService, PostService};

pub struct Fixture {
    _db: TestDatabase,
    pub auth_config: AuthConfig,
    pub accounts: AccountService,
    pub posts: PostService,
    pub comments: CommentService,
}

impl Fixture {
    pub async fn new() -> Self {
        let db = TestDatabase::new().await;
        let auth_config = AuthConfig {
            jwt_secret: "service-test-secret".to_string(),
            ..AuthConfig::default()
        };

        let users = Arc::new(UserRepository::new(db.pool()));
        let posts = Arc::new(PostRepository::new(db.pool()));
        let comments = Arc::new(CommentRepository::new(db.pool()));

        Self {
            accounts: AccountService::new(
                users,
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&auth_config)),
                Arc::new(JwtEncoder::new(&auth_config)),
            ),
            posts: PostService::new(posts.clone()),
            comments: CommentService::new(comments, posts),
            auth_config,
            _db: db,
        }
    }

    pub async fn user(&self, username: &str) -> User {
        self.accounts
            .signup(username, "password123")
            .await
            .expect("signup")
    }
}
