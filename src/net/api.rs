//! Per-resource call groups over the authenticated HTTP pipeline.
//!
//! Each group is a thin mapping from an operation to a verb and a path
//! under the API base. Callers supply path parameters and/or a JSON body
//! and get the parsed response back; everything cross-cutting (bearer
//! attach, 401 eviction) happens in [`super::http`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Authentication and account bootstrap.
pub mod auth {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{InitAdminResponse, LoginRequest, LoginResponse, RegisterRequest, User};

    pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        http::post("/auth/login", credentials).await
    }

    /// Admin-only: create another panel account.
    pub async fn register(account: &RegisterRequest) -> Result<User, ApiError> {
        http::post("/auth/register", account).await
    }

    /// Profile of the authenticated user.
    pub async fn me() -> Result<User, ApiError> {
        http::get("/auth/me").await
    }

    /// Bootstrap the first admin account; the backend refuses once any
    /// user exists.
    pub async fn init_admin() -> Result<InitAdminResponse, ApiError> {
        http::post_empty("/init-admin").await
    }
}

pub mod users {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{Message, User, UserUpdate};

    pub async fn list() -> Result<Vec<User>, ApiError> {
        http::get("/users").await
    }

    pub async fn update(id: &str, changes: &UserUpdate) -> Result<User, ApiError> {
        http::put(&format!("/users/{id}"), changes).await
    }

    pub async fn delete(id: &str) -> Result<Message, ApiError> {
        http::delete(&format!("/users/{id}")).await
    }
}

pub mod news {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{Message, NewsCreate, NewsItem, NewsStatus, NewsUpdate};

    /// Filter/pagination parameters for the news list, passed through as
    /// query pairs.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct NewsQuery {
        pub status: Option<NewsStatus>,
        pub limit: Option<u32>,
        pub skip: Option<u32>,
    }

    impl NewsQuery {
        pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
            let mut pairs = Vec::new();
            if let Some(status) = self.status {
                pairs.push(("status", status.as_str().to_owned()));
            }
            if let Some(limit) = self.limit {
                pairs.push(("limit", limit.to_string()));
            }
            if let Some(skip) = self.skip {
                pairs.push(("skip", skip.to_string()));
            }
            pairs
        }
    }

    pub async fn list(query: &NewsQuery) -> Result<Vec<NewsItem>, ApiError> {
        http::get_query("/news", &query.query_pairs()).await
    }

    pub async fn get(id: &str) -> Result<NewsItem, ApiError> {
        http::get(&format!("/news/{id}")).await
    }

    pub async fn create(item: &NewsCreate) -> Result<NewsItem, ApiError> {
        http::post("/news", item).await
    }

    pub async fn update(id: &str, changes: &NewsUpdate) -> Result<NewsItem, ApiError> {
        http::put(&format!("/news/{id}"), changes).await
    }

    pub async fn delete(id: &str) -> Result<Message, ApiError> {
        http::delete(&format!("/news/{id}")).await
    }
}

pub mod school_info {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{Message, SchoolInfoCreate, SchoolInfoItem, SchoolInfoUpdate};

    #[derive(Clone, Debug, Default)]
    pub struct SchoolInfoQuery {
        pub section: Option<String>,
    }

    impl SchoolInfoQuery {
        pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
            self.section
                .as_ref()
                .map(|section| ("section", section.clone()))
                .into_iter()
                .collect()
        }
    }

    pub async fn list(query: &SchoolInfoQuery) -> Result<Vec<SchoolInfoItem>, ApiError> {
        http::get_query("/school-info", &query.query_pairs()).await
    }

    pub async fn create(item: &SchoolInfoCreate) -> Result<SchoolInfoItem, ApiError> {
        http::post("/school-info", item).await
    }

    pub async fn update(id: &str, changes: &SchoolInfoUpdate) -> Result<SchoolInfoItem, ApiError> {
        http::put(&format!("/school-info/{id}"), changes).await
    }

    pub async fn delete(id: &str) -> Result<Message, ApiError> {
        http::delete(&format!("/school-info/{id}")).await
    }
}

pub mod gallery {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{GalleryCreate, GalleryItem, GalleryUpdate, Message};

    #[derive(Clone, Debug, Default)]
    pub struct GalleryQuery {
        pub category: Option<String>,
        pub limit: Option<u32>,
        pub skip: Option<u32>,
    }

    impl GalleryQuery {
        pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
            let mut pairs = Vec::new();
            if let Some(category) = &self.category {
                pairs.push(("category", category.clone()));
            }
            if let Some(limit) = self.limit {
                pairs.push(("limit", limit.to_string()));
            }
            if let Some(skip) = self.skip {
                pairs.push(("skip", skip.to_string()));
            }
            pairs
        }
    }

    pub async fn list(query: &GalleryQuery) -> Result<Vec<GalleryItem>, ApiError> {
        http::get_query("/gallery", &query.query_pairs()).await
    }

    pub async fn create(item: &GalleryCreate) -> Result<GalleryItem, ApiError> {
        http::post("/gallery", item).await
    }

    pub async fn update(id: &str, changes: &GalleryUpdate) -> Result<GalleryItem, ApiError> {
        http::put(&format!("/gallery/{id}"), changes).await
    }

    pub async fn delete(id: &str) -> Result<Message, ApiError> {
        http::delete(&format!("/gallery/{id}")).await
    }
}

pub mod contacts {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{Contact, ContactCreate, ContactUpdate, Message};

    pub async fn list() -> Result<Vec<Contact>, ApiError> {
        http::get("/contacts").await
    }

    pub async fn create(contact: &ContactCreate) -> Result<Contact, ApiError> {
        http::post("/contacts", contact).await
    }

    pub async fn update(id: &str, changes: &ContactUpdate) -> Result<Contact, ApiError> {
        http::put(&format!("/contacts/{id}"), changes).await
    }

    pub async fn delete(id: &str) -> Result<Message, ApiError> {
        http::delete(&format!("/contacts/{id}")).await
    }
}

pub mod schedule {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{Message, ScheduleCreate, ScheduleEntry, ScheduleUpdate};

    #[derive(Clone, Copy, Debug, Default)]
    pub struct ScheduleQuery {
        pub limit: Option<u32>,
        pub skip: Option<u32>,
    }

    impl ScheduleQuery {
        pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
            let mut pairs = Vec::new();
            if let Some(limit) = self.limit {
                pairs.push(("limit", limit.to_string()));
            }
            if let Some(skip) = self.skip {
                pairs.push(("skip", skip.to_string()));
            }
            pairs
        }
    }

    pub async fn list(query: &ScheduleQuery) -> Result<Vec<ScheduleEntry>, ApiError> {
        http::get_query("/schedule", &query.query_pairs()).await
    }

    pub async fn create(entry: &ScheduleCreate) -> Result<ScheduleEntry, ApiError> {
        http::post("/schedule", entry).await
    }

    pub async fn update(id: &str, changes: &ScheduleUpdate) -> Result<ScheduleEntry, ApiError> {
        http::put(&format!("/schedule/{id}"), changes).await
    }

    pub async fn delete(id: &str) -> Result<Message, ApiError> {
        http::delete(&format!("/schedule/{id}")).await
    }
}

pub mod comments {
    use crate::net::http::{self, ApiError};
    use crate::net::types::{Comment, CommentUpdate, Message};

    #[derive(Clone, Debug, Default)]
    pub struct CommentQuery {
        pub news_id: Option<String>,
        /// The backend defaults to approved-only for non-moderators; the
        /// moderation page sends `false` to see the whole queue.
        pub approved_only: Option<bool>,
        pub limit: Option<u32>,
        pub skip: Option<u32>,
    }

    impl CommentQuery {
        pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
            let mut pairs = Vec::new();
            if let Some(news_id) = &self.news_id {
                pairs.push(("news_id", news_id.clone()));
            }
            if let Some(approved_only) = self.approved_only {
                pairs.push(("approved_only", approved_only.to_string()));
            }
            if let Some(limit) = self.limit {
                pairs.push(("limit", limit.to_string()));
            }
            if let Some(skip) = self.skip {
                pairs.push(("skip", skip.to_string()));
            }
            pairs
        }
    }

    pub async fn list(query: &CommentQuery) -> Result<Vec<Comment>, ApiError> {
        http::get_query("/comments", &query.query_pairs()).await
    }

    pub async fn update(id: &str, changes: &CommentUpdate) -> Result<Comment, ApiError> {
        http::put(&format!("/comments/{id}"), changes).await
    }

    pub async fn delete(id: &str) -> Result<Message, ApiError> {
        http::delete(&format!("/comments/{id}")).await
    }
}

pub mod stats {
    use crate::net::http::{self, ApiError};
    use crate::net::types::SiteStats;

    pub async fn get() -> Result<SiteStats, ApiError> {
        http::get("/stats").await
    }
}
