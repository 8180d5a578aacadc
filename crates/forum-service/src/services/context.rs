//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use forum_common::auth::JwtService;
use forum_core::traits::{
    CommentRepository, NotificationRepository, PostRepository, ProfileRepository, StoreHealth,
};

use crate::notifications::NotificationDispatcher;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container passed to all services. It provides
/// access to:
/// - Repositories
/// - The store readiness probe
/// - JWT service for bearer token verification
/// - The notification queue
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    // Infrastructure
    store_health: Arc<dyn StoreHealth>,
    jwt_service: Arc<JwtService>,
    notifier: NotificationDispatcher,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        store_health: Arc<dyn StoreHealth>,
        jwt_service: Arc<JwtService>,
        notifier: NotificationDispatcher,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
            profile_repo,
            notification_repo,
            store_health,
            jwt_service,
            notifier,
        }
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Infrastructure ===

    /// Get the store readiness probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the notification queue handle
    pub fn notifier(&self) -> &NotificationDispatcher {
        &self.notifier
    }
}

/// Builder for ServiceContext
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    jwt_service: Option<Arc<JwtService>>,
    notifier: Option<NotificationDispatcher>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            post_repo: None,
            comment_repo: None,
            profile_repo: None,
            notification_repo: None,
            store_health: None,
            jwt_service: None,
            notifier: None,
        }
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn notifier(mut self, notifier: NotificationDispatcher) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.post_repo.ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.comment_repo.ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.profile_repo.ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            self.store_health.ok_or_else(|| ServiceError::validation("store_health is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.notifier.ok_or_else(|| ServiceError::validation("notifier is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
