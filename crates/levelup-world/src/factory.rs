//! Course world factory
//!
//! Hands out one `CourseWorld` per course id, constructed on first use and
//! cached for the factory's lifetime. The factory is meant to live for one
//! logical request and be discarded; there is no invalidation, so a
//! longer-lived host process would need to rebuild the factory when course
//! configuration changes identity.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use levelup_core::{
    Config, Result,
    config::as_int,
    defaults::{CONTEXT_SYSTEM, SITE_COURSE_ID},
};

use crate::course_world::CourseWorld;

/// Source of per-course worlds.
#[async_trait]
pub trait CourseWorldFactory: Send {
    /// Get the world for a course, the same instance on every call with an
    /// equivalent id.
    async fn get_world(&mut self, course_id: i64) -> Result<Arc<CourseWorld>>;
}

/// Memoizing world factory.
pub struct WorldFactory {
    admin_config: Arc<dyn Config>,
    pool: PgPool,
    /// Whether the add-on was set up for the whole site. Read once at
    /// construction and fixed for the factory's lifetime.
    for_whole_site: bool,
    worlds: HashMap<i64, Arc<CourseWorld>>,
}

impl WorldFactory {
    /// Constructor.
    ///
    /// Reads the `context` admin setting to decide the operating mode.
    ///
    /// # Errors
    /// - `Error::Database` if the admin config cannot be read
    pub async fn new(admin_config: Arc<dyn Config>, pool: PgPool) -> Result<Self> {
        let context = admin_config.get("context").await?;
        let for_whole_site = as_int(&context) == Some(CONTEXT_SYSTEM);

        Ok(Self {
            admin_config,
            pool,
            for_whole_site,
            worlds: HashMap::new(),
        })
    }

    pub fn is_for_whole_site(&self) -> bool {
        self.for_whole_site
    }
}

#[async_trait]
impl CourseWorldFactory for WorldFactory {
    async fn get_world(&mut self, course_id: i64) -> Result<Arc<CourseWorld>> {
        // When the add-on was set up for the whole site, every course is
        // served by the world attached to the site course.
        let course_id = if self.for_whole_site {
            SITE_COURSE_ID
        } else {
            course_id
        };

        let admin_config = self.admin_config.clone();
        let pool = self.pool.clone();
        let world = self.worlds.entry(course_id).or_insert_with(|| {
            debug!("Constructing world for course {}", course_id);
            Arc::new(CourseWorld::new(admin_config, pool, course_id))
        });
        Ok(Arc::clone(world))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use levelup_core::admin_config::AdminConfig;
    use levelup_core::defaults::default_admin_config;
    use levelup_core::settings_store::MemorySettingsStore;
    use serde_json::json;

    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://localhost/unreachable").unwrap()
    }

    async fn admin_with_context(context: serde_json::Value) -> Arc<dyn Config> {
        let admin = AdminConfig::new(
            Arc::new(MemorySettingsStore::new()),
            Arc::new(default_admin_config()),
        );
        admin.set("context", context).await.unwrap();
        Arc::new(admin)
    }

    #[tokio::test]
    async fn test_same_course_returns_cached_instance() {
        let admin: Arc<dyn Config> = Arc::new(AdminConfig::new(
            Arc::new(MemorySettingsStore::new()),
            Arc::new(default_admin_config()),
        ));
        let mut factory = WorldFactory::new(admin, lazy_pool()).await.unwrap();
        assert!(!factory.is_for_whole_site());

        let first = factory.get_world(5).await.unwrap();
        let second = factory.get_world(5).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.course_id(), 5);
    }

    #[tokio::test]
    async fn test_different_courses_get_different_worlds() {
        let admin: Arc<dyn Config> = Arc::new(AdminConfig::new(
            Arc::new(MemorySettingsStore::new()),
            Arc::new(default_admin_config()),
        ));
        let mut factory = WorldFactory::new(admin, lazy_pool()).await.unwrap();

        let five = factory.get_world(5).await.unwrap();
        let nine = factory.get_world(9).await.unwrap();
        assert!(!Arc::ptr_eq(&five, &nine));
        assert_eq!(nine.course_id(), 9);
    }

    #[tokio::test]
    async fn test_whole_site_mode_collapses_to_site_course() {
        let admin = admin_with_context(json!(CONTEXT_SYSTEM)).await;
        let mut factory = WorldFactory::new(admin, lazy_pool()).await.unwrap();
        assert!(factory.is_for_whole_site());

        let five = factory.get_world(5).await.unwrap();
        let nine = factory.get_world(9).await.unwrap();
        assert!(Arc::ptr_eq(&five, &nine));
        assert_eq!(five.course_id(), SITE_COURSE_ID);
    }

    #[tokio::test]
    async fn test_whole_site_mode_accepts_stringly_stored_context() {
        // The storage layer may hand the context back as a numeric string.
        let admin = admin_with_context(json!(CONTEXT_SYSTEM.to_string())).await;
        let factory = WorldFactory::new(admin, lazy_pool()).await.unwrap();
        assert!(factory.is_for_whole_site());
    }

    #[tokio::test]
    async fn test_mode_is_fixed_at_construction() {
        let store = Arc::new(MemorySettingsStore::new());
        let admin: Arc<dyn Config> = Arc::new(AdminConfig::new(
            store,
            Arc::new(default_admin_config()),
        ));
        let mut factory = WorldFactory::new(admin.clone(), lazy_pool()).await.unwrap();

        // Flipping the setting after construction changes nothing.
        admin.set("context", json!(CONTEXT_SYSTEM)).await.unwrap();
        assert!(!factory.is_for_whole_site());

        let world = factory.get_world(5).await.unwrap();
        assert_eq!(world.course_id(), 5);
    }
}
