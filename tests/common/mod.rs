#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::{DateTime, Duration, Utc};
use urlclip::AppError;
use urlclip::application::services::{AnalyticsService, RedirectService, ShortenService};
use urlclip::domain::entities::{AccessLogEntry, Link, NewAccessLogEntry, NewLink};
use urlclip::domain::repositories::{AccessLogRepository, LinkRepository};
use urlclip::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

/// In-memory link store mirroring the Postgres schema semantics: unique
/// short codes, store-side id/created_at assignment, atomic counter bump.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn link_by_code(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
    }

    pub fn access_count(&self, code: &str) -> i64 {
        self.link_by_code(code).map(|l| l.access_count).unwrap_or(0)
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(AppError::Conflict);
        }

        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            short_code: new_link.short_code,
            original_url: new_link.original_url,
            created_at: Utc::now(),
            expires_at: Some(new_link.expires_at),
            password_protected: new_link.password.is_some(),
            password: new_link.password,
            access_count: 0,
        };
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.link_by_code(code))
    }

    async fn increment_access_count(&self, id: i64) -> Result<(), AppError> {
        let mut links = self.links.lock().unwrap();
        if let Some(link) = links.iter_mut().find(|l| l.id == id) {
            link.access_count += 1;
        }
        Ok(())
    }
}

/// In-memory append-only access log.
#[derive(Default)]
pub struct InMemoryAccessLogRepository {
    entries: Mutex<Vec<AccessLogEntry>>,
    next_id: AtomicI64,
}

impl InMemoryAccessLogRepository {
    pub fn entries_for(&self, link_id: i64) -> Vec<AccessLogEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.link_id == link_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AccessLogRepository for InMemoryAccessLogRepository {
    async fn record_access(&self, entry: NewAccessLogEntry) -> Result<AccessLogEntry, AppError> {
        let recorded = AccessLogEntry {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id: entry.link_id,
            accessed_at: Utc::now(),
            client_ip: entry.client_ip,
        };
        self.entries.lock().unwrap().push(recorded.clone());
        Ok(recorded)
    }

    async fn list_for_link(&self, link_id: i64) -> Result<Vec<AccessLogEntry>, AppError> {
        Ok(self.entries_for(link_id))
    }
}

/// Builds an app state over in-memory repositories, returning the repository
/// handles so tests can seed and inspect the store directly.
pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryLinkRepository>,
    Arc<InMemoryAccessLogRepository>,
) {
    let links = Arc::new(InMemoryLinkRepository::default());
    let access_logs = Arc::new(InMemoryAccessLogRepository::default());

    let expiry_offset = chrono::FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();

    let state = AppState {
        shorten_service: Arc::new(ShortenService::new(
            links.clone(),
            BASE_URL.to_string(),
            expiry_offset,
        )),
        redirect_service: Arc::new(RedirectService::new(links.clone(), access_logs.clone())),
        analytics_service: Arc::new(AnalyticsService::new(
            links.clone(),
            access_logs.clone(),
            BASE_URL.to_string(),
        )),
        behind_proxy: false,
    };

    (state, links, access_logs)
}

/// Seeds a link directly through the repository, bypassing validation.
pub async fn seed_link(
    links: &InMemoryLinkRepository,
    code: &str,
    url: &str,
    expires_at: DateTime<Utc>,
    password: Option<&str>,
) -> Link {
    links
        .create(NewLink {
            short_code: code.to_string(),
            original_url: url.to_string(),
            expires_at,
            password: password.map(str::to_string),
        })
        .await
        .unwrap()
}

pub async fn seed_active_link(links: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    seed_link(links, code, url, Utc::now() + Duration::hours(1), None).await
}

pub async fn seed_expired_link(links: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    seed_link(links, code, url, Utc::now() - Duration::hours(1), None).await
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum_test::TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
