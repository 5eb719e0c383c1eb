// src/search/dispatch.rs

//! Search dispatch: remote AI search with local fallback routing.
//!
//! One dispatch runs through a fixed sequence: try the AI backend once, and
//! on success persist the envelope and route to the results page. On any
//! failure fall back to the local suggestion table and route by entity kind.
//! The user is always routed somewhere; remote errors never surface.
//!
//! Overlapping dispatches are guarded by a monotonically increasing
//! generation counter: only the dispatch holding the latest ticket may
//! persist the session slot or navigate, so a slow stale response can never
//! overwrite a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Config;
use crate::search::matcher::SuggestionMatcher;
use crate::search::routes::Route;
use crate::search::SearchEnvelope;
use crate::storage::SessionStore;

/// Remote AI-search collaborator.
#[async_trait]
pub trait AiSearch: Send + Sync {
    /// Run one search attempt. Failure may be an `Err` or an envelope with
    /// `success == false`; the dispatcher treats both the same way.
    async fn search(&self, query: &str) -> Result<SearchEnvelope>;
}

/// Client-side navigation collaborator.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}

/// Terminal outcome of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Query was empty after trimming; nothing was dispatched.
    Ignored,
    /// AI backend answered successfully; envelope persisted, routed to results.
    RemoteSucceeded { route: Route },
    /// AI backend failed or declined; routed through the local fallback.
    RemoteFailed { route: Route },
    /// A newer dispatch started while this one was in flight; no side effects.
    Stale,
}

impl DispatchOutcome {
    /// The route this dispatch navigated to, if it navigated at all.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::RemoteSucceeded { route } | Self::RemoteFailed { route } => Some(route),
            Self::Ignored | Self::Stale => None,
        }
    }
}

/// Orchestrates one search query end to end.
pub struct SearchDispatcher {
    ai: Arc<dyn AiSearch>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    matcher: SuggestionMatcher,
    session_key: String,
    generation: AtomicU64,
}

impl SearchDispatcher {
    pub fn new(
        config: &Config,
        ai: Arc<dyn AiSearch>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let matcher =
            SuggestionMatcher::with_cap(config.suggestions.clone(), config.search.max_suggestions);
        Self {
            ai,
            session,
            navigator,
            matcher,
            session_key: config.search.session_key.clone(),
            generation: AtomicU64::new(0),
        }
    }

    /// The suggestion matcher backing the fallback path, for UIs that also
    /// render a live suggestion list.
    pub fn matcher(&self) -> &SuggestionMatcher {
        &self.matcher
    }

    /// Dispatch one query.
    ///
    /// Errors are only returned for local failures (session-slot writes);
    /// remote failures always degrade to fallback routing.
    pub async fn dispatch(&self, query: &str) -> Result<DispatchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(DispatchOutcome::Ignored);
        }

        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("Dispatching search #{ticket}: {query:?}");

        let remote = self.ai.search(query).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            log::debug!("Search #{ticket} superseded, dropping response");
            return Ok(DispatchOutcome::Stale);
        }

        match remote {
            Ok(envelope) if envelope.success => {
                let serialized = serde_json::to_string(&envelope)?;
                self.session.put(&self.session_key, &serialized).await?;

                let route = Route::results(query);
                self.navigator.navigate(&route);
                log::info!("AI search succeeded for {query:?}, routed to {route}");
                Ok(DispatchOutcome::RemoteSucceeded { route })
            }
            Ok(_) => {
                log::warn!("AI search declined query {query:?}, falling back");
                Ok(self.fall_back(query))
            }
            Err(error) => {
                log::warn!("AI search failed for {query:?}: {error}, falling back");
                Ok(self.fall_back(query))
            }
        }
    }

    /// Route by exact suggestion match, or to the generic listing.
    fn fall_back(&self, query: &str) -> DispatchOutcome {
        let route = match self.matcher.exact_match(query) {
            Some(entry) => Route::for_kind(entry.kind, query),
            None => Route::listing(query),
        };
        self.navigator.navigate(&route);
        DispatchOutcome::RemoteFailed { route }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use serde_json::json;
    use tokio::sync::Notify;

    use crate::error::AppError;

    /// AI stub returning a fixed behavior.
    enum StubBehavior {
        Succeed(serde_json::Value),
        Decline,
        Fail,
    }

    struct StubAi {
        behavior: StubBehavior,
        calls: Mutex<Vec<String>>,
    }

    impl StubAi {
        fn new(behavior: StubBehavior) -> Self {
            Self {
                behavior,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AiSearch for StubAi {
        async fn search(&self, query: &str) -> Result<SearchEnvelope> {
            self.calls.lock().unwrap().push(query.to_string());
            match &self.behavior {
                StubBehavior::Succeed(payload) => Ok(SearchEnvelope {
                    success: true,
                    payload: payload.clone(),
                }),
                StubBehavior::Decline => Ok(SearchEnvelope {
                    success: false,
                    payload: json!({}),
                }),
                StubBehavior::Fail => Err(AppError::dispatch("stub", "backend unreachable")),
            }
        }
    }

    /// AI stub whose first call blocks until released; later calls fail
    /// immediately. Used to overlap two dispatches.
    struct BlockingAi {
        release: Notify,
        calls: AtomicU64,
    }

    #[async_trait]
    impl AiSearch for BlockingAi {
        async fn search(&self, _query: &str) -> Result<SearchEnvelope> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.release.notified().await;
                return Ok(SearchEnvelope {
                    success: true,
                    payload: json!({"slow": true}),
                });
            }
            Err(AppError::dispatch("stub", "backend unreachable"))
        }
    }

    #[derive(Default)]
    struct MemorySession {
        slots: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl SessionStore for MemorySession {
        async fn put(&self, key: &str, value: &str) -> Result<()> {
            self.slots
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.slots.lock().unwrap().get(key).cloned())
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &Route) {
            self.routes.lock().unwrap().push(route.clone());
        }
    }

    fn dispatcher(
        behavior: StubBehavior,
    ) -> (
        SearchDispatcher,
        Arc<MemorySession>,
        Arc<RecordingNavigator>,
    ) {
        let session = Arc::new(MemorySession::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let dispatcher = SearchDispatcher::new(
            &Config::default(),
            Arc::new(StubAi::new(behavior)),
            Arc::clone(&session) as Arc<dyn SessionStore>,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        );
        (dispatcher, session, navigator)
    }

    #[tokio::test]
    async fn test_remote_success_persists_and_routes() {
        let payload = json!({"results": [{"name": "Harvard Business School"}]});
        let (dispatcher, session, navigator) =
            dispatcher(StubBehavior::Succeed(payload.clone()));

        let outcome = dispatcher.dispatch("Harvard").await.unwrap();

        let routes = navigator.routes.lock().unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].to_string(), "/search/results?q=Harvard&ai=true");
        assert_eq!(outcome.route(), Some(&routes[0]));

        let stored = session.get("ai_search_results").await.unwrap().unwrap();
        let envelope: SearchEnvelope = serde_json::from_str(&stored).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.payload, payload);
    }

    #[tokio::test]
    async fn test_failed_remote_falls_back_to_course_route() {
        let (dispatcher, session, navigator) = dispatcher(StubBehavior::Fail);

        let outcome = dispatcher.dispatch("Computer Science").await.unwrap();

        let routes = navigator.routes.lock().unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].to_string(), "/courses?search=Computer+Science");
        assert!(matches!(outcome, DispatchOutcome::RemoteFailed { .. }));

        // No session write on the fallback path.
        assert!(session.get("ai_search_results").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_declined_envelope_treated_as_failure() {
        let (dispatcher, _, navigator) = dispatcher(StubBehavior::Decline);

        dispatcher.dispatch("Harvard Business School").await.unwrap();

        let routes = navigator.routes.lock().unwrap();
        assert_eq!(
            routes[0].to_string(),
            "/universities?search=Harvard+Business+School"
        );
    }

    #[tokio::test]
    async fn test_no_match_falls_back_to_generic_listing() {
        let (dispatcher, _, navigator) = dispatcher(StubBehavior::Fail);

        dispatcher.dispatch("zzz-no-match").await.unwrap();

        let routes = navigator.routes.lock().unwrap();
        assert_eq!(routes[0].to_string(), "/colleges?search=zzz-no-match");
    }

    #[tokio::test]
    async fn test_empty_query_is_ignored() {
        let (dispatcher, _, navigator) = dispatcher(StubBehavior::Fail);

        let outcome = dispatcher.dispatch("   ").await.unwrap();

        assert_eq!(outcome, DispatchOutcome::Ignored);
        assert!(navigator.routes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stale_dispatch_has_no_side_effects() {
        let ai = Arc::new(BlockingAi {
            release: Notify::new(),
            calls: AtomicU64::new(0),
        });
        let session = Arc::new(MemorySession::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let dispatcher = Arc::new(SearchDispatcher::new(
            &Config::default(),
            Arc::clone(&ai) as Arc<dyn AiSearch>,
            Arc::clone(&session) as Arc<dyn SessionStore>,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
        ));

        let slow = tokio::spawn({
            let dispatcher = Arc::clone(&dispatcher);
            async move { dispatcher.dispatch("slow query").await }
        });
        tokio::task::yield_now().await;

        // A second dispatch supersedes the first one's ticket.
        dispatcher.dispatch("nonsense").await.unwrap();
        ai.release.notify_one();

        let outcome = slow.await.unwrap().unwrap();
        assert_eq!(outcome, DispatchOutcome::Stale);

        // Only the second dispatch navigated; the slow success never
        // persisted its envelope.
        let routes = navigator.routes.lock().unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].to_string(), "/colleges?search=nonsense");
        assert!(session.get("ai_search_results").await.unwrap().is_none());
    }
}
