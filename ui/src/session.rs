//! Session context.
//!
//! The cached record in localStorage answers "who was signed in last time"
//! before any network round trip; the backend's answer replaces it as soon as
//! one arrives and every 30 seconds after that. [`SessionStatus`] keeps the
//! two apart so callers can tell a cache-trusted session from a confirmed one.

use dioxus::prelude::*;
use store::{session_cache, SessionRecord};

/// The session as the shell currently believes it to be.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// Seeded from localStorage; the backend has not answered yet.
    Cached(Option<SessionRecord>),
    /// Confirmed by the backend.
    Live(Option<SessionRecord>),
}

impl SessionStatus {
    /// The signed-in user, wherever the value came from.
    pub fn record(&self) -> Option<&SessionRecord> {
        match self {
            Self::Cached(record) | Self::Live(record) => record.as_ref(),
        }
    }

    /// Whether navigation should treat the user as signed in.
    pub fn is_authenticated(&self) -> bool {
        self.record().is_some()
    }

    /// Whether the backend has confirmed this value.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionStatus> {
    use_context::<Signal<SessionStatus>>()
}

/// Provider component that manages the session.
/// Wrap the app with this component so [`use_session`] works anywhere.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut status = use_signal(|| SessionStatus::Cached(session_cache::load()));

    // First backend answer on mount
    let _ = use_resource(move || async move {
        match api::auth::fetch_session().await {
            Ok(record) => status.set(SessionStatus::Live(record)),
            Err(err) => {
                // Keep trusting the cache, offline users stay signed in
                tracing::warn!("session refresh failed: {err}");
            }
        }
    });

    // Periodic refresh, every 30s (web only)
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        spawn(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                match api::auth::fetch_session().await {
                    Ok(record) => {
                        let next = SessionStatus::Live(record);
                        if status() != next {
                            status.set(next);
                        }
                    }
                    Err(err) => tracing::warn!("session refresh failed: {err}"),
                }
            }
        });
    });

    // Confirmed changes flow back into the cache
    use_effect(move || {
        if let SessionStatus::Live(record) = status() {
            let result = match record {
                Some(record) => session_cache::save(&record),
                None => {
                    session_cache::clear();
                    Ok(())
                }
            };
            if let Err(err) = result {
                tracing::warn!("session cache not updated: {err}");
            }
        }
    });

    use_context_provider(|| status);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(uid: &str) -> SessionRecord {
        SessionRecord {
            uid: uid.into(),
            email: None,
            name: None,
        }
    }

    #[test]
    fn test_cached_and_live_records_both_authenticate() {
        assert!(SessionStatus::Cached(Some(record("u_1"))).is_authenticated());
        assert!(SessionStatus::Live(Some(record("u_1"))).is_authenticated());
        assert!(!SessionStatus::Cached(None).is_authenticated());
        assert!(!SessionStatus::Live(None).is_authenticated());
    }

    #[test]
    fn test_only_live_counts_as_confirmed() {
        assert!(!SessionStatus::Cached(Some(record("u_1"))).is_live());
        assert!(!SessionStatus::Cached(None).is_live());
        assert!(SessionStatus::Live(None).is_live());
    }

    #[test]
    fn test_record_comes_from_either_source() {
        let cached = SessionStatus::Cached(Some(record("u_7")));
        assert_eq!(cached.record().map(|r| r.uid.as_str()), Some("u_7"));
        assert!(SessionStatus::Live(None).record().is_none());
    }
}
