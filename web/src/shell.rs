//! Root layout and the signed-in gate.

use dioxus::prelude::*;
use ui::theme::{initial_theme, Palette};
use ui::{use_session, Navbar};

use crate::Route;

/// Chrome around every screen: themed page background, navbar, content column.
///
/// The scaffold owns the theme signal. The wall clock picks the starting
/// scheme, the navbar toggle flips it, and when someone is signed in the flip
/// is also written to their profile so other browsers pick it up.
#[component]
pub fn AppScaffold() -> Element {
    let mut theme = use_signal(initial_theme);
    use_context_provider(|| ReadOnlySignal::new(theme));

    let session = use_session();

    let on_toggle_theme = move |_: ()| {
        let next = theme().toggled();
        theme.set(next);

        let uid = session().record().map(|record| record.uid.clone());
        if let Some(uid) = uid {
            spawn(async move {
                match api::users::save_theme(&uid, next).await {
                    Ok(()) => tracing::info!("updated theme settings"),
                    Err(err) => tracing::warn!("theme not saved: {err}"),
                }
            });
        }
    };

    let palette = Palette::of(theme());

    rsx! {
        div {
            class: "fullscreen-layout",
            style: "background-color: {palette.colors.body_background}; color: {palette.colors.text};",
            Navbar {
                on_toggle_theme: on_toggle_theme,
                Link { class: "nav-link", to: Route::Start {}, "Home" }
                Link { class: "nav-link", to: Route::Search {}, "Search" }
                Link { class: "nav-link", to: Route::User {}, "Profile" }
            }
            main {
                class: "route-layout",
                style: "max-width: {palette.sizes.max_width};",
                Outlet::<Route> {}
            }
        }
    }
}

/// Gate for screens that need someone signed in.
#[component]
pub fn RequireAuth() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::SessionRecord;
    use dioxus_history::{History, MemoryHistory};
    use ui::{OnlineProvider, SessionStatus};

    use super::*;

    struct Scenario {
        history: Rc<MemoryHistory>,
        session: SessionStatus,
    }

    thread_local! {
        static SCENARIO: RefCell<Option<Scenario>> = RefCell::new(None);
    }

    // Root component for a virtual dom: the real route table over a scripted
    // history and session, the way the launched app sits in a browser.
    fn scenario_app() -> Element {
        let (history, session) = SCENARIO.with(|cell| {
            let cell = cell.borrow();
            let scenario = cell.as_ref().expect("scenario installed before mount");
            (Rc::clone(&scenario.history), scenario.session.clone())
        });
        use_hook(move || provide_root_context(history as Rc<dyn History>));
        use_context_provider(move || Signal::new(session));
        rsx! {
            OnlineProvider {
                Router::<Route> {}
            }
        }
    }

    fn mount(path: &str, session: SessionStatus) -> (VirtualDom, Rc<MemoryHistory>) {
        let history = Rc::new(MemoryHistory::with_initial_path(path));
        SCENARIO.with(|cell| {
            *cell.borrow_mut() = Some(Scenario {
                history: Rc::clone(&history),
                session,
            });
        });
        let mut dom = VirtualDom::new(scenario_app);
        dom.rebuild_in_place();
        // Let the redirect's re-render land before looking at the output
        dom.render_immediate(&mut dioxus_core::NoOpMutations);
        (dom, history)
    }

    #[test]
    fn test_signed_out_visits_are_sent_to_sign_in() {
        let (dom, history) = mount("/app/user", SessionStatus::Cached(None));

        assert_eq!(history.current_route(), Route::Login {}.to_string());
        assert!(dioxus_ssr::render(&dom).contains("Sign in"));
    }

    #[test]
    fn test_signed_in_visits_keep_their_path_parameters() {
        let record = SessionRecord {
            uid: "u_1".into(),
            email: None,
            name: None,
        };
        let (dom, history) = mount("/app/2024/08", SessionStatus::Cached(Some(record)));

        assert_eq!(history.current_route(), "/app/2024/08");
        assert!(dioxus_ssr::render(&dom).contains("August 2024"));
    }
}
