//! Browser connectivity, as `navigator.onLine` reports it.
//!
//! [`OnlineProvider`] seeds a signal from that flag and keeps it current by
//! listening for the window's `online` and `offline` events. The listeners
//! are removed again when the provider leaves the tree, so a remount never
//! stacks a second pair.

use dioxus::prelude::*;

/// Connectivity as of right now. Targets without a window count as online.
pub fn current_online_status() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Current connectivity, provided by [`OnlineProvider`].
pub fn use_online() -> ReadOnlySignal<bool> {
    use_context::<ReadOnlySignal<bool>>()
}

/// Provider component that tracks browser connectivity.
/// Wrap the app with this component so [`use_online`] works anywhere.
#[component]
pub fn OnlineProvider(children: Element) -> Element {
    let online = use_signal(current_online_status);

    // The registration lives exactly as long as this scope
    #[cfg(target_arch = "wasm32")]
    let _watch = use_hook(|| {
        let mut online = online;
        let watch = ConnectivityWatch::watch(move |flag| online.set(flag));
        if watch.is_none() {
            tracing::warn!("connectivity events unavailable, status will not update");
        }
        std::rc::Rc::new(watch)
    });

    use_context_provider(|| ReadOnlySignal::new(online));

    rsx! {
        {children}
    }
}

/// Registered `online`/`offline` listeners. Dropping the value removes both
/// listeners from the window again.
#[cfg(target_arch = "wasm32")]
pub struct ConnectivityWatch {
    window: web_sys::Window,
    on_online: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    on_offline: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl ConnectivityWatch {
    /// Subscribe to connectivity changes. `on_change` receives the new flag.
    pub fn watch(on_change: impl FnMut(bool) + Clone + 'static) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;

        let mut callback = on_change.clone();
        let on_online = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            tracing::debug!("browser reports online");
            callback(true);
        });
        let mut callback = on_change;
        let on_offline = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            tracing::debug!("browser reports offline");
            callback(false);
        });

        // Build the value first: if the second add fails, dropping it
        // unregisters whatever did get added.
        let watch = Self {
            window,
            on_online,
            on_offline,
        };
        watch
            .window
            .add_event_listener_with_callback("online", watch.on_online.as_ref().unchecked_ref())
            .ok()?;
        watch
            .window
            .add_event_listener_with_callback("offline", watch.on_offline.as_ref().unchecked_ref())
            .ok()?;
        Some(watch)
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ConnectivityWatch {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .window
            .remove_event_listener_with_callback("online", self.on_online.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "offline",
            self.on_offline.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_without_a_window_count_as_online() {
        assert!(current_online_status());
    }
}
