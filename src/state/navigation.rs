use wasm_bindgen::JsValue;
use web_sys::window;

/// Application routes. The current route lives in session state and the
/// views switch on it; the browser URL is kept in step as a side channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }
}

/// Browser-history side channel for route changes, plus the destination the
/// user originally asked for before being sent through login.
pub trait Navigator {
    /// Mirror a route transition into the browser history. `replace` swaps
    /// the current entry so back-navigation does not return to it.
    fn sync(&self, route: Route, replace: bool);

    /// The route requested at startup, if it maps to a known view.
    fn intended(&self) -> Option<Route>;
}

/// History-API backed navigator. The intended destination is captured from
/// the URL once, when the app boots.
pub struct BrowserNavigator {
    intended: Option<Route>,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        let intended = window()
            .and_then(|w| w.location().pathname().ok())
            .and_then(|path| Route::from_path(&path));
        Self { intended }
    }
}

impl Default for BrowserNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for BrowserNavigator {
    fn sync(&self, route: Route, replace: bool) {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            return;
        };
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
        };
        if let Err(e) = result {
            web_sys::console::warn_1(&e);
        }
    }

    fn intended(&self) -> Option<Route> {
        self.intended
    }
}
