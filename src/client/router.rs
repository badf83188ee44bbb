/**
 * Client Router
 *
 * Maps paths to views and enforces the sign-in rules before every
 * navigation: signed-in users are bounced from the login page to their
 * account, and signed-out users are bounced from protected pages to
 * login.
 */

/// The views a Fritter frontend can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - the main feed
    Home,
    /// `/account` - account settings
    Account,
    /// `/login` - sign in or sign up
    Login,
    /// `/profile` - the signed-in user's freets and follows
    Profile,
    /// `/groups` - group listing
    Groups,
    /// `/group` - a single group
    Group,
    /// Anything else
    NotFound,
}

impl Route {
    /// Resolve a path to its route. Unknown paths resolve to NotFound.
    pub fn resolve(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/account" => Self::Account,
            "/login" => Self::Login,
            "/profile" => Self::Profile,
            "/groups" => Self::Groups,
            "/group" => Self::Group,
            _ => Self::NotFound,
        }
    }

    /// True when the view requires a signed-in user.
    fn requires_auth(self) -> bool {
        matches!(self, Self::Account | Self::Profile | Self::Groups | Self::Group)
    }
}

/// Decide whether a navigation should be redirected. Returns the route
/// to redirect to, or None to let the navigation through.
pub fn navigation_guard(to: Route, signed_in: bool) -> Option<Route> {
    if to == Route::Login && signed_in {
        return Some(Route::Account);
    }
    if to.requires_auth() && !signed_in {
        return Some(Route::Login);
    }
    None
}
