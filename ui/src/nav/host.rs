use std::fmt::{self, Display};
use std::ops::Deref;
use std::rc::Rc;
use std::str::FromStr;

use dioxus::prelude::*;

use super::NavError;

/// The two router capabilities the sidebar needs. Keeping them behind a trait
/// lets `ui` stay independent of each platform's `Route` enum and lets tests
/// swap in a double.
pub trait RouterHost {
    /// Whether `path` is the current location. Matching policy is up to the host.
    fn is_current_path(&self, path: &str) -> bool;

    /// In-app navigation to `path` (no full page reload).
    fn navigate(&self, path: &str) -> Result<(), NavError>;
}

/// Cheap, clonable handle to a router host, suitable as a component prop.
#[derive(Clone)]
pub struct NavHost(Rc<dyn RouterHost>);

impl NavHost {
    pub fn new(host: impl RouterHost + 'static) -> Self {
        Self(Rc::new(host))
    }

    /// Host backed by the Dioxus router. Must be called from a component
    /// rendered inside `Router::<R>`, with the route from `use_route::<R>()`.
    pub fn routed<R>(current: R) -> Self
    where
        R: Routable + 'static,
        <R as FromStr>::Err: Display,
    {
        Self::new(RoutedHost {
            current,
            navigator: navigator(),
        })
    }
}

impl Deref for NavHost {
    type Target = dyn RouterHost;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for NavHost {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NavHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavHost").finish_non_exhaustive()
    }
}

/// Router host over a platform `Route` enum: the current route is compared by
/// its rendered path (exact match) and navigation parses the path back into a
/// route before pushing it.
pub struct RoutedHost<R> {
    current: R,
    navigator: Navigator,
}

impl<R> RouterHost for RoutedHost<R>
where
    R: Routable,
    <R as FromStr>::Err: Display,
{
    fn is_current_path(&self, path: &str) -> bool {
        self.current.to_string() == path
    }

    fn navigate(&self, path: &str) -> Result<(), NavError> {
        let route = R::from_str(path).map_err(|err| NavError::UnknownPath {
            path: path.to_string(),
            reason: err.to_string(),
        })?;
        pushed(path, self.navigator.push(route))
    }
}

/// Turns the router's push outcome into a result. `None` means the router
/// accepted the target.
fn pushed<F: fmt::Debug>(path: &str, failure: Option<F>) -> Result<(), NavError> {
    match failure {
        None => Ok(()),
        Some(failure) => Err(NavError::Refused {
            path: path.to_string(),
            reason: format!("{failure:?}"),
        }),
    }
}
