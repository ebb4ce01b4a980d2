//! Navigation functions: generate a route's path and hand it to a callback.
//!
//! The callback is whatever performs navigation in the host application,
//! e.g. pushing onto a history stack or sending an `HX-Location` header.
//! It is called synchronously, exactly once per navigation; a panic inside
//! it propagates to the caller untouched.

use crate::error::{Result, RouteError};
use crate::route::RouteSignature;
use crate::value::RouteArgs;
use crate::{PathBuilder, RouteMap};
use std::fmt;

/// A [`RouteMap`] paired with a navigation callback.
pub struct Navigator<'a, F> {
    routes: &'a RouteMap,
    go_to: F,
}

impl<'a, F: Fn(String)> Navigator<'a, F> {
    pub fn new(routes: &'a RouteMap, go_to: F) -> Self {
        tracing::debug!("Built navigator over {} routes", routes.len());
        Self { routes, go_to }
    }

    /// The navigation function for a route, if it exists.
    pub fn route(&self, name: &str) -> Option<Navigate<'_, F>> {
        self.routes.get(name).map(|builder| Navigate {
            builder,
            go_to: &self.go_to,
        })
    }

    /// Navigates to a route by name. Unknown names fail without calling the callback.
    pub fn navigate(&self, name: &str, args: &RouteArgs) -> Result<()> {
        let navigate = self
            .route(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        navigate.go(args);
        Ok(())
    }

    /// One navigation function per route, in table order.
    pub fn routes(&self) -> impl Iterator<Item = Navigate<'_, F>> {
        let go_to = &self.go_to;
        self.routes
            .iter()
            .map(move |builder| Navigate { builder, go_to })
    }

    pub fn route_map(&self) -> &'a RouteMap {
        self.routes
    }
}

impl<F> fmt::Debug for Navigator<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.routes.len())
            .finish()
    }
}

/// The navigation function for a single route.
///
/// Takes the same arguments as the route's [`PathBuilder`] and returns nothing.
pub struct Navigate<'n, F> {
    builder: &'n PathBuilder,
    go_to: &'n F,
}

impl<'n, F: Fn(String)> Navigate<'n, F> {
    pub fn go(&self, args: &RouteArgs) {
        let path = self.builder.build(args);
        tracing::debug!("Navigating to route '{}': {}", self.builder.name(), path);
        (self.go_to)(path);
    }

    /// Navigates without params or search.
    pub fn go_static(&self) {
        self.go(&RouteArgs::none());
    }

    pub fn name(&self) -> &'n str {
        self.builder.name()
    }

    pub fn signature(&self) -> RouteSignature {
        self.builder.signature()
    }
}

impl<F> Clone for Navigate<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Navigate<'_, F> {}

impl<F> fmt::Debug for Navigate<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigate")
            .field("route", &self.builder.name())
            .finish()
    }
}
