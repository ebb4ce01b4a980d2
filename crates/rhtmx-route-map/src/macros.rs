//! `define_routes!`: compile-time checked route modules.

/// Declares a module of typed route functions.
///
/// Each route line is `name => "path"`, optionally followed by
/// `, params(a, b)` and/or `, search(x, y)` (in that order). A search key
/// written `x = true` is marked required in `Routes::table()`; the typed
/// methods still take it as an `Option`. The macro generates, inside the
/// named module:
///
/// - `Routes`: one method per route returning the generated path. Params are
///   `impl Into<ParamValue>`, search keys are `Option<ParamValue>`; the query
///   string is only appended when at least one search key is `Some`.
/// - `Navigate<'_, F>`: the same methods, handing the path to a callback
///   instead of returning it. Obtained with `Routes::navigator`.
///
/// `Routes` also has `new`, `with_options`, `table` and `navigator`, so those
/// names cannot be used as route names.
///
/// # Examples
///
/// ```
/// use rhtmx_route_map::define_routes;
/// use std::cell::RefCell;
///
/// define_routes! {
///     pub mod app {
///         home => "/home";
///         user => "/user/:id", params(id);
///         search => "/search", search(q = true, page);
///         user_posts => "/user/:id/posts", params(id), search(page);
///     }
/// }
///
/// let routes = app::Routes::new();
/// assert_eq!(routes.home(), "/home");
/// assert_eq!(routes.user(42), "/user/42");
/// assert_eq!(routes.search(Some("hello world".into()), None), "/search?q=hello%20world");
/// assert_eq!(routes.search(None, None), "/search");
/// assert_eq!(
///     app::Routes::table().get("search").unwrap().required_search_keys().collect::<Vec<_>>(),
///     vec!["q"]
/// );
/// assert_eq!(routes.user_posts("abc", Some(2.into())), "/user/abc/posts?page=2");
///
/// let history = RefCell::new(Vec::new());
/// let navigate = routes.navigator(|path| history.borrow_mut().push(path));
/// navigate.user(7);
/// assert_eq!(history.borrow().as_slice(), ["/user/7"]);
/// ```
#[macro_export]
macro_rules! define_routes {
    (@required) => {
        false
    };
    (@required $required:literal) => {
        $required
    };

    (@descriptor $path:literal) => {
        $crate::RouteDescriptor::new($path)
    };
    (@descriptor $path:literal params($($p:ident),*)) => {
        $crate::RouteDescriptor::new($path)
            $(.with_param(stringify!($p)))*
    };
    (@descriptor $path:literal search($($s:ident $(= $req:literal)?),*)) => {
        $crate::RouteDescriptor::new($path)
            $(.with_search(stringify!($s), $crate::define_routes!(@required $($req)?)))*
    };
    (@descriptor $path:literal params($($p:ident),*) search($($s:ident $(= $req:literal)?),*)) => {
        $crate::RouteDescriptor::new($path)
            $(.with_param(stringify!($p)))*
            $(.with_search(stringify!($s), $crate::define_routes!(@required $($req)?)))*
    };

    (@path_fn ($($attr:tt)*) $route:ident) => {
        $($attr)*
        pub fn $route(&self) -> String {
            self.$route.build_static()
        }
    };
    (@path_fn ($($attr:tt)*) $route:ident params($($p:ident),*)) => {
        $($attr)*
        pub fn $route(&self, $($p: impl Into<$crate::ParamValue>),*) -> String {
            self.$route.build(&$crate::RouteArgs::new()$(.param(stringify!($p), $p))*)
        }
    };
    (@path_fn ($($attr:tt)*) $route:ident search($($s:ident $(= $req:literal)?),*)) => {
        $($attr)*
        pub fn $route(&self, $($s: Option<$crate::ParamValue>),*) -> String {
            self.$route.build(
                &$crate::RouteArgs::new()
                    .with_optional_search([$((stringify!($s), $s)),*]),
            )
        }
    };
    (@path_fn ($($attr:tt)*) $route:ident params($($p:ident),*) search($($s:ident $(= $req:literal)?),*)) => {
        $($attr)*
        pub fn $route(
            &self,
            $($p: impl Into<$crate::ParamValue>,)*
            $($s: Option<$crate::ParamValue>),*
        ) -> String {
            self.$route.build(
                &$crate::RouteArgs::new()
                    $(.param(stringify!($p), $p))*
                    .with_optional_search([$((stringify!($s), $s)),*]),
            )
        }
    };

    (@navigate_fn ($($attr:tt)*) $route:ident) => {
        $($attr)*
        pub fn $route(&self) {
            (self.go_to)(self.routes.$route())
        }
    };
    (@navigate_fn ($($attr:tt)*) $route:ident params($($p:ident),*)) => {
        $($attr)*
        pub fn $route(&self, $($p: impl Into<$crate::ParamValue>),*) {
            (self.go_to)(self.routes.$route($($p),*))
        }
    };
    (@navigate_fn ($($attr:tt)*) $route:ident search($($s:ident $(= $req:literal)?),*)) => {
        $($attr)*
        pub fn $route(&self, $($s: Option<$crate::ParamValue>),*) {
            (self.go_to)(self.routes.$route($($s),*))
        }
    };
    (@navigate_fn ($($attr:tt)*) $route:ident params($($p:ident),*) search($($s:ident $(= $req:literal)?),*)) => {
        $($attr)*
        pub fn $route(
            &self,
            $($p: impl Into<$crate::ParamValue>,)*
            $($s: Option<$crate::ParamValue>),*
        ) {
            (self.go_to)(self.routes.$route($($p,)* $($s),*))
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis mod $module:ident {
            $(
                $(#[$route_meta:meta])*
                $route:ident => $path:literal $(, $kind:ident ( $($arg:ident $(= $req:literal)?),* $(,)? ))* ;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis mod $module {
            /// Path functions for every route in this module.
            #[derive(Debug, Clone)]
            pub struct Routes {
                $( $route: $crate::PathBuilder, )*
            }

            impl Routes {
                pub fn new() -> Self {
                    Self::with_options($crate::RouteMapOptions::default())
                }

                pub fn with_options(options: $crate::RouteMapOptions) -> Self {
                    let _ = &options;
                    Self {
                        $(
                            $route: $crate::PathBuilder::new(
                                stringify!($route),
                                $crate::define_routes!(@descriptor $path $( $kind ( $($arg $(= $req)?),* ) )*),
                                &options,
                            ),
                        )*
                    }
                }

                /// The declared routes as a dynamic table.
                pub fn table() -> $crate::RouteTable {
                    $crate::RouteTable::new()
                        $(
                            .with_route(
                                stringify!($route),
                                $crate::define_routes!(@descriptor $path $( $kind ( $($arg $(= $req)?),* ) )*),
                            )
                        )*
                }

                pub fn navigator<F: Fn(String)>(&self, go_to: F) -> Navigate<'_, F> {
                    Navigate { routes: self, go_to }
                }

                $(
                    $crate::define_routes!(
                        @path_fn ($(#[$route_meta])*) $route $( $kind ( $($arg $(= $req)?),* ) )*
                    );
                )*
            }

            impl Default for Routes {
                fn default() -> Self {
                    Self::new()
                }
            }

            /// Navigation functions for every route in this module.
            pub struct Navigate<'a, F> {
                routes: &'a Routes,
                go_to: F,
            }

            impl<'a, F: Fn(String)> Navigate<'a, F> {
                $(
                    $crate::define_routes!(
                        @navigate_fn ($(#[$route_meta])*) $route $( $kind ( $($arg $(= $req)?),* ) )*
                    );
                )*
            }
        }
    };
}
