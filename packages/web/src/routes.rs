//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{Bookings, Home, Login, MatchConsole, NotFound, Venues};

/// All application routes.
///
/// There are no route guards: `/venues`, `/bookings` and the match console
/// are reachable without a session, and unauthenticated actions surface the
/// backend's 401 instead.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/venues")]
        Venues {},

        #[route("/bookings")]
        Bookings {},

        #[route("/matches/:match_id/console")]
        MatchConsole { match_id: String },

        // Fallback for anything not listed above
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        path.parse()
            .unwrap_or_else(|_| panic!("failed to parse {path}"))
    }

    #[test]
    fn known_paths_parse_to_their_views() {
        assert_eq!(parse("/"), Route::Home {});
        assert_eq!(parse("/login"), Route::Login {});
        assert_eq!(parse("/venues"), Route::Venues {});
        assert_eq!(parse("/bookings"), Route::Bookings {});
        assert_eq!(
            parse("/matches/7f9b2c/console"),
            Route::MatchConsole {
                match_id: "7f9b2c".to_string()
            }
        );
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(
            Route::MatchConsole {
                match_id: "7f9b2c".to_string()
            }
            .to_string(),
            "/matches/7f9b2c/console"
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        match parse("/admin/reports/weekly") {
            Route::NotFound { segments } => {
                assert_eq!(segments, vec!["admin", "reports", "weekly"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
