use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use state::referral_tree::referral_tree_state;
use state::session::session_state;
use utils::event_bus::session_bus;

/// Routes that require a valid session.
pub fn is_protected_route(path: &str) -> bool {
    path.starts_with("/dashboard") || path.starts_with("/referrals")
}

#[component]
fn CtxProvider(children: Children) -> impl IntoView {
    let session = session_state();
    let tree = referral_tree_state();
    let bus = session_bus();

    // Durable storage is the source of truth; re-sync once the client
    // mounts so a reload (or another tab's logout) is picked up.
    Effect::new(move |_| {
        session.check_session();
        tree.hydrate_trail();
    });

    let location = use_location();
    let navigate = use_navigate();
    bus.subscribe(move |_| {
        session.check_session();
        tree.reset_after_session_change();
        tree.leave_to_root();
        let path = location.pathname.get_untracked();
        if is_protected_route(&path) {
            navigate("/login", Default::default());
        }
    });

    children()
}

#[component]
pub fn BaseRoute() -> impl IntoView {
    view! {
        <CtxProvider>
            <Outlet />
        </CtxProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_cover_dashboard_and_tree() {
        assert!(is_protected_route("/dashboard"));
        assert!(is_protected_route("/referrals"));
        assert!(is_protected_route("/referrals/m42"));
        assert!(!is_protected_route("/"));
        assert!(!is_protected_route("/login"));
        assert!(!is_protected_route("/rewards/crr"));
    }
}
