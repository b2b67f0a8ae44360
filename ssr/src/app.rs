use crate::error_template::{AppError, ErrorTemplate};
use component::{base_route::BaseRoute, nav::NavBar};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use page::about_us::AboutUs;
use page::contact::Contact;
use page::dashboard::Dashboard;
use page::faqs::Faqs;
use page::rewards::{RewardProgram, Rewards};
use page::root::RootPage;
use page::services::Services;
use page::team::Team;
use page::{
    err::ServerErrorPage, login::Login, logout::Logout, otp_verify::OtpVerify,
    referrals::ReferralTreePage, signup::Signup,
};
use state::app_state::AppState;
use state::referral_tree::ReferralTreeState;
use state::session::SessionState;
use utils::api::ApiClient;
use utils::event_bus::SessionBus;

#[component]
fn NotFound() -> impl IntoView {
    let mut outside_errors = Errors::default();
    outside_errors.insert_with_default_key(AppError::NotFound);
    view! { <ErrorTemplate outside_errors /> }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HashedStylesheet id="leptos" options=options.clone() />
                <Meta property="og:title" content="RideNova" />
                <Meta property="og:image" content="/img/common/refer-earn.webp" />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::default();
    provide_context(app_state.clone());

    // Shared client + state contexts; session/tree signals have a
    // single writer each and many readers.
    provide_context(ApiClient::default());
    provide_context(SessionBus::default());
    provide_context(SessionState::default());
    provide_context(ReferralTreeState::default());

    view! {
        <Title text=app_state.name />

        // Favicon
        <Link
            rel="icon"
            type_="image/svg+xml"
            href=format!("/{}/favicon.svg", app_state.asset_path())
        />
        <Link rel="shortcut icon" href=format!("/{}/favicon.ico", app_state.asset_path()) />

        <Meta name="apple-mobile-web-app-title" content=app_state.name />

        <Router>
            <main class="bg-black" id="body">
                <Routes fallback=|| view! { <NotFound /> }.into_view()>
                    <ParentRoute path=path!("") view=BaseRoute>
                        <Route path=path!("/") view=RootPage />
                        <Route path=path!("/about-us") view=AboutUs />
                        <Route path=path!("/services") view=Services />
                        <Route path=path!("/team") view=Team />
                        <Route path=path!("/faqs") view=Faqs />
                        <Route path=path!("/contact") view=Contact />
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/signup") view=Signup />
                        <Route path=path!("/verify-otp") view=OtpVerify />
                        <Route path=path!("/dashboard") view=Dashboard />
                        <Route path=path!("/referrals") view=ReferralTreePage />
                        <Route path=path!("/referrals/:id") view=ReferralTreePage />
                        <Route path=path!("/rewards") view=Rewards />
                        <Route path=path!("/rewards/:program") view=RewardProgram />
                        <Route path=path!("/logout") view=Logout />
                        <Route path=path!("/error") view=ServerErrorPage />
                    </ParentRoute>
                </Routes>
            </main>
            <nav>
                <NavBar />
            </nav>
        </Router>
    }
}
