use dioxus::prelude::*;

use store::AppConfig;
use ui::components::ToastProvider;
use ui::{SessionGuard, SessionProvider};
use views::{Home, Login, ReportCreate, ReportDetail, ReportEdit, ReportList, Supervisor};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Protected)]
        #[route("/home")]
        Home {},
        #[route("/report/list")]
        ReportList {},
        #[route("/report/create")]
        ReportCreate {},
        #[route("/report/edit/:id")]
        ReportEdit { id: i64 },
        #[route("/report/detail/:id")]
        ReportDetail { id: i64 },
        #[route("/supervisor")]
        Supervisor {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const CONFIG_TOML: &str = include_str!("../daily-report.toml");

fn load_config() -> AppConfig {
    match AppConfig::load(Some(CONFIG_TOML)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}, using defaults", AppConfig::filename(), e);
            AppConfig::default()
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start the tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=warn")),
        )
        .init();

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(TraceLayer::new_for_http());

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    use_hook(|| tracing::info!("Starting with the {} API", config.api.mode));
    let title = ui::messages::APP_TITLE;

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        SessionProvider {
            config,
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Unknown paths go to `/login`
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::warn!("No route for /{}", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}

/// Layout for every route that needs a signed-in user.
#[component]
fn Protected() -> Element {
    let nav = use_navigator();
    rsx! {
        SessionGuard {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
