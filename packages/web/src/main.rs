use dioxus::prelude::*;

use views::{Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Build the Dioxus app with custom routes
    let router = axum::Router::new()
        // Email verification links land here, outside the server-fn surface
        .route("/verify-email/{token}", get(verify_email_callback))
        // Then serve the Dioxus application
        .serve_dioxus_application(ServeConfig::new(), App)
        // Add session layer to all routes
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

/// Marks the account behind a pending verification token as verified and
/// consumes the token.
#[cfg(feature = "server")]
async fn verify_email_callback(
    axum::extract::Path(token): axum::extract::Path<String>,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    let pool = match api::db::get_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            return Redirect::to("/profile?verified=error");
        }
    };

    let updated = sqlx::query(
        "UPDATE accounts SET email_verified = TRUE, updated_at = NOW()
         WHERE id = (SELECT account_id FROM email_verifications WHERE token = $1)",
    )
    .bind(&token)
    .execute(pool)
    .await;

    match updated {
        Ok(result) if result.rows_affected() > 0 => {
            if let Err(e) = sqlx::query("DELETE FROM email_verifications WHERE token = $1")
                .bind(&token)
                .execute(pool)
                .await
            {
                tracing::error!("Failed to consume verification token: {}", e);
            }
            Redirect::to("/profile?verified=1")
        }
        Ok(_) => {
            tracing::warn!("Unknown or expired verification token");
            Redirect::to("/profile?verified=unknown")
        }
        Err(e) => {
            tracing::error!("Failed to verify email: {}", e);
            Redirect::to("/profile?verified=error")
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::StatusMessages::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::AppStateProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/profile`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}
