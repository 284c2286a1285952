//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::logging::error;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::{Footer, Navbar, NoticeToast, Page};
use crate::config::{CONTENT_TOML, DESKTOP_MEDIA_QUERY};
use crate::core::animation::{Region, gsap};
use crate::core::{ContactFormController, Delivery, Orchestrator};
use crate::models::{ContentRegistry, NavAction, Navigation, ViewportClass};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle. The
/// orchestrator holds JavaScript objects, so it lives in local storage.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active section and mobile drawer.
    pub nav: RwSignal<Navigation>,

    /// Contact form state and submission.
    pub contact: ContactFormController,

    /// Content tables, immutable after load.
    pub content: StoredValue<ContentRegistry>,

    /// Scroll/animation orchestrator.
    pub animation: StoredValue<Orchestrator, LocalStorage>,
}

impl AppContext {
    /// Creates the context and starts the animation engines if present.
    pub fn new(content: ContentRegistry) -> Self {
        let viewport = dom::viewport_class();
        Self {
            nav: RwSignal::new(Navigation::new(viewport)),
            contact: ContactFormController::new(Delivery::from_config()),
            content: StoredValue::new(content),
            animation: StoredValue::new_local(Orchestrator::initialize(gsap::detect(), viewport)),
        }
    }

    pub fn navigate(&self, action: NavAction) {
        self.nav.update(|nav| {
            nav.navigate(action);
        });
    }

    /// Rebind animations for the regions now on the page.
    pub fn regions_changed(&self, regions: &[Region]) {
        self.animation
            .try_update_value(|orchestrator| orchestrator.regions_changed(regions));
    }

    /// Drop the bindings of a view that has just been removed.
    pub fn release_bindings(&self) {
        self.animation
            .try_update_value(|orchestrator| orchestrator.release_bindings());
    }

    pub fn viewport_changed(&self, viewport: ViewportClass) {
        self.nav.update(|nav| nav.viewport_changed(viewport));
        self.animation
            .try_update_value(|orchestrator| orchestrator.viewport_changed(viewport));
    }

    /// Reset scroll to the top, through smooth scroll when it is running.
    pub fn scroll_to_top(&self) {
        let smooth = self
            .animation
            .try_with_value(|orchestrator| orchestrator.scroll_to_top())
            .unwrap_or(false);
        if !smooth {
            dom::scroll_window_to_top();
        }
    }

    /// Release every animation binding and the engines.
    pub fn teardown(&self) {
        self.animation
            .try_update_value(|orchestrator| orchestrator.teardown());
    }
}

// ============================================================================
// Components
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Loads the bundled content tables
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the site once content is available
#[component]
pub fn App() -> impl IntoView {
    let content = ContentRegistry::parse(CONTENT_TOML).inspect_err(|e| error!("[content] {}", e));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0b1220;
                    color: #e5e7eb;
                    font-family: 'Inter', sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #9ca3af; margin-bottom: 2rem;">
                            "The page could not be loaded. Please try reloading."
                        </p>
                        <ul style="
                            text-align: left;
                            color: #f87171;
                            font-size: 0.9rem;
                            margin-bottom: 2rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {content.map(|content| view! { <Site content=content /> })}
        </ErrorBoundary>
    }
}

/// The site shell: navigation, the active page, footer and notices.
///
/// Owns the animation engines for its lifetime; they are torn down when the
/// shell is unmounted.
#[component]
fn Site(content: ContentRegistry) -> impl IntoView {
    let ctx = AppContext::new(content);
    provide_context(ctx);

    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move |_| {
        let viewport = if is_desktop.get() {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        };
        ctx.viewport_changed(viewport);
    });

    on_cleanup(move || ctx.teardown());

    view! {
        <Navbar />
        <Page />
        <Footer />
        <NoticeToast />
    }
}
