//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::effects::{GridPattern, Sparkles};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - FlipCut" />

        <div class="relative min-h-screen bg-[#050507] flex flex-col items-center justify-center p-4 overflow-hidden">
            <GridPattern class="opacity-20" />
            <Sparkles size=1.0 density=40 color="#06b6d4" speed=0.4 opacity=0.4 />

            <div class="relative z-10 text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/5 rounded-full flex items-center justify-center">
                    <Icon name=icons::SCISSORS class="w-12 h-12 text-zinc-500" />
                </div>

                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>

                <p class="text-zinc-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-block px-6 py-3 bg-[#7c3aed] hover:bg-[#6d28d9] text-white font-medium rounded-full transition-colors"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
