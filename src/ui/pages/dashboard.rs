//! Dashboard page component
//!
//! Landing spot after login. Greets the signed-in user; anonymous visitors
//! get a prompt to sign in.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::auth::{AuthCollaborator, User};
use crate::ui::auth::use_auth_context;
use crate::ui::effects::{DotPattern, GlowButton, Reveal};
use crate::ui::icon::{Icon, icons};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <Title text="Dashboard - FlipCut" />

        <div class="relative min-h-screen bg-[#050507] px-6 py-24" data-testid="dashboard-page">
            <DotPattern class="opacity-30" />

            <div class="relative z-10 max-w-3xl mx-auto">
                <A href="/" attr:class="inline-flex items-center gap-2 text-sm text-zinc-400 hover:text-white mb-12">
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                    "Back to home"
                </A>

                {move || match auth.user.get() {
                    Some(user) => view! { <Welcome user=user /> }.into_any(),
                    None => view! {
                        <Reveal class="text-center">
                            <h1 class="text-4xl font-bold text-white mb-4">"Sign in to continue"</h1>
                            <p class="text-zinc-400 mb-10">
                                "Your processed images live in your FlipCut account."
                            </p>
                            <GlowButton
                                on_click=Callback::new(move |_: ()| auth.login())
                                test_id="dashboard-login-btn"
                            >
                                "Sign in"
                                <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                            </GlowButton>
                        </Reveal>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Welcome(user: User) -> impl IntoView {
    let auth = use_auth_context();
    let initial = user.name.chars().next().unwrap_or('?').to_uppercase().to_string();

    view! {
        <Reveal>
            <div class="flex items-center gap-4 mb-10">
                {match user.picture.clone() {
                    Some(src) => view! {
                        <img src=src alt=user.name.clone() class="w-14 h-14 rounded-full object-cover" />
                    }
                    .into_any(),
                    None => view! {
                        <div class="w-14 h-14 rounded-full bg-gradient-to-br from-[#7c3aed] to-[#06b6d4] flex items-center justify-center text-xl font-bold text-white">
                            {initial}
                        </div>
                    }
                    .into_any(),
                }}
                <div>
                    <h1 class="text-3xl font-bold text-white">{format!("Welcome back, {}", user.name)}</h1>
                    <p class="text-zinc-400">{user.email.clone()}</p>
                </div>
            </div>

            <div class="rounded-2xl border border-dashed border-white/10 bg-white/5 p-12 text-center">
                <Icon name=icons::IMAGE_PLUS class="w-10 h-10 mx-auto mb-4 text-[#7c3aed]" />
                <p class="text-zinc-300">"Your processed images will appear here."</p>
            </div>

            <button
                class="mt-8 text-sm text-zinc-500 hover:text-white transition-colors"
                data-testid="sign-out-btn"
                on:click=move |_| auth.sign_out()
            >
                "Sign out"
            </button>
        </Reveal>
    }
}
