//! Landing page component
//!
//! Marketing page for FlipCut:
//! - SEO meta tags
//! - Hero with get-started and watch-demo buttons, plus animated stats
//! - Interactive before/after demo with a thumbnail picker
//! - Feature cards and the three-step walkthrough
//! - Call-to-action and footer

use chrono::Datelike;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use crate::core::auth::{get_started_label, handle_get_started};
use crate::core::content::{FEATURES, STATS, STEPS, feature_delay, step_delay};
use crate::core::{DemoImage, DemoSelection};
use crate::ui::auth::use_auth_context;
use crate::ui::dom::scroll_to_id;
use crate::ui::effects::{
    AnimatedCounter, BeforeAfterSlider, BorderBeamButton, DotPattern, GlowButton, GridPattern,
    MagneticButton, Reveal, RevealFrom, Sparkles, SpotlightCard, use_reveal_once,
};
use crate::ui::icon::{Icon, icons};

const DEMO_SECTION_ID: &str = "demo";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = StoredValue::new_local(use_navigate());
    let selection = RwSignal::new(DemoSelection::default());

    // Shared by every "get started" entry point
    let on_get_started = Callback::new(move |_: ()| {
        let go = |route: &str| navigate.with_value(|nav| nav(route, Default::default()));
        handle_get_started(&auth, &go);
    });

    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen pt-20 overflow-hidden bg-[#050507]" data-testid="landing-page">
            <HeroSection on_get_started=on_get_started />
            <DemoSection selection=selection on_get_started=on_get_started />
            <FeaturesSection />
            <StepsSection />
            <CtaSection on_get_started=on_get_started />
            <Footer />
        </div>
    }
}

/// Hero: headline, primary actions and the stats row
#[component]
fn HeroSection(on_get_started: Callback<()>) -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <section class="relative px-6 py-24 md:py-32 lg:py-40">
            <div class="absolute inset-0 overflow-hidden">
                <GridPattern class="opacity-30" />
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-[#7c3aed]/20 rounded-full blur-[120px]"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-[#06b6d4]/20 rounded-full blur-[120px]"></div>
            </div>

            <div class="absolute inset-0 pointer-events-none">
                <Sparkles size=1.5 density=100 color="#7c3aed" speed=0.5 opacity=0.5 seed=11 />
            </div>

            <div class="max-w-6xl mx-auto relative z-10">
                <div class="hero-item flex justify-start mb-8" style="animation-delay: 0.2s;">
                    <div class="glass px-4 py-2 rounded-full flex items-center gap-2 border border-[#7c3aed]/30">
                        <Icon name=icons::ZAP class="w-4 h-4 text-[#7c3aed]" />
                        <span class="text-sm text-zinc-300">"AI-Powered Image Processing"</span>
                        <span class="px-2 py-0.5 rounded-full bg-[#7c3aed]/20 text-[#7c3aed] text-xs font-medium">
                            "New"
                        </span>
                    </div>
                </div>

                <h1
                    class="hero-item text-5xl sm:text-6xl lg:text-8xl font-bold text-white leading-[1.1] mb-8 tracking-tight"
                    style="animation-delay: 0.3s;"
                >
                    "Remove backgrounds."
                    <br />
                    <span class="gradient-text">"Flip instantly."</span>
                </h1>

                <p
                    class="hero-item text-lg lg:text-xl text-zinc-400 max-w-2xl mb-12 leading-relaxed"
                    style="animation-delay: 0.4s;"
                >
                    "Transform your images in seconds with FlipCut. Our AI removes backgrounds
                    and flips your images horizontally, ready for e-commerce, social media
                    and creative projects."
                </p>

                <div class="hero-item flex flex-wrap gap-4 mb-16" style="animation-delay: 0.5s;">
                    <GlowButton
                        on_click=on_get_started
                        test_id="get-started-btn"
                        class="text-lg px-10 py-4".to_string()
                    >
                        {move || get_started_label(auth.is_authenticated(), "Get Started Free")}
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </GlowButton>

                    <BorderBeamButton
                        on_click=Callback::new(move |_: ()| scroll_to_id(DEMO_SECTION_ID))
                        test_id="watch-demo-btn"
                        class="text-lg flex items-center".to_string()
                    >
                        <Icon name=icons::PLAY class="w-4 h-4 mr-2" />
                        "Watch Demo"
                    </BorderBeamButton>
                </div>

                <StatsRow />
            </div>
        </section>
    }
}

/// Headline numbers; they count up the first time the row is seen
#[component]
fn StatsRow() -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let counters_visible = use_reveal_once(node);

    view! {
        <div node_ref=node class="hero-item flex flex-wrap gap-12" style="animation-delay: 0.6s;">
            {STATS
                .iter()
                .map(|stat| {
                    let stat = *stat;
                    view! {
                        <div class="text-center">
                            <div class="text-3xl lg:text-4xl font-bold text-white mb-1">
                                {move || {
                                    if counters_visible.with(|latch| latch.is_shown()) {
                                        view! { <AnimatedCounter value=stat.value suffix=stat.suffix /> }
                                            .into_any()
                                    } else {
                                        stat.placeholder().into_any()
                                    }
                                }}
                            </div>
                            <div class="text-sm text-zinc-500">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Before/after comparison with selectable sample images
#[component]
fn DemoSection(selection: RwSignal<DemoSelection>, on_get_started: Callback<()>) -> impl IntoView {
    let before = Signal::derive(move || selection.with(|s| s.current().original.to_string()));
    let after = Signal::derive(move || selection.with(|s| s.current().processed.to_string()));

    let select = move |index: usize| {
        selection.update(|s| {
            if let Err(e) = s.select(index) {
                leptos::logging::warn!("Ignoring demo selection: {}", e);
            }
        });
    };

    view! {
        <section id=DEMO_SECTION_ID class="relative px-6 py-24 bg-[#0a0a0f]/80">
            <DotPattern class="opacity-50" />

            <Reveal from=RevealFrom::Nowhere duration=0.8 class="max-w-6xl mx-auto relative z-10">
                <div class="text-center mb-16">
                    <Reveal>
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-white mb-4">
                            "See the magic in action"
                        </h2>
                    </Reveal>
                    <p class="text-zinc-400 text-lg">"Drag the slider to compare before and after"</p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <Reveal from=RevealFrom::Left>
                        <BeforeAfterSlider
                            before_image=before
                            after_image=after
                            before_label="Original"
                            after_label="Processed"
                            class="max-w-lg mx-auto shadow-2xl shadow-[#7c3aed]/10".to_string()
                        />
                    </Reveal>

                    <Reveal from=RevealFrom::Right delay=0.2 class="space-y-6">
                        <h3 class="text-2xl font-bold text-white mb-6">"Works with any image type"</h3>

                        <div class="grid grid-cols-3 gap-4">
                            {selection
                                .with_untracked(|s| s.entries())
                                .iter()
                                .enumerate()
                                .map(|(index, demo)| {
                                    view! {
                                        <DemoThumbnail
                                            demo=demo
                                            selected=Signal::derive(move || selection.with(|s| s.is_selected(index)))
                                            on_select=Callback::new(move |_: ()| select(index))
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="pt-6">
                            <MagneticButton
                                on_click=on_get_started
                                test_id="try-now-btn"
                                class="w-full flex items-center justify-center rounded-xl bg-[#7c3aed] hover:bg-[#6d28d9] text-white py-6 text-lg font-medium".to_string()
                            >
                                <Icon name=icons::IMAGE_PLUS class="w-5 h-5 mr-2" />
                                "Try with your own image"
                            </MagneticButton>
                        </div>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn DemoThumbnail(
    demo: &'static DemoImage,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                let state = if selected.get() {
                    "border-[#7c3aed] scale-105 shadow-lg shadow-[#7c3aed]/20"
                } else {
                    "border-transparent hover:border-white/20"
                };
                format!(
                    "relative aspect-square rounded-xl overflow-hidden border-2 transition-all duration-300 {}",
                    state,
                )
            }
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_select.run(())
        >
            <img src=demo.original alt=demo.category class="w-full h-full object-cover" />
            <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
            <span class="absolute bottom-2 left-2 text-xs text-white font-medium">{demo.category}</span>
        </button>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="relative px-6 py-24">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-1/2 left-0 w-96 h-96 bg-[#7c3aed]/10 rounded-full blur-[150px]"></div>
                <div class="absolute top-1/2 right-0 w-96 h-96 bg-[#06b6d4]/10 rounded-full blur-[150px]"></div>
            </div>

            <div class="max-w-6xl mx-auto relative z-10">
                <div class="text-center mb-16">
                    <Reveal>
                        <span class="text-[#7c3aed] text-sm font-medium uppercase tracking-wider">
                            "Features"
                        </span>
                    </Reveal>
                    <Reveal>
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-white mt-4 mb-6">
                            "Everything you need"
                        </h2>
                    </Reveal>
                    <Reveal>
                        <p class="text-zinc-400 text-lg max-w-2xl mx-auto">
                            "Professional image processing in just a few clicks"
                        </p>
                    </Reveal>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <Reveal delay=feature_delay(index)>
                                    <SpotlightCard class="h-full".to_string()>
                                        <div class=format!(
                                            "w-14 h-14 rounded-2xl bg-gradient-to-br {} flex items-center justify-center mb-6 shadow-lg",
                                            feature.accent,
                                        )>
                                            <Icon name=feature.icon class="w-7 h-7 text-white" />
                                        </div>
                                        <h3 class="text-xl font-semibold text-white mb-3">{feature.title}</h3>
                                        <p class="text-zinc-400 leading-relaxed">{feature.description}</p>
                                    </SpotlightCard>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// "How it works" walkthrough
#[component]
fn StepsSection() -> impl IntoView {
    let last = STEPS.len() - 1;

    view! {
        <section class="relative px-6 py-24 bg-[#0a0a0f]/80">
            <GridPattern class="opacity-20" />

            <div class="max-w-4xl mx-auto relative z-10">
                <div class="text-center mb-16">
                    <Reveal>
                        <span class="text-[#06b6d4] text-sm font-medium uppercase tracking-wider">
                            "How it works"
                        </span>
                    </Reveal>
                    <Reveal>
                        <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-white mt-4 mb-6">
                            "Three simple steps"
                        </h2>
                    </Reveal>
                </div>

                <div class="space-y-8">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <Reveal from=RevealFrom::Left delay=step_delay(index) class="flex items-start gap-6 group">
                                    <div class="relative">
                                        <div class="w-16 h-16 rounded-2xl bg-gradient-to-br from-[#7c3aed] to-[#06b6d4] flex items-center justify-center text-white font-bold text-xl shadow-lg group-hover:scale-110 transition-transform duration-300">
                                            {step.number}
                                        </div>
                                        {(index < last).then(|| view! {
                                            <div class="absolute top-16 left-1/2 w-0.5 h-12 bg-gradient-to-b from-[#7c3aed]/50 to-transparent -translate-x-1/2"></div>
                                        })}
                                    </div>
                                    <div class="flex-1 pt-2">
                                        <h3 class="text-2xl font-semibold text-white mb-2 flex items-center gap-3">
                                            {step.title}
                                            <Icon name=step.icon class="w-5 h-5 text-[#7c3aed]" />
                                        </h3>
                                        <p class="text-zinc-400 text-lg">{step.description}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CtaSection(on_get_started: Callback<()>) -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <section class="relative px-6 py-32">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-[#7c3aed]/5 to-transparent"></div>
                <Sparkles size=2.0 density=50 color="#7c3aed" speed=0.3 opacity=0.3 seed=23 />
            </div>

            <Reveal duration=0.8 class="max-w-3xl mx-auto text-center relative z-10">
                <h2 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-white mb-8">
                    "Ready to transform"
                    <br />
                    <span class="gradient-text">"your images?"</span>
                </h2>
                <p class="text-zinc-400 mb-10 text-xl">
                    "Join creators using FlipCut for their image processing needs."
                </p>
                <GlowButton
                    on_click=on_get_started
                    test_id="cta-get-started-btn"
                    class="text-xl px-12 py-5".to_string()
                >
                    {move || get_started_label(auth.is_authenticated(), "Start for Free")}
                    <Icon name=icons::ARROW_RIGHT class="w-6 h-6" />
                </GlowButton>
            </Reveal>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="px-6 py-8 border-t border-white/5 relative z-10">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <div class="w-8 h-8 rounded-lg bg-gradient-to-br from-[#7c3aed] to-[#06b6d4] flex items-center justify-center">
                        <Icon name=icons::SCISSORS class="w-4 h-4 text-white" />
                    </div>
                    <span class="text-sm text-zinc-400">{format!("FlipCut © {}", year)}</span>
                </div>
                <p class="text-sm text-zinc-500">"Powered by AI • Built for creators"</p>
            </div>
        </footer>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="FlipCut - AI Background Removal & Image Flip" />
        <Meta
            name="description"
            content="Remove image backgrounds with AI and flip them horizontally in seconds. Free for creators, e-commerce and social media."
        />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="FlipCut - AI Background Removal & Image Flip" />
        <Meta
            property="og:description"
            content="Remove backgrounds. Flip instantly. Transform your images in seconds with FlipCut."
        />
    }
}

/// Page-specific CSS: hero entrance and brand helpers
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Hero entrance, staggered through inline animation-delay */
            @keyframes hero-rise {
                from {
                    opacity: 0;
                    transform: translateY(30px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .hero-item {
                opacity: 0;
                animation: hero-rise 0.8s cubic-bezier(0.22, 1, 0.36, 1) forwards;
            }

            .gradient-text {
                background: linear-gradient(90deg, #7c3aed 0%, #06b6d4 100%);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .glass {
                background: rgba(255, 255, 255, 0.03);
                backdrop-filter: blur(12px);
                -webkit-backdrop-filter: blur(12px);
            }

            @media (prefers-reduced-motion: reduce) {
                .hero-item {
                    animation: none;
                    opacity: 1;
                }
            }
            "#
        </style>
    }
}
