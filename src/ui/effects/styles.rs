use leptos::prelude::*;

/// CSS shared by the effect components: reveal transitions, sparkle twinkle
/// and the slider's transparency checkerboard
#[component]
pub fn EffectStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .reveal {
                opacity: 0;
                transition-property: opacity, transform;
                transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
            }
            .reveal-up {
                transform: translateY(30px);
            }
            .reveal-left {
                transform: translateX(-30px);
            }
            .reveal-right {
                transform: translateX(30px);
            }
            .reveal.revealed {
                opacity: 1;
                transform: none;
            }

            @keyframes sparkle-twinkle {
                0%, 100% {
                    opacity: 0;
                }
                50% {
                    opacity: var(--sparkle-opacity, 1);
                }
            }
            .sparkle {
                opacity: 0;
                animation-name: sparkle-twinkle;
                animation-iteration-count: infinite;
                animation-timing-function: ease-in-out;
            }

            .checkerboard {
                background-color: #1a1a22;
                background-image:
                    linear-gradient(45deg, #26262f 25%, transparent 25%),
                    linear-gradient(-45deg, #26262f 25%, transparent 25%),
                    linear-gradient(45deg, transparent 75%, #26262f 75%),
                    linear-gradient(-45deg, transparent 75%, #26262f 75%);
                background-size: 20px 20px;
                background-position: 0 0, 0 10px, 10px -10px, -10px 0;
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal {
                    transition: none;
                    opacity: 1;
                    transform: none;
                }
                .sparkle {
                    animation: none;
                }
            }
            "#
        </style>
    }
}
