use leptos::prelude::*;

/// Inline stroke icon (24×24 grid, inherits `currentColor`)
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icons::markup(name)
        ></svg>
    }
}

/// Icon names and their SVG markup
pub mod icons {
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CLOUD: &str = "cloud";
    pub const DOWNLOAD: &str = "download";
    pub const FLIP_HORIZONTAL: &str = "flip-horizontal";
    pub const IMAGE_PLUS: &str = "image-plus";
    pub const MOVE_HORIZONTAL: &str = "move-horizontal";
    pub const PLAY: &str = "play";
    pub const SCISSORS: &str = "scissors";
    pub const SPARKLES: &str = "sparkles";
    pub const ZAP: &str = "zap";

    /// Child elements of the `<svg>` for `name`; unknown names render empty
    pub fn markup(name: &str) -> &'static str {
        match name {
            ARROW_LEFT => r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#,
            ARROW_RIGHT => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            CLOUD => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
            DOWNLOAD => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#
            }
            FLIP_HORIZONTAL => {
                r#"<path d="m3 7 5 5-5 5V7"/><path d="m21 7-5 5 5 5V7"/><path d="M12 20v2"/><path d="M12 14v2"/><path d="M12 8v2"/><path d="M12 2v2"/>"#
            }
            IMAGE_PLUS => {
                r#"<path d="M16 5h6"/><path d="M19 2v6"/><path d="M21 11.5V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h7.5"/><path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"/><circle cx="9" cy="9" r="2"/>"#
            }
            MOVE_HORIZONTAL => {
                r#"<polyline points="18 8 22 12 18 16"/><polyline points="6 8 2 12 6 16"/><line x1="2" x2="22" y1="12" y2="12"/>"#
            }
            PLAY => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
            SCISSORS => {
                r#"<circle cx="6" cy="6" r="3"/><path d="M8.12 8.12 12 12"/><path d="M20 4 8.12 15.88"/><circle cx="6" cy="18" r="3"/><path d="M14.8 14.8 20 20"/>"#
            }
            SPARKLES => {
                r#"<path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#
            }
            ZAP => {
                r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#
            }
            _ => "",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::content::{FEATURES, STEPS};

        #[test]
        fn test_content_icons_are_known() {
            for name in FEATURES.iter().map(|f| f.icon).chain(STEPS.iter().map(|s| s.icon)) {
                assert!(!markup(name).is_empty(), "missing icon markup for {}", name);
            }
        }

        #[test]
        fn test_unknown_icon_is_empty() {
            assert_eq!(markup("does-not-exist"), "");
        }
    }
}
