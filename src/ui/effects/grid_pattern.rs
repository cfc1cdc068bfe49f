//! SVG tile backgrounds: a line grid and a dot field

use leptos::prelude::*;

use crate::core::pattern::{DEFAULT_GRID_SIZE, DOT_TILE_SIZE, grid_path, pattern_fill, pattern_id};

/// Faint lines on a near-transparent fill
const GRID_BASE_CLASS: &str =
    "pointer-events-none absolute inset-0 h-full w-full fill-white/[0.01] stroke-white/[0.05]";

const DOT_BASE_CLASS: &str = "pointer-events-none absolute inset-0 h-full w-full fill-white/[0.03]";

fn pattern_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

/// Repeating grid of lines covering the parent
#[component]
pub fn GridPattern(
    /// Tile width (user-space units)
    #[prop(default = DEFAULT_GRID_SIZE)]
    width: f64,
    /// Tile height (user-space units)
    #[prop(default = DEFAULT_GRID_SIZE)]
    height: f64,
    /// Pattern origin
    #[prop(optional)]
    x: f64,
    #[prop(optional)]
    y: f64,
    /// Dash pattern of the grid lines
    #[prop(default = "0".to_string(), into)]
    stroke_dasharray: String,
    /// Extra classes, typically stroke/fill colours and a mask
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let id = pattern_id("grid");
    let fill = pattern_fill(&id);

    view! {
        <svg aria-hidden="true" class=pattern_class(GRID_BASE_CLASS, &class)>
            <defs>
                <pattern
                    id=id
                    width=width.to_string()
                    height=height.to_string()
                    patternUnits="userSpaceOnUse"
                    x=x.to_string()
                    y=y.to_string()
                >
                    <path d=grid_path(width, height) fill="none" stroke-dasharray=stroke_dasharray />
                </pattern>
            </defs>
            <rect width="100%" height="100%" stroke-width="0" fill=fill />
        </svg>
    }
}

/// Repeating field of dots covering the parent
#[component]
pub fn DotPattern(
    /// Dot center inside its tile
    #[prop(default = 1.0)]
    cx: f64,
    #[prop(default = 1.0)]
    cy: f64,
    /// Dot radius
    #[prop(default = 1.0)]
    cr: f64,
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let id = pattern_id("dot");
    let fill = pattern_fill(&id);

    view! {
        <svg aria-hidden="true" class=pattern_class(DOT_BASE_CLASS, &class)>
            <defs>
                <pattern
                    id=id
                    width=DOT_TILE_SIZE.to_string()
                    height=DOT_TILE_SIZE.to_string()
                    patternUnits="userSpaceOnUse"
                    patternContentUnits="userSpaceOnUse"
                >
                    <circle cx=cx.to_string() cy=cy.to_string() r=cr.to_string() />
                </pattern>
            </defs>
            <rect width="100%" height="100%" stroke-width="0" fill=fill />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_class_appends_caller_classes() {
        assert_eq!(pattern_class(GRID_BASE_CLASS, ""), GRID_BASE_CLASS);
        assert_eq!(
            pattern_class(DOT_BASE_CLASS, "opacity-50"),
            "pointer-events-none absolute inset-0 h-full w-full fill-white/[0.03] opacity-50"
        );
    }

    #[test]
    fn test_default_classes_are_visible() {
        // Without caller classes the grid still strokes and the dots are not black
        assert!(pattern_class(GRID_BASE_CLASS, "").contains("stroke-white/[0.05]"));
        assert!(pattern_class(GRID_BASE_CLASS, "").contains("fill-white/[0.01]"));
        assert!(pattern_class(DOT_BASE_CLASS, "").contains("fill-white/[0.03]"));
    }
}
