//! Inline SVG icon set (24×24 stroke glyphs in the Lucide style).
//!
//! Icons are plain values stored on each `NavEntry`; the sidebar only ever
//! calls `Icon::render`, so route tables never deal with markup.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Droplets,
    Bell,
    Chart,
    MapPin,
    Settings,
    User,
    Menu,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Path(&'static str),
    Line(u8, u8, u8, u8),
    Rect { x: u8, y: u8, w: u8, h: u8 },
    Circle { cx: u8, cy: u8, r: u8 },
}

impl Icon {
    /// Accessible short name, also used as a stable CSS modifier.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Dashboard => "dashboard",
            Icon::Droplets => "droplets",
            Icon::Bell => "bell",
            Icon::Chart => "chart",
            Icon::MapPin => "map-pin",
            Icon::Settings => "settings",
            Icon::User => "user",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }

    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Dashboard => &[
                Shape::Rect { x: 3, y: 3, w: 7, h: 9 },
                Shape::Rect { x: 14, y: 3, w: 7, h: 5 },
                Shape::Rect { x: 14, y: 12, w: 7, h: 9 },
                Shape::Rect { x: 3, y: 16, w: 7, h: 5 },
            ],
            Icon::Droplets => &[
                Shape::Path("M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z"),
                Shape::Path("M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97"),
            ],
            Icon::Bell => &[
                Shape::Path("M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"),
                Shape::Path("M10.3 21a1.94 1.94 0 0 0 3.4 0"),
            ],
            Icon::Chart => &[
                Shape::Path("M3 3v18h18"),
                Shape::Path("M18 17V9"),
                Shape::Path("M13 17V5"),
                Shape::Path("M8 17v-3"),
            ],
            Icon::MapPin => &[
                Shape::Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
                Shape::Circle { cx: 12, cy: 10, r: 3 },
            ],
            Icon::Settings => &[
                Shape::Path("M20 7h-9"),
                Shape::Path("M14 17H5"),
                Shape::Circle { cx: 17, cy: 17, r: 3 },
                Shape::Circle { cx: 7, cy: 7, r: 3 },
            ],
            Icon::User => &[
                Shape::Path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
                Shape::Circle { cx: 12, cy: 7, r: 4 },
            ],
            Icon::Menu => &[Shape::Line(4, 6, 20, 6), Shape::Line(4, 12, 20, 12), Shape::Line(4, 18, 20, 18)],
            Icon::Close => &[Shape::Path("M18 6 6 18"), Shape::Path("m6 6 12 12")],
        }
    }

    /// Render the glyph as an inline `<svg>` using `currentColor`, so the
    /// surrounding link decides its colour.
    pub fn render(self, class: &str) -> Element {
        let name = self.name();
        rsx! {
            svg {
                class: "{class} icon--{name}",
                "xmlns": "http://www.w3.org/2000/svg",
                "viewBox": "0 0 24 24",
                "fill": "none",
                "stroke": "currentColor",
                "stroke-width": "2",
                "stroke-linecap": "round",
                "stroke-linejoin": "round",
                "aria-hidden": "true",
                for shape in self.shapes().iter() {
                    {shape.render()}
                }
            }
        }
    }
}

impl Shape {
    fn render(&self) -> Element {
        match *self {
            Shape::Path(d) => rsx! { path { "d": "{d}" } },
            Shape::Line(x1, y1, x2, y2) => rsx! {
                line { "x1": "{x1}", "y1": "{y1}", "x2": "{x2}", "y2": "{y2}" }
            },
            Shape::Rect { x, y, w, h } => rsx! {
                rect { "x": "{x}", "y": "{y}", "width": "{w}", "height": "{h}", "rx": "1" }
            },
            Shape::Circle { cx, cy, r } => rsx! {
                circle { "cx": "{cx}", "cy": "{cy}", "r": "{r}" }
            },
        }
    }
}
