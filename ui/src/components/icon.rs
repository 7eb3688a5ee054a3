use dioxus::prelude::*;

/// Inline stroke icons (24x24 grid, `currentColor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    BarChart,
    Briefcase,
    Building,
    CheckCircle,
    ChevronDown,
    Clock,
    Globe,
    GraduationCap,
    Linkedin,
    Mail,
    MessageCircle,
    Moon,
    Phone,
    Search,
    Shield,
    Sparkles,
    Sun,
    TrendingUp,
    Users,
    Warning,
    Zap,
}

impl Icon {
    /// Path data; multi-segment icons use several `d` strings.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Icon::BarChart => &["M12 20V10", "M18 20V4", "M6 20v-4"],
            Icon::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            Icon::Building => &[
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18z",
                "M6 12H4a2 2 0 0 0-2 2v8h4",
                "M18 9h2a2 2 0 0 1 2 2v11h-4",
                "M10 6h4M10 10h4M10 14h4M10 18h4",
            ],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4L12 14.01l-3-3"],
            Icon::ChevronDown => &["M6 9l6 6 6-6"],
            Icon::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
            Icon::Globe => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Icon::GraduationCap => &["M22 10L12 5 2 10l10 5 10-5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            ],
            Icon::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Icon::MessageCircle => &[
                "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z",
            ],
            Icon::Moon => &["M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.8 19.8 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
            Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Icon::Sparkles => &[
                "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9z",
                "M5 3v4M3 5h4M19 17v4M17 19h4",
            ],
            Icon::Sun => &[
                "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
                "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42",
            ],
            Icon::TrendingUp => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
            Icon::Users => &[
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::Warning => &[
                "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
                "M12 9v4M12 17h.01",
            ],
            Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

/// Accent colour of a card or badge. Maps to an `accent--*` modifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent--blue",
            Accent::Green => "accent--green",
            Accent::Purple => "accent--purple",
            Accent::Orange => "accent--orange",
            Accent::Teal => "accent--teal",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_path_data() {
        let all = [
            Icon::ArrowRight,
            Icon::BarChart,
            Icon::Briefcase,
            Icon::Building,
            Icon::CheckCircle,
            Icon::ChevronDown,
            Icon::Clock,
            Icon::Globe,
            Icon::GraduationCap,
            Icon::Linkedin,
            Icon::Mail,
            Icon::MessageCircle,
            Icon::Moon,
            Icon::Phone,
            Icon::Search,
            Icon::Shield,
            Icon::Sparkles,
            Icon::Sun,
            Icon::TrendingUp,
            Icon::Users,
            Icon::Warning,
            Icon::Zap,
        ];
        for icon in all {
            let paths = icon.paths();
            assert!(!paths.is_empty(), "{icon:?}");
            assert!(paths.iter().all(|d| d.starts_with('M')), "{icon:?}");
        }
    }

    #[test]
    fn glyph_is_hidden_from_assistive_tech() {
        let html = dioxus::ssr::render_element(rsx! {
            IconGlyph { icon: Icon::Globe }
        });
        assert!(html.contains(r#"aria-hidden="true""#), "{html}");
        assert_eq!(html.matches("<path").count(), Icon::Globe.paths().len(), "{html}");
    }
}
