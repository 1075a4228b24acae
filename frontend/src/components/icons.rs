use yew::prelude::*;

/// Line icons drawn on a 24x24 grid with a 2px round stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    BadgeCheck,
    BarChart,
    ClipboardList,
    Clock,
    Facebook,
    Globe,
    Linkedin,
    MapPin,
    Menu,
    Moon,
    PlayCircle,
    SatelliteDish,
    Sun,
    Truck,
    Twitter,
    Users,
    X,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::BadgeCheck => &[
                "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
                "m9 12 2 2 4-4",
            ],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::ClipboardList => &[
                "M9 2h6a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1z",
                "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
                "M12 11h4",
                "M12 16h4",
                "M8 11h.01",
                "M8 16h.01",
            ],
            Icon::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
            Icon::Facebook => &[
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            ],
            Icon::Globe => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::MapPin => &[
                "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Icon::PlayCircle => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M10 8l6 4-6 4z"],
            Icon::SatelliteDish => &[
                "M4 10a7.31 7.31 0 0 0 10 10Z",
                "m9 15 3-3",
                "M17 13a6 6 0 0 0-6-6",
                "M21 13A10 10 0 0 0 11 3",
            ],
            Icon::Sun => &[
                "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_geometry() {
        let icons = [
            Icon::ArrowRight, Icon::BadgeCheck, Icon::BarChart, Icon::ClipboardList,
            Icon::Clock, Icon::Facebook, Icon::Globe, Icon::Linkedin, Icon::MapPin,
            Icon::Menu, Icon::Moon, Icon::PlayCircle, Icon::SatelliteDish, Icon::Sun,
            Icon::Truck, Icon::Twitter, Icon::Users, Icon::X,
        ];
        for icon in icons {
            assert!(!icon.paths().is_empty(), "{:?}", icon);
        }
    }
}
