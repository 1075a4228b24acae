use crate::components::icons::Icon;

/// Top-level blocks of the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Nav,
    Hero,
    HowItWorks,
    Features,
    Testimonials,
    Cta,
    Footer,
}

impl SectionId {
    pub const ORDER: [SectionId; 7] = [
        SectionId::Nav,
        SectionId::Hero,
        SectionId::HowItWorks,
        SectionId::Features,
        SectionId::Testimonials,
        SectionId::Cta,
        SectionId::Footer,
    ];

    /// Value of the `data-section` attribute.
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Nav => "nav",
            SectionId::Hero => "hero",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Features => "features",
            SectionId::Testimonials => "testimonials",
            SectionId::Cta => "cta",
            SectionId::Footer => "footer",
        }
    }

    /// DOM id used as an in-page anchor target, if the section has one.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionId::HowItWorks => Some("how-it-works"),
            SectionId::Features => Some("features"),
            SectionId::Testimonials => Some("testimonials"),
            SectionId::Cta => Some("contact"),
            _ => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|section| section.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target.anchor().unwrap_or_default())
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", target: SectionId::Features },
    NavLink { label: "How It Works", target: SectionId::HowItWorks },
    NavLink { label: "Testimonials", target: SectionId::Testimonials },
    NavLink { label: "Contact", target: SectionId::Cta },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Book Your Delivery",
        description: "Schedule pickups and deliveries in seconds with our intuitive booking system",
        icon: Icon::ClipboardList,
    },
    Step {
        number: "02",
        title: "Track in Real-Time",
        description: "Monitor every shipment with live GPS tracking and instant updates",
        icon: Icon::SatelliteDish,
    },
    Step {
        number: "03",
        title: "Deliver & Confirm",
        description: "Get digital proof of delivery with photos and signatures",
        icon: Icon::BadgeCheck,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Real-Time GPS Tracking",
        description: "Monitor your entire fleet with live location updates.",
        icon: Icon::MapPin,
    },
    Feature {
        title: "Advanced Analytics",
        description: "Get detailed insights on delivery times and efficiency.",
        icon: Icon::BarChart,
    },
    Feature {
        title: "Fleet Management",
        description: "Manage unlimited vehicles from one dashboard.",
        icon: Icon::Truck,
    },
    Feature {
        title: "Driver Performance",
        description: "Track driver behavior and boost efficiency.",
        icon: Icon::Users,
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "15K+", label: "Active Users", icon: Icon::Users },
    Stat { value: "98%", label: "On-Time Delivery", icon: Icon::Clock },
    Stat { value: "50K+", label: "Monthly Deliveries", icon: Icon::Truck },
    Stat { value: "45+", label: "Cities Covered", icon: Icon::Globe },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "\"N-Track made our logistics seamless and stress-free. Highly recommended!\"",
        author: "Blessing Adeyemi",
        role: "Logistics Manager, SwiftMove Ltd.",
    },
    Testimonial {
        quote: "\"The analytics dashboard is a game changer for our business operations.\"",
        author: "Emeka Uzochukwu",
        role: "Head of Operations, CargoPro Inc.",
    },
    Testimonial {
        quote: "\"Real-time tracking and instant updates keep our customers happy!\"",
        author: "Fatima Bello",
        role: "Customer Service Lead, ExpressGo",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes() {
        assert_eq!(STEPS.len(), 3);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(STATS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
    }

    #[test]
    fn step_numbers_are_ordered() {
        let numbers: Vec<_> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["01", "02", "03"]);
    }

    #[test]
    fn nav_links_resolve_to_anchors() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(NavLink::href).collect();
        assert_eq!(hrefs, ["#features", "#how-it-works", "#testimonials", "#contact"]);
    }

    #[test]
    fn section_keys_round_trip() {
        let keys: HashSet<_> = SectionId::ORDER.iter().map(|s| s.key()).collect();
        assert_eq!(keys.len(), SectionId::ORDER.len());
        assert_eq!(SectionId::from_key("cta"), Some(SectionId::Cta));
        assert_eq!(SectionId::from_key("pricing"), None);
    }
}
