//! Static page content.
//!
//! Every listing on the page is a compile-time literal. Nothing here has
//! identity or a lifecycle; sections iterate these tables directly.

/// Business name shown on the splash screen and in the footer.
pub const BUSINESS_NAME: &str = "Faria's Henna";

/// Hero background placeholder.
pub const HERO_BACKGROUND: &str = "/placeholder.svg?height=800&width=1600";

pub const HERO_TITLE: &str = "Embrace the Art of Henna";
pub const HERO_TAGLINE: &str =
    "Adorn your body with intricate designs that tell your unique story";
pub const HERO_CTA: &str = "Explore Our Services";

pub const ABOUT_TITLE: &str = "About Henna Art";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Henna, also known as Mehndi, is an ancient form of body art originating from the Indian subcontinent. It involves creating intricate patterns on the skin using a paste made from the powdered leaves of the henna plant.",
    "At Faria's Henna, we blend traditional techniques with modern designs to create stunning, personalized henna tattoos that reflect your individual style and cultural heritage.",
];

pub const SERVICES_TITLE: &str = "Our Services";
pub const GALLERY_TITLE: &str = "Henna Gallery";
pub const GALLERY_OVERLAY: &str = "View Design";

pub const CONTACT_TITLE: &str = "Book Your Henna Session";
pub const CONTACT_TAGLINE: &str =
    "Transform your special moments with our exquisite henna designs";

/// Number dialled by the contact call link.
pub const PHONE_NUMBER: &str = "+8801847554007";
pub const CALL_HREF: &str = "tel:+8801847554007";
pub const CALL_LABEL: &str = "Call +8801847554007";

pub const FOOTER_COPYRIGHT: &str = "\u{00A9} 2023 Faria's Henna. All rights reserved.";
pub const FOOTER_TAGLINE: &str = "Embracing tradition, celebrating beauty";

/// Decorative glyph used in place of an icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Heart,
    Star,
    Flower,
    Sparkles,
}

impl Icon {
    /// Returns the glyph rendered for this icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Heart => "\u{2665}",
            Icon::Star => "\u{2605}",
            Icon::Flower => "\u{273F}",
            Icon::Sparkles => "\u{2726}",
        }
    }
}

/// A named in-page anchor in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    /// Fragment link target, e.g. `#services`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Navigation entries, shared by the desktop bar and the mobile drawer.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Services", anchor: "services" },
    NavItem { label: "Gallery", anchor: "gallery" },
    NavItem { label: "Contact", anchor: "contact" },
];

/// A feature callout in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Sparkles,
        title: "Artistic Excellence",
        description: "Years of experience in creating intricate designs",
    },
    Feature {
        icon: Icon::Heart,
        title: "Personalized Service",
        description: "Tailored designs to match your style and personality",
    },
    Feature {
        icon: Icon::Flower,
        title: "Natural Ingredients",
        description: "100% organic henna for safe and beautiful results",
    },
];

/// A fixed-price service listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub price: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        name: "Bridal Henna",
        price: "800 TK",
        icon: Icon::Heart,
        description: "Elaborate designs for your special day",
    },
    Service {
        name: "Party Designs",
        price: "400 TK",
        icon: Icon::Star,
        description: "Stylish patterns for any celebration",
    },
    Service {
        name: "Traditional Patterns",
        price: "350 TK",
        icon: Icon::Flower,
        description: "Classic motifs with cultural significance",
    },
    Service {
        name: "Modern Fusion",
        price: "450 TK",
        icon: Icon::Sparkles,
        description: "Contemporary designs with a traditional twist",
    },
    Service {
        name: "Kids' Henna",
        price: "250 TK",
        icon: Icon::Star,
        description: "Fun and safe designs for little ones",
    },
    Service {
        name: "Henna Workshops",
        price: "1000 TK",
        icon: Icon::Sparkles,
        description: "Learn the art of henna application",
    },
];

/// Number of placeholder images in the gallery.
pub const GALLERY_SIZE: usize = 8;

/// Edge length, in pixels, of a gallery placeholder.
const GALLERY_IMAGE_PX: u32 = 400;

/// One placeholder image in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    /// 1-based position in the gallery.
    pub number: usize,
    pub label: String,
    pub src: String,
}

/// Builds the gallery placeholders, numbered from 1.
pub fn gallery_entries() -> Vec<GalleryEntry> {
    (1..=GALLERY_SIZE)
        .map(|number| GalleryEntry {
            number,
            label: format!("Henna Design {number}"),
            src: format!(
                "/placeholder.svg?height={px}&width={px}&text=Henna+Design+{number}",
                px = GALLERY_IMAGE_PX
            ),
        })
        .collect()
}

/// Social networks linked from the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
    ];

    /// Screen-reader label.
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter",
        }
    }

    /// Short visible badge text.
    pub fn badge(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "f",
            SocialPlatform::Instagram => "ig",
            SocialPlatform::Twitter => "x",
        }
    }
}

/// Footer links. Targets are placeholders.
pub const FOOTER_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Contact Us"];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_items_in_page_order() {
        let labels: Vec<&str> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Gallery", "Contact"]);

        let hrefs: Vec<String> = NAV_ITEMS.iter().map(NavItem::href).collect();
        assert_eq!(
            hrefs,
            ["#home", "#about", "#services", "#gallery", "#contact"]
        );
    }

    #[test]
    fn test_services_names_and_prices() {
        let listed: Vec<(&str, &str)> = SERVICES.iter().map(|s| (s.name, s.price)).collect();
        assert_eq!(
            listed,
            [
                ("Bridal Henna", "800 TK"),
                ("Party Designs", "400 TK"),
                ("Traditional Patterns", "350 TK"),
                ("Modern Fusion", "450 TK"),
                ("Kids' Henna", "250 TK"),
                ("Henna Workshops", "1000 TK"),
            ]
        );
    }

    #[test]
    fn test_gallery_has_eight_unique_labels() {
        let entries = gallery_entries();
        assert_eq!(entries.len(), 8);

        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.number, i + 1);
            assert_eq!(entry.label, format!("Henna Design {}", i + 1));
        }

        let unique: HashSet<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_gallery_src_encodes_size_and_label() {
        let entries = gallery_entries();
        assert_eq!(
            entries[2].src,
            "/placeholder.svg?height=400&width=400&text=Henna+Design+3"
        );
    }

    #[test]
    fn test_three_features_and_socials() {
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(FEATURES[0].title, "Artistic Excellence");

        let labels: Vec<&str> = SocialPlatform::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Facebook", "Instagram", "Twitter"]);
    }

    #[test]
    fn test_call_link_dials_phone_number() {
        assert_eq!(CALL_HREF, "tel:+8801847554007");
        assert_eq!(CALL_HREF, format!("tel:{PHONE_NUMBER}"));
        assert_eq!(CALL_LABEL, format!("Call {PHONE_NUMBER}"));
    }
}
