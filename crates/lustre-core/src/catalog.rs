//! Static storefront content consumed by the carousel widgets.
//!
//! Items are opaque to the engines: they are only counted and echoed back to
//! the rendering layer. Nothing here is ever mutated.

/// One card in a carousel. `image_ref` is whatever the rendering layer needs
/// to locate the artwork (a URL on the web, a placeholder name natively).
#[derive(Clone, Debug)]
pub struct CarouselItem {
    pub id: &'static str,
    pub image_ref: &'static str,
    pub label: &'static str,
    pub subtitle: Option<&'static str>,
}

/// Profiles shown in the "explore" cover-flow stage.
pub const EXPLORE_PROFILES: &[CarouselItem] = &[
    CarouselItem {
        id: "chris-yellow",
        image_ref: "/explore/chris.jpg",
        label: "Chris Yellow",
        subtitle: Some("Designer"),
    },
    CarouselItem {
        id: "melanie-afke",
        image_ref: "/explore/melanie.jpg",
        label: "Melanie Afke",
        subtitle: Some("Beauty Teacher"),
    },
    CarouselItem {
        id: "jude-goggins",
        image_ref: "/explore/jude.jpg",
        label: "Jude Goggins",
        subtitle: Some("Sophomore"),
    },
    CarouselItem {
        id: "amy-blackhouse",
        image_ref: "/explore/amy.jpg",
        label: "Amy Blackhouse",
        subtitle: Some("Chemistry Teacher"),
    },
    CarouselItem {
        id: "team-steve",
        image_ref: "/explore/steve.jpg",
        label: "Team Steve",
        subtitle: Some("Junior"),
    },
];

/// Cards in the "what makes our product stand out" momentum strip.
pub const STANDOUT_ITEMS: &[CarouselItem] = &[
    CarouselItem {
        id: "functional-foods",
        image_ref: "/cleansers.jpg",
        label: "Functional Foods",
        subtitle: Some("Health care products"),
    },
    CarouselItem {
        id: "nourishing-cream",
        image_ref: "/moisturizer.jpg",
        label: "Nourishing Cream",
        subtitle: Some("Deep hydration"),
    },
    CarouselItem {
        id: "daily-lotion-trio",
        image_ref: "/bodywash.jpg",
        label: "Daily Lotion Trio",
        subtitle: Some("Gentle formula"),
    },
    CarouselItem {
        id: "botanical-gel",
        image_ref: "/botanical.webp",
        label: "Botanical Gel",
        subtitle: Some("Soothing blend"),
    },
    CarouselItem {
        id: "luxury-serum",
        image_ref: "/serums.webp",
        label: "Luxury Serum",
        subtitle: Some("Brightening"),
    },
];

/// Popular-collections grid content (static markup, no engine behind it).
pub const POPULAR_COLLECTIONS: &[CarouselItem] = &[
    CarouselItem {
        id: "chance-eau-tendre",
        image_ref: "/shopping.webp",
        label: "Chance Chanel Eau Tendre",
        subtitle: Some("Perfume"),
    },
    CarouselItem {
        id: "aveeno-daily",
        image_ref: "/lotion.avif",
        label: "Aveeno Daily Moisturizing",
        subtitle: Some("Body"),
    },
    CarouselItem {
        id: "max-studio-fit",
        image_ref: "/foundation.avif",
        label: "Max Studio Fit Fluid Foundation",
        subtitle: Some("Face"),
    },
    CarouselItem {
        id: "ck-eternity",
        image_ref: "/eternity.jpeg",
        label: "Calvin Klein Eternity",
        subtitle: Some("Perfume"),
    },
];
