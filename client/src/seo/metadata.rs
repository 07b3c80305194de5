//! Per-route SEO records.
//!
//! Every record is complete: title, description, canonical URL, Open Graph,
//! Twitter card and robots directive are always present, with site-wide
//! defaults filled in at declaration time.

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

use crate::routing::RouteName;

pub const BASE_URL: &str = "https://martingreenwood.com";
pub const SITE_NAME: &str = "Martin Greenwood";
pub const DEFAULT_TITLE: &str =
    "Martin Greenwood | Consultant Developer – Laravel, Vue, Integration Specialist";
pub const DEFAULT_DESCRIPTION: &str = "I help businesses build, fix, and scale digital systems. \
     Laravel/Vue developer with 10+ years experience in integrations, signage, dashboards & booking engines.";
pub const OG_IMAGE_PATH: &str = "/og-image.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const OG_LOCALE: &str = "en_GB";
pub const TWITTER_CARD: &str = "summary_large_image";

/// Crawler directive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Robots {
    #[default]
    IndexFollow,
    NoIndexFollow,
    NoIndexNoFollow,
}

impl Robots {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IndexFollow => "index, follow",
            Self::NoIndexFollow => "noindex, follow",
            Self::NoIndexNoFollow => "noindex, nofollow",
        }
    }

    pub fn indexable(self) -> bool {
        matches!(self, Self::IndexFollow)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub kind: &'static str,
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub locale: &'static str,
    pub site_name: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Complete metadata record for one route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

impl SeoMetadata {
    /// Record for the page at `path` (relative to [`BASE_URL`]).
    pub fn page(path: &str, title: &str, description: &str) -> Self {
        let url = format!("{BASE_URL}{path}");
        let image = format!("{BASE_URL}{OG_IMAGE_PATH}");
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            canonical_url: url.clone(),
            open_graph: OpenGraph {
                title: title.to_owned(),
                description: description.to_owned(),
                url,
                kind: "website",
                image: image.clone(),
                image_width: OG_IMAGE_WIDTH,
                image_height: OG_IMAGE_HEIGHT,
                locale: OG_LOCALE,
                site_name: SITE_NAME,
            },
            twitter: TwitterCard {
                card: TWITTER_CARD,
                title: title.to_owned(),
                description: description.to_owned(),
                image,
            },
            robots: Robots::IndexFollow,
        }
    }

    /// Site defaults, used for routes declared without their own record.
    pub fn site_default() -> Self {
        Self::page("/", DEFAULT_TITLE, DEFAULT_DESCRIPTION)
    }

    #[must_use]
    pub fn with_robots(mut self, robots: Robots) -> Self {
        self.robots = robots;
        self
    }

    /// Flatten into the tags written to the document head, in output order.
    pub fn head_tags(&self) -> Vec<HeadTag> {
        let og = &self.open_graph;
        let tw = &self.twitter;
        vec![
            HeadTag::Title(self.title.clone()),
            HeadTag::name("description", &self.description),
            HeadTag::name("robots", self.robots.as_str()),
            HeadTag::Canonical(self.canonical_url.clone()),
            HeadTag::property("og:title", &og.title),
            HeadTag::property("og:description", &og.description),
            HeadTag::property("og:url", &og.url),
            HeadTag::property("og:type", og.kind),
            HeadTag::property("og:image", &og.image),
            HeadTag::property("og:image:width", &og.image_width.to_string()),
            HeadTag::property("og:image:height", &og.image_height.to_string()),
            HeadTag::property("og:locale", og.locale),
            HeadTag::property("og:site_name", og.site_name),
            HeadTag::name("twitter:card", tw.card),
            HeadTag::name("twitter:title", &tw.title),
            HeadTag::name("twitter:description", &tw.description),
            HeadTag::name("twitter:image", &tw.image),
        ]
    }
}

/// One element of the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=… content=…>`
    Name { name: &'static str, content: String },
    /// `<meta property=… content=…>`
    Property { property: &'static str, content: String },
    /// `<link rel="canonical" href=…>`
    Canonical(String),
}

impl HeadTag {
    fn name(name: &'static str, content: &str) -> Self {
        Self::Name { name, content: content.to_owned() }
    }

    fn property(property: &'static str, content: &str) -> Self {
        Self::Property { property, content: content.to_owned() }
    }
}

/// The declared record for each route.
pub fn for_route(route: RouteName) -> SeoMetadata {
    match route {
        RouteName::Home => SeoMetadata::site_default(),
        RouteName::Showcase => SeoMetadata::page(
            "/showcase",
            "Button Showcase | Martin Greenwood",
            "A reference of the button styles, sizes and states used across martingreenwood.com.",
        ),
        RouteName::NotFound => SeoMetadata::page(
            "/404",
            "Page Not Found | Martin Greenwood",
            "The page you were looking for could not be found.",
        )
        .with_robots(Robots::NoIndexNoFollow),
    }
}
