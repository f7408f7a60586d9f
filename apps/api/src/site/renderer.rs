//! Renderer: a pure function from a `SiteRecord` to a complete HTML document.
//!
//! The page lives in `templates/site.html.mustache`. Record values reach it only
//! through `{{name}}`-style tags, which mustache HTML-escapes; the triple-brace tags
//! carry the static stylesheet and script.

use chrono::Datelike;
use serde::Serialize;
use thiserror::Error;

use crate::site::record::{RecordError, SiteRecord};
use crate::site::styles::{FONTS_LINK, SCRIPT, STYLESHEET};

const SITE_TEMPLATE: &str = include_str!("templates/site.html.mustache");

/// Hero and about-section image when the record has no usable image.
pub const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1537368910025-700350fe46c7?auto=format&fit=crop&w=1400&q=80";

/// Per-slot fallbacks for the testimonial slider.
pub const DEFAULT_TESTIMONIAL_IMAGES: [&str; TESTIMONIAL_SLIDES] = [
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=200&q=80",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=200&q=80",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=200&q=80",
];

/// The slider always shows this many slides, however many images the record has.
pub const TESTIMONIAL_SLIDES: usize = 3;

const TESTIMONIAL_QUOTES: [(&str, &str); TESTIMONIAL_SLIDES] = [
    (
        "Warm, attentive and thorough. I finally felt heard about my health.",
        "A grateful patient",
    ),
    (
        "The care I received was outstanding from the first visit to the follow-up.",
        "A long-time patient",
    ),
    (
        "Clear explanations and real results. I recommend this practice to my whole family.",
        "A happy family",
    ),
];

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("page template failed: {0}")]
    Template(String),
}

/// Everything the page template reads. Values are resolved here, so the
/// template itself has no fallback logic.
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    /// Doctor name, used in the title, brand, headings and footer.
    name: &'a str,
    niche: &'a str,
    description: &'a str,
    /// First usable record image, or the stock hero.
    hero_image: &'a str,
    nav_links: Vec<NavLink>,
    specializations: Vec<ListItem<'a>>,
    achievements: Vec<ListItem<'a>>,
    /// Always `TESTIMONIAL_SLIDES` entries.
    testimonials: Vec<TestimonialSlide<'a>>,
    faqs: Vec<FaqEntry<'a>>,
    year: String,
    fonts_link: &'static str,
    stylesheet: &'static str,
    script: &'static str,
}

#[derive(Debug, Serialize)]
struct NavLink {
    href: String,
    label: String,
}

#[derive(Debug, Serialize)]
struct ListItem<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct TestimonialSlide<'a> {
    index: String,
    number: String,
    active: bool,
    image: &'a str,
    quote: &'static str,
    author: &'static str,
}

#[derive(Debug, Serialize)]
struct FaqEntry<'a> {
    index: String,
    question: &'a str,
    answer: &'a str,
}

/// The current calendar year, for the footer notice.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Validates the record and renders the full page.
pub fn render_site(record: &SiteRecord, year: i32) -> Result<String, RenderError> {
    record.validate()?;

    let context = page_context(record, year);
    let template = mustache::compile_str(SITE_TEMPLATE)
        .map_err(|e| RenderError::Template(e.to_string()))?;
    template
        .render_to_string(&context)
        .map_err(|e| RenderError::Template(e.to_string()))
}

fn page_context(record: &SiteRecord, year: i32) -> PageContext<'_> {
    let details = &record.doctor_details;

    let testimonials = TESTIMONIAL_QUOTES
        .iter()
        .enumerate()
        .map(|(index, &(quote, author))| TestimonialSlide {
            index: index.to_string(),
            number: (index + 1).to_string(),
            active: index == 0,
            image: testimonial_image(&record.testimonial_images, index),
            quote,
            author,
        })
        .collect();

    let faqs = record
        .faqs
        .iter()
        .enumerate()
        .map(|(index, faq)| FaqEntry {
            index: index.to_string(),
            question: &faq.question,
            answer: &faq.answer,
        })
        .collect();

    PageContext {
        name: &details.name,
        niche: &record.website_niche,
        description: &details.description,
        hero_image: hero_image(record),
        nav_links: record
            .page_links
            .iter()
            .map(|slug| NavLink {
                href: nav_href(slug),
                label: nav_label(slug),
            })
            .collect(),
        specializations: list_items(&details.specialization),
        achievements: list_items(&details.achievements),
        testimonials,
        faqs,
        year: year.to_string(),
        fonts_link: FONTS_LINK,
        stylesheet: STYLESHEET,
        script: SCRIPT,
    }
}

fn list_items(items: &[String]) -> Vec<ListItem<'_>> {
    items.iter().map(|text| ListItem { text }).collect()
}

/// An image value the page will use as-is: a non-blank http(s) URL.
fn usable_image(value: &str) -> Option<&str> {
    let value = value.trim();
    let is_web_url = value.starts_with("https://") || value.starts_with("http://");
    is_web_url.then_some(value)
}

fn hero_image(record: &SiteRecord) -> &str {
    record
        .images
        .first()
        .and_then(|image| usable_image(image))
        .unwrap_or(DEFAULT_HERO_IMAGE)
}

fn testimonial_image(images: &[String], index: usize) -> &str {
    images
        .get(index)
        .and_then(|image| usable_image(image))
        .unwrap_or(DEFAULT_TESTIMONIAL_IMAGES[index])
}

/// Visible text for a page slug: only the first hyphen becomes a space.
pub fn nav_label(slug: &str) -> String {
    slug.replacen('-', " ", 1)
}

/// Site-relative path for a page slug. Leading slashes are dropped so a slug
/// can never become a protocol-relative `//host` link.
pub fn nav_href(slug: &str) -> String {
    format!("/{}", slug.trim_start_matches(|c| c == '/' || c == '\\'))
}
