//! Coming-soon page route handler.
//!
//! Renders the single page of the site. The visitor's locality is read
//! from the platform's geolocation headers, logged as page-view telemetry,
//! and threaded into the form as a hidden field so a later submission can
//! carry it.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::HeaderMap;
use tracing::instrument;

use crate::content::ComingSoonContent;
use crate::filters;

/// Geolocation header carrying the visitor's country code.
pub const GEO_COUNTRY_HEADER: &str = "x-vercel-ip-country";

/// Geolocation header carrying the visitor's (percent-encoded) city.
pub const GEO_CITY_HEADER: &str = "x-vercel-ip-city";

/// The coming-soon page.
#[derive(Template, WebTemplate)]
#[template(path = "coming_soon.html")]
pub struct ComingSoonTemplate {
    pub content: ComingSoonContent,
    /// Decoded visitor city, prefilled into the form's hidden field.
    pub city: Option<String>,
    /// Email value to refill after a failed submission.
    pub email: String,
    /// Confirmation banner after a successful submission.
    pub notice: Option<String>,
    /// Error banner after a failed submission.
    pub error: Option<String>,
}

impl ComingSoonTemplate {
    /// Blank page for the given visitor locality.
    #[must_use]
    pub fn fresh(city: Option<String>) -> Self {
        Self {
            content: ComingSoonContent::for_city(city.as_deref()),
            city,
            email: String::new(),
            notice: None,
            error: None,
        }
    }
}

/// Render the coming-soon page.
#[instrument(skip_all)]
pub async fn page(headers: HeaderMap) -> ComingSoonTemplate {
    let (country, city) = visitor_locality(&headers);

    // Page-view telemetry: logged on every view, not just on submission
    tracing::info!(
        city = city.as_deref().unwrap_or("unknown"),
        country = country.as_deref().unwrap_or("unknown"),
        "coming-soon visitor"
    );

    ComingSoonTemplate::fresh(city)
}

/// Extract `(country, city)` from the request's geolocation headers.
///
/// The city arrives percent-encoded (e.g. `S%C3%A3o%20Paulo`) and is
/// decoded here. Missing, empty, or undecodable values become `None`.
#[must_use]
pub fn visitor_locality(headers: &HeaderMap) -> (Option<String>, Option<String>) {
    let country = header_value(headers, GEO_COUNTRY_HEADER);
    let city = header_value(headers, GEO_CITY_HEADER).and_then(|raw| {
        urlencoding::decode(&raw)
            .ok()
            .map(std::borrow::Cow::into_owned)
    });
    (country, city)
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_visitor_locality_decodes_city() {
        let mut headers = HeaderMap::new();
        headers.insert(GEO_COUNTRY_HEADER, HeaderValue::from_static("BR"));
        headers.insert(GEO_CITY_HEADER, HeaderValue::from_static("S%C3%A3o%20Paulo"));

        let (country, city) = visitor_locality(&headers);
        assert_eq!(country.as_deref(), Some("BR"));
        assert_eq!(city.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_visitor_locality_absent_headers() {
        let headers = HeaderMap::new();
        let (country, city) = visitor_locality(&headers);
        assert_eq!(country, None);
        assert_eq!(city, None);
    }

    #[test]
    fn test_visitor_locality_empty_city_is_none() {
        let mut headers = HeaderMap::new();
        headers.insert(GEO_CITY_HEADER, HeaderValue::from_static(""));
        let (_, city) = visitor_locality(&headers);
        assert_eq!(city, None);
    }

    #[test]
    fn test_page_renders_with_city_prefill() {
        let template = ComingSoonTemplate::fresh(Some("Paris".to_string()));
        let html = template.render().unwrap();
        assert!(html.contains("Paris"));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("value=\"Paris\""));
    }

    #[test]
    fn test_page_renders_without_city() {
        let template = ComingSoonTemplate::fresh(None);
        let html = template.render().unwrap();
        assert!(html.contains("Coming Soon"));
    }
}
