//! Third-party tracking scripts and cookie cleanup gated by consent.
//!
//! Script ids come from build-time env (`WIREWORKS_GA_ID`,
//! `WIREWORKS_LINKEDIN_PARTNER_ID`); a missing id skips that script.

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

use crate::state::consent::CookiePreferences;

/// Analytics cookie names set by the analytics tag.
pub const ANALYTICS_COOKIES: &[&str] = &["_ga", "_gid", "_gat", "_gcl_au"];
/// Analytics cookie-name prefixes (per-property `_ga_<id>` cookies).
pub const ANALYTICS_COOKIE_PREFIXES: &[&str] = &["_ga_"];
/// Marketing cookie names set by ad pixels.
pub const MARKETING_COOKIES: &[&str] = &["_fbp", "_fbc", "li_fat_id", "lidc", "bcookie", "_uetsid", "_uetvid"];

const GA_ID: Option<&str> = option_env!("WIREWORKS_GA_ID");
const LINKEDIN_PARTNER_ID: Option<&str> = option_env!("WIREWORKS_LINKEDIN_PARTNER_ID");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Analytics,
    Marketing,
}

/// One `<script>` element to inject into `<head>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingScript {
    /// DOM id, used to keep injection idempotent.
    pub id: &'static str,
    pub src: Option<String>,
    pub inline: Option<String>,
}

fn analytics_scripts(measurement_id: &str) -> Vec<TrackingScript> {
    vec![
        TrackingScript {
            id: "ww-analytics-src",
            src: Some(format!("https://www.googletagmanager.com/gtag/js?id={measurement_id}")),
            inline: None,
        },
        TrackingScript {
            id: "ww-analytics-init",
            src: None,
            inline: Some(format!(
                "window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}\
                 gtag('js',new Date());gtag('config','{measurement_id}',{{anonymize_ip:true}});"
            )),
        },
    ]
}

fn marketing_scripts(partner_id: &str) -> Vec<TrackingScript> {
    vec![
        TrackingScript {
            id: "ww-marketing-init",
            src: None,
            inline: Some(format!(
                "window._linkedin_data_partner_ids=window._linkedin_data_partner_ids||[];\
                 window._linkedin_data_partner_ids.push('{partner_id}');"
            )),
        },
        TrackingScript {
            id: "ww-marketing-src",
            src: Some("https://snap.licdn.com/li.lms-analytics/insight.min.js".to_owned()),
            inline: None,
        },
    ]
}

/// Scripts allowed by `prefs` with the given ids.
#[must_use]
pub fn scripts_with_ids(prefs: CookiePreferences, analytics_id: Option<&str>, marketing_id: Option<&str>) -> Vec<TrackingScript> {
    let mut out = Vec::new();
    if prefs.analytics
        && let Some(id) = analytics_id.filter(|id| !id.is_empty())
    {
        out.extend(analytics_scripts(id));
    }
    if prefs.marketing
        && let Some(id) = marketing_id.filter(|id| !id.is_empty())
    {
        out.extend(marketing_scripts(id));
    }
    out
}

/// Scripts allowed by `prefs` with the ids baked in at build time.
#[must_use]
pub fn scripts_for(prefs: CookiePreferences) -> Vec<TrackingScript> {
    scripts_with_ids(prefs, GA_ID, LINKEDIN_PARTNER_ID)
}

/// Whether a cookie name belongs to `category`.
#[must_use]
pub fn matches_tracking_cookie(category: Category, name: &str) -> bool {
    match category {
        Category::Analytics => {
            ANALYTICS_COOKIES.contains(&name) || ANALYTICS_COOKIE_PREFIXES.iter().any(|p| name.starts_with(p))
        }
        Category::Marketing => MARKETING_COOKIES.contains(&name),
    }
}

/// Cookie names present in `header` that `prefs` no longer allows.
#[must_use]
pub fn cookies_to_clear(prefs: CookiePreferences, header: &str) -> Vec<String> {
    super::storage::cookie_names(header)
        .into_iter()
        .filter(|name| {
            (!prefs.analytics && matches_tracking_cookie(Category::Analytics, name))
                || (!prefs.marketing && matches_tracking_cookie(Category::Marketing, name))
        })
        .collect()
}

/// Domains a tracking cookie may have been set on: host-only (`None`), the
/// host itself, and its dot-prefixed registrable parent.
#[must_use]
pub fn cookie_domains(hostname: &str) -> Vec<Option<String>> {
    let mut out = vec![None];
    if hostname.is_empty() || hostname == "localhost" || hostname.parse::<std::net::IpAddr>().is_ok() {
        return out;
    }
    out.push(Some(hostname.to_owned()));
    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() >= 2 {
        let parent = labels[labels.len() - 2..].join(".");
        out.push(Some(format!(".{parent}")));
    }
    out
}

/// Inject allowed scripts and delete cookies for refused categories.
pub fn apply(prefs: CookiePreferences) {
    #[cfg(feature = "hydrate")]
    {
        inject_scripts(&scripts_for(prefs));
        clear_cookies(prefs);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}

#[cfg(feature = "hydrate")]
fn inject_scripts(scripts: &[TrackingScript]) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = doc.head() else {
        return;
    };
    for script in scripts {
        if doc.get_element_by_id(script.id).is_some() {
            continue;
        }
        let Ok(el) = doc.create_element("script") else {
            continue;
        };
        el.set_id(script.id);
        if let Some(src) = &script.src {
            let _ = el.set_attribute("src", src);
            let _ = el.set_attribute("async", "");
        }
        if let Some(inline) = &script.inline {
            el.set_text_content(Some(inline));
        }
        if head.append_child(&el).is_err() {
            log::warn!("tracking script {} not injected", script.id);
        }
    }
}

#[cfg(feature = "hydrate")]
fn clear_cookies(prefs: CookiePreferences) {
    use super::storage::{expire_cookie_string, read_cookie_header, write_cookie};

    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    let domains = cookie_domains(&hostname);
    for name in cookies_to_clear(prefs, &read_cookie_header()) {
        for domain in &domains {
            write_cookie(&expire_cookie_string(&name, domain.as_deref()));
        }
        log::debug!("cleared tracking cookie {name}");
    }
}
