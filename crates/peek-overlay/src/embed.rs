//! Embed snippet parsing.
//!
//! Turns the markup a user pastes (typically an `<iframe ...>` share
//! snippet) into an [`EmbedSource`] whose locator has the control channel
//! enabled, native controls shown, and related-content suggestions off.

use std::collections::BTreeMap;

use peek_common::EmbedError;
use scraper::{ElementRef, Html};
use serde::Serialize;
use url::Url;

/// Query parameters forced onto every locator, in emission order.
pub const FORCED_QUERY_PARAMS: &[(&str, &str)] = &[
    // programmatic control channel
    ("enablejsapi", "1"),
    // native player controls
    ("controls", "1"),
    // no related-content suggestions
    ("rel", "0"),
];

/// Schemes an embedded frame may load.
const ALLOWED_SCHEMES: &[&str] = &["https", "http"];

/// A playable resource extracted from an embed snippet. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedSource {
    resource_url: Url,
    query_overrides: BTreeMap<String, String>,
    title: Option<String>,
    allow: Option<String>,
}

impl EmbedSource {
    /// The frame's own `src`, before overrides.
    pub fn resource_url(&self) -> &Url {
        &self.resource_url
    }

    pub fn query_overrides(&self) -> &BTreeMap<String, String> {
        &self.query_overrides
    }

    /// `title` attribute copied from the frame element.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// `allow` attribute (permissions policy) copied from the frame element.
    pub fn allow(&self) -> Option<&str> {
        self.allow.as_deref()
    }

    /// The URL the embedded frame loads.
    ///
    /// Every override key appears exactly once; any occurrence of those keys
    /// in the original query is dropped. Other parameters keep their order.
    pub fn locator(&self) -> String {
        let mut url = self.resource_url.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| !self.query_overrides.contains_key(&**k))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let forced = FORCED_QUERY_PARAMS
            .iter()
            .filter_map(|(k, _)| self.query_overrides.get_key_value(*k));
        let extra = self
            .query_overrides
            .iter()
            .filter(|(k, _)| !FORCED_QUERY_PARAMS.iter().any(|(f, _)| *f == k.as_str()));

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept.iter());
            pairs.extend_pairs(forced.chain(extra));
        }
        url.to_string()
    }
}

/// Parse raw embed markup.
///
/// Fails with [`EmbedError::InvalidEmbedCode`] when the snippet has no
/// `<iframe>`, the first one has no usable `src`, or the source is not an
/// absolute http(s) URL. Protocol-relative sources resolve against https.
pub fn parse(raw_markup: &str) -> Result<EmbedSource, EmbedError> {
    let markup = raw_markup.trim();
    if markup.is_empty() {
        return Err(EmbedError::InvalidEmbedCode("empty embed code".into()));
    }

    let document = Html::parse_fragment(markup);
    let frame = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name().eq_ignore_ascii_case("iframe"))
        .ok_or_else(|| EmbedError::InvalidEmbedCode("no iframe element".into()))?;

    let src = frame
        .value()
        .attr("src")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| EmbedError::InvalidEmbedCode("iframe has no src".into()))?;

    let resource_url = parse_frame_src(src)?;

    let query_overrides = FORCED_QUERY_PARAMS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Ok(EmbedSource {
        resource_url,
        query_overrides,
        title: frame.value().attr("title").map(str::to_string),
        allow: frame.value().attr("allow").map(str::to_string),
    })
}

fn parse_frame_src(src: &str) -> Result<Url, EmbedError> {
    let absolute = if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_string()
    };

    let url = Url::parse(&absolute)
        .map_err(|e| EmbedError::InvalidEmbedCode(format!("bad iframe src '{src}': {e}")))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(EmbedError::InvalidEmbedCode(format!(
            "unsupported iframe src scheme: {}",
            url.scheme()
        )));
    }
    Ok(url)
}
