//! Which clicks require sign-in, and where a gated click was headed.

use url::Url;

/// Call-to-action classes that are always gated
const PROTECTED_CLASSES: &[&str] = &["btn-primary", "btn-secondary", "btn-special"];

/// Link destinations that are gated (substring match on the raw href)
const PROTECTED_HREF_FRAGMENTS: &[&str] = &["customize", "cart", "menu"];

/// A clickable element as seen by the gate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affordance<'a> {
    pub href: Option<&'a str>,
    pub classes: &'a [&'a str],
}

impl<'a> Affordance<'a> {
    pub fn link(href: &'a str) -> Self {
        Self {
            href: Some(href),
            classes: &[],
        }
    }

    pub fn is_protected(&self) -> bool {
        self.classes.iter().any(|c| PROTECTED_CLASSES.contains(c))
            || self
                .href
                .is_some_and(|href| PROTECTED_HREF_FRAGMENTS.iter().any(|f| href.contains(f)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the default action run
    Allow,
    /// Default action must be prevented; the modal was opened
    Intercept { target: String },
}

impl GateDecision {
    pub fn is_intercepted(&self) -> bool {
        matches!(self, GateDecision::Intercept { .. })
    }
}

/// Absolute destination for a gated click: the element's href resolved
/// against the page, or the page itself when there is no href.
pub fn redirect_target(href: Option<&str>, current_url: &str) -> String {
    let href = match href.map(str::trim) {
        Some(h) if !h.is_empty() => h,
        _ => return current_url.to_string(),
    };
    match Url::parse(current_url).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}
