//! Locale strings
//!
//! The dashboard ships a single Spanish locale. Strings live in a Fluent
//! resource embedded at compile time and are looked up by key with [`t`] or
//! [`t_args`]. Missing keys render as the key itself.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use unic_langid::LanguageIdentifier;

/// Locale of the embedded resource
pub const LOCALE: &str = "es";

const LOCALE_RESOURCE: &str = include_str!("../locales/es.ftl");

thread_local! {
    static BUNDLE: FluentBundle<FluentResource> = build_bundle();
}

fn build_bundle() -> FluentBundle<FluentResource> {
    let langid: LanguageIdentifier = LOCALE.parse().unwrap_or_default();
    let mut bundle = FluentBundle::new(vec![langid]);
    // Strings end up in widgets, not bidi-aware HTML
    bundle.set_use_isolating(false);

    let resource = match FluentResource::try_new(LOCALE_RESOURCE.to_string()) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(count = errors.len(), "locale resource has parse errors");
            resource
        }
    };
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(count = errors.len(), "locale resource has duplicate keys");
    }
    bundle
}

/// Translate a key
pub fn t(key: &str) -> String {
    t_args(key, &[])
}

/// Translate a key with named arguments
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    BUNDLE.with(|bundle| {
        let Some(pattern) = bundle.get_message(key).and_then(|message| message.value()) else {
            return key.to_string();
        };

        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }

        let mut errors = Vec::new();
        bundle
            .format_pattern(pattern, Some(&fluent_args), &mut errors)
            .into_owned()
    })
}
