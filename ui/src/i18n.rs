//! Internationalization (i18n) support for `liahub-ui`.
//!
//! This module wires together:
//! - `fluent` (message parsing + formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `unic-langid` (language identifiers for the Fluent bundles)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   sv/liahub-ui.ftl   (default locale)
//!   en/liahub-ui.ftl
//! ```
//!
//! Views never pass raw strings: every lookup goes through [`MessageKey`], and
//! the catalog is constructed once at the app root and handed down as a
//! [`Translator`] (catalog + active locale).
//!
//! Fallback policy for a miss: log it once, use the other locale's text, and
//! as a last resort the message id itself.
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ops::Deref;
use std::rc::Rc;

use fluent::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::{CatalogError, MissingTranslation};

mod keys;
pub use keys::MessageKey;

/// Fluent "domain": the per-locale file name is `{DOMAIN}.ftl`.
pub const DOMAIN: &str = "liahub-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Display language of the site.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Sv,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Sv, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Sv => "sv",
            Locale::En => "en",
        }
    }

    /// Accepts bare codes and region-qualified tags (`sv-SE`, `en_GB`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "sv" => Some(Locale::Sv),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// The other supported locale.
    pub fn toggled(self) -> Self {
        match self {
            Locale::Sv => Locale::En,
            Locale::En => Locale::Sv,
        }
    }

    /// Name of the language in that language (for pickers).
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Sv => "Svenska",
            Locale::En => "English",
        }
    }

    fn language_id(self) -> Result<LanguageIdentifier, CatalogError> {
        self.code()
            .parse()
            .map_err(|_| CatalogError::LanguageId(self.code().to_string()))
    }
}

/// Static, language-keyed lookup of every user-visible string.
pub struct ContentCatalog {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    reported: RefCell<HashSet<(Locale, MessageKey)>>,
}

impl ContentCatalog {
    /// Build the catalog from the embedded `.ftl` files.
    pub fn load() -> Result<Self, CatalogError> {
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let path = format!("{}/{DOMAIN}.ftl", locale.code());
            let file =
                Localizations::get(&path).ok_or_else(|| CatalogError::MissingResource(path.clone()))?;
            let source = String::from_utf8(file.data.into_owned())
                .map_err(|_| CatalogError::Encoding(path.clone()))?;
            sources.push((locale, source));
        }
        Self::from_sources(sources)
    }

    /// Build the catalog from in-memory Fluent sources. Locales without a
    /// source get an empty bundle, so every lookup for them falls back.
    pub fn from_sources(
        sources: impl IntoIterator<Item = (Locale, String)>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for (locale, source) in sources {
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                CatalogError::Parse {
                    path: format!("{}/{DOMAIN}.ftl", locale.code()),
                    count: errors.len(),
                }
            })?;
            let mut bundle = FluentBundle::new(vec![locale.language_id()?]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|_| CatalogError::Conflict(locale.code().to_string()))?;
            catalog.bundles.insert(locale, bundle);
        }
        Ok(catalog)
    }

    /// A catalog with no messages at all. Used when loading fails so the
    /// site still renders (every lookup yields the message id).
    pub fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
            reported: RefCell::new(HashSet::new()),
        }
    }

    /// Strict lookup: the message for exactly this locale.
    pub fn lookup(&self, locale: Locale, key: MessageKey) -> Result<String, MissingTranslation> {
        self.format(locale, key, None)
    }

    /// Strict lookup with Fluent arguments.
    pub fn lookup_with(
        &self,
        locale: Locale,
        key: MessageKey,
        args: &FluentArgs,
    ) -> Result<String, MissingTranslation> {
        self.format(locale, key, Some(args))
    }

    /// Lookup with the fallback policy applied. Never fails.
    pub fn text(&self, locale: Locale, key: MessageKey) -> String {
        self.resolve(locale, key, None)
    }

    /// [`ContentCatalog::text`] with Fluent arguments.
    pub fn text_with(&self, locale: Locale, key: MessageKey, args: &FluentArgs) -> String {
        self.resolve(locale, key, Some(args))
    }

    /// Every `(locale, key)` pair the catalog cannot serve directly.
    pub fn missing_keys(&self) -> Vec<(Locale, MessageKey)> {
        Locale::ALL
            .iter()
            .flat_map(|&locale| MessageKey::ALL.iter().map(move |&key| (locale, key)))
            .filter(|&(locale, key)| !self.has(locale, key))
            .collect()
    }

    pub fn has(&self, locale: Locale, key: MessageKey) -> bool {
        self.bundles
            .get(&locale)
            .and_then(|bundle| bundle.get_message(key.id()))
            .is_some_and(|message| message.value().is_some())
    }

    fn resolve(&self, locale: Locale, key: MessageKey, args: Option<&FluentArgs>) -> String {
        match self.format(locale, key, args) {
            Ok(text) => text,
            Err(missing) => {
                self.report(missing);
                self.format(locale.toggled(), key, args)
                    .unwrap_or_else(|_| key.id().to_string())
            }
        }
    }

    fn format(
        &self,
        locale: Locale,
        key: MessageKey,
        args: Option<&FluentArgs>,
    ) -> Result<String, MissingTranslation> {
        let missing = MissingTranslation { locale, key };
        let bundle = self.bundles.get(&locale).ok_or(missing)?;
        let pattern = bundle
            .get_message(key.id())
            .and_then(|message| message.value())
            .ok_or(missing)?;

        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(key = key.id(), locale = locale.code(), ?errors, "fluent formatting errors");
        }
        Ok(text.into_owned())
    }

    fn report(&self, missing: MissingTranslation) {
        if self.reported.borrow_mut().insert((missing.locale, missing.key)) {
            tracing::warn!("{missing}; using fallback text");
        }
    }
}

/// Cheap, comparable handle to the catalog for use in component props.
#[derive(Clone)]
pub struct SharedCatalog(Rc<ContentCatalog>);

impl SharedCatalog {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self(Rc::new(catalog))
    }

    /// Load the embedded catalog, degrading to an empty one on failure.
    pub fn load_or_empty() -> Self {
        let catalog = match ContentCatalog::load() {
            Ok(catalog) => {
                let missing = catalog.missing_keys();
                if !missing.is_empty() {
                    tracing::warn!(count = missing.len(), "catalog has untranslated keys");
                }
                catalog
            }
            Err(err) => {
                tracing::error!("failed to load content catalog ({err}); rendering message ids");
                ContentCatalog::empty()
            }
        };
        Self::new(catalog)
    }
}

impl PartialEq for SharedCatalog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedCatalog {
    type Target = ContentCatalog;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The catalog bound to the active locale. Sections take this as a prop.
#[derive(Clone, PartialEq)]
pub struct Translator {
    catalog: SharedCatalog,
    locale: Locale,
}

impl Translator {
    pub fn new(catalog: SharedCatalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, key: MessageKey) -> String {
        self.catalog.text(self.locale, key)
    }

    pub fn text_with(&self, key: MessageKey, args: &FluentArgs) -> String {
        self.catalog.text_with(self.locale, key, args)
    }
}
