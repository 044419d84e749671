//! Translation catalog for mail subjects and bodies

use chrono::{Locale, NaiveDate};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Lang {
    #[default]
    En,
    Nl,
    De,
    Fr,
    Es,
}

struct Catalog {
    years_past: &'static str,
    no_photos: &'static str,
    locale: Locale,
}

const EN: Catalog = Catalog {
    years_past: "{years} years ago on {month} {day}",
    no_photos: "No photos found!",
    locale: Locale::en_US,
};

const NL: Catalog = Catalog {
    years_past: "{years} jaar geleden op {day} {month}",
    no_photos: "Geen foto's gevonden!",
    locale: Locale::nl_NL,
};

const DE: Catalog = Catalog {
    years_past: "Vor {years} Jahren, am {day} {month}",
    no_photos: "Keine Fotos gefunden!",
    locale: Locale::de_DE,
};

const FR: Catalog = Catalog {
    years_past: "il y a {years} ans le {day} {month}",
    no_photos: "Aucune photo trouvée !",
    locale: Locale::fr_FR,
};

const ES: Catalog = Catalog {
    years_past: "Hace {years} años el {day} de {month}",
    no_photos: "¡No se encontraron fotos!",
    locale: Locale::es_ES,
};

impl Lang {
    /// Accepts bare codes and region-tagged variants ("nl", "nl-BE", "de_AT").
    pub(crate) fn from_code(code: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = code else {
            return Ok(Lang::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Lang::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        match base.as_str() {
            "en" => Ok(Lang::En),
            "nl" => Ok(Lang::Nl),
            "de" => Ok(Lang::De),
            "fr" => Ok(Lang::Fr),
            "es" => Ok(Lang::Es),
            _ => Err(ConfigError::UnsupportedLanguage {
                input: trimmed.to_string(),
            }),
        }
    }

    fn catalog(self) -> &'static Catalog {
        match self {
            Lang::En => &EN,
            Lang::Nl => &NL,
            Lang::De => &DE,
            Lang::Fr => &FR,
            Lang::Es => &ES,
        }
    }

    /// Long month name for a 1-indexed month, from chrono's locale data.
    pub(crate) fn month_name(self, month: u32) -> String {
        NaiveDate::from_ymd_opt(2000, month.clamp(1, 12), 1)
            .map(|d| d.format_localized("%B", self.catalog().locale).to_string())
            .unwrap_or_default()
    }

    /// Heading used as both mail subject and `<h2>`, e.g. "5 years ago on June 10".
    pub(crate) fn years_past(self, years: i32, month: u32, day: u32) -> String {
        self.catalog()
            .years_past
            .replace("{years}", &years.to_string())
            .replace("{month}", &self.month_name(month))
            .replace("{day}", &day.to_string())
    }

    pub(crate) fn no_photos(self) -> &'static str {
        self.catalog().no_photos
    }
}
