use std::fmt;

/// Weather family before the day/night split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThemeFamily {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeTag {
    Clear,
    ClearNight,
    Clouds,
    CloudsNight,
    Rain,
    RainNight,
    Thunderstorm,
    Snow,
    SnowNight,
    Mist,
    MistNight,
}

// Evaluated top to bottom; the first group containing a keyword wins.
const THEME_RULES: &[(&[&str], ThemeFamily)] = &[
    (&["clear"], ThemeFamily::Clear),
    (&["cloud", "overcast"], ThemeFamily::Clouds),
    (&["rain", "drizzle", "shower"], ThemeFamily::Rain),
    (&["thunder"], ThemeFamily::Thunderstorm),
    (&["snow"], ThemeFamily::Snow),
    (
        &["mist", "fog", "haze", "smoke", "dust", "sand"],
        ThemeFamily::Mist,
    ),
];

const NIGHT_MARKER: char = 'n';

#[must_use]
pub fn is_night_icon(icon: &str) -> bool {
    icon.ends_with(NIGHT_MARKER)
}

#[must_use]
pub(crate) fn classify_family(main_category: &str) -> ThemeFamily {
    let lowered = main_category.to_lowercase();
    THEME_RULES
        .iter()
        .find_map(|(keywords, family)| {
            keywords
                .iter()
                .any(|keyword| lowered.contains(keyword))
                .then_some(*family)
        })
        .unwrap_or(ThemeFamily::Clear)
}

#[must_use]
pub fn classify_theme(main_category: &str, icon: &str) -> ThemeTag {
    ThemeTag::from_family(classify_family(main_category), is_night_icon(icon))
}

#[must_use]
pub fn icon_url(icon_host: &str, icon: &str) -> String {
    format!("{}/img/wn/{icon}@4x.png", icon_host.trim_end_matches('/'))
}

impl ThemeTag {
    fn from_family(family: ThemeFamily, night: bool) -> Self {
        match (family, night) {
            (ThemeFamily::Clear, false) => Self::Clear,
            (ThemeFamily::Clear, true) => Self::ClearNight,
            (ThemeFamily::Clouds, false) => Self::Clouds,
            (ThemeFamily::Clouds, true) => Self::CloudsNight,
            (ThemeFamily::Rain, false) => Self::Rain,
            (ThemeFamily::Rain, true) => Self::RainNight,
            (ThemeFamily::Thunderstorm, _) => Self::Thunderstorm,
            (ThemeFamily::Snow, false) => Self::Snow,
            (ThemeFamily::Snow, true) => Self::SnowNight,
            (ThemeFamily::Mist, false) => Self::Mist,
            (ThemeFamily::Mist, true) => Self::MistNight,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::ClearNight => "clear-night",
            Self::Clouds => "clouds",
            Self::CloudsNight => "clouds-night",
            Self::Rain => "rain",
            Self::RainNight => "rain-night",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::SnowNight => "snow-night",
            Self::Mist => "mist",
            Self::MistNight => "mist-night",
        }
    }

    #[must_use]
    pub fn is_night(self) -> bool {
        matches!(
            self,
            Self::ClearNight
                | Self::CloudsNight
                | Self::RainNight
                | Self::SnowNight
                | Self::MistNight
        )
    }
}

impl fmt::Display for ThemeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
