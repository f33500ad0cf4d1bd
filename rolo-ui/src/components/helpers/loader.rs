//! Loader component: spinner, pulsing block or skeleton lines

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use thiserror::Error;

/// Error parsing a loader size or variant name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLoaderError {
    #[error("unknown loader size: {0:?}")]
    UnknownSize(String),
    #[error("unknown loader variant: {0:?}")]
    UnknownVariant(String),
}

/// Loader size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoaderSize {
    fn spinner_class(self) -> &'static str {
        match self {
            LoaderSize::Small => "h-5 w-5 border-2",
            LoaderSize::Medium => "h-8 w-8 border-2",
            LoaderSize::Large => "h-12 w-12 border-4",
        }
    }

    fn block_class(self) -> &'static str {
        match self {
            LoaderSize::Small => "h-8 w-24",
            LoaderSize::Medium => "h-16 w-48",
            LoaderSize::Large => "h-32 w-72",
        }
    }

    fn skeleton_width_class(self) -> &'static str {
        match self {
            LoaderSize::Small => "w-32",
            LoaderSize::Medium => "w-56",
            LoaderSize::Large => "w-80",
        }
    }
}

/// Loader rendering strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderVariant {
    /// Spinning ring
    #[default]
    Spinner,
    /// Single pulsing skeleton block
    Pulse,
    /// Skeleton text lines with a screen-reader label
    Skeleton,
}

impl LoaderVariant {
    /// Parse a variant name, falling back to `Spinner` for unknown or missing
    /// names.
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for LoaderVariant {
    type Err = ParseLoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spinner" => Ok(LoaderVariant::Spinner),
            "pulse" => Ok(LoaderVariant::Pulse),
            "skeleton" => Ok(LoaderVariant::Skeleton),
            other => Err(ParseLoaderError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for LoaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoaderVariant::Spinner => "spinner",
            LoaderVariant::Pulse => "pulse",
            LoaderVariant::Skeleton => "skeleton",
        };
        f.write_str(name)
    }
}

impl FromStr for LoaderSize {
    type Err = ParseLoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" | "small" => Ok(LoaderSize::Small),
            "md" | "medium" => Ok(LoaderSize::Medium),
            "lg" | "large" => Ok(LoaderSize::Large),
            other => Err(ParseLoaderError::UnknownSize(other.to_string())),
        }
    }
}

impl fmt::Display for LoaderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoaderSize::Small => "sm",
            LoaderSize::Medium => "md",
            LoaderSize::Large => "lg",
        };
        f.write_str(name)
    }
}

/// Loading indicator. Pure function of its props.
#[component]
pub fn Loader(
    #[props(default)] size: LoaderSize,
    #[props(default)] variant: LoaderVariant,
    /// Cover the whole viewport with a dimmed overlay
    #[props(default)]
    full_screen: bool,
) -> Element {
    let spinner_class = size.spinner_class();
    let block_class = size.block_class();
    let skeleton_width = size.skeleton_width_class();
    let container_class = if full_screen {
        "fixed inset-0 z-[4000] flex items-center justify-center bg-gray-900/80"
    } else {
        "flex items-center justify-center"
    };

    let indicator = match variant {
        LoaderVariant::Spinner => rsx! {
            div {
                class: "animate-spin rounded-full border-gray-600 border-b-blue-500 {spinner_class}",
                role: "status",
                aria_label: "Loading",
            }
        },
        LoaderVariant::Pulse => rsx! {
            div {
                class: "animate-pulse rounded-lg bg-gray-700 {block_class}",
                role: "status",
                aria_label: "Loading",
            }
        },
        LoaderVariant::Skeleton => rsx! {
            div {
                class: "animate-pulse space-y-3 {skeleton_width}",
                role: "status",
                div { class: "h-4 rounded bg-gray-700 w-3/4" }
                div { class: "h-4 rounded bg-gray-700" }
                div { class: "h-4 rounded bg-gray-700 w-5/6" }
                span { class: "sr-only", "Loading..." }
            }
        },
    };

    rsx! {
        div {
            class: container_class,
            "data-testid": "loader",
            "data-variant": "{variant}",
            "data-size": "{size}",
            {indicator}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_medium_spinner() {
        assert_eq!(LoaderSize::default(), LoaderSize::Medium);
        assert_eq!(LoaderVariant::default(), LoaderVariant::Spinner);
    }

    #[test]
    fn unknown_or_missing_variant_is_spinner() {
        assert_eq!(LoaderVariant::from_name(None), LoaderVariant::Spinner);
        assert_eq!(LoaderVariant::from_name(Some("dots")), LoaderVariant::Spinner);
        assert_eq!(LoaderVariant::from_name(Some("")), LoaderVariant::Spinner);
        assert_eq!(LoaderVariant::from_name(Some("Pulse")), LoaderVariant::Spinner);
    }

    #[test]
    fn known_variants_parse() {
        assert_eq!(LoaderVariant::from_name(Some("pulse")), LoaderVariant::Pulse);
        assert_eq!(
            LoaderVariant::from_name(Some("skeleton")),
            LoaderVariant::Skeleton
        );
    }

    #[test]
    fn sizes_accept_short_and_long_names() {
        assert_eq!("sm".parse(), Ok(LoaderSize::Small));
        assert_eq!("large".parse(), Ok(LoaderSize::Large));
        assert_eq!(
            "huge".parse::<LoaderSize>(),
            Err(ParseLoaderError::UnknownSize("huge".to_string()))
        );
    }

    #[test]
    fn unknown_names_report_what_failed() {
        let err = "dots".parse::<LoaderVariant>().unwrap_err();
        assert_eq!(err, ParseLoaderError::UnknownVariant("dots".to_string()));
        assert_eq!(err.to_string(), "unknown loader variant: \"dots\"");
        let err = "xl".parse::<LoaderSize>().unwrap_err();
        assert_eq!(err.to_string(), "unknown loader size: \"xl\"");
    }

    #[test]
    fn display_names_parse_back() {
        for variant in [
            LoaderVariant::Spinner,
            LoaderVariant::Pulse,
            LoaderVariant::Skeleton,
        ] {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
    }
}
