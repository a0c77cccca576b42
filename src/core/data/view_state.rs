//! Persistable view state: where the camera is looking and how far in.
//!
//! Serialised as a URL fragment, `#/x=<re>&y=<im>&z=<zoom>`.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::data::complex::Complex;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.5, 0.0);

/// Canvas width the default zoom is fitted to: four plane units across.
pub const DEFAULT_FIT_WIDTH: u32 = 1024;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStateParseError {
    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: String },
    InvalidZoom(f64),
}

impl fmt::Display for ViewStateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "view fragment is missing `{}`", field),
            Self::InvalidNumber { field, value } => {
                write!(f, "view field `{}` is not a finite number: {:?}", field, value)
            }
            Self::InvalidZoom(zoom) => write!(f, "view zoom must be positive: {}", zoom),
        }
    }
}

impl Error for ViewStateParseError {}

/// Center and zoom of the view. Owned by one writer and lent to whoever
/// needs to build a viewport from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: 4.0 / f64::from(DEFAULT_FIT_WIDTH),
        }
    }
}

impl ViewState {
    pub fn set_view(&mut self, center: Complex, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }

    /// Applies a serialised view. On any error the current view is kept as is.
    pub fn update_from_fragment(&mut self, fragment: &str) -> Result<(), ViewStateParseError> {
        let parsed: ViewState = fragment.parse()?;
        self.set_view(parsed.center, parsed.zoom);

        Ok(())
    }
}

impl FromStr for ViewState {
    type Err = ViewStateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s
            .strip_prefix("#/")
            .or_else(|| s.strip_prefix('#'))
            .unwrap_or(s);

        let real = parse_field(query, "x")?;
        let imag = parse_field(query, "y")?;
        let zoom = parse_field(query, "z")?;

        if zoom <= 0.0 {
            return Err(ViewStateParseError::InvalidZoom(zoom));
        }

        Ok(Self {
            center: Complex { real, imag },
            zoom,
        })
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#/x={}&y={}&z={}",
            self.center.real, self.center.imag, self.zoom
        )
    }
}

// First occurrence of a key wins.
fn parse_field(query: &str, field: &'static str) -> Result<f64, ViewStateParseError> {
    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == field).then_some(value))
        .ok_or(ViewStateParseError::MissingField(field))?;

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ViewStateParseError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = ViewState::default();

        assert_eq!(view.center, Complex::new(-0.5, 0.0));
        assert_eq!(view.zoom, 4.0 / 1024.0);
    }

    #[test]
    fn test_parse_with_hash_prefix() {
        let view: ViewState = "#/x=-0.75&y=0.1&z=0.002".parse().unwrap();

        assert_eq!(view.center, Complex::new(-0.75, 0.1));
        assert_eq!(view.zoom, 0.002);
    }

    #[test]
    fn test_parse_without_prefix_and_in_any_order() {
        let view: ViewState = "z=1e-5&y=-1&x=0.25&extra=7".parse().unwrap();

        assert_eq!(view.center, Complex::new(0.25, -1.0));
        assert_eq!(view.zoom, 1e-5);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let view: ViewState = "x=1&x=2&y=0&z=1".parse().unwrap();

        assert_eq!(view.center.real, 1.0);
    }

    #[test]
    fn test_display_round_trips() {
        let view = ViewState {
            center: Complex::new(-0.743_643_887_037_151, 0.131_825_904_205_33),
            zoom: 3.2e-9,
        };

        let restored: ViewState = view.to_string().parse().unwrap();

        assert_eq!(restored, view);
        assert!(view.to_string().starts_with("#/x="));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = "#/x=1&y=2".parse::<ViewState>();

        assert_eq!(result, Err(ViewStateParseError::MissingField("z")));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let result = "#/x=abc&y=2&z=1".parse::<ViewState>();

        assert!(matches!(
            result,
            Err(ViewStateParseError::InvalidNumber { field: "x", .. })
        ));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!("x=NaN&y=0&z=1".parse::<ViewState>().is_err());
        assert!("x=0&y=inf&z=1".parse::<ViewState>().is_err());
    }

    #[test]
    fn test_non_positive_zoom_is_rejected() {
        assert_eq!(
            "x=0&y=0&z=0".parse::<ViewState>(),
            Err(ViewStateParseError::InvalidZoom(0.0))
        );
    }

    #[test]
    fn test_failed_update_leaves_view_unchanged() {
        let mut view = ViewState::default();
        let before = view;

        let result = view.update_from_fragment("#/x=1.5&y=oops&z=0.1");

        assert!(result.is_err());
        assert_eq!(view, before);
    }

    #[test]
    fn test_successful_update_applies_all_fields() {
        let mut view = ViewState::default();

        view.update_from_fragment("#/x=0.3&y=-0.2&z=0.5").unwrap();

        assert_eq!(view.center, Complex::new(0.3, -0.2));
        assert_eq!(view.zoom, 0.5);
    }
}
