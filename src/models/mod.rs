use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Display mode of a password field, mirrored 1:1 onto the input's `type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
pub enum PasswordMode {
    #[default]
    #[strum(serialize = "password")]
    Masked,
    #[strum(serialize = "text")]
    Revealed,
}

impl PasswordMode {
    /// Anything that is not a password input renders its value in clear text.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.parse::<Self>() {
            Ok(mode) => mode,
            Err(_) => Self::Revealed,
        }
    }

    pub fn as_input_type(self) -> &'static str {
        self.into()
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    pub fn is_masked(self) -> bool {
        self == Self::Masked
    }
}

/// Per-button lifecycle. `Disabled` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LikeButtonState {
    #[default]
    Enabled,
    Disabled,
}

impl LikeButtonState {
    pub fn accepts_clicks(self) -> bool {
        self == Self::Enabled
    }
}

/// Success body of `POST /like-book/{id}`.
///
/// `new_count` is kept as raw JSON so that only real numbers refresh the display;
/// anything else is treated as "no count".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LikeResponse {
    #[serde(default)]
    pub new_count: Option<serde_json::Value>,
}

impl LikeResponse {
    /// Text to write into the count display, if the backend sent a number.
    pub fn count_text(&self) -> Option<String> {
        let n = self.new_count.as_ref()?.as_number()?;
        if let Some(i) = n.as_i64() {
            return Some(i.to_string());
        }
        if let Some(u) = n.as_u64() {
            return Some(u.to_string());
        }

        // Integral floats (`7.0`) display like the integers they are.
        let f = n.as_f64()?;
        if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
            Some((f as i64).to_string())
        } else {
            Some(f.to_string())
        }
    }
}

/// Failure body of `POST /like-book/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LikeRejection {
    pub error: String,
}

/// A book post as rendered by the feed components.
///
/// The backend stores posts keyed by `_id`; both spellings are accepted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BookSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub interest_count: i64,
}
