//! [`Feedback`] definitions.

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

use super::{reservation, Resource};

/// Review left for a [`Reservation`].
///
/// [`Reservation`]: super::Reservation
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Feedback {
    /// ID of this [`Feedback`].
    #[serde(rename = "idFeed")]
    pub id: Id,

    /// [`Title`] of this [`Feedback`].
    pub title: Title,

    /// [`Text`] of this [`Feedback`].
    #[serde(rename = "textFeedback")]
    pub text: Text,

    /// [`Points`] given by this [`Feedback`].
    pub points: Points,

    /// ID of the [`Reservation`] this [`Feedback`] is about.
    ///
    /// [`Reservation`]: super::Reservation
    #[serde(rename = "idReservation")]
    pub reservation_id: reservation::Id,
}

impl Resource for Feedback {
    type Id = Id;
    type Draft = Draft;

    const NAME: &'static str = "Feedback";
    const PLURAL: &'static str = "feedback";

    fn id(&self) -> Id {
        self.id
    }
}

/// ID of a [`Feedback`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u64);

/// Title of a [`Feedback`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Title(String);

impl Title {
    /// Maximum length of a [`Title`] in characters.
    pub const MAX_LEN: usize = 100;

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title
            && !title.is_empty()
            && title.chars().count() <= Self::MAX_LEN
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Free-form text of a [`Feedback`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str)]
pub struct Text(String);

impl Text {
    /// Creates a new [`Text`] if the given `text` is not blank.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (!text.trim().is_empty()).then_some(Self(text))
    }
}

impl FromStr for Text {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Text`")
    }
}

/// Rating of a [`Feedback`], from one to five.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Points(u8);

impl Points {
    /// Minimum [`Points`].
    pub const MIN: u8 = 1;

    /// Maximum [`Points`].
    pub const MAX: u8 = 5;

    /// Creates new [`Points`] if the given `points` are within bounds.
    #[must_use]
    pub fn new(points: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&points)
            .then_some(Self(points))
    }

    /// Renders these [`Points`] as stars.
    #[must_use]
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX).saturating_sub(filled);
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// [`Feedback`] without an [`Id`] assigned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Draft {
    /// [`Title`] of the [`Feedback`].
    pub title: Title,

    /// [`Text`] of the [`Feedback`].
    #[serde(rename = "textFeedback")]
    pub text: Text,

    /// [`Points`] given by the [`Feedback`].
    pub points: Points,

    /// ID of the [`Reservation`] the [`Feedback`] is about.
    ///
    /// [`Reservation`]: super::Reservation
    #[serde(rename = "idReservation")]
    pub reservation_id: reservation::Id,
}

impl super::Draft for Draft {
    type Resource = Feedback;
}
