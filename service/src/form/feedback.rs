//! [`Feedback`] [`Form`].

use crate::domain::{
    feedback::{Draft, Points, Text, Title},
    reservation, Feedback,
};

use super::{Errors, Form, Validator};

/// Raw input of a [`Feedback`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeedbackForm {
    /// Title input.
    pub title: String,

    /// Text input.
    pub text: String,

    /// Points input.
    pub points: String,

    /// Reservation ID input, usually filled by a picker.
    pub reservation_id: String,
}

impl Form for FeedbackForm {
    type Resource = Feedback;

    fn validate(&self) -> Result<Draft, Errors> {
        /// Message of any [`Points`] failure.
        const POINTS: &str = "Please insert a number between 1 and 5";

        let mut v = Validator::default();

        let title = v
            .text(
                "title",
                &self.title,
                1..=Title::MAX_LEN,
                ("Title is required", "Title is too long"),
            )
            .and_then(Title::new);
        let text = v
            .text(
                "text",
                &self.text,
                1..=usize::MAX,
                ("Feedback text is required", "Feedback text is required"),
            )
            .and_then(Text::new);
        let points = v
            .number::<u8>("points", &self.points, POINTS)
            .and_then(|p| {
                let points = Points::new(p);
                v.ensure(points.is_some(), "points", POINTS);
                points
            });
        let reservation_id = v
            .number::<u64>(
                "reservation_id",
                &self.reservation_id,
                "Please select a Reservation",
            )
            .and_then(|id| {
                let id = reservation::Id::new(id);
                v.ensure(
                    id.is_some(),
                    "reservation_id",
                    "Please select a Reservation",
                );
                id
            });

        v.finish(|| {
            Some(Draft {
                title: title?,
                text: text?,
                points: points?,
                reservation_id: reservation_id?,
            })
        })
    }

    fn prefill(feedback: &Feedback) -> Self {
        Self {
            title: feedback.title.to_string(),
            text: feedback.text.to_string(),
            points: feedback.points.to_string(),
            reservation_id: feedback.reservation_id.to_string(),
        }
    }
}
