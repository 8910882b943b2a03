//! Comment form state, independent of any rendering.
//!
//! The form is driven by discrete field-change events. Validation is
//! recomputed from the current draft and a submission only leaves the
//! form if the draft is valid.

use std::{fmt, str::FromStr};

use thiserror::Error;

use confusion_boundary::{DishId, NewComment};

pub const AUTHOR_MIN_LEN: usize = 3;
pub const AUTHOR_MAX_LEN: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// All selectable ratings in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MIN
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Rating must be between 1 and 5")]
pub struct InvalidRating;

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRating)
        }
    }
}

impl FromStr for Rating {
    type Err = InvalidRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| InvalidRating)
            .and_then(Self::try_from)
    }
}

impl From<Rating> for u8 {
    fn from(from: Rating) -> Self {
        from.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthorInvalidation {
    #[error("Must be greater than 2 characters")]
    TooShort,
    #[error("Must be 15 characters or less")]
    TooLong,
}

pub fn validate_author(author: &str) -> Result<(), AuthorInvalidation> {
    let len = author.chars().count();
    if len < AUTHOR_MIN_LEN {
        return Err(AuthorInvalidation::TooShort);
    }
    if len > AUTHOR_MAX_LEN {
        return Err(AuthorInvalidation::TooLong);
    }
    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open,
}

impl Modal {
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub rating: Rating,
    pub author: String,
    pub comment: String,
}

impl CommentDraft {
    pub fn validate(&self) -> Result<(), AuthorInvalidation> {
        validate_author(&self.author)
    }

    fn into_new_comment(self, dish_id: DishId) -> NewComment {
        let Self {
            rating,
            author,
            comment,
        } = self;
        NewComment {
            dish_id,
            rating: rating.into(),
            author,
            comment,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommentFormState {
    modal: Modal,
    draft: CommentDraft,
    author_touched: bool,
}

impl CommentFormState {
    #[must_use]
    pub const fn modal(&self) -> Modal {
        self.modal
    }

    #[must_use]
    pub const fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    pub fn toggle_modal(&mut self) {
        self.modal.toggle();
        if !self.modal.is_open() {
            self.discard_draft();
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.discard_draft();
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.draft.rating = rating;
    }

    pub fn set_author(&mut self, author: String) {
        self.draft.author = author;
    }

    pub fn set_comment(&mut self, comment: String) {
        self.draft.comment = comment;
    }

    pub fn touch_author(&mut self) {
        self.author_touched = true;
    }

    /// The message to display below the author field, if any.
    #[must_use]
    pub fn author_error(&self) -> Option<AuthorInvalidation> {
        if !self.author_touched {
            return None;
        }
        self.draft.validate().err()
    }

    /// Takes the draft out of the form and closes the modal.
    ///
    /// An invalid draft stays in place and all validation
    /// messages become visible.
    pub fn submit(&mut self, dish_id: DishId) -> Result<NewComment, AuthorInvalidation> {
        if let Err(err) = self.draft.validate() {
            self.author_touched = true;
            return Err(err);
        }
        self.modal.close();
        self.author_touched = false;
        let draft = std::mem::take(&mut self.draft);
        Ok(draft.into_new_comment(dish_id))
    }

    fn discard_draft(&mut self) {
        self.draft = CommentDraft::default();
        self.author_touched = false;
    }
}
