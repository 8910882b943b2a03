use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub type DishId = u64;
pub type CommentId = u64;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Dish {
    pub id          : DishId,
    pub name        : String,
    pub image       : String,
    pub description : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id      : CommentId,
    pub dish_id : DishId,
    pub rating  : u8,
    pub author  : String,
    pub comment : String,
    #[serde(with = "time::serde::rfc3339")]
    pub date    : OffsetDateTime,
}

/// A comment that has been entered but not yet stored.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub dish_id : DishId,
    pub rating  : u8,
    pub author  : String,
    pub comment : String,
}
