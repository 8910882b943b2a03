use leptos::*;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

use confusion_boundary::{Comment, CommentId, DishId, NewComment};

use crate::components::CommentForm;

const COMMENT_DATE_FORMAT: &[FormatItem] =
    format_description!("[month repr:short] [day], [year]");

/// Formats a comment date like `Oct 17, 2012`.
#[must_use]
pub fn format_comment_date(date: OffsetDateTime) -> String {
    date.format(COMMENT_DATE_FORMAT).unwrap_or_else(|err| {
        log::warn!("Unable to format comment date {date}: {err}");
        date.date().to_string()
    })
}

/// What a single entry of the comment list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    pub key: CommentId,
    pub text: String,
    pub byline: String,
}

impl From<&Comment> for CommentLine {
    fn from(from: &Comment) -> Self {
        let Comment {
            id,
            author,
            comment,
            date,
            ..
        } = from;
        Self {
            key: *id,
            text: comment.clone(),
            byline: format!("-- {author}, {}", format_comment_date(*date)),
        }
    }
}

#[component]
pub fn CommentList<F>(
    comments: Signal<Vec<Comment>>,
    dish_id: DishId,
    on_add_comment: F,
) -> impl IntoView
where
    F: Fn(NewComment) + 'static + Copy,
{
    let lines = create_memo(move |_| {
        comments.with(|comments| comments.iter().map(CommentLine::from).collect::<Vec<_>>())
    });

    view! {
      <div class="col-12 col-md-5 m-1">
        <h4>"Comments"</h4>
        <Show when = move || lines.with(|lines| !lines.is_empty())>
          <ul class="list-unstyled">
            <For
              each = move || lines.get()
              key = |line| line.key
              children = move |line| view! { <CommentListItem line /> }
            />
          </ul>
        </Show>
        <CommentForm dish_id on_add_comment />
      </div>
    }
}

#[component]
fn CommentListItem(line: CommentLine) -> impl IntoView {
    let CommentLine { text, byline, .. } = line;
    view! {
      <li>
        <p>{ text }</p>
        <p>{ byline }</p>
      </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn comment(id: CommentId, author: &str, text: &str, date: OffsetDateTime) -> Comment {
        Comment {
            id,
            dish_id: 0,
            rating: 4,
            author: author.to_string(),
            comment: text.to_string(),
            date,
        }
    }

    #[test]
    fn format_date_with_short_month_and_padded_day() {
        assert_eq!(
            format_comment_date(datetime!(2012-10-16 17:57:28.556094 UTC)),
            "Oct 16, 2012"
        );
        assert_eq!(
            format_comment_date(datetime!(2014-09-05 17:57:28 UTC)),
            "Sep 05, 2014"
        );
    }

    #[test]
    fn format_date_in_its_own_offset() {
        assert_eq!(
            format_comment_date(datetime!(2017-01-01 00:30 +02:00)),
            "Jan 01, 2017"
        );
    }

    #[test]
    fn comment_line_shows_text_author_and_date() {
        let line = CommentLine::from(&comment(
            7,
            "Paul McVites",
            "Sends anyone to heaven!",
            datetime!(2011-12-02 17:57:28 UTC),
        ));
        assert_eq!(
            line,
            CommentLine {
                key: 7,
                text: "Sends anyone to heaven!".to_string(),
                byline: "-- Paul McVites, Dec 02, 2011".to_string(),
            }
        );
    }

    #[test]
    fn one_line_per_comment_in_input_order() {
        let comments = vec![
            comment(3, "Ringo", "third", datetime!(2016-01-01 0:00 UTC)),
            comment(1, "John", "first", datetime!(2012-01-01 0:00 UTC)),
            comment(2, "Paul", "second", datetime!(2014-01-01 0:00 UTC)),
        ];
        let lines: Vec<_> = comments.iter().map(CommentLine::from).collect();
        assert_eq!(lines.len(), comments.len());
        let keys: Vec<_> = lines.iter().map(|l| l.key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
        assert!(lines[0].byline.starts_with("-- Ringo, "));
        assert!(lines[0].byline.ends_with(", 2016"));
    }
}
