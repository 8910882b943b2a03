use anyhow::Context as _;
use leptos::*;
use leptos_router::*;
use serde::Deserialize;
use time::OffsetDateTime;

use confusion_boundary::{Comment, CommentId, Dish, DishId, NewComment};

pub mod form;

mod components;
pub use components::*;

mod pages;
pub use pages::*;

const SAMPLE_MENU_JSON: &str = include_str!("../assets/menu.json");
const DISH_NOT_FOUND: &str = "Dish not found";

#[derive(Debug, Default, Deserialize)]
pub struct SampleMenu {
    pub dishes: Vec<Dish>,
    pub comments: Vec<Comment>,
}

pub fn parse_sample_menu(json: &str) -> anyhow::Result<SampleMenu> {
    let menu = serde_json::from_str(json).context("Invalid sample menu")?;
    Ok(menu)
}

/// Stores a new comment with the next free ID.
///
/// Returns `None` without storing anything if the IDs are exhausted.
pub fn append_comment(
    comments: &mut Vec<Comment>,
    new_comment: NewComment,
    date: OffsetDateTime,
) -> Option<CommentId> {
    let id = match comments.iter().map(|c| c.id).max() {
        Some(max_id) => max_id.checked_add(1)?,
        None => 1,
    };
    let NewComment {
        dish_id,
        rating,
        author,
        comment,
    } = new_comment;
    comments.push(Comment {
        id,
        dish_id,
        rating,
        author,
        comment,
        date,
    });
    Some(id)
}

#[must_use]
pub fn comments_of_dish(comments: &[Comment], dish_id: DishId) -> Vec<Comment> {
    comments
        .iter()
        .filter(|c| c.dish_id == dish_id)
        .cloned()
        .collect()
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let SampleMenu { dishes, comments } =
        parse_sample_menu(SAMPLE_MENU_JSON).unwrap_or_else(|err| {
            log::error!("Unable to load the menu: {err:#}");
            SampleMenu::default()
        });
    log::debug!(
        "Loaded {} dishes with {} comments",
        dishes.len(),
        comments.len()
    );

    // -- signals -- //

    let (dishes, _) = create_signal(dishes);
    let comments = create_rw_signal(comments);

    // -- callbacks -- //

    let on_add_comment = move |new_comment: NewComment| {
        comments.update(|comments| {
            let dish_id = new_comment.dish_id;
            match append_comment(comments, new_comment, OffsetDateTime::now_utc()) {
                Some(id) => log::info!("Added comment {id} to dish {dish_id}"),
                None => log::error!("Unable to add comment to dish {dish_id}: no free ID"),
            }
        });
    };

    view! {
      <Router>
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Menu dishes = dishes.into() /> }
            />
            <Route
              path=Page::Menu.path()
              view=move || view! { <Menu dishes = dishes.into() /> }
            />
            <Route
              path=format!("{}/:id", Page::Menu.path())
              view=move || view! {
                <DishRoute
                  dishes = dishes.into()
                  comments = comments.into()
                  on_add_comment
                />
              }
            />
          </Routes>
        </main>
      </Router>
    }
}

#[component]
fn DishRoute<F>(
    dishes: Signal<Vec<Dish>>,
    comments: Signal<Vec<Comment>>,
    on_add_comment: F,
) -> impl IntoView
where
    F: Fn(NewComment) + 'static + Copy,
{
    let params = use_params_map();

    // -- memos -- //

    let dish_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|id| id.parse::<DishId>().ok()))
    });
    let dish = create_memo(move |_| {
        let id = dish_id.get()?;
        dishes.with(|dishes| dishes.iter().find(|d| d.id == id).cloned())
    });

    // -- signals -- //

    let is_loading = Signal::derive(|| false);
    let err_mess =
        Signal::derive(move || dish.with(Option::is_none).then(|| DISH_NOT_FOUND.to_string()));
    let dish_comments = Signal::derive(move || {
        dish_id
            .get()
            .map(|id| comments.with(|comments| comments_of_dish(comments, id)))
            .unwrap_or_default()
    });

    view! {
      <DishDetail
        is_loading
        err_mess
        dish = dish.into()
        comments = dish_comments
        on_add_comment
      />
    }
}
