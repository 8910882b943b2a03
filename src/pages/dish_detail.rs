use leptos::*;
use leptos_router::*;

use confusion_boundary::{Comment, Dish, NewComment};

use crate::{components::*, Page};

/// The mutually exclusive states of the dish detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading,
    Error(String),
    Dish(Dish),
    /// Neither loading nor failed, but there is no dish to show.
    Empty,
}

impl DetailView {
    /// Loading wins over an error which wins over the dish.
    ///
    /// An empty error message does not count as an error.
    #[must_use]
    pub fn select(is_loading: bool, err_mess: Option<String>, dish: Option<Dish>) -> Self {
        if is_loading {
            return Self::Loading;
        }
        if let Some(msg) = err_mess.filter(|msg| !msg.is_empty()) {
            return Self::Error(msg);
        }
        dish.map_or(Self::Empty, Self::Dish)
    }
}

#[component]
pub fn DishDetail<F>(
    is_loading: Signal<bool>,
    err_mess: Signal<Option<String>>,
    dish: Signal<Option<Dish>>,
    comments: Signal<Vec<Comment>>,
    on_add_comment: F,
) -> impl IntoView
where
    F: Fn(NewComment) + 'static + Copy,
{
    let detail =
        create_memo(move |_| DetailView::select(is_loading.get(), err_mess.get(), dish.get()));

    move || match detail.get() {
        DetailView::Loading => view! {
          <div class="container">
            <div class="row">
              <Loading />
            </div>
          </div>
        }
        .into_view(),
        DetailView::Error(msg) => view! {
          <div class="container">
            <div class="row">
              <h4>{ msg }</h4>
            </div>
          </div>
        }
        .into_view(),
        DetailView::Dish(dish) => view! {
          <DishProfile dish comments on_add_comment />
        }
        .into_view(),
        DetailView::Empty => {
            log::debug!("No dish to display");
            ().into_view()
        }
    }
}

#[component]
fn DishProfile<F>(dish: Dish, comments: Signal<Vec<Comment>>, on_add_comment: F) -> impl IntoView
where
    F: Fn(NewComment) + 'static + Copy,
{
    let dish_id = dish.id;
    let name = dish.name.clone();

    view! {
      <div class="container">
        <div class="row">
          <nav aria-label="breadcrumb">
            <ol class="breadcrumb">
              <li class="breadcrumb-item">
                <A href=Page::Menu.path()>"Menu"</A>
              </li>
              <li class="breadcrumb-item active" aria-current="page">{ name.clone() }</li>
            </ol>
          </nav>
          <div class="col-12">
            <h3>{ name }</h3>
            <hr />
          </div>
        </div>
        <div class="row">
          <DishCard dish = Some(dish) />
          <CommentList comments dish_id on_add_comment />
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish() -> Dish {
        Dish {
            id: 3,
            name: "ElaiCheese Cake".to_string(),
            image: "images/elaicheesecake.png".to_string(),
            description: "A delectable, semi-sweet New York Style Cheese Cake".to_string(),
        }
    }

    #[test]
    fn loading_takes_priority() {
        assert_eq!(
            DetailView::select(true, Some("Network error".to_string()), Some(dish())),
            DetailView::Loading
        );
        assert_eq!(DetailView::select(true, None, None), DetailView::Loading);
    }

    #[test]
    fn error_takes_priority_over_dish() {
        assert_eq!(
            DetailView::select(false, Some("Network error".to_string()), Some(dish())),
            DetailView::Error("Network error".to_string())
        );
    }

    #[test]
    fn empty_error_message_is_ignored() {
        assert_eq!(
            DetailView::select(false, Some(String::new()), Some(dish())),
            DetailView::Dish(dish())
        );
        assert_eq!(
            DetailView::select(false, Some(String::new()), None),
            DetailView::Empty
        );
    }

    #[test]
    fn show_dish_if_loaded() {
        assert_eq!(
            DetailView::select(false, None, Some(dish())),
            DetailView::Dish(dish())
        );
    }

    #[test]
    fn nothing_to_show_without_dish() {
        assert_eq!(DetailView::select(false, None, None), DetailView::Empty);
    }
}
