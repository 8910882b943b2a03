use leptos::*;
use leptos_router::*;

use confusion_boundary::Dish;

use crate::Page;

#[component]
pub fn Menu(dishes: Signal<Vec<Dish>>) -> impl IntoView {
    view! {
      <div class="container">
        <div class="row">
          <div class="col-12">
            <h3>"Menu"</h3>
            <hr />
          </div>
        </div>
        <div class="row">
          <Show
            when = move || dishes.with(|d| !d.is_empty())
            fallback = || view! { <p>"The menu is empty."</p> }
          >
            <For
              each = move || dishes.get()
              key = |dish| dish.id
              children = move |dish| view! { <MenuItem dish /> }
            />
          </Show>
        </div>
      </div>
    }
}

#[component]
fn MenuItem(dish: Dish) -> impl IntoView {
    let Dish { id, name, image, .. } = dish;
    view! {
      <div class="col-12 col-md-5 m-1">
        <A href=Page::Dish(id).path()>
          <div class="card">
            <img class="card-img" width="100%" src={ image } alt={ name.clone() } />
            <div class="card-img-overlay">
              <h5 class="card-title">{ name }</h5>
            </div>
          </div>
        </A>
      </div>
    }
}
