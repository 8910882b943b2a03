use leptos::*;

use confusion_boundary::Dish;

/// Card with the image, name and description of a dish.
///
/// Renders nothing if there is no dish.
#[component]
pub fn DishCard(dish: Option<Dish>) -> impl IntoView {
    dish.map(|dish| {
        let Dish {
            name,
            image,
            description,
            ..
        } = dish;
        view! {
          <div class="col-12 col-md-5 m-1">
            <div class="card">
              <img class="card-img-top" width="100%" src={ image } alt={ name.clone() } />
              <div class="card-body">
                <h5 class="card-title">{ name }</h5>
                <p class="card-text">{ description }</p>
              </div>
            </div>
          </div>
        }
    })
}
