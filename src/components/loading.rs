use leptos::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
      <div class="col-12">
        <span class="fa fa-spinner fa-pulse fa-3x fa-fw text-primary"></span>
        <p>"Loading . . ."</p>
      </div>
    }
}
