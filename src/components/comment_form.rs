use leptos::{ev, *};

use confusion_boundary::{DishId, NewComment};

use crate::form::{CommentFormState, Rating};

/// Button that opens a modal dialog for submitting a new comment.
#[component]
pub fn CommentForm<F>(dish_id: DishId, on_add_comment: F) -> impl IntoView
where
    F: Fn(NewComment) + 'static + Copy,
{
    let form = create_rw_signal(CommentFormState::default());

    let is_open = Signal::derive(move || form.with(|f| f.modal().is_open()));
    let author_error = Signal::derive(move || form.with(CommentFormState::author_error));

    let toggle_modal = move || {
        form.update(CommentFormState::toggle_modal);
        log::debug!("Comment form is open: {}", is_open.get_untracked());
    };

    let close_modal = move || {
        log::debug!("Dismiss comment form");
        form.update(CommentFormState::close_modal);
    };

    let submit = move || {
        let Some(result) = form.try_update(|f| f.submit(dish_id)) else {
            log::warn!("Comment form has already been disposed");
            return;
        };
        match result {
            Ok(new_comment) => {
                log::info!(
                    "Submit comment by {} for dish {dish_id}",
                    new_comment.author
                );
                on_add_comment(new_comment);
            }
            Err(err) => {
                log::debug!("Refuse to submit invalid comment: {err}");
            }
        }
    };

    view! {
      <button
        type="button"
        class="btn btn-outline-secondary"
        on:click = move |_| toggle_modal()
      >
        <span class="fa fa-pencil fa-lg"></span>
        " Submit Comments"
      </button>
      <Show when = move || is_open.get()>
        <div class="modal-backdrop fade show"></div>
        <div
          class="modal fade show d-block"
          tabindex="-1"
          role="dialog"
          on:click = move |ev: ev::MouseEvent| {
            if is_outside_dialog(&ev.target(), &ev.current_target()) {
              close_modal();
            }
          }
        >
          <div class="modal-dialog" role="document">
            <div class="modal-content">
              <div class="modal-header">
                <h5 class="modal-title">"Submit Comment"</h5>
                <button
                  type="button"
                  class="close"
                  aria-label="Close"
                  on:click = move |_| close_modal()
                >
                  <span aria-hidden="true">"×"</span>
                </button>
              </div>
              <div class="modal-body">
                <form on:submit = move |ev: ev::SubmitEvent| {
                  ev.prevent_default();
                  submit();
                }>
                  <div class="form-group row">
                    <label for="rating" class="col-md-12 col-form-label">"Rating"</label>
                    <div class="col-md-12">
                      <select
                        id="rating"
                        name="rating"
                        class="form-control"
                        prop:value = move || form.with(|f| f.draft().rating.to_string())
                        on:change = move |ev| {
                          match event_target_value(&ev).parse::<Rating>() {
                            Ok(rating) => form.update(|f| f.set_rating(rating)),
                            Err(err) => log::warn!("Ignore rating selection: {err}"),
                          }
                        }
                      >
                        { Rating::all().map(|rating| view! {
                            <option value = rating.to_string()>{ rating.to_string() }</option>
                          }).collect_view()
                        }
                      </select>
                    </div>
                  </div>
                  <div class="form-group row">
                    <label for="author" class="col-md-12 col-form-label">"Your Name"</label>
                    <div class="col-md-12">
                      <input
                        type="text"
                        id="author"
                        name="author"
                        placeholder="Your Name"
                        class="form-control"
                        prop:value = move || form.with(|f| f.draft().author.clone())
                        on:input = move |ev| {
                          let val = event_target_value(&ev);
                          form.update(|f| f.set_author(val));
                        }
                        on:blur = move |_| form.update(CommentFormState::touch_author)
                      />
                      { move || author_error.get().map(|err| view! {
                          <div class="text-danger">{ err.to_string() }</div>
                        })
                      }
                    </div>
                  </div>
                  <div class="form-group row">
                    <label for="comment" class="col-md-12 col-form-label">"Comment"</label>
                    <div class="col-md-12">
                      <textarea
                        id="comment"
                        name="comment"
                        rows="6"
                        class="form-control"
                        prop:value = move || form.with(|f| f.draft().comment.clone())
                        on:input = move |ev| {
                          let val = event_target_value(&ev);
                          form.update(|f| f.set_comment(val));
                        }
                      ></textarea>
                    </div>
                  </div>
                  <div class="form-group row">
                    <div class="col-md-10">
                      <button type="submit" class="btn btn-primary">"Submit"</button>
                    </div>
                  </div>
                </form>
              </div>
            </div>
          </div>
        </div>
      </Show>
    }
}

/// The modal wrapper covers the whole viewport around the dialog,
/// so a click that targets the wrapper itself lies outside the dialog.
fn is_outside_dialog<T: PartialEq>(target: &Option<T>, current_target: &Option<T>) -> bool {
    target.is_some() && target == current_target
}
