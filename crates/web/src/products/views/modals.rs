//! Add/edit and delete-confirmation dialogs. Both are rendered open; closing
//! one is a plain link back to the listing.

use leptos::prelude::*;

use super::EditorView;

fn input_class(error: Option<&String>) -> &'static str {
    if error.is_some() {
        "form-control is-invalid"
    } else {
        "form-control"
    }
}

#[component]
pub(super) fn EditorModal(editor: EditorView, close_href: String) -> impl IntoView {
    let EditorView {
        title,
        action,
        name,
        price,
        active,
        name_error,
        price_error,
    } = editor;

    let name_class = input_class(name_error.as_ref());
    let price_class = input_class(price_error.as_ref());

    view! {
        <div class="modal d-block" tabindex="-1" role="dialog" aria-modal="true">
            <div class="modal-dialog" role="document">
                <form class="modal-content" method="post" action=action novalidate=true>
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                    </div>
                    <div class="modal-body">
                        <label class="form-label w-100 mb-3">
                            "Name"
                            <input type="text" name="name" class=name_class value=name />
                            {name_error
                                .map(|message| {
                                    view! { <div class="invalid-feedback">{message}</div> }
                                })}
                        </label>
                        <label class="form-label w-100 mb-3">
                            "Price"
                            <input
                                type="text"
                                name="price"
                                inputmode="decimal"
                                class=price_class
                                value=price
                            />
                            {price_error
                                .map(|message| {
                                    view! { <div class="invalid-feedback">{message}</div> }
                                })}
                        </label>
                        <div class="form-check">
                            <label class="form-check-label">
                                <input
                                    type="checkbox"
                                    name="active"
                                    value="1"
                                    class="form-check-input"
                                    checked=active
                                />
                                "Active"
                            </label>
                        </div>
                    </div>
                    <div class="modal-footer">
                        <a class="btn btn-secondary" href=close_href>"Conceal"</a>
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
        <div class="modal-backdrop show"></div>
    }
}

#[component]
pub(super) fn DeleteModal(action: String, close_href: String) -> impl IntoView {
    view! {
        <div class="modal d-block" tabindex="-1" role="dialog" aria-modal="true">
            <div class="modal-dialog" role="document">
                <form class="modal-content" method="post" action=action>
                    <div class="modal-header">
                        <h5 class="modal-title">"Delete Product"</h5>
                    </div>
                    <div class="modal-body">
                        <p>"Are you sure you want to delete Product?"</p>
                    </div>
                    <div class="modal-footer">
                        <a class="btn btn-secondary" href=close_href>"Conceal"</a>
                        <button type="submit" class="btn btn-danger">"Delete"</button>
                    </div>
                </form>
            </div>
        </div>
        <div class="modal-backdrop show"></div>
    }
}
