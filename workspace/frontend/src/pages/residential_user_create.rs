use crate::api_client::residential_user::{create_residential_user, CreateResidentialUserRequest};
use crate::common::session::RequireAccess;
use crate::common::toast::ToastContext;
use crate::components::user_select::UserSelect;
use crate::pages::residential_user_form::{field_error, payload_from_form};
use crate::router::Route;
use ::common::access::Operation;
use ::common::{validate_residential_user, FieldError};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
struct CreatePageQuery {
    /// Pre-selected owner, carried over from the page that linked here
    user_id: Option<i32>,
}

#[function_component(ResidentialUserCreatePage)]
pub fn residential_user_create_page() -> Html {
    html! {
        <RequireAccess entity="residential_user" operation={Operation::Create}>
            <CreateForm />
        </RequireAccess>
    }
}

#[function_component(CreateForm)]
fn create_form() -> Html {
    let navigator = use_navigator().unwrap();
    let location = use_location().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let prefilled_user_id = location
        .query::<CreatePageQuery>()
        .unwrap_or_default()
        .user_id;

    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let field_errors = use_state(Vec::<FieldError>::new);

    let on_submit = {
        let navigator = navigator.clone();
        let toast_ctx = toast_ctx.clone();
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let field_errors = field_errors.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            if let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() {
                let form_data = web_sys::FormData::new_with_form(&form).unwrap();
                let payload = payload_from_form(&form_data);

                // Client-side validation, mirroring the backend checks
                error_message.set(None);
                if let Err(errors) = validate_residential_user(&payload) {
                    log::warn!("Client-side validation failed: {:?} field(s)", errors.len());
                    field_errors.set(errors);
                    return;
                }
                field_errors.set(Vec::new());

                let request = CreateResidentialUserRequest {
                    user_id: payload["user_id"].as_i64().unwrap_or_default() as i32,
                    energy_goal: payload["energy_goal"].as_i64().map(|n| n as i32),
                    energy_usage: payload["energy_usage"].as_i64().map(|n| n as i32),
                };

                let navigator = navigator.clone();
                let toast_ctx = toast_ctx.clone();
                let is_submitting = is_submitting.clone();
                let error_message = error_message.clone();

                is_submitting.set(true);

                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("Creating residential user for user_id: {}", request.user_id);
                    match create_residential_user(request).await {
                        Ok(record) => {
                            log::info!("Residential user created successfully (ID: {})", record.id);
                            is_submitting.set(false);
                            form.reset();
                            toast_ctx.show_success("Residential user created".to_string());
                            navigator.push(&Route::ResidentialUsers);
                        }
                        Err(e) => {
                            log::error!("Failed to create residential user: {}", e);
                            error_message.set(Some(format!(
                                "Failed to create residential user: {e}"
                            )));
                            is_submitting.set(false);
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow max-w-2xl">
            <div class="card-body">
                <h2 class="card-title">{"Create Residential User"}</h2>

                {if let Some(error) = (*error_message).as_ref() {
                    html! {
                        <div class="alert alert-error mt-4">
                            <span>{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Energy Goal"}</span></label>
                        <input
                            type="number"
                            name="energy_goal"
                            class="input input-bordered w-full"
                            value="0"
                            disabled={*is_submitting}
                        />
                        {if let Some(message) = field_error(&field_errors, "energy_goal") {
                            html! { <label class="label"><span class="label-text-alt text-error">{message}</span></label> }
                        } else {
                            html! {}
                        }}
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Energy Usage"}</span></label>
                        <input
                            type="number"
                            name="energy_usage"
                            class="input input-bordered w-full"
                            value="0"
                            disabled={*is_submitting}
                        />
                        {if let Some(message) = field_error(&field_errors, "energy_usage") {
                            html! { <label class="label"><span class="label-text-alt text-error">{message}</span></label> }
                        } else {
                            html! {}
                        }}
                    </div>

                    <UserSelect value={prefilled_user_id} disabled={*is_submitting} />
                    {if let Some(message) = field_error(&field_errors, "user_id") {
                        html! { <label class="label"><span class="label-text-alt text-error">{message}</span></label> }
                    } else {
                        html! {}
                    }}

                    <div class="card-actions justify-end">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={*is_submitting}
                        >
                            {if *is_submitting {
                                html! { <><span class="loading loading-spinner loading-sm"></span>{" Submitting..."}</> }
                            } else {
                                html! { "Submit" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
