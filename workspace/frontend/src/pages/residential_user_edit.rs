use crate::api_client::residential_user::{
    get_residential_user, update_residential_user, ResidentialUserDto,
    UpdateResidentialUserRequest,
};
use crate::common::error::LoadError;
use crate::common::loading::LoadingSpinner;
use crate::common::session::RequireAccess;
use crate::common::toast::ToastContext;
use crate::components::user_select::UserSelect;
use crate::hooks::FetchState;
use crate::pages::residential_user_form::{field_error, payload_from_form};
use crate::router::Route;
use ::common::access::Operation;
use ::common::{validate_residential_user, FieldError};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i32,
}

#[function_component(ResidentialUserEditPage)]
pub fn residential_user_edit_page(props: &Props) -> Html {
    html! {
        <RequireAccess entity="residential_user" operation={Operation::Update}>
            <EditForm id={props.id} />
        </RequireAccess>
    }
}

#[function_component(EditForm)]
fn edit_form(props: &Props) -> Html {
    let id = props.id;
    let navigator = use_navigator().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let fetch_state = use_state(|| FetchState::<ResidentialUserDto>::Loading);
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let field_errors = use_state(Vec::<FieldError>::new);

    // Fetch the record on mount, and again whenever the id changes
    {
        let fetch_state = fetch_state.clone();
        use_effect_with(id, move |&id| {
            fetch_state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match get_residential_user(id).await {
                    Ok(record) => fetch_state.set(FetchState::Success(record)),
                    Err(err) => fetch_state.set(FetchState::Error(err)),
                }
            });
            || ()
        });
    }

    let on_submit = {
        let navigator = navigator.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_state = fetch_state.clone();
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

                let request = UpdateResidentialUserRequest {
                    user_id: payload["user_id"].as_i64().unwrap_or_default() as i32,
                    energy_goal: payload["energy_goal"].as_i64().map(|n| n as i32),
                    energy_usage: payload["energy_usage"].as_i64().map(|n| n as i32),
                };

                let navigator = navigator.clone();
                let toast_ctx = toast_ctx.clone();
                let fetch_state = fetch_state.clone();
                let is_submitting = is_submitting.clone();
                let error_message = error_message.clone();
                let form = form.clone();

                is_submitting.set(true);

                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("Updating residential user ID: {}", id);
                    match update_residential_user(id, request).await {
                        Ok(updated) => {
                            log::info!("Residential user updated successfully (ID: {})", updated.id);
                            // Refresh the local copy before leaving the page
                            fetch_state.set(FetchState::Success(updated));
                            is_submitting.set(false);
                            form.reset();
                            toast_ctx.show_success("Residential user updated".to_string());
                            navigator.push(&Route::ResidentialUsers);
                        }
                        Err(e) => {
                            log::error!("Failed to update residential user: {}", e);
                            error_message.set(Some(format!(
                                "Failed to update residential user: {e}"
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
                <h2 class="card-title">{"Edit Residential User"}</h2>

                {if let Some(error) = (*error_message).as_ref() {
                    html! {
                        <div class="alert alert-error mt-4">
                            <span>{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                {match &*fetch_state {
                    FetchState::Loading | FetchState::NotStarted => html! { <LoadingSpinner /> },
                    FetchState::Error(error) => html! {
                        <LoadError subject="this residential user" message={error.clone()} />
                    },
                    FetchState::Success(record) => html! {
                        <form ref={form_ref.clone()} onsubmit={on_submit.clone()} class="py-4 space-y-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Energy Goal"}</span></label>
                                <input
                                    type="number"
                                    name="energy_goal"
                                    class="input input-bordered w-full"
                                    value={record.energy_goal.unwrap_or(0).to_string()}
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
                                    value={record.energy_usage.unwrap_or(0).to_string()}
                                    disabled={*is_submitting}
                                />
                                {if let Some(message) = field_error(&field_errors, "energy_usage") {
                                    html! { <label class="label"><span class="label-text-alt text-error">{message}</span></label> }
                                } else {
                                    html! {}
                                }}
                            </div>

                            <UserSelect value={Some(record.user_id)} disabled={*is_submitting} />
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
                    },
                }}
            </div>
        </div>
    }
}
