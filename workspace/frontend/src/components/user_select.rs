use crate::api_client::user::get_users;
use crate::common::fetch_hook::use_api_fetch;
use crate::hooks::FetchState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Form field name the selection is submitted under
    #[prop_or(AttrValue::Static("user_id"))]
    pub name: AttrValue,
    /// Currently selected user, if any
    #[prop_or_default]
    pub value: Option<i32>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Asynchronous selector for the owning user.
///
/// Candidate users are fetched when the component mounts and rendered as
/// options labeled by email.
#[function_component(UserSelect)]
pub fn user_select(props: &Props) -> Html {
    let (fetch_state, refetch) = use_api_fetch(get_users);

    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{"Select User"}</span></label>
            {match &*fetch_state {
                FetchState::Loading | FetchState::NotStarted => html! {
                    <select class="select select-bordered w-full" disabled={true}>
                        <option selected={true}>{"Loading users..."}</option>
                    </select>
                },
                FetchState::Error(error) => html! {
                    <div class="alert alert-error">
                        <span>{format!("Failed to load users: {error}")}</span>
                        <button
                            type="button"
                            class="btn btn-sm"
                            onclick={move |_| refetch.emit(())}
                        >
                            {"Retry"}
                        </button>
                    </div>
                },
                FetchState::Success(users) => html! {
                    <select
                        name={props.name.clone()}
                        class="select select-bordered w-full"
                        disabled={props.disabled}
                    >
                        <option value="" disabled={true} selected={props.value.is_none()}>
                            {"Select User"}
                        </option>
                        {for users.iter().map(|user| {
                            html! {
                                <option
                                    key={user.id}
                                    value={user.id.to_string()}
                                    selected={props.value == Some(user.id)}
                                >
                                    {&user.email}
                                </option>
                            }
                        })}
                    </select>
                },
            }}
        </div>
    }
}
