use crate::api_client::residential_user::get_residential_users;
use crate::common::error::LoadError;
use crate::common::loading::LoadingSpinner;
use crate::common::fetch_hook::use_api_fetch;
use crate::hooks::FetchState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Listing page for residential profiles.
#[function_component(ResidentialUsersPage)]
pub fn residential_users_page() -> Html {
    let navigator = use_navigator().unwrap();
    let (fetch_state, refetch) = use_api_fetch(|| get_residential_users(None));

    let on_add = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            log::debug!("Navigating to create page");
            navigator.push(&Route::ResidentialUserCreate);
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">{"Residential Users"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Residential User"}
                </button>
            </div>

            {match &*fetch_state {
                FetchState::Loading | FetchState::NotStarted => html! { <LoadingSpinner /> },
                FetchState::Error(error) => html! {
                    <LoadError
                        subject="residential users"
                        message={error.clone()}
                        on_retry={Some(Callback::from(move |_| refetch.emit(())))}
                    />
                },
                FetchState::Success(records) => {
                    if records.is_empty() {
                        html! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body items-center">
                                    <p class="text-gray-500">{"No residential users yet."}</p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body p-0 overflow-x-auto">
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>{"Owner"}</th>
                                                <th>{"Energy Goal"}</th>
                                                <th>{"Energy Usage"}</th>
                                                <th>{"Updated"}</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {for records.iter().map(|record| {
                                                let id = record.id;
                                                let navigator = navigator.clone();
                                                let on_edit = Callback::from(move |_| {
                                                    navigator.push(&Route::ResidentialUserEdit { id });
                                                });
                                                let owner = record
                                                    .user
                                                    .as_ref()
                                                    .map(|user| user.email.clone())
                                                    .unwrap_or_else(|| format!("user #{}", record.user_id));
                                                html! {
                                                    <tr key={id}>
                                                        <td>{owner}</td>
                                                        <td>{record.energy_goal.map(|g| g.to_string()).unwrap_or_else(|| "—".to_string())}</td>
                                                        <td>{record.energy_usage.map(|u| u.to_string()).unwrap_or_else(|| "—".to_string())}</td>
                                                        <td>{record.updated_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                                        <td class="text-right">
                                                            <button class="btn btn-ghost btn-sm" onclick={on_edit}>
                                                                <i class="fas fa-edit"></i> {" Edit"}
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })}
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        }
                    }
                }
            }}
        </div>
    }
}
