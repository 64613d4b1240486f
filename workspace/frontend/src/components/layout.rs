use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <Link<Route> to={Route::ResidentialUsers} classes="btn btn-ghost text-xl">
                        {"HomeWatt"}
                    </Link<Route>>
                </div>
                <div class="flex-none">
                    <span class="text-lg font-semibold px-4">{&props.title}</span>
                </div>
            </div>
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
