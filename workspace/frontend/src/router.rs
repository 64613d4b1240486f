use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::residential_user_create::ResidentialUserCreatePage;
use crate::pages::residential_user_edit::ResidentialUserEditPage;
use crate::pages::residential_users::ResidentialUsersPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/residential-users")]
    ResidentialUsers,
    #[at("/residential-users/create")]
    ResidentialUserCreate,
    #[at("/residential-users/edit/:id")]
    ResidentialUserEdit { id: i32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <Redirect<Route> to={Route::ResidentialUsers} /> }
        }
        Route::ResidentialUsers => {
            log::trace!("Rendering Residential Users page");
            html! { <Layout title="Residential Users"><ResidentialUsersPage /></Layout> }
        }
        Route::ResidentialUserCreate => {
            log::trace!("Rendering Create Residential User page");
            html! { <Layout title="Create Residential User"><ResidentialUserCreatePage /></Layout> }
        }
        Route::ResidentialUserEdit { id } => {
            log::trace!("Rendering Edit Residential User page for ID: {}", id);
            html! { <Layout title="Edit Residential User"><ResidentialUserEditPage id={id} /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}
