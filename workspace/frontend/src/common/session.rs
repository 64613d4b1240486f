use crate::api_client::session::get_session;
use crate::common::error::LoadError;
use crate::common::loading::LoadingSpinner;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;
use crate::router::Route;
use ::common::access::{any_role_allows, Operation, Role};
use ::common::SessionDto;
use yew::prelude::*;
use yew_router::prelude::*;

/// The caller's session as fetched from the backend.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub state: FetchState<SessionDto>,
}

impl SessionContext {
    /// Whether the session holds `operation` permission on `entity`.
    /// Unknown roles coming from the backend are ignored.
    pub fn allows(&self, entity: &str, operation: Operation) -> bool {
        match self.state.data() {
            Some(session) => {
                let roles: Vec<Role> = session
                    .roles
                    .iter()
                    .filter_map(|role| role.parse().ok())
                    .collect();
                any_role_allows(&roles, entity, operation)
            }
            None => false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Fetches the session once at startup and provides it to the tree.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_state(|| FetchState::<SessionDto>::Loading);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_session().await {
                    Ok(session) => {
                        log::info!("Session resolved for user {}", session.user_id);
                        state.set(FetchState::Success(session));
                    }
                    Err(err) => {
                        log::error!("Failed to resolve session: {}", err);
                        toast_ctx.show_error("Session could not be resolved".to_string());
                        state.set(FetchState::Error(err));
                    }
                }
            });
            || ()
        });
    }

    let context = SessionContext {
        state: (*state).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireAccessProps {
    /// Internal entity name the permission applies to
    pub entity: AttrValue,
    pub operation: Operation,
    pub children: Children,
}

/// Permission gate around a page body.
///
/// Renders nothing until the session resolves; sessions without the
/// required permission are sent back to the listing page instead of
/// seeing the gated content.
#[function_component(RequireAccess)]
pub fn require_access(props: &RequireAccessProps) -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not provided");

    match &session.state {
        FetchState::Loading | FetchState::NotStarted => html! { <LoadingSpinner /> },
        FetchState::Error(error) => html! {
            <LoadError subject="your session" message={error.clone()} />
        },
        FetchState::Success(_) => {
            if session.allows(&props.entity, props.operation) {
                html! { <>{props.children.clone()}</> }
            } else {
                log::warn!(
                    "Session lacks {:?} permission on {}, redirecting",
                    props.operation,
                    props.entity
                );
                html! { <Redirect<Route> to={Route::ResidentialUsers} /> }
            }
        }
    }
}
