use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadErrorProps {
    /// What failed to load, e.g. "residential users"
    pub subject: AttrValue,
    /// Error string produced by the API client
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline failure panel for data a page could not load.
///
/// The API client reports transport failures as `Request failed: ...` and
/// server rejections with the backend's own message; the panel words the
/// two cases differently so an unreachable backend doesn't read like a
/// permission or data problem.
#[function_component(LoadError)]
pub fn load_error(props: &LoadErrorProps) -> Html {
    let transport_failure = props.message.starts_with("Request failed");
    let headline = if transport_failure {
        format!("Could not reach the server while loading {}", props.subject)
    } else {
        format!("Could not load {}", props.subject)
    };
    log::warn!("{}: {}", headline, props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{headline}</span>
                    <span class="text-sm">{&props.message}</span>
                    {if transport_failure {
                        html! {
                            <span class="text-sm opacity-70">
                                {"Check that the HomeWatt API is running and that the API host settings are correct."}
                            </span>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-primary btn-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
