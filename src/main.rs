//! Main module for the article generator application using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use std::rc::Rc;

use article_generator::api::ApiClient;
use article_generator::session::{SessionController, SubmitRejected};
use article_generator::{GenerationRequest, HealthStatus, SystemInfo};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{render_article, HealthBadge, SystemInfoPanel};
use config::*;
use hooks::use_form_field;

type Controller = SessionController<ApiClient>;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let controller: Rc<Controller> =
        use_memo((), |_| SessionController::new(ApiClient::new(API_BASE_URL)));

    // Session version state triggers UI re-render when the controller
    // transitions; the controller itself lives outside the hook system.
    let session_version = use_state(|| 0usize);

    let name_field = use_form_field();
    let description_field = use_form_field();

    let system_info = use_state(|| None::<SystemInfo>);
    let health = use_state(|| None::<Result<HealthStatus, String>>);

    // Re-register the change listener every render so it captures fresh
    // state handles.
    {
        let controller = controller.clone();
        let session_version = session_version.clone();
        use_effect(move || {
            controller.set_on_change(move || {
                session_version.set(session_version.wrapping_add(1));
            });
            || ()
        });
    }

    // Load the remote service configuration on mount
    {
        let system_info = system_info.clone();
        use_effect_with((), move |_| {
            let api = ApiClient::new(API_BASE_URL);
            spawn_local(async move {
                match api.system_info().await {
                    Ok(info) => system_info.set(Some(info)),
                    Err(err) => log::warn!("failed to load system info: {}", err),
                }
            });
        });
    }

    let session = controller.snapshot();

    // --- OnInput handlers feeding the form field hooks ---
    let on_name_input = {
        let on_text = name_field.on_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_text.emit(input.value());
        })
    };
    let on_description_input = {
        let on_text = description_field.on_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_text.emit(input.value());
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let name_field = name_field.clone();
        let description_field = description_field.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = GenerationRequest {
                name: name_field.value.clone(),
                description: description_field.value.clone(),
            };
            let controller = controller.clone();
            let set_name_error = name_field.set_error.clone();
            let set_description_error = description_field.set_error.clone();
            spawn_local(async move {
                match controller.submit(request).await {
                    Ok(()) => {}
                    Err(SubmitRejected::Invalid(errors)) => {
                        set_name_error.emit(errors.name);
                        set_description_error.emit(errors.description);
                    }
                    Err(SubmitRejected::InFlight) => {
                        log::debug!("submit ignored, a generation is already running");
                    }
                }
            });
        })
    };

    let on_test_generation = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(rejected) = controller.submit_test_generation().await {
                    log::debug!("test generation not dispatched: {}", rejected);
                }
            });
        })
    };

    let on_clear = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.clear())
    };

    let on_health_check = {
        let health = health.clone();
        Callback::from(move |_: MouseEvent| {
            let health = health.clone();
            spawn_local(async move {
                match ApiClient::new(API_BASE_URL).health_check().await {
                    Ok(status) => health.set(Some(Ok(status))),
                    Err(err) => {
                        log::warn!("health check failed: {}", err);
                        health.set(Some(Err("API connection test failed".to_string())));
                    }
                }
            });
        })
    };

    // Ensure re-render on controller transitions by reading the version
    let _ = *session_version;

    html! {
        <div class="container">
            <h1>{ "Article Generator" }</h1>
            <p class="intro">
                { "Fill in the form below to generate an article and review its quality metadata." }
            </p>

            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="article_name">{ "Article Name" }</label>
                    <input
                        type="text"
                        id="article_name"
                        value={name_field.value.clone()}
                        class={if name_field.error.is_some() { "invalid" } else { "" }}
                        placeholder={NAME_PLACEHOLDER}
                        disabled={session.is_busy}
                        oninput={on_name_input}
                    />
                    if let Some(ref err) = name_field.error {
                        <div class="input-error">{ err }</div>
                    }
                </div>

                <div class="form-group">
                    <label for="article_description">{ "Description" }</label>
                    <textarea
                        id="article_description"
                        value={description_field.value.clone()}
                        class={if description_field.error.is_some() { "invalid" } else { "" }}
                        placeholder={DESCRIPTION_PLACEHOLDER}
                        disabled={session.is_busy}
                        oninput={on_description_input}
                    />
                    if let Some(ref err) = description_field.error {
                        <div class="input-error">{ err }</div>
                    }
                </div>

                <div class="button-row">
                    <button type="submit" class="btn-primary" disabled={session.is_busy}>
                        { if session.is_busy { "Generating..." } else { "Generate Article" } }
                    </button>
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled={session.is_busy}
                        onclick={on_test_generation}
                    >
                        { "Run Test Generation" }
                    </button>
                    <button type="button" class="btn-secondary" onclick={on_clear}>
                        { "Clear" }
                    </button>
                    <button type="button" class="btn-secondary" onclick={on_health_check}>
                        { "Test API Connection" }
                    </button>
                </div>
            </form>

            <HealthBadge health={(*health).clone()} />

            if let Some(ref err) = session.last_error {
                <div class="error-banner">{ err }</div>
            }

            <div class="results-area">
                if let Some(ref result) = session.current_result {
                    { render_article(result) }
                } else if !session.is_busy {
                    <div class="no-results-message">
                        <p>{ "Submit a request to see the generated article here." }</p>
                    </div>
                }
            </div>

            <SystemInfoPanel info={(*system_info).clone()} />
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the root component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
