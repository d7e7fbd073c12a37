//! Pure Yew view components for the article generator UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use article_generator::{ArticleResult, HealthStatus, SystemInfo};
use yew::prelude::*;

/// Format an epoch-milliseconds timestamp for display.
fn format_created_at(ms: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        String::from(date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("{:.0} ms since epoch", ms)
    }
}

/// Renders the generated article with its quality metadata.
///
/// Shows:
/// - Article name and creation time
/// - Quality score and iteration count (when the server reported them)
/// - The ordered list of improvements applied during generation
/// - The markdown body
pub fn render_article(result: &ArticleResult) -> Html {
    html! {
        <div class="article-panel">
            <div class="article-header">
                <h2>{ &result.name }</h2>
                <span class="article-created-at">{ format_created_at(result.created_at) }</span>
            </div>
            <div class="article-meta">
                if let Some(score) = result.quality_score {
                    <span class="quality-badge">{ format!("Quality: {}/100", score) }</span>
                }
                if let Some(iterations) = result.iteration_count {
                    <span class="iteration-count">{ format!("Iterations: {}", iterations) }</span>
                }
            </div>
            { render_improvements(&result.improvements) }
            <div class="article-content">
                <pre class="markdown-body">{ &result.content }</pre>
            </div>
        </div>
    }
}

/// Renders the improvements applied across iterations, in server order.
fn render_improvements(improvements: &[String]) -> Html {
    if improvements.is_empty() {
        return html! {};
    }

    html! {
        <div class="improvements">
            <h3>{ "Improvements" }</h3>
            <ul>
                { improvements.iter().map(|improvement| {
                    html! { <li>{ improvement }</li> }
                }).collect::<Html>() }
            </ul>
        </div>
    }
}

/// Displays the remote service configuration fetched on mount.
#[derive(Properties, PartialEq)]
pub struct SystemInfoProps {
    pub info: Option<SystemInfo>,
}

#[function_component(SystemInfoPanel)]
pub fn system_info_panel(props: &SystemInfoProps) -> Html {
    let Some(info) = &props.info else {
        return html! {
            <div class="system-info">
                <p class="system-info-pending">{ "Loading system info..." }</p>
            </div>
        };
    };

    html! {
        <div class="system-info">
            <h3>{ "System" }</h3>
            <dl>
                <dt>{ "Version" }</dt>
                <dd>{ &info.version }</dd>
                <dt>{ "Model" }</dt>
                <dd>{ &info.model_name }</dd>
                <dt>{ "Max tokens" }</dt>
                <dd>{ info.max_tokens }</dd>
            </dl>
            if !info.features.is_empty() {
                <ul class="system-features">
                    { info.features.iter().map(|feature| {
                        html! { <li>{ feature }</li> }
                    }).collect::<Html>() }
                </ul>
            }
        </div>
    }
}

/// One-line connection status from the health endpoint.
#[derive(Properties, PartialEq)]
pub struct HealthBadgeProps {
    pub health: Option<Result<HealthStatus, String>>,
}

#[function_component(HealthBadge)]
pub fn health_badge(props: &HealthBadgeProps) -> Html {
    match &props.health {
        None => html! {},
        Some(Ok(health)) => html! {
            <div class={format!("health-badge {}", health.status)}>
                { format!("{}: {}", health.status, health.message) }
            </div>
        },
        Some(Err(message)) => html! {
            <div class="health-badge unreachable">{ message }</div>
        },
    }
}
