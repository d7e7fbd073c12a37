use yew::prelude::*;

/// Holds the state and callbacks for one form field.
#[derive(Clone)]
pub struct FormField {
    /// The current text content of the field.
    pub value: String,
    /// An optional validation error to show next to the field.
    pub error: Option<String>,
    /// Accepts new raw text. Also clears any stale validation error, so
    /// the message disappears as soon as the user starts typing again.
    pub on_text: Callback<String>,
    /// Attach a validation error to the field (or clear it with `None`).
    pub set_error: Callback<Option<String>>,
}

/// Custom hook to manage the text and validation-error state of a form
/// field. Validation itself happens at submit time; this hook only stores
/// the outcome.
#[hook]
pub fn use_form_field() -> FormField {
    let text_state_handle: UseStateHandle<String> = use_state(String::new);
    let error_state_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text = {
        // Clone handles for the closure.
        let text_setter = text_state_handle.clone();
        let error_setter = error_state_handle.clone();
        Callback::from(move |value: String| {
            text_setter.set(value);
            if error_setter.is_some() {
                error_setter.set(None);
            }
        })
    };

    let set_error = {
        let error_setter = error_state_handle.clone();
        Callback::from(move |error: Option<String>| {
            error_setter.set(error);
        })
    };

    FormField {
        // Dereference handles to get current values for the returned struct.
        value: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text,
        set_error,
    }
}
