//! Error Display Component
//!
//! Shared banner for API error messages.

use leptos::prelude::*;

/// Normalizes a raw error string for display: strips the "Error:" prefix,
/// rewrites low-level fetch failures, and never yields an empty message.
pub fn format_error_message(raw: &str) -> String {
    let message = raw.trim();
    let message = message
        .strip_prefix("Error:")
        .map(str::trim)
        .unwrap_or(message);
    if message.is_empty() {
        return "Something went wrong. Please try again.".to_string();
    }
    if message.contains("Failed to fetch") || message.contains("NetworkError") {
        return "Unable to reach the server. Check your connection and try again.".to_string();
    }
    message.to_string()
}

#[component]
pub fn ErrorDisplay(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-message">{format_error_message(&message)}</span>
                {on_close.map(|close| view! {
                    <button
                        type="button"
                        class="error-dismiss"
                        on:click=move |_| close.run(())
                    >
                        "Dismiss"
                    </button>
                })}
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_prefix_is_stripped() {
        assert_eq!(format_error_message("Error: title is required"), "title is required");
    }

    #[test]
    fn fetch_failures_become_readable() {
        assert_eq!(
            format_error_message("TypeError: Failed to fetch"),
            "Unable to reach the server. Check your connection and try again."
        );
    }

    #[test]
    fn empty_input_gets_a_fallback() {
        assert_eq!(
            format_error_message("  "),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn ordinary_messages_pass_through() {
        assert_eq!(format_error_message("Task not found"), "Task not found");
    }
}
