//! Character counter and the shared message textarea.

use dioxus::prelude::*;
use store::ComposeLimit;

/// "N characters remaining", highlighted once the message is over the limit.
#[component]
pub fn CharCounter(message: String, limit: ComposeLimit) -> Element {
    let remaining = limit.remaining(&message);
    let class = if limit.is_over_limit(&message) {
        "char-counter over-limit"
    } else {
        "char-counter"
    };

    rsx! {
        span { class: "{class}", "{remaining} characters remaining" }
    }
}

/// Textarea that accepts at most `limit.hard_max()` characters.
#[component]
pub fn MessageInput(
    value: Signal<String>,
    limit: ComposeLimit,
    placeholder: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] disabled: bool,
    #[props(default)] onkeydown: Option<EventHandler<KeyboardEvent>>,
) -> Element {
    let mut value = value;

    rsx! {
        textarea {
            class: "message-input",
            placeholder: "{placeholder}",
            rows: "{rows}",
            maxlength: "{limit.hard_max()}",
            disabled,
            value: value(),
            oninput: move |evt: FormEvent| value.set(limit.clamp(&evt.value())),
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(handler) = onkeydown {
                    handler.call(evt);
                }
            },
        }
    }
}
