use super::super::Model;
use super::super::Msg;
use yew::html::Scope;
use yew::prelude::*;

/// Toggles the preview backdrop only; the signature markup is untouched.
pub fn render_theme_toggle(is_dark: bool, link: &Scope<Model>) -> Html {
    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::TogglePreviewTheme)}
            title={ if is_dark { "Preview on light background" } else { "Preview on dark background" } }
        >
            { if is_dark {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f319.svg" alt="Moon Icon" class="toggle-icon" /> }
            } else {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/2600.svg" alt="Sun Icon" class="toggle-icon" /> }
            }}
        </button>
    }
}
