use super::super::{Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_copy_button(model: &Model, ctx: &Context<Model>) -> Html {
    let disabled = !model.data.has_required_fields();
    let link = ctx.link().clone();

    html! {
        <button
            id="copy-button"
            class={classes!(
                "analyze-btn",
                disabled.then_some("disabled"),
                model.copied.then_some("copied"),
            )}
            disabled={disabled || model.copied}
            onclick={debounce(150, move || link.send_message(Msg::Copy))}
        >
            { if model.copied {
                html! { <><i class="fa-solid fa-check"></i>{" Copied!"}</> }
            } else {
                html! { <><i class="fa-regular fa-copy"></i>{" Copy Signature HTML"}</> }
            }}
        </button>
    }
}
