use super::super::Model;
use super::theme_toggle::render_theme_toggle;
use shared::render_signature_html;
use yew::prelude::*;

const DARK_FILTER: &str = "filter: invert(1) hue-rotate(180deg);";

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class={classes!("preview-area", model.preview_dark.then_some("preview-dark"))}>
            <div class="top-right">
                { render_theme_toggle(model.preview_dark, ctx.link()) }
            </div>
            <div class="preview-content">
                { render_signature(model) }
            </div>
        </div>
    }
}

fn render_signature(model: &Model) -> Html {
    if !model.data.has_content() {
        return html! {
            <div class="preview-placeholder">
                <p>{"Fill in the form to see your signature"}</p>
            </div>
        };
    }

    // The filter is presentation only; copied markup comes from the renderer.
    let markup = Html::from_html_unchecked(AttrValue::from(render_signature_html(&model.data)));
    html! {
        <div style={ if model.preview_dark { DARK_FILTER } else { "" } }>
            { markup }
        </div>
    }
}
