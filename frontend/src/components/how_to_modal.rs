use super::super::{Model, Msg};
use shared::{IntoEnumIterator, MailClient};
use yew::prelude::*;

pub fn render_how_to_modal(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.modal_open {
        return html! {};
    }

    let link = ctx.link();

    html! {
        <div class="modal-overlay" onclick={link.callback(|_| Msg::CloseModal)}>
            <div class="modal-backdrop"></div>
            <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{"How to Import Your Signature"}</h2>
                    <button
                        class="close-btn"
                        aria-label="Close modal"
                        onclick={link.callback(|_| Msg::CloseModal)}
                    >
                        <i class="fa-solid fa-times"></i>
                    </button>
                </div>

                <div class="modal-tabs">
                    { for MailClient::iter().map(|client| render_tab(model, ctx, client)) }
                </div>

                <div class="modal-body">
                    <ol class="steps">
                        { for model.active_tab.steps().iter().enumerate().map(|(i, step)| html! {
                            <li key={i}>
                                <span class="step-number">{ (i + 1).to_string() }</span>
                                <span class="step-text">{ *step }</span>
                            </li>
                        }) }
                    </ol>
                </div>

                <div class="modal-footer">
                    <button class="secondary-btn" onclick={link.callback(|_| Msg::CloseModal)}>
                        {"Got it"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_tab(model: &Model, ctx: &Context<Model>, client: MailClient) -> Html {
    let is_active = model.active_tab == client;

    html! {
        <button
            key={client.key()}
            class={classes!("tab", is_active.then_some("active"))}
            onclick={ctx.link().callback(move |_| Msg::SelectTab(client))}
        >
            { client.to_string() }
        </button>
    }
}
