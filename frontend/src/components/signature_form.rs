use super::super::{Field, Model, Msg};
use web_sys::HtmlInputElement;
use yew::prelude::*;

struct InputMeta {
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    required: bool,
}

fn input_meta(field: Field) -> InputMeta {
    let (label, placeholder, input_type, required) = match field {
        Field::Name => ("Name", "John Doe", "text", true),
        Field::Title => ("Title", "Software Engineer", "text", false),
        Field::Company => ("Company", "Acme Inc.", "text", false),
        Field::Phone => ("Phone", "+1 (555) 123-4567", "tel", false),
        Field::Twitter => ("Twitter / X", "johndoe", "text", false),
        Field::WebsiteUrl => ("Website URL", "https://example.com", "url", false),
    };
    InputMeta {
        label,
        placeholder,
        input_type,
        required,
    }
}

pub fn render_signature_form(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="signature-form">
            { for Field::ALL.iter().map(|field| render_input(model, ctx, *field)) }
        </div>
    }
}

fn render_input(model: &Model, ctx: &Context<Model>, field: Field) -> Html {
    let meta = input_meta(field);
    let value = field.value(&model.data).to_string();
    let link = ctx.link();

    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });
    let onclear = link.callback(move |_: MouseEvent| Msg::UpdateField(field, String::new()));

    html! {
        <div class="input-field">
            <label>
                { meta.label }
                { if meta.required { html! { <span class="required">{"*"}</span> } } else { html! {} } }
            </label>
            <div class="input-wrapper">
                <input
                    type={meta.input_type}
                    value={value.clone()}
                    placeholder={meta.placeholder}
                    required={meta.required}
                    {oninput}
                />
                { if value.is_empty() {
                    html! {}
                } else {
                    html! {
                        <button
                            type="button"
                            class="clear-btn"
                            aria-label={format!("Clear {}", meta.label)}
                            onclick={onclear}
                        >
                            <i class="fa-solid fa-times"></i>
                        </button>
                    }
                }}
            </div>
        </div>
    }
}
