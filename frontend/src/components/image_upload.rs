use super::super::{Model, Msg};
use super::utils::extract_image_files;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_image_upload(model: &Model, ctx: &Context<Model>) -> Html {
    if model.data.logo_url.is_empty() {
        render_drop_zone(model, ctx)
    } else {
        render_uploaded_logo(model, ctx)
    }
}

fn render_uploaded_logo(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="logo-uploaded">
            <img src={model.data.logo_url.clone()} alt="Uploaded logo" class="logo-thumb" />
            <div class="logo-status">{"Logo uploaded"}</div>
            <button type="button" class="remove-btn" onclick={ctx.link().callback(|_| Msg::ClearLogo)}>
                {"Remove"}
            </button>
        </div>
    }
}

fn render_drop_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files();
        let files_to_process = files.as_ref().map(extract_image_files).unwrap_or_default();

        // Reset so the same file can be picked again.
        input.set_value("");

        if !files_to_process.is_empty() {
            Msg::FilesAdded(files_to_process)
        } else {
            Msg::SetError(Some("Please upload an image file".into()))
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    let trigger_file_input = Callback::from(|_: MouseEvent| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("logo-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="logo-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    model.is_dragging.then_some("drag-over"),
                    model.uploading.then_some("uploading"),
                )}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={trigger_file_input}
            >
                { if model.uploading {
                    html! {
                        <div class="upload-placeholder">
                            <i class="fa-solid fa-spinner fa-spin"></i>
                            <p>{"Uploading..."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="upload-placeholder">
                            <i class="fa-regular fa-image"></i>
                            <p>{"Upload logo "}<span class="file-types">{"(square, optional)"}</span></p>
                        </div>
                    }
                }}
            </div>
        </>
    }
}
