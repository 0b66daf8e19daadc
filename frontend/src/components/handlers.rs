use super::super::{Field, Model, Msg, PendingMeasure};
use super::utils::{extract_image_files, save_draft};
use crate::{api, clipboard};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{UploadResponse, render_signature_html, render_signature_text};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, HtmlImageElement};
use yew::prelude::*;

const COPIED_RESET_MS: u32 = 2000;

pub fn handle_update_field(model: &mut Model, field: Field, value: String) -> bool {
    field.set(&mut model.data, value);
    save_draft(&model.data);
    true
}

/// Only the first image is used; the logo must be square before it is sent.
/// The measuring listeners are released once the image is measured or fails
/// to load; yew runs `update` after the listener callback has returned.
pub fn handle_files_added(model: &mut Model, ctx: &Context<Model>, files: Vec<GlooFile>) -> bool {
    let Some(file) = files.into_iter().next() else {
        return false;
    };

    if !file.raw_mime_type().starts_with("image/") {
        model.error = Some("Please upload an image file".into());
        return true;
    }

    model.error = None;
    model.uploading = true;

    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            log::error!("Failed to create image element: {:?}", e);
            model.error = Some("Failed to load image".into());
            model.uploading = false;
            return true;
        }
    };

    let url = ObjectUrl::from(file.clone());

    let on_load = {
        let link = ctx.link().clone();
        let measured = image.clone();
        EventListener::once(&image, "load", move |_| {
            link.send_message(Msg::LogoMeasured(
                file,
                measured.natural_width(),
                measured.natural_height(),
            ));
        })
    };

    let on_error = {
        let link = ctx.link().clone();
        EventListener::once(&image, "error", move |_| {
            link.send_message(Msg::SetError(Some("Failed to load image".into())));
        })
    };

    image.set_src(&url);
    model.pending_measure = Some(PendingMeasure {
        _url: url,
        _on_load: on_load,
        _on_error: on_error,
    });

    true
}

pub fn handle_logo_measured(
    model: &mut Model,
    ctx: &Context<Model>,
    file: GlooFile,
    width: u32,
    height: u32,
) -> bool {
    model.pending_measure = None;

    if width != height {
        model.error = Some(format!(
            "Image must be square. Yours is {}x{}px",
            width, height
        ));
        model.uploading = false;
        return true;
    }

    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::upload_logo(&file).await;
        link.send_message(Msg::UploadFinished(result));
    });

    true
}

pub fn handle_upload_finished(model: &mut Model, result: Result<UploadResponse, String>) -> bool {
    model.uploading = false;

    match result {
        Ok(response) => {
            log::info!("Logo uploaded as {}", response.filename);
            model.data.logo_url = response.url;
            model.error = None;
            save_draft(&model.data);
        }
        Err(e) => {
            log::warn!("Logo upload failed: {}", e);
            model.error = Some(e);
        }
    }

    true
}

pub fn handle_clear_logo(model: &mut Model) -> bool {
    model.data.logo_url.clear();
    model.error = None;
    save_draft(&model.data);
    true
}

pub fn handle_copy(model: &mut Model, ctx: &Context<Model>) -> bool {
    if !model.data.has_required_fields() || model.copied {
        return false;
    }

    let html = render_signature_html(&model.data);
    let text = render_signature_text(&model.data);
    let link = ctx.link().clone();

    spawn_local(async move {
        let ok = match clipboard::copy_signature(&html, &text).await {
            Ok(()) => true,
            Err(e) => {
                gloo_console::error!(format!("Failed to copy: {:?}", e));
                false
            }
        };
        link.send_message(Msg::CopyFinished(ok));
    });

    false
}

pub fn handle_copy_finished(model: &mut Model, ctx: &Context<Model>, ok: bool) -> bool {
    if !ok {
        model.error = Some("Could not copy to the clipboard".into());
        return true;
    }

    model.copied = true;
    let link = ctx.link().clone();
    model.copied_timeout = Some(Timeout::new(COPIED_RESET_MS, move || {
        link.send_message(Msg::ResetCopied);
    }));

    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if model.uploading {
        return true;
    }

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        match file_list.item(0) {
            Some(file) => ctx
                .link()
                .send_message(Msg::FilesAdded(vec![GlooFile::from(file)])),
            None => log::warn!("Drop event without files"),
        }
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if model.uploading || !model.data.logo_url.is_empty() {
        return false;
    }

    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        let images = extract_image_files(&file_list);
        if !images.is_empty() {
            event.prevent_default();
            ctx.link().send_message(Msg::FilesAdded(images));
            return true;
        }
    }
    false
}
