mod api;
mod clipboard;
mod components;

use components::copy_button::render_copy_button;
use components::handlers;
use components::header::render_header;
use components::how_to_modal::render_how_to_modal;
use components::image_upload::render_image_upload;
use components::preview_area::render_preview_area;
use components::signature_form::render_signature_form;
use components::utils::{load_draft, render_error_message};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{MailClient, SignatureData, UploadResponse};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

/// Editable text inputs of the form. The logo is set through the upload flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Title,
    Company,
    Phone,
    Twitter,
    WebsiteUrl,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Title,
        Field::Company,
        Field::Phone,
        Field::Twitter,
        Field::WebsiteUrl,
    ];

    pub fn value<'a>(&self, data: &'a SignatureData) -> &'a str {
        match self {
            Field::Name => &data.name,
            Field::Title => &data.title,
            Field::Company => &data.company,
            Field::Phone => &data.phone,
            Field::Twitter => &data.twitter,
            Field::WebsiteUrl => &data.website_url,
        }
    }

    pub fn set(&self, data: &mut SignatureData, value: String) {
        match self {
            Field::Name => data.name = value,
            Field::Title => data.title = value,
            Field::Company => data.company = value,
            Field::Phone => data.phone = value,
            // Handles are stored bare; the renderer adds the `@`.
            Field::Twitter => data.twitter = value.trim_start_matches('@').to_string(),
            Field::WebsiteUrl => data.website_url = value,
        }
    }
}

/// Image element and listeners kept alive while a picked logo is measured.
pub struct PendingMeasure {
    _url: ObjectUrl,
    _on_load: EventListener,
    _on_error: EventListener,
}

// Yew msg components
pub enum Msg {
    // Form
    UpdateField(Field, String),

    // Logo operations
    FilesAdded(Vec<GlooFile>),
    LogoMeasured(GlooFile, u32, u32),
    UploadFinished(Result<UploadResponse, String>),
    ClearLogo,

    // Export
    Copy,
    CopyFinished(bool),
    ResetCopied,

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    TogglePreviewTheme,
    OpenModal,
    CloseModal,
    SelectTab(MailClient),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    data: SignatureData,
    error: Option<String>,
    is_dragging: bool,
    uploading: bool,
    pending_measure: Option<PendingMeasure>,
    preview_dark: bool,
    copied: bool,
    copied_timeout: Option<Timeout>,
    modal_open: bool,
    active_tab: MailClient,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            data: load_draft(),
            error: None,
            is_dragging: false,
            uploading: false,
            pending_measure: None,
            preview_dark: false,
            copied: false,
            copied_timeout: None,
            modal_open: false,
            active_tab: MailClient::default(),
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateField(field, value) => handlers::handle_update_field(self, field, value),

            Msg::FilesAdded(files) => handlers::handle_files_added(self, ctx, files),
            Msg::LogoMeasured(file, width, height) => {
                handlers::handle_logo_measured(self, ctx, file, width, height)
            }
            Msg::UploadFinished(result) => handlers::handle_upload_finished(self, result),
            Msg::ClearLogo => handlers::handle_clear_logo(self),

            Msg::Copy => handlers::handle_copy(self, ctx),
            Msg::CopyFinished(ok) => handlers::handle_copy_finished(self, ctx, ok),
            Msg::ResetCopied => {
                self.copied = false;
                self.copied_timeout = None;
                true
            }

            Msg::SetError(error) => {
                self.error = error;
                self.uploading = false;
                self.pending_measure = None;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::TogglePreviewTheme => {
                self.preview_dark = !self.preview_dark;
                true
            }
            Msg::OpenModal => {
                self.modal_open = true;
                true
            }
            Msg::CloseModal => {
                self.modal_open = false;
                true
            }
            Msg::SelectTab(client) => {
                self.active_tab = client;
                true
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    <section class="form-section">
                        { render_image_upload(self, ctx) }
                        { render_error_message(self) }
                        { render_signature_form(self, ctx) }
                    </section>

                    { render_preview_area(self, ctx) }

                    <div class="button-container">
                        { render_copy_button(self, ctx) }
                        <button class="secondary-btn" onclick={link.callback(|_| Msg::OpenModal)}>
                            {"How to import?"}
                        </button>
                    </div>
                </main>

                <footer class="app-footer">
                    <p>{"Your data stays in your browser."}</p>
                </footer>

                { render_how_to_modal(self, ctx) }
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
