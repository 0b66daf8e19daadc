use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Create your email signature"}</h1>
            <p class="subtitle">{"Fill in your details and copy it to your email client"}</p>
        </header>
    }
}
