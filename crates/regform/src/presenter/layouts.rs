// Form layouts
// Plain functions returning Markup; compose them instead of templating

use maud::{html, Markup, DOCTYPE};

/// Slots for the vertical form layout
pub struct VerticalSlots {
    /// Heading above the form (required)
    pub title: String,

    /// Draw a divider under the heading
    pub divider: bool,

    /// Inputs, usually one or more grid blocks
    pub form: Markup,

    /// Submit button, notifications
    pub actions: Markup,
}

/// Full page with a single centered form
///
/// ```rust
/// use maud::html;
/// use regform::presenter::layouts::{vertical_form_layout, VerticalSlots};
///
/// let page = vertical_form_layout(VerticalSlots {
///     title: "User Data".into(),
///     divider: true,
///     form: html! { input name="firstName"; },
///     actions: html! { button type="submit" { "Submit" } },
/// });
/// assert!(page.into_string().contains("<h1>User Data</h1>"));
/// ```
pub fn vertical_form_layout(slots: VerticalSlots) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (slots.title) }
            }
            body {
                div.container {
                    form.vertical-form method="post" novalidate {
                        h1 { (slots.title) }
                        @if slots.divider {
                            hr.divider;
                        }
                        (slots.form)
                        (slots.actions)
                    }
                }
            }
        }
    }
}

/// Titled block laying inputs out on a two-column grid
pub fn grid_form_block_layout(title: &str, helper_text: Option<&str>, inputs: &[Markup]) -> Markup {
    html! {
        section.form-block {
            h2.form-block-title { (title) }
            @if let Some(text) = helper_text {
                p.form-block-helper { (text) }
            }
            div.grid {
                @for input in inputs {
                    div.grid-item { (input) }
                }
            }
        }
    }
}
