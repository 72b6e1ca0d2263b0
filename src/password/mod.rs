use crate::models::PasswordMode;
use wasm_bindgen::JsCast;

/// Id of the password field in the server-rendered login and signup forms.
pub(crate) const PASSWORD_INPUT_ID: &str = "password_input";

/// Flip the masking mode of the input with `id`.
///
/// Returns the new mode, or `None` (and does nothing) when there is no such input.
pub fn toggle_password_field(document: &web_sys::Document, id: &str) -> Option<PasswordMode> {
    let input = document
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;

    let next = PasswordMode::from_input_type(&input.type_()).toggled();
    input.set_type(next.as_input_type());
    Some(next)
}
