use web_sys::{Storage, Window};

pub const ACCESS_TOKEN_KEY: &str = "access_token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    if cfg!(not(target_arch = "wasm32")) {
        return Err("No localStorage".to_string());
    }
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn load_token() -> Option<String> {
    local_storage()
        .ok()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

pub fn store_token(token: &str) -> Result<(), String> {
    local_storage()?
        .set_item(ACCESS_TOKEN_KEY, token)
        .map_err(|_| "Failed to store token".to_string())
}

pub fn clear_token() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
