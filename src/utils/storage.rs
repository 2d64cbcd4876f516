use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| "failed to write to localStorage".to_string())
}

pub fn load_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn remove_key(key: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "failed to remove localStorage entry".to_string())
}
