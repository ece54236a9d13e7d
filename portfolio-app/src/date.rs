#[cfg(target_arch = "wasm32")]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> u32 {
    2025
}

pub fn copyright_line(year: u32) -> String {
    format!("© {year} MyPortfolio. All Rights Reserved.")
}
